use std::io::Cursor;

use crate::image_pipeline::common::error::ConversionError;
use crate::image_pipeline::ppm::header::read_header;
use crate::image_pipeline::ppm::reader::PpmImageReader;
use crate::image_pipeline::ppm::stream_reader::StreamPpmReader;

fn ppm_bytes(tag: &str, dims: &str, max: &str, payload: &[u8]) -> Vec<u8> {
    let mut bytes = format!("{tag}\n{dims}\n{max}\n").into_bytes();
    bytes.extend_from_slice(payload);
    bytes
}

fn solid_payload(width: usize, height: usize, sample: u16) -> Vec<u8> {
    let be = sample.to_be_bytes();
    (0..width * height * 3).flat_map(|_| be).collect()
}

#[test]
fn test_valid_header() {
    let bytes = ppm_bytes("P6", "640 480", "65535", &[]);
    let header = read_header(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(header.format_tag, "P6");
    assert_eq!(header.width, 640);
    assert_eq!(header.height, 480);
    assert_eq!(header.max_sample_value, 65535);
}

#[test]
fn test_p5_tag_is_unsupported_not_malformed() {
    let bytes = ppm_bytes("P5", "10 10", "65535", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFormat(_)));
}

#[test]
fn test_bad_magic_is_malformed() {
    let bytes = ppm_bytes("X6", "10 10", "65535", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::MalformedHeader(_)));
}

#[test]
fn test_magic_without_newline_is_malformed() {
    let err = read_header(&mut Cursor::new(b"P6 10 10\n65535\n".to_vec())).unwrap_err();
    assert!(matches!(err, ConversionError::MalformedHeader(_)));
}

#[test]
fn test_non_numeric_dimension_is_field_parse_error() {
    let bytes = ppm_bytes("P6", "10 abc", "65535", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::FieldParse(_)));
}

#[test]
fn test_three_dimension_tokens_is_field_parse_error() {
    let bytes = ppm_bytes("P6", "10 10 10", "65535", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::FieldParse(_)));
}

#[test]
fn test_bad_max_value_is_field_parse_error() {
    let bytes = ppm_bytes("P6", "10 10", "sixteen", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::FieldParse(_)));
}

#[test]
fn test_eight_bit_max_value_is_unsupported() {
    let bytes = ppm_bytes("P6", "10 10", "255", &[]);
    let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFormat(_)));
}

#[test]
fn test_decodes_full_payload_big_endian() {
    // one pixel: R=0x1234, G=0x5678, B=0x9ABC, big-endian on the wire
    let payload = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
    let bytes = ppm_bytes("P6", "1 1", "65535", &payload);

    let image = StreamPpmReader
        .read_ppm(&mut Cursor::new(bytes))
        .unwrap();
    assert_eq!(image.samples, vec![0x1234, 0x5678, 0x9ABC]);
}

#[test]
fn test_white_frame_decodes_to_max_samples() {
    let bytes = ppm_bytes("P6", "4 3", "65535", &solid_payload(4, 3, 0xFFFF));
    let image = StreamPpmReader
        .read_ppm(&mut Cursor::new(bytes))
        .unwrap();
    assert_eq!(image.samples.len(), 4 * 3 * 3);
    assert!(image.samples.iter().all(|&s| s == 0xFFFF));
}

#[test]
fn test_short_payload_is_truncation_error() {
    // promises 2x2 pixels (24 payload bytes) but delivers 10
    let bytes = ppm_bytes("P6", "2 2", "65535", &[0u8; 10]);
    let err = StreamPpmReader
        .read_ppm(&mut Cursor::new(bytes))
        .unwrap_err();
    assert!(matches!(
        err,
        ConversionError::TruncatedData {
            expected: 24,
            actual: 10
        }
    ));
}

#[test]
fn test_decode_is_deterministic() {
    let bytes = ppm_bytes("P6", "3 2", "65535", &solid_payload(3, 2, 0x8042));
    let first = StreamPpmReader.read_ppm(&mut Cursor::new(&bytes)).unwrap();
    let second = StreamPpmReader.read_ppm(&mut Cursor::new(&bytes)).unwrap();
    assert_eq!(first.samples, second.samples);
}
