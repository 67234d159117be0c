use std::io::Cursor;

use crate::image_pipeline::common::error::ConversionError;
use crate::image_pipeline::tiff::reader::ScanlineSource;
use crate::image_pipeline::tiff::scanline_reader::TiffScanlineReader;

fn rgb16_tiff(width: u32, height: u32, samples: &[u16]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = tiff::encoder::TiffEncoder::new(&mut buffer).unwrap();
    encoder
        .write_image::<tiff::encoder::colortype::RGB16>(width, height, samples)
        .unwrap();
    buffer.into_inner()
}

#[test]
fn test_open_reads_directory_fields() {
    let samples: Vec<u16> = (0..2 * 2 * 3).map(|i| i as u16 * 1000).collect();
    let bytes = rgb16_tiff(2, 2, &samples);

    let reader = TiffScanlineReader::open(Cursor::new(bytes)).unwrap();
    let info = reader.info();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 2);
    assert_eq!(info.samples_per_pixel, 3);
    assert_eq!(info.bits_per_sample, 16);
}

#[test]
fn test_rows_come_out_in_stored_order() {
    let samples: Vec<u16> = (0..3 * 2 * 3).map(|i| i as u16).collect();
    let bytes = rgb16_tiff(3, 2, &samples);

    let mut reader = TiffScanlineReader::open(Cursor::new(bytes)).unwrap();
    let mut row = vec![0u16; 3 * 3];

    reader.read_row(&mut row).unwrap();
    assert_eq!(row, samples[..9]);

    reader.read_row(&mut row).unwrap();
    assert_eq!(row, samples[9..]);
}

#[test]
fn test_reading_past_last_row_fails() {
    let samples = vec![0u16; 2 * 1 * 3];
    let bytes = rgb16_tiff(2, 1, &samples);

    let mut reader = TiffScanlineReader::open(Cursor::new(bytes)).unwrap();
    let mut row = vec![0u16; 2 * 3];
    reader.read_row(&mut row).unwrap();

    let err = reader.read_row(&mut row).unwrap_err();
    assert!(matches!(err, ConversionError::ContainerDecode(_)));
}

#[test]
fn test_single_sample_image_is_unsupported() {
    let samples = vec![0u16; 2 * 2];
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = tiff::encoder::TiffEncoder::new(&mut buffer).unwrap();
    encoder
        .write_image::<tiff::encoder::colortype::Gray16>(2, 2, &samples)
        .unwrap();

    let err = TiffScanlineReader::open(Cursor::new(buffer.into_inner())).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFormat(msg) if msg.contains("Sample count")));
}

#[test]
fn test_eight_bit_image_is_unsupported() {
    let samples = vec![0u8; 2 * 2 * 3];
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = tiff::encoder::TiffEncoder::new(&mut buffer).unwrap();
    encoder
        .write_image::<tiff::encoder::colortype::RGB8>(2, 2, &samples)
        .unwrap();

    let err = TiffScanlineReader::open(Cursor::new(buffer.into_inner())).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFormat(msg) if msg.contains("Bit depth")));
}

#[test]
fn test_garbage_bytes_are_a_container_error() {
    let err = TiffScanlineReader::open(Cursor::new(b"not a tiff".to_vec())).unwrap_err();
    assert!(matches!(err, ConversionError::ContainerDecode(_)));
}
