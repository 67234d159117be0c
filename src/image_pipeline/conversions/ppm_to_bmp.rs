use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    bmp::{BitmapWriter, ConversionConfig, StandardBmpWriter},
    common::error::{ConversionError, Result},
    dcraw::{DcrawProcessSource, RawByteSource},
    ppm::{PpmImage, PpmImageReader, StreamPpmReader},
    raster::{ChannelOrder, RasterBuffer, write_row},
};

/// Converts a dcraw-produced 16-bit PPM stream into a 24-bit BMP.
pub struct PpmToBmpPipeline<R: PpmImageReader, S: RawByteSource, W: BitmapWriter> {
    reader: R,
    source: S,
    writer: W,
    config: ConversionConfig,
}

impl PpmToBmpPipeline<StreamPpmReader, DcrawProcessSource, StandardBmpWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StreamPpmReader,
            source: DcrawProcessSource::default(),
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: PpmImageReader, S: RawByteSource, W: BitmapWriter> PpmToBmpPipeline<R, S, W> {
    pub fn with_custom(reader: R, source: S, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            source,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input, output))]
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        info!("Starting PPM to BMP conversion");

        let image = {
            let _span = tracing::info_span!("decode_ppm").entered();
            self.reader.read_ppm(input)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.header.width,
                height = image.header.height
            )
            .entered();
            self.validate_dimensions(image.header.width, image.header.height)?;
        }

        let raster = {
            let _span = tracing::info_span!("convert_raster").entered();
            self.build_raster(&image)?
        };

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bitmap(&raster, output)?;
        }

        info!(
            width = image.header.width,
            height = image.header.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Down-converts the decoded frame into a strided 8-bit raster.
    /// PPM samples arrive red-first, so no channel reordering is needed.
    fn build_raster(&self, image: &PpmImage) -> Result<RasterBuffer> {
        let width = image.header.width;
        let height = image.header.height;
        let mut raster = RasterBuffer::with_alignment(width, height, self.config.row_alignment)?;

        let row_len = width as usize * 3;
        for (y, row) in image
            .samples
            .chunks_exact(row_len)
            .take(height as usize)
            .enumerate()
        {
            write_row(&mut raster, y as u32, row, ChannelOrder::Rgb)?;
        }

        Ok(raster)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting raw file"
        );

        let mut stream = {
            let _span = tracing::info_span!("open_byte_source").entered();
            self.source.open(input_path)?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWrite(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&mut stream, &mut output_file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
