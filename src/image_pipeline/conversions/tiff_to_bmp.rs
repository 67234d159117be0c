use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    bmp::{BitmapWriter, ConversionConfig, StandardBmpWriter},
    common::error::{ConversionError, Result},
    raster::{ChannelOrder, RasterBuffer, write_row},
    tiff::{ScanlineSource, TiffScanlineReader},
};

/// Channel order of the scanline containers this pipeline consumes:
/// blue first. The raster wants red first, so every pixel is reordered.
const STORED_ORDER: ChannelOrder = ChannelOrder::Bgr;

/// Converts a 16-bit RGB TIFF container into a 24-bit BMP.
pub struct TiffToBmpPipeline<W: BitmapWriter> {
    writer: W,
    config: ConversionConfig,
}

impl TiffToBmpPipeline<StandardBmpWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<W: BitmapWriter> TiffToBmpPipeline<W> {
    pub fn with_custom(writer: W, config: ConversionConfig) -> Self {
        Self { writer, config }
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
    pub fn convert<R: Read + Seek>(&self, input: R, output: &mut dyn Write) -> Result<()> {
        info!("Starting TIFF to BMP conversion");

        let mut source = {
            let _span = tracing::info_span!("open_container").entered();
            TiffScanlineReader::open(input)?
        };

        self.convert_scanlines(&mut source, output)
    }

    /// Row-by-row conversion loop over any scanline source.
    pub fn convert_scanlines(
        &self,
        source: &mut dyn ScanlineSource,
        output: &mut dyn Write,
    ) -> Result<()> {
        let (width, height, samples_per_pixel) = {
            let info = source.info();
            (info.width, info.height, info.samples_per_pixel)
        };

        self.validate_dimensions(width, height)?;

        let mut raster = RasterBuffer::with_alignment(width, height, self.config.row_alignment)?;

        {
            let _span = tracing::info_span!("convert_raster", width, height).entered();
            // one reusable scanline buffer for all rows
            let mut scanline = vec![0u16; width as usize * samples_per_pixel as usize];
            for y in 0..height {
                source.read_row(&mut scanline)?;
                write_row(&mut raster, y, &scanline, STORED_ORDER)?;
            }
        }

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bitmap(&raster, output)?;
        }

        info!(width, height, "Conversion complete");
        Ok(())
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
            "Converting file"
        );

        let input_file = std::fs::File::open(input_path).map_err(|e| {
            ConversionError::InputRead(format!("{}: {}", input_path.display(), e))
        })?;

        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            ConversionError::OutputWrite(format!("{}: {}", output_path.display(), e))
        })?;

        self.convert(BufReader::new(input_file), &mut output_file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
