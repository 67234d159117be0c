use std::path::{Path, PathBuf};

use anyhow::Context;
use rawpreview_rs::image_pipeline::{
    ConversionConfig, DcrawProcessSource, PpmToBmpPipeline, StandardBmpWriter, StreamPpmReader,
    TiffToBmpPipeline,
};
use rawpreview_rs::logger;

use tracing::{error, info};

fn is_tiff(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"))
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: rawpreview_rs <input> <output.bmp>";
    let input = args.next().context(usage)?;
    let output = args.next().context(usage)?;

    let config = ConversionConfig::builder().build();
    let input_path = Path::new(&input);

    info!(input = %input, output = %output, "Starting rawpreview...");

    let result = if is_tiff(input_path) {
        TiffToBmpPipeline::new(config).convert_file(input_path, &output)
    } else {
        // camera raw files go through the external dcraw decoder
        let program = std::env::var_os("DCRAW_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dcraw"));
        let pipeline = PpmToBmpPipeline::with_custom(
            StreamPpmReader,
            DcrawProcessSource::new(program),
            StandardBmpWriter,
            config,
        );
        pipeline.convert_file(input_path, &output)
    };

    match result {
        Ok(_) => {
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}
