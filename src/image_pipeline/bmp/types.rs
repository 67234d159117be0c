//! Conversion configuration types

/// Configuration for decode-to-bitmap conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Byte alignment of row starts in the output raster. BMP rows are
    /// 4-byte aligned; 1 packs rows densely.
    pub row_alignment: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            row_alignment: 4,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    validate_dimensions: Option<bool>,
    row_alignment: Option<usize>,
}

impl ConversionConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn row_alignment(mut self, alignment: usize) -> Self {
        self.row_alignment = Some(alignment);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            row_alignment: self.row_alignment.unwrap_or(default.row_alignment),
        }
    }
}
