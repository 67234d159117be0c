use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Header field parse error: {0}")]
    FieldParse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Failed to decode container: {0}")]
    ContainerDecode(String),

    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("Failed to write output: {0}")]
    OutputWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
