//! External raw-decoder process module

mod process_source;
mod source;

pub use process_source::DcrawProcessSource;
pub use source::RawByteSource;
