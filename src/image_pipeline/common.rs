//! Common utilities module
//!
//! This module contains shared types used across the image pipeline.

pub mod error;

pub use error::{ConversionError, Result};
