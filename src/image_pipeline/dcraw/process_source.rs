//! Byte source backed by an external dcraw process.
//!
//! Spawns the decoder with `-W -4 -c` (no auto-brightening, 16-bit
//! linear output, write to stdout) and streams its stdout. The program
//! path is injected at construction rather than hard-coded, so callers
//! can point at a bundled binary or a test stand-in.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dcraw::source::RawByteSource;

const DCRAW_ARGS: &[&str] = &["-W", "-4", "-c"];

pub struct DcrawProcessSource {
    program: PathBuf,
    args: Vec<String>,
}

impl DcrawProcessSource {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: DCRAW_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Overrides the decoder arguments entirely.
    pub fn with_args(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for DcrawProcessSource {
    fn default() -> Self {
        Self::new("dcraw")
    }
}

impl RawByteSource for DcrawProcessSource {
    fn open(&self, input: &Path) -> Result<Box<dyn Read>> {
        debug!(
            program = %self.program.display(),
            input = %input.display(),
            "Spawning raw decoder process"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ConversionError::InputRead(format!("{}: {}", self.program.display(), e))
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            ConversionError::InputRead("raw decoder produced no stdout handle".to_string())
        })?;

        Ok(Box::new(DecoderStream { child, stdout }))
    }
}

/// Holds the child alongside its stdout so the process is reaped when
/// the stream is dropped, on success and failure paths alike.
struct DecoderStream {
    child: Child,
    stdout: ChildStdout,
}

impl Read for DecoderStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.stdout.read(buf)
    }
}

impl Drop for DecoderStream {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
