//! Reads a capture file and turns its frames into [`DecodedPacket`]s.

pub mod decoder;
pub mod reader;
pub mod stream;

#[cfg(test)]
mod tests;

pub use reader::CaptureReader;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to open capture {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unrecognized capture format: {0}")]
    Format(String),

    #[error("error reading capture: {0}")]
    Read(String),
}
