//!
//! Benchmark payload loading error.
//!

use std::path::PathBuf;

///
/// Benchmark payload loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload file cannot be read.
    #[error("Benchmark payload {path:?} reading: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The payload path.
        path: PathBuf,
    },
    /// The payload file is not a valid benchmark JSON document.
    #[error("Benchmark payload {path:?} parsing: {error}")]
    Parsing {
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The payload path.
        path: PathBuf,
    },
    /// The payload file has no content.
    #[error("Benchmark payload {path:?} is empty")]
    EmptyFile {
        /// The payload path.
        path: PathBuf,
    },
}
