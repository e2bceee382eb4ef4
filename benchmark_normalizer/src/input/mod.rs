//!
//! Benchmark payload input.
//!

pub mod context;
pub mod entry;
pub mod error;
pub mod richness;
pub mod selector;

use std::path::Path;

use self::context::Context;
use self::entry::Entry;
use self::error::Error as InputError;

///
/// Benchmark payload produced by the benchmarking tool.
///
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Payload {
    /// The run context.
    #[serde(default)]
    pub context: Option<Context>,
    /// The measured cases, in the order of the tool output.
    #[serde(default)]
    pub benchmarks: Vec<Entry>,
}

impl Payload {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(benchmarks: Vec<Entry>) -> Self {
        Self {
            context: None,
            benchmarks,
        }
    }
}

impl TryFrom<&Path> for Payload {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}
