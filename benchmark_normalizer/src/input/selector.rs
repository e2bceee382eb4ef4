//!
//! Benchmark payload source selection.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::input::Payload;

///
/// The payload adopted by the selector.
///
#[derive(Debug)]
pub struct Selection {
    /// The chosen candidate location.
    pub path: PathBuf,
    /// The loaded payload.
    pub payload: Payload,
    /// Whether the payload satisfied the richness predicate, or is only a fallback.
    pub is_rich: bool,
}

///
/// Picks a benchmark payload from an ordered list of candidate locations.
///
#[derive(Debug, Clone)]
pub struct Selector {
    /// Candidate locations, in the order of preference.
    pub candidates: Vec<PathBuf>,
}

impl Selector {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    ///
    /// Adopts the first candidate whose payload satisfies `is_rich`.
    /// Otherwise, falls back to the first candidate that exists and loads.
    ///
    /// Missing and unloadable candidates are skipped.
    ///
    pub fn select<P>(&self, is_rich: P) -> Result<Selection, Error>
    where
        P: Fn(&Payload) -> bool,
    {
        let mut fallback: Option<Selection> = None;

        for path in self.candidates.iter() {
            if !path.is_file() {
                tracing::debug!(?path, "Candidate payload does not exist");
                continue;
            }
            let payload = match Payload::try_from(path.as_path()) {
                Ok(payload) => payload,
                Err(error) => {
                    tracing::warn!(%error, "Skipping an unloadable candidate payload");
                    continue;
                }
            };

            if is_rich(&payload) {
                tracing::info!(?path, "Selected a payload satisfying the richness predicate");
                return Ok(Selection {
                    path: path.to_owned(),
                    payload,
                    is_rich: true,
                });
            }
            if fallback.is_none() {
                fallback = Some(Selection {
                    path: path.to_owned(),
                    payload,
                    is_rich: false,
                });
            }
        }

        if let Some(selection) = fallback.as_ref() {
            tracing::info!(path = ?selection.path, "No candidate is rich, using the first loadable one");
        }
        fallback.ok_or_else(|| Error::SourceNotFound {
            candidates: self.candidates.clone(),
        })
    }
}
