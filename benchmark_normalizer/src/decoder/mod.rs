//!
//! The benchmark name decoder.
//!

#[cfg(test)]
mod tests;

pub mod error;
pub mod method_kind;
pub mod thread_resolver;

use crate::config::Config;

use self::error::Error as DecodeError;
use self::method_kind::MethodKind;
use self::thread_resolver::Clues;
use self::thread_resolver::ThreadResolver;

///
/// The typed fields encoded in a benchmark name.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIdentity {
    /// The variant under test.
    pub method_kind: MethodKind,
    /// All numeric segments following the method tag, in order.
    /// Empty for overhead benchmarks.
    pub numeric_params: Vec<u64>,
    /// The resolved thread count, if any.
    pub thread_count: Option<u64>,
}

///
/// The benchmark name decoder.
///
/// Names look like `Fixture/BM_Method/64/3/threads:8`: the fixture tag, the
/// method tag, and a mix of numeric parameters and `key:value` tags.
///
#[derive(Debug, Clone)]
pub struct Decoder {
    /// Identifier prefix of the overhead benchmarks.
    pub overhead_prefix: String,
    /// Thread count resolution rules, in the order of precedence.
    pub resolvers: Vec<ThreadResolver>,
}

impl Decoder {
    /// The name segment delimiter.
    pub const DELIMITER: char = '/';

    /// The minimal number of name segments of a workload benchmark.
    pub const MINIMAL_SEGMENTS: usize = 3;

    /// The number of mandatory numeric parameters: the primary and secondary sizes.
    pub const MANDATORY_PARAMETERS: usize = 2;

    ///
    /// Creates a decoder with the resolution rules enabled by `config`.
    ///
    pub fn new(config: &Config) -> Self {
        let mut resolvers = vec![
            ThreadResolver::tagged(ThreadResolver::TAG_THREADS),
            ThreadResolver::tagged(ThreadResolver::TAG_THREAD),
        ];
        if config.positional_thread_parameter {
            resolvers.push(ThreadResolver::Positional {
                index: ThreadResolver::POSITIONAL_INDEX,
            });
        }
        resolvers.push(ThreadResolver::Explicit);
        resolvers.push(ThreadResolver::SystemDefault {
            thread_count: config.default_thread_count,
        });

        Self {
            overhead_prefix: config.overhead_prefix.clone(),
            resolvers,
        }
    }

    ///
    /// Decodes `name`, with `explicit_threads` being the thread count reported
    /// alongside the entry.
    ///
    pub fn decode(
        &self,
        name: &str,
        explicit_threads: Option<u64>,
    ) -> Result<DecodedIdentity, DecodeError> {
        let segments: Vec<&str> = name.split(Self::DELIMITER).collect();

        if let Some(position) = self.overhead_position(segments.as_slice()) {
            let segment = segments
                .iter()
                .skip(position + 1)
                .find(|segment| Self::is_numeric(segment))
                .ok_or_else(|| DecodeError::MissingOverheadThreads {
                    name: name.to_owned(),
                })?;
            let thread_count = Self::parse_parameter(name, segment)?;
            return Ok(DecodedIdentity {
                method_kind: MethodKind::Overhead,
                numeric_params: vec![],
                thread_count: Some(thread_count),
            });
        }

        if segments.len() < Self::MINIMAL_SEGMENTS {
            return Err(DecodeError::TooFewSegments {
                name: name.to_owned(),
                count: segments.len(),
            });
        }
        let numeric_params = segments
            .iter()
            .skip(2)
            .filter(|segment| Self::is_numeric(segment))
            .map(|segment| Self::parse_parameter(name, segment))
            .collect::<Result<Vec<u64>, DecodeError>>()?;
        if numeric_params.len() < Self::MANDATORY_PARAMETERS {
            return Err(DecodeError::TooFewNumericParameters {
                name: name.to_owned(),
                count: numeric_params.len(),
            });
        }

        let method_kind = MethodKind::classify(segments[1]);
        let clues = Clues {
            segments: segments.as_slice(),
            numeric_params: numeric_params.as_slice(),
            explicit_threads,
            method_kind,
        };
        let thread_count = self
            .resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(&clues));

        Ok(DecodedIdentity {
            method_kind,
            numeric_params,
            thread_count,
        })
    }

    ///
    /// Whether `name` identifies an overhead benchmark.
    ///
    pub fn is_overhead(&self, name: &str) -> bool {
        let segments: Vec<&str> = name.split(Self::DELIMITER).collect();
        self.overhead_position(segments.as_slice()).is_some()
    }

    ///
    /// Returns the numeric segments following the method tag.
    ///
    /// Segments too large for `u64` are left out, while [`Self::decode`] rejects them.
    ///
    pub fn numeric_segments(name: &str) -> impl Iterator<Item = u64> + '_ {
        name.split(Self::DELIMITER)
            .skip(2)
            .filter(|segment| Self::is_numeric(segment))
            .filter_map(|segment| segment.parse().ok())
    }

    ///
    /// Whether the segment consists of ASCII digits only.
    ///
    fn is_numeric(segment: &str) -> bool {
        !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit())
    }

    ///
    /// Parses a numeric segment of `name`.
    ///
    fn parse_parameter(name: &str, segment: &str) -> Result<u64, DecodeError> {
        segment
            .parse()
            .map_err(|_| DecodeError::ParameterOverflow {
                name: name.to_owned(),
                segment: segment.to_owned(),
            })
    }

    ///
    /// Returns the index of the segment carrying the overhead prefix.
    /// Overhead benchmarks may be registered with or without a fixture.
    ///
    fn overhead_position(&self, segments: &[&str]) -> Option<usize> {
        segments
            .iter()
            .take(2)
            .position(|segment| segment.starts_with(self.overhead_prefix.as_str()))
    }
}
