//!
//! The benchmark name decoding error.
//!

///
/// The reason a benchmark name cannot be decoded.
///
/// Entries failing to decode are skipped.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name has too few delimited segments.
    #[error("Benchmark `{name}` has {count} segments, at least 3 expected")]
    TooFewSegments {
        /// The benchmark name.
        name: String,
        /// The number of segments found.
        count: usize,
    },
    /// The name lacks the mandatory size parameters.
    #[error("Benchmark `{name}` has {count} numeric parameters, at least 2 expected")]
    TooFewNumericParameters {
        /// The benchmark name.
        name: String,
        /// The number of numeric parameters found.
        count: usize,
    },
    /// A numeric parameter does not fit into 64 bits.
    #[error("Benchmark `{name}` has the parameter `{segment}` out of range")]
    ParameterOverflow {
        /// The benchmark name.
        name: String,
        /// The offending segment.
        segment: String,
    },
    /// The overhead benchmark name has no thread count.
    #[error("Overhead benchmark `{name}` has no thread count")]
    MissingOverheadThreads {
        /// The benchmark name.
        name: String,
    },
}
