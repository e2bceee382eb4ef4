//!
//! Thread count resolution rules.
//!

use regex::Regex;

use crate::decoder::method_kind::MethodKind;

///
/// Everything known about an entry that may reveal its thread count.
///
#[derive(Debug)]
pub struct Clues<'a> {
    /// All delimited name segments.
    pub segments: &'a [&'a str],
    /// The numeric parameters, in the order of appearance.
    pub numeric_params: &'a [u64],
    /// The thread count reported alongside the entry.
    pub explicit_threads: Option<u64>,
    /// The classified method kind.
    pub method_kind: MethodKind,
}

///
/// A single thread count resolution rule.
///
/// The decoder tries its rules in order, and the first one to resolve wins.
///
#[derive(Debug, Clone)]
pub enum ThreadResolver {
    /// A segment consisting of a tag and digits, e.g. `threads:8`.
    Tagged {
        /// The tag, e.g. `threads:`.
        tag: &'static str,
        /// The matcher built from the tag.
        pattern: Regex,
    },
    /// The numeric parameter at the given position.
    Positional {
        /// The index among numeric parameters.
        index: usize,
    },
    /// The thread count reported alongside the entry, if greater than one.
    Explicit,
    /// The system default for thread pool variants.
    SystemDefault {
        /// The thread count assumed.
        thread_count: u64,
    },
}

impl ThreadResolver {
    /// The primary thread tag.
    pub const TAG_THREADS: &'static str = "threads:";
    /// The secondary thread tag.
    pub const TAG_THREAD: &'static str = "thread:";
    /// The position of the thread count among numeric parameters.
    pub const POSITIONAL_INDEX: usize = 2;

    ///
    /// Creates a tagged segment rule.
    ///
    pub fn tagged(tag: &'static str) -> Self {
        let pattern = Regex::new(format!(r"^{}(\d+)$", regex::escape(tag)).as_str())
            .expect("Always valid");
        Self::Tagged { tag, pattern }
    }

    ///
    /// Applies the rule.
    ///
    pub fn resolve(&self, clues: &Clues) -> Option<u64> {
        match self {
            Self::Tagged { pattern, .. } => clues.segments.iter().find_map(|segment| {
                pattern
                    .captures(segment)
                    .and_then(|captures| captures.get(1))
                    .and_then(|digits| digits.as_str().parse::<u64>().ok())
            }),
            Self::Positional { index } => clues.numeric_params.get(*index).copied(),
            Self::Explicit => clues.explicit_threads.filter(|threads| *threads > 1),
            Self::SystemDefault { thread_count } => {
                clues.method_kind.is_thread_pool().then_some(*thread_count)
            }
        }
    }
}

impl std::fmt::Display for ThreadResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tagged { tag, .. } => write!(f, "tag `{tag}`"),
            Self::Positional { index } => write!(f, "numeric parameter #{index}"),
            Self::Explicit => write!(f, "explicit field"),
            Self::SystemDefault { thread_count } => write!(f, "system default {thread_count}"),
        }
    }
}
