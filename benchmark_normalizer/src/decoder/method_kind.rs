//!
//! The algorithmic variant under test.
//!

///
/// The algorithmic variant under test.
///
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum MethodKind {
    /// The scalar reference implementation.
    Default,
    /// The vectorized implementation.
    SIMD,
    /// The thread pool implementation.
    ThreadPool,
    /// The thread pool implementation dispatching whole rows.
    ThreadPoolFull,
    /// The thread pool creation alone.
    Overhead,
}

impl MethodKind {
    ///
    /// Method tag classification rules, evaluated in this order.
    /// The first rule whose pattern is a substring of the method tag wins,
    /// so `ThreadPoolFull` must precede `ThreadPool`.
    ///
    pub const CLASSIFICATION: [(&'static str, Self); 3] = [
        ("SIMD", Self::SIMD),
        ("ThreadPoolFull", Self::ThreadPoolFull),
        ("ThreadPool", Self::ThreadPool),
    ];

    ///
    /// Classifies a workload method tag.
    ///
    pub fn classify(method_tag: &str) -> Self {
        Self::CLASSIFICATION
            .iter()
            .find(|(pattern, _)| method_tag.contains(pattern))
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Default)
    }

    ///
    /// Whether the thread count is a meaningful dimension of this variant.
    ///
    pub fn is_thread_pool(&self) -> bool {
        matches!(self, Self::ThreadPool | Self::ThreadPoolFull)
    }

    ///
    /// The name of the group records of this variant are rendered in.
    ///
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::SIMD => "SIMD",
            Self::ThreadPool => "ThreadPool",
            Self::ThreadPoolFull => "ThreadPool Full",
            Self::Overhead => "Overhead",
        }
    }

    ///
    /// The series label, carrying the thread count for thread pool variants.
    ///
    pub fn label(&self, thread_count: Option<u64>) -> String {
        match thread_count {
            Some(thread_count) if self.is_thread_pool() => {
                format!("{} (T={thread_count})", self.group_name())
            }
            _ => self.group_name().to_owned(),
        }
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.group_name())
    }
}
