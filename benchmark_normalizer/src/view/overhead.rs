//!
//! The thread pool creation overhead summary.
//!

use crate::correlator::overhead_means;
use crate::correlator::sample::OverheadSample;

///
/// The overhead of creating a pool with a given number of threads.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OverheadSummary {
    /// The number of threads.
    pub thread_count: u64,
    /// The mean creation time.
    pub mean: f64,
    /// The mean creation time divided by the number of threads.
    pub per_thread: f64,
}

impl OverheadSummary {
    ///
    /// Summarizes the samples, ordered by the thread count.
    ///
    pub fn from_samples(samples: &[OverheadSample]) -> Vec<Self> {
        overhead_means(samples)
            .into_iter()
            .map(|(thread_count, mean)| Self {
                thread_count,
                mean,
                per_thread: if thread_count == 0 {
                    mean
                } else {
                    mean / (thread_count as f64)
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::OverheadSummary;
    use crate::correlator::sample::OverheadSample;

    #[test]
    fn ok() {
        let samples = vec![
            OverheadSample::new(4, 40.0),
            OverheadSample::new(1, 10.0),
            OverheadSample::new(4, 60.0),
        ];

        let summary = OverheadSummary::from_samples(samples.as_slice());

        assert_eq!(
            summary,
            vec![
                OverheadSummary {
                    thread_count: 1,
                    mean: 10.0,
                    per_thread: 10.0,
                },
                OverheadSummary {
                    thread_count: 4,
                    mean: 50.0,
                    per_thread: 12.5,
                },
            ]
        );
    }
}
