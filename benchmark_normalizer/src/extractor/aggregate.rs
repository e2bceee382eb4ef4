//!
//! The statistical aggregate row filter.
//!

/// The only aggregate kept alongside raw iterations.
pub const KEPT_AGGREGATE: &str = "mean";

///
/// Whether the entry is a primary sample: a raw iteration or the mean.
///
/// Standard deviation, median, and coefficient of variation rows duplicate
/// the measurements they summarize and are dropped.
///
pub fn is_primary_sample(aggregate_name: Option<&str>) -> bool {
    match aggregate_name {
        None => true,
        Some(name) => name.is_empty() || name == KEPT_AGGREGATE,
    }
}
