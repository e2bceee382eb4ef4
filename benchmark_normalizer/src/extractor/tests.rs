//!
//! The record extractor tests.
//!

use super::record::NormalizedRecord;
use super::Extractor;
use crate::config::mode::Mode;
use crate::config::Config;
use crate::decoder::method_kind::MethodKind;
use crate::decoder::Decoder;
use crate::input::entry::Entry;
use crate::unit::TimeUnit;

fn extractor(mode: Mode, target_unit: TimeUnit) -> Extractor {
    Extractor::new(Decoder::new(&Config::default()), mode, target_unit)
}

#[test]
fn ok() {
    let entries = vec![Entry::new_timed("F/BM_ProcessThreadPool/128/5/threads:4", 200.0, "us")];

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    let expected = vec![NormalizedRecord {
        method_kind: MethodKind::ThreadPool,
        method_label: "ThreadPool (T=4)".to_owned(),
        grouping_key: "ThreadPool".to_owned(),
        numeric_params: vec![128, 5],
        thread_count: Some(4),
        metric_value: 200.0,
        metric_unit: "us".to_owned(),
    }];
    assert_eq!(extraction.records, expected);
    assert_eq!(extraction.skipped.total(), 0);
}

#[test]
fn aggregates_are_skipped() {
    let mut stddev = Entry::new_timed("F/BM_ProcessDefault/32/3", 1.0, "us");
    stddev.aggregate_name = Some("stddev".to_owned());
    let mut median = Entry::new_timed("F/BM_ProcessDefault/32/3", 2.0, "us");
    median.aggregate_name = Some("median".to_owned());
    let mut mean = Entry::new_timed("F/BM_ProcessDefault/32/3", 3.0, "us");
    mean.aggregate_name = Some("mean".to_owned());

    let extraction =
        extractor(Mode::Time, TimeUnit::Microsecond).extract(&[stddev, median, mean]);

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].metric_value, 3.0);
    assert_eq!(extraction.skipped.aggregates, 2);
}

#[test]
fn time_is_converted() {
    let entries = vec![
        Entry::new_timed("F/BM_ProcessDefault/32/3", 2.0, "ms"),
        Entry {
            name: "F/BM_ProcessSIMD/32/3".to_owned(),
            cpu_time: Some(4.0),
            time_unit: Some("s".to_owned()),
            ..Default::default()
        },
        Entry {
            name: "F/BM_ProcessSIMD/64/3".to_owned(),
            real_time: Some(5.0),
            ..Default::default()
        },
    ];

    let extraction = extractor(Mode::Time, TimeUnit::Millisecond).extract(entries.as_slice());

    let values: Vec<f64> = extraction
        .records
        .iter()
        .map(|record| record.metric_value)
        .collect();
    assert_eq!(values, vec![2.0, 4000.0, 5.0]);
    assert!(extraction
        .records
        .iter()
        .all(|record| record.metric_unit == "ms"));
}

#[test]
fn unknown_unit_is_passed_through() {
    let entries = vec![Entry::new_timed("F/BM_ProcessDefault/32/3", 9.0, "ticks")];

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    assert_eq!(extraction.records[0].metric_value, 9.0);
    assert_eq!(extraction.skipped.unknown_unit, 1);
    assert_eq!(extraction.skipped.total(), 0);
}

#[test]
fn throughput() {
    let entries = vec![
        Entry {
            name: "F/BM_ProcessSIMD/32/3".to_owned(),
            real_time: Some(1.0),
            bytes_per_second: Some(2.5e9),
            ..Default::default()
        },
        Entry::new_timed("F/BM_ProcessDefault/32/3", 1.0, "us"),
    ];

    let extraction = extractor(Mode::Throughput, TimeUnit::Microsecond).extract(entries.as_slice());

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].metric_value, 2.5);
    assert_eq!(extraction.records[0].metric_unit, "GB/s");
    assert_eq!(extraction.skipped.missing_metric, 1);
}

#[test]
fn missing_time_is_skipped() {
    let entries = vec![Entry {
        name: "F/BM_ProcessDefault/32/3".to_owned(),
        ..Default::default()
    }];

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    assert!(extraction.records.is_empty());
    assert_eq!(extraction.skipped.missing_metric, 1);
}

#[test]
fn undecodable_is_skipped() {
    let entries = vec![
        Entry::new_timed("F/BM_ProcessDefault", 1.0, "us"),
        Entry::new_timed("F/BM_ProcessDefault/32", 1.0, "us"),
        Entry::new_timed("F/BM_ProcessDefault/99999999999999999999/3/5", 1.0, "us"),
    ];

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    assert!(extraction.records.is_empty());
    assert_eq!(extraction.skipped.undecodable, 3);
}

#[test]
fn overhead_is_split() {
    let entries = vec![
        Entry::new_timed("BM_ThreadPoolOverhead/4", 1500.0, "ns"),
        Entry::new_timed("F/BM_ProcessThreadPool/32/3/4", 10.0, "us"),
    ];

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.overhead.len(), 1);
    assert_eq!(extraction.overhead[0].thread_count, 4);
    assert!((extraction.overhead[0].metric_value - 1.5).abs() < 1e-9);
}

#[test]
fn target_unit_resolution() {
    let entries = vec![
        Entry {
            name: "a".to_owned(),
            ..Default::default()
        },
        Entry::new_timed("b", 1.0, "ticks"),
        Entry::new_timed("c", 1.0, "ns"),
    ];

    assert_eq!(
        Extractor::resolve_target_unit(None, entries.as_slice()),
        TimeUnit::Nanosecond
    );
    assert_eq!(
        Extractor::resolve_target_unit(Some(TimeUnit::Second), entries.as_slice()),
        TimeUnit::Second
    );
    assert_eq!(
        Extractor::resolve_target_unit(None, &[]),
        TimeUnit::Microsecond
    );
}

#[test]
fn explicit_thread_field() {
    let json = r#"[
        { "name": "F/BM_ProcessSIMD/32/3", "real_time": 1.0, "threads": 4 },
        { "name": "F/BM_ProcessSIMD/64/3", "real_time": 1.0, "threads": 4.0 },
        { "name": "F/BM_ProcessSIMD/128/3", "real_time": 1.0, "threads": "4" }
    ]"#;
    let entries: Vec<Entry> = serde_json::from_str(json).expect("Always valid");

    let extraction = extractor(Mode::Time, TimeUnit::Microsecond).extract(entries.as_slice());

    let threads: Vec<Option<u64>> = extraction
        .records
        .iter()
        .map(|record| record.thread_count)
        .collect();
    assert_eq!(threads, vec![Some(4), None, None]);
}
