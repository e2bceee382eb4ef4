//!
//! The benchmark name decoder tests.
//!

use super::error::Error;
use super::method_kind::MethodKind;
use super::thread_resolver::Clues;
use super::thread_resolver::ThreadResolver;
use super::DecodedIdentity;
use super::Decoder;
use crate::config::Config;

fn decoder() -> Decoder {
    Decoder::new(&Config::default())
}

#[test]
fn ok() {
    let result = decoder().decode("Fixture/BM_ProcessThreadPool/64/3/threads:8", None);

    let expected = Ok(DecodedIdentity {
        method_kind: MethodKind::ThreadPool,
        numeric_params: vec![64, 3],
        thread_count: Some(8),
    });
    assert_eq!(result, expected);
}

#[test]
fn default_without_threads() {
    let result = decoder().decode("Fixture/BM_ProcessDefault/32/3", None);

    let expected = Ok(DecodedIdentity {
        method_kind: MethodKind::Default,
        numeric_params: vec![32, 3],
        thread_count: None,
    });
    assert_eq!(result, expected);
}

#[test]
fn fallback_system_default() {
    let config = Config {
        default_thread_count: 12,
        ..Default::default()
    };
    let result = Decoder::new(&config)
        .decode("Fixture/BM_ProcessThreadPool/64/3", None)
        .expect("Failed to decode");

    assert_eq!(result.thread_count, Some(12));
}

#[test]
fn positional_thread_count() {
    let result = decoder()
        .decode("Fixture/BM_ProcessThreadPoolFull/128/5/16", None)
        .expect("Failed to decode");

    assert_eq!(result.method_kind, MethodKind::ThreadPoolFull);
    assert_eq!(result.numeric_params, vec![128, 5, 16]);
    assert_eq!(result.thread_count, Some(16));
}

#[test]
fn positional_thread_count_disabled() {
    let config = Config {
        positional_thread_parameter: false,
        ..Default::default()
    };
    let result = Decoder::new(&config)
        .decode("KnnFixture/BM_FindNaive/32/2/1", None)
        .expect("Failed to decode");

    assert_eq!(result.numeric_params, vec![32, 2, 1]);
    assert_eq!(result.thread_count, None);
}

#[test]
fn tag_precedence() {
    let result = decoder()
        .decode("Fixture/BM_ProcessThreadPool/64/3/2/thread:6/threads:4", Some(10))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, Some(4));

    let result = decoder()
        .decode("Fixture/BM_ProcessThreadPool/64/3/2/thread:6", Some(10))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, Some(6));

    let result = decoder()
        .decode("Fixture/BM_ProcessThreadPool/64/3/2", Some(10))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, Some(2));

    let result = decoder()
        .decode("Fixture/BM_ProcessThreadPool/64/3", Some(10))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, Some(10));
}

#[test]
fn explicit_single_thread_is_ignored() {
    let result = decoder()
        .decode("Fixture/BM_ProcessSIMD/64/3", Some(1))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, None);

    let result = decoder()
        .decode("Fixture/BM_ProcessSIMD/64/3", Some(4))
        .expect("Failed to decode");
    assert_eq!(result.thread_count, Some(4));
}

#[test]
fn classification_precedence() {
    assert_eq!(MethodKind::classify("BM_ProcessSIMDThreadPool"), MethodKind::SIMD);
    assert_eq!(MethodKind::classify("BM_ProcessThreadPoolFull"), MethodKind::ThreadPoolFull);
    assert_eq!(MethodKind::classify("BM_ProcessThreadPool"), MethodKind::ThreadPool);
    assert_eq!(MethodKind::classify("BM_FindNaive"), MethodKind::Default);
}

#[test]
fn labels() {
    assert_eq!(MethodKind::ThreadPool.label(Some(4)), "ThreadPool (T=4)");
    assert_eq!(MethodKind::ThreadPoolFull.label(Some(8)), "ThreadPool Full (T=8)");
    assert_eq!(MethodKind::ThreadPool.label(None), "ThreadPool");
    assert_eq!(MethodKind::SIMD.label(Some(4)), "SIMD");
    assert_eq!(MethodKind::Default.label(None), "Default");
}

#[test]
fn overhead() {
    let expected = Ok(DecodedIdentity {
        method_kind: MethodKind::Overhead,
        numeric_params: vec![],
        thread_count: Some(16),
    });

    assert_eq!(decoder().decode("BM_ThreadPoolOverhead/16", None), expected);
    assert_eq!(
        decoder().decode("Fixture/BM_ThreadPoolOverhead/16/real_time", None),
        expected
    );
}

#[test]
fn error_overhead_without_threads() {
    let result = decoder().decode("BM_ThreadPoolOverhead/real_time", None);

    assert_eq!(
        result,
        Err(Error::MissingOverheadThreads {
            name: "BM_ThreadPoolOverhead/real_time".to_owned(),
        })
    );
}

#[test]
fn error_too_few_segments() {
    let result = decoder().decode("Fixture/BM_ProcessDefault", None);

    assert_eq!(
        result,
        Err(Error::TooFewSegments {
            name: "Fixture/BM_ProcessDefault".to_owned(),
            count: 2,
        })
    );
}

#[test]
fn error_too_few_numeric_parameters() {
    let result = decoder().decode("Fixture/BM_ProcessDefault/32/threads:4", None);

    assert_eq!(
        result,
        Err(Error::TooFewNumericParameters {
            name: "Fixture/BM_ProcessDefault/32/threads:4".to_owned(),
            count: 1,
        })
    );
}

#[test]
fn error_parameter_overflow() {
    let name = "F/BM_ProcessThreadPool/99999999999999999999/3/5";
    let result = decoder().decode(name, None);

    assert_eq!(
        result,
        Err(Error::ParameterOverflow {
            name: name.to_owned(),
            segment: "99999999999999999999".to_owned(),
        })
    );
    assert_eq!(Decoder::numeric_segments(name).collect::<Vec<u64>>(), vec![3, 5]);
}

#[test]
fn error_overhead_thread_overflow() {
    let name = "BM_ThreadPoolOverhead/18446744073709551616";
    let result = decoder().decode(name, None);

    assert_eq!(
        result,
        Err(Error::ParameterOverflow {
            name: name.to_owned(),
            segment: "18446744073709551616".to_owned(),
        })
    );
}

#[test]
fn resolver_in_isolation() {
    let segments = ["F", "BM_ProcessThreadPool", "64", "3", "threads:x", "threads:5"];
    let clues = Clues {
        segments: &segments,
        numeric_params: &[64, 3],
        explicit_threads: None,
        method_kind: MethodKind::ThreadPool,
    };

    assert_eq!(
        ThreadResolver::tagged(ThreadResolver::TAG_THREADS).resolve(&clues),
        Some(5)
    );
    assert_eq!(
        ThreadResolver::tagged(ThreadResolver::TAG_THREAD).resolve(&clues),
        None
    );
    assert_eq!(ThreadResolver::Positional { index: 2 }.resolve(&clues), None);
    assert_eq!(ThreadResolver::Explicit.resolve(&clues), None);
    assert_eq!(
        ThreadResolver::SystemDefault { thread_count: 8 }.resolve(&clues),
        Some(8)
    );
}
