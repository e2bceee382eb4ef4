//!
//! Serializing the report to JSON.
//!

use crate::normalizer::report::Report;

///
/// The whole report, pretty-printed.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&Report> for Json {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(report).map_err(|error| {
            anyhow::anyhow!(
                "Report of {:?} serializing: {error}",
                report.metadata.source
            )
        })?;
        Ok(Self { content })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::Utc;

    use super::Json;
    use crate::config::Config;
    use crate::input::selector::Selection;
    use crate::input::Payload;
    use crate::normalizer::Normalizer;

    const PAYLOAD: &str = r#"{ "benchmarks": [ { "name": "F/BM_ProcessDefault/64/3", "real_time": 1.0 } ] }"#;

    fn report(path: PathBuf) -> crate::normalizer::report::Report {
        let selection = Selection {
            path,
            payload: serde_json::from_str::<Payload>(PAYLOAD).expect("Always valid"),
            is_rich: false,
        };
        Normalizer::new(Config::default(), false).process(selection, Utc::now())
    }

    #[test]
    fn ok() {
        let json = Json::try_from(&report(PathBuf::from("results_image.json")))
            .expect("Failed to serialize the report");

        assert!(json.content.contains(r#""source": "results_image.json""#));
    }

    #[cfg(unix)]
    #[test]
    fn error_non_utf8_source() {
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(std::ffi::OsStr::from_bytes(b"results_\xff.json"));

        assert!(Json::try_from(&report(path)).is_err());
    }
}
