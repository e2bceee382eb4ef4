//!
//! The benchmark series normalizer library.
//!

pub mod config;
pub mod correlator;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod input;
pub mod normalizer;
pub mod output;
pub mod unit;
pub mod view;

pub use crate::config::mode::Mode;
pub use crate::config::Config;
pub use crate::correlator::record::CorrelatedRecord;
pub use crate::correlator::sample::OverheadSample;
pub use crate::decoder::error::Error as DecodeError;
pub use crate::decoder::method_kind::MethodKind;
pub use crate::decoder::thread_resolver::ThreadResolver;
pub use crate::decoder::DecodedIdentity;
pub use crate::decoder::Decoder;
pub use crate::error::Error;
pub use crate::error::Stage;
pub use crate::extractor::record::NormalizedRecord;
pub use crate::extractor::skipped::Skipped;
pub use crate::extractor::Extraction;
pub use crate::extractor::Extractor;
pub use crate::input::context::Context as PayloadContext;
pub use crate::input::entry::Entry;
pub use crate::input::error::Error as InputError;
pub use crate::input::richness::Richness;
pub use crate::input::selector::Selection;
pub use crate::input::selector::Selector;
pub use crate::input::Payload;
pub use crate::normalizer::metadata::Metadata as ReportMetadata;
pub use crate::normalizer::report::Report;
pub use crate::normalizer::Normalizer;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::unit::TimeUnit;
pub use crate::view::overhead::OverheadSummary;
pub use crate::view::share::OverheadShare;
