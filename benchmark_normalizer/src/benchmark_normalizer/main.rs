//!
//! The benchmark normalizer binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(arguments.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = arguments.config()?;
    let normalizer = benchmark_normalizer::Normalizer::new(config, arguments.correlate);
    let report = normalizer.run()?;

    if !arguments.quiet {
        eprintln!(
            "{} {:?}{}",
            "Normalizing".bright_green().bold(),
            report.metadata.source,
            if report.metadata.is_rich {
                String::new()
            } else {
                " (fallback)".bright_yellow().to_string()
            }
        );
        let skipped = report.skipped.total();
        if skipped > 0 {
            eprintln!(
                "{} {skipped} entries: {} aggregates, {} undecodable, {} without the metric",
                "Skipped".bright_yellow().bold(),
                report.skipped.aggregates,
                report.skipped.undecodable,
                report.skipped.missing_metric,
            );
        }
    }

    if let Err(error) = report.ensure_not_empty() {
        if !arguments.quiet {
            eprintln!("{} {error}", "Nothing to render:".bright_yellow().bold());
        }
        return Ok(());
    }

    let output =
        benchmark_normalizer::Output::try_from((&report, arguments.output_format))?;
    output.write_to_file(arguments.output_path.as_path())?;

    if !arguments.quiet {
        eprintln!(
            "{} {} report to {:?}",
            "Written".bright_green().bold(),
            arguments.output_format,
            arguments.output_path
        );
    }

    Ok(())
}
