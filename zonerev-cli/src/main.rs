//! reverse-zone - Reverse a directional zone definition
//!
//! Reads a zone definition (JSON) from the file named on the command line, or
//! from stdin, and prints the reversed definition to stdout:
//!
//! - the finish segment of `zone.path` is rotated to the front and
//!   `zone.finish_index` updated to point at the old start segment
//! - `module.id`, `zone.id` and `zone.name` get their directional suffix
//!   swapped (`_in` ↔ `_out`, ` NORTH` ↔ ` SOUTH`, ...), recording the old
//!   `zone.id` in `zone.reverse_id`
//! - `zone.map`, when present, is inverted
//!
//! Fields whose suffix is not recognized are left alone and reported on
//! stderr.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zonerev_core::RuleSet;
use zonerev_io::{
    execute_reverse, InputSource, OutputSink, ReverseOptions, ReverseRequest, ReverseSummary,
    DEFAULT_CONFIG_POINTER, DEFAULT_INDENT,
};

#[derive(Parser)]
#[command(name = "reverse-zone")]
#[command(about = "Reverse a zone definition, e.g. to create an 'out' zone from an 'in' one")]
#[command(version)]
struct Cli {
    /// Zone definition file (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Suffix rules used to rename ids and names: `compass` swaps
    /// in/out, north/south and east/west; `legacy` swaps in/out only
    #[arg(
        long,
        value_name = "RULES",
        default_value_t = RuleSet::Compass,
        value_parser = clap::value_parser!(RuleSet)
    )]
    rules: RuleSet,
    /// JSON Pointer to the zone config object
    #[arg(long, value_name = "POINTER", default_value = DEFAULT_CONFIG_POINTER)]
    config_pointer: String,
    /// Spaces per indentation level in the output
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) => {
            for warning in summary.report.warnings() {
                eprintln!("{warning}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> zonerev_io::Result<ReverseSummary> {
    let request = ReverseRequest {
        input: InputSource::from_arg(cli.input),
        output: OutputSink::Stdout,
        options: ReverseOptions {
            rules: cli.rules,
            config_pointer: cli.config_pointer,
            indent: cli.indent,
        },
    };

    let summary = execute_reverse(request)?;
    tracing::info!(
        input = %summary.input,
        finish_index = summary.report.finish_index_after,
        renamed = summary.report.renamed.len(),
        "reversed zone"
    );
    Ok(summary)
}
