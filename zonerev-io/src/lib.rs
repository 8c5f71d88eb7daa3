//! zonerev I/O - Reading, locating and writing zone definition documents
//!
//! This crate wraps the pure transforms of `zonerev-core` with the document
//! plumbing around them:
//!
//! - Input from a file, standard input or any reader
//! - Order-preserving JSON parsing
//! - JSON Pointer navigation to the zone config object
//! - Pretty JSON output with configurable indentation

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod pointer;

// Re-export commonly used types
pub use error::{Result, ReverseError};
pub use pointer::DEFAULT_CONFIG_POINTER;
pub use zonerev_core::{ReverseReport, RuleSet, Unconverted, ZoneConfig, ZoneError};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Indentation used for output unless told otherwise
pub const DEFAULT_INDENT: usize = 4;

/// Zone reversal options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseOptions {
    /// Suffix rule profile used to rename ids and names
    pub rules: RuleSet,
    /// JSON Pointer to the zone config object
    pub config_pointer: String,
    /// Spaces per indentation level in the output
    pub indent: usize,
}

impl Default for ReverseOptions {
    fn default() -> Self {
        Self {
            rules: RuleSet::Compass,
            config_pointer: DEFAULT_CONFIG_POINTER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Where the zone document is read from
pub enum InputSource {
    /// A file on disk
    Path(PathBuf),
    /// Standard input
    Stdin,
    /// Any other reader
    Reader(Box<dyn Read>),
}

impl InputSource {
    /// File path if given, standard input otherwise
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::Path)
    }

    /// Short label for log messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Path(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Reader(_) => "<reader>".to_string(),
        }
    }

    fn open(self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Path(path) => {
                let file = File::open(&path).map_err(|source| ReverseError::OpenInput {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(Box::new(file))
            }
            InputSource::Stdin => Ok(Box::new(io::stdin())),
            InputSource::Reader(reader) => Ok(reader),
        }
    }
}

/// Where the reversed document is written
pub enum OutputSink {
    /// Standard output
    Stdout,
    /// Any other writer
    Writer(Box<dyn Write>),
}

/// A single reversal job
pub struct ReverseRequest {
    /// Input document source
    pub input: InputSource,
    /// Output destination
    pub output: OutputSink,
    /// Reversal options
    pub options: ReverseOptions,
}

/// Outcome of [`execute_reverse`]
#[derive(Debug, Clone)]
pub struct ReverseSummary {
    /// Label of the input that was read
    pub input: String,
    /// What changed in the zone config
    pub report: ReverseReport,
}

/// Read, reverse and write one zone document.
pub fn execute_reverse(request: ReverseRequest) -> Result<ReverseSummary> {
    let ReverseRequest {
        input,
        output,
        options,
    } = request;
    let label = input.describe();
    debug!(input = %label, rules = %options.rules, "reading zone document");
    let reader = input.open()?;

    let report = match output {
        OutputSink::Stdout => {
            let stdout = io::stdout();
            reverse_stream(reader, stdout.lock(), &options)?
        }
        OutputSink::Writer(writer) => reverse_stream(reader, writer, &options)?,
    };

    Ok(ReverseSummary {
        input: label,
        report,
    })
}

/// Reverse the zone document read from `input` and write it to `output`.
///
/// Nothing is written unless the whole document was reversed successfully.
pub fn reverse_stream<R: Read, W: Write>(
    input: R,
    output: W,
    options: &ReverseOptions,
) -> Result<ReverseReport> {
    let mut document = read_document(input)?;
    let report = reverse_document(&mut document, options)?;
    write_document(output, &document, options.indent)?;
    Ok(report)
}

/// Parse a JSON document, keeping object keys in input order.
pub fn read_document<R: Read>(input: R) -> Result<Value> {
    serde_json::from_reader(BufReader::new(input)).map_err(|source| {
        if source.is_io() {
            ReverseError::Io(source.into())
        } else {
            ReverseError::JsonParse { source }
        }
    })
}

/// Reverse the zone config found at `options.config_pointer`.
pub fn reverse_document(document: &mut Value, options: &ReverseOptions) -> Result<ReverseReport> {
    let config = pointer::locate_object_mut(document, &options.config_pointer)?;
    let report = ZoneConfig::new(config).reverse(options.rules)?;
    Ok(report)
}

/// Write `document` as indented JSON followed by a newline.
pub fn write_document<W: Write>(output: W, document: &Value, indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let mut writer = BufWriter::new(output);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer).map_err(|source| {
        if source.is_io() {
            ReverseError::Io(source.into())
        } else {
            ReverseError::JsonWrite { source }
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
