use crate::config::{default_destination, DEFAULT_INDENT};
use crate::domain::dialect::{Dialect, DuplicateHeaders, ExtraFields};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate, MAX_INDENT};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert a CSV file with a header row into a JSON array of objects")]
pub struct CliConfig {
    /// CSV file to read
    pub source: String,

    /// JSON file to write (defaults to the source path with a .json extension)
    pub destination: Option<String>,

    #[arg(long, default_value_t = ',', help = "Field delimiter")]
    pub delimiter: char,

    #[arg(long, default_value = "utf-8", help = "Source text encoding")]
    pub encoding: String,

    #[arg(long, default_value_t = DEFAULT_INDENT, help = "Spaces per indent level, 0 for compact output")]
    pub indent: usize,

    #[arg(long, value_enum, default_value_t = DuplicateHeaders::Reject)]
    pub duplicate_headers: DuplicateHeaders,

    #[arg(long, value_enum, default_value_t = ExtraFields::Truncate)]
    pub extra_fields: ExtraFields,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Fills in the destination when none was given.
    pub fn with_default_destination(mut self) -> Self {
        if self.destination.is_none() {
            self.destination = Some(default_destination(&self.source));
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn destination_path(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    fn dialect(&self) -> Dialect {
        Dialect {
            // ASCII once validated
            delimiter: self.delimiter as u8,
            duplicate_headers: self.duplicate_headers,
            extra_fields: self.extra_fields,
        }
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source)?;
        let destination = validation::validate_required_field("destination", &self.destination)?;
        validation::validate_path("destination", destination)?;
        validation::validate_delimiter("delimiter", self.delimiter)?;
        validation::validate_encoding("encoding", &self.encoding)?;
        validation::validate_range("indent", self.indent, 0, MAX_INDENT)
    }
}
