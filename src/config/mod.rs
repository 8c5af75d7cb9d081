#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::dialect::Dialect;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, MAX_INDENT};
use std::path::Path;

/// Indentation used when none is configured.
pub const DEFAULT_INDENT: usize = 4;

/// `data.csv` -> `data.json`, next to the source.
pub fn default_destination(source: &str) -> String {
    Path::new(source)
        .with_extension("json")
        .to_string_lossy()
        .into_owned()
}

/// Conversion settings for library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub source: String,
    pub destination: String,
    pub dialect: Dialect,
    pub indent: usize,
}

impl ConvertConfig {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            dialect: Dialect::default(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl ConfigProvider for ConvertConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn destination_path(&self) -> &str {
        &self.destination
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source)?;
        validation::validate_path("destination", &self.destination)?;

        validation::validate_delimiter("delimiter", char::from(self.dialect.delimiter))?;

        validation::validate_range("indent", self.indent, 0, MAX_INDENT)
    }
}
