use serde::{Deserialize, Serialize};

/// What to do when the header names the same field twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum DuplicateHeaders {
    /// Fail the conversion
    #[default]
    Reject,
    /// Keep the first position, take the value of the last such column
    LastWins,
}

/// What to do with values beyond the last header column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ExtraFields {
    /// Drop the extra values
    #[default]
    Truncate,
    /// Fail the conversion
    Reject,
}

/// Parsing conventions for the tabular source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub duplicate_headers: DuplicateHeaders,
    pub extra_fields: ExtraFields,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            duplicate_headers: DuplicateHeaders::default(),
            extra_fields: ExtraFields::default(),
        }
    }
}
