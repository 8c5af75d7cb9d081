use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Source file not found or unreadable: {path}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read source {path}: {source}")]
    SourceReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Duplicate header field '{field}' at column {column}")]
    DuplicateHeaderError { field: String, column: usize },

    #[error("Row at line {line} has {found} fields but the header defines {expected}")]
    ExtraFieldsError {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceNotFound,
    GenericFailure,
}

/// Which phase of a conversion an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Data,
    Output,
    Configuration,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            _ => ErrorKind::GenericFailure,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::SourceNotFound { .. } | ConvertError::SourceReadError { .. } => {
                ErrorCategory::Source
            }
            ConvertError::CsvError(_)
            | ConvertError::DuplicateHeaderError { .. }
            | ConvertError::ExtraFieldsError { .. } => ErrorCategory::Data,
            ConvertError::IoError(_) | ConvertError::SerializationError(_) => {
                ErrorCategory::Output
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match (self.kind(), self.category()) {
            (ErrorKind::SourceNotFound, _) => 3,
            (_, ErrorCategory::Configuration) => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::SourceNotFound { path, .. } => {
                format!("Source CSV file not found: {}", path)
            }
            ConvertError::SourceReadError { path, source } => {
                format!("Could not read the CSV source {}: {}", path, source)
            }
            ConvertError::CsvError(e) => format!("Could not parse the CSV source: {}", e),
            ConvertError::IoError(e) => format!("Could not write the JSON document: {}", e),
            ConvertError::SerializationError(e) => {
                format!("Could not serialize the JSON document: {}", e)
            }
            ConvertError::DuplicateHeaderError { field, column } => format!(
                "The header repeats the field '{}' (column {})",
                field, column
            ),
            ConvertError::ExtraFieldsError {
                line,
                expected,
                found,
            } => format!(
                "Line {} has {} values but the header only has {} fields",
                line, found, expected
            ),
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::SourceNotFound { .. } => {
                "Check the source path and that the file is readable"
            }
            ConvertError::SourceReadError { .. } => {
                "Make sure the source path names a regular, readable file"
            }
            ConvertError::CsvError(_) => {
                "Make sure the source is UTF-8 encoded CSV and the delimiter matches"
            }
            ConvertError::IoError(_) => {
                "Check that the destination directory exists and is writable"
            }
            ConvertError::SerializationError(_) => "Re-run the conversion; the input may be corrupt",
            ConvertError::DuplicateHeaderError { .. } => {
                "Rename the duplicated column or use --duplicate-headers last-wins"
            }
            ConvertError::ExtraFieldsError { .. } => {
                "Quote values containing the delimiter or use --extra-fields truncate"
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => {
                "Fix the reported option and run the conversion again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
