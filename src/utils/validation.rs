use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Upper bound for the output indentation width.
pub const MAX_INDENT: usize = 16;

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Accepts a single ASCII delimiter that is neither a quote nor a line break.
pub fn validate_delimiter(field_name: &str, delimiter: char) -> Result<u8> {
    let invalid = |reason: &str| ConvertError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: delimiter.escape_default().to_string(),
        reason: reason.to_string(),
    };

    if !delimiter.is_ascii() {
        return Err(invalid("Delimiter must be a single ASCII character"));
    }
    if matches!(delimiter, '"' | '\n' | '\r') {
        return Err(invalid("Delimiter cannot be a quote or a line break"));
    }
    Ok(delimiter as u8)
}

/// Only UTF-8 sources are supported.
pub fn validate_encoding(field_name: &str, encoding: &str) -> Result<()> {
    let normalized = encoding.trim().to_ascii_lowercase().replace(['-', '_'], "");
    if normalized != "utf8" {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: encoding.to_string(),
            reason: "Only UTF-8 is supported".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConvertError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
