use crate::config::{default_destination, DEFAULT_INDENT};
use crate::domain::dialect::{Dialect, DuplicateHeaders, ExtraFields};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate, MAX_INDENT};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: Option<PipelineConfig>,
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub delimiter: Option<char>,
    pub encoding: Option<String>,
    pub duplicate_headers: Option<DuplicateHeaders>,
    pub extra_fields: Option<ExtraFields>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub indent: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::ConfigError {
            message: format!("Could not read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text, filling in the default destination.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        if config.output.path.is_none() {
            config.output.path = Some(default_destination(&config.source.path));
        }
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn pipeline_name(&self) -> &str {
        self.pipeline
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("csv2json")
    }

    pub fn encoding(&self) -> &str {
        self.source.encoding.as_deref().unwrap_or("utf-8")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn destination_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or_default()
    }

    fn dialect(&self) -> Dialect {
        let defaults = Dialect::default();
        Dialect {
            // ASCII once validated
            delimiter: self
                .source
                .delimiter
                .map(|d| d as u8)
                .unwrap_or(defaults.delimiter),
            duplicate_headers: self
                .source
                .duplicate_headers
                .unwrap_or(defaults.duplicate_headers),
            extra_fields: self.source.extra_fields.unwrap_or(defaults.extra_fields),
        }
    }

    fn indent(&self) -> usize {
        self.output.indent.unwrap_or(DEFAULT_INDENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        let destination = validation::validate_required_field("output.path", &self.output.path)?;
        validation::validate_path("output.path", destination)?;

        if let Some(delimiter) = self.source.delimiter {
            validation::validate_delimiter("source.delimiter", delimiter)?;
        }
        validation::validate_encoding("source.encoding", self.encoding())?;

        if let Some(indent) = self.output.indent {
            validation::validate_range("output.indent", indent, 0, MAX_INDENT)?;
        }

        Ok(())
    }
}
