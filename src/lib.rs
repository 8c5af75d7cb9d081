pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, ConvertConfig};
pub use crate::core::{
    convert::{convert, convert_blocking, convert_with},
    engine::ConversionEngine,
    pipeline::CsvJsonPipeline,
};
pub use domain::dialect::{Dialect, DuplicateHeaders, ExtraFields};
pub use domain::model::{ConversionReport, Document, Header, Record};
pub use utils::error::{ConvertError, ErrorCategory, ErrorKind, Result};
