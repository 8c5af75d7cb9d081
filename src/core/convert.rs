use crate::adapters::storage::LocalStorage;
use crate::config::ConvertConfig;
use crate::core::engine::ConversionEngine;
use crate::core::pipeline::CsvJsonPipeline;
use crate::core::{ConfigProvider, ConversionReport};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;

/// Converts `source` (CSV with a header row) into a JSON array at `destination`.
///
/// Relative paths resolve against the working directory. The destination is
/// created or replaced only after the whole source has been read and parsed.
pub async fn convert(source: &str, destination: &str) -> Result<ConversionReport> {
    convert_with(ConvertConfig::new(source, destination)).await
}

/// Like [`convert`], with every option taken from `config`.
pub async fn convert_with<C>(config: C) -> Result<ConversionReport>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let storage = LocalStorage::new(".");
    let pipeline = CsvJsonPipeline::new(storage, config);
    ConversionEngine::new(pipeline).run().await
}

/// Blocking form of [`convert`] for callers without a runtime.
///
/// Returns a configuration error when called from inside a tokio runtime.
pub fn convert_blocking(source: &str, destination: &str) -> Result<ConversionReport> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ConvertError::ConfigError {
            message: "convert_blocking cannot run inside an async runtime; await convert instead"
                .to_string(),
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ConvertError::ConfigError {
            message: format!("Could not start a runtime for the conversion: {}", e),
        })?;
    runtime.block_on(convert(source, destination))
}
