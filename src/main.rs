use clap::Parser;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{CliConfig, ConversionEngine, ConvertError, CsvJsonPipeline, LocalStorage};

fn report_failure(e: &ConvertError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Kind: {:?}, Category: {:?})",
        e,
        e.kind(),
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse().with_default_destination();

    logger::init_logger(config.verbose, config.log_format);

    tracing::info!("Starting csv2json");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".");
    let pipeline = CsvJsonPipeline::new(storage, config);
    let engine = ConversionEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Converted {} records ({} fields each)",
                report.records,
                report.fields
            );
            println!("✅ Conversion complete! JSON saved to: {}", report.destination);
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}
