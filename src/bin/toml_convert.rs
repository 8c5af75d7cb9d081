use clap::Parser;
use csv2json::core::ConfigProvider;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{ConversionEngine, CsvJsonPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "CSV to JSON conversion driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "csv2json.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be converted without reading or writing data
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based conversion");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual conversion will occur");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".");
    let pipeline = CsvJsonPipeline::new(storage, config);
    let engine = ConversionEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Converted {} records", report.records);
            println!("✅ Conversion complete! JSON saved to: {}", report.destination);
        }
        Err(e) => {
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
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let dialect = config.dialect();

    println!("📋 Configuration Summary:");
    println!("  Pipeline: {}", config.pipeline_name());
    if let Some(description) = config.pipeline.as_ref().and_then(|p| p.description.as_deref()) {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.source_path());
    println!("  Destination: {}", config.destination_path());
    println!("  Delimiter: {:?}", char::from(dialect.delimiter));
    println!("  Encoding: {}", config.encoding());
    println!("  Duplicate headers: {:?}", dialect.duplicate_headers);
    println!("  Extra fields: {:?}", dialect.extra_fields);
    println!("  Indent: {}", config.indent());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📄 Source:");
    match tokio::fs::metadata(config.source_path()).await {
        Ok(metadata) if metadata.is_file() => {
            println!("  ✅ {} ({} bytes)", config.source_path(), metadata.len());
        }
        Ok(_) => println!("  ❌ {} is not a regular file", config.source_path()),
        Err(e) => println!("  ❌ {} is not accessible: {}", config.source_path(), e),
    }

    println!();
    println!("💾 Destination:");
    let exists = tokio::fs::try_exists(config.destination_path()).await?;
    if exists {
        println!("  ⚠️ {} exists and will be replaced", config.destination_path());
    } else {
        println!("  {} will be created", config.destination_path());
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
