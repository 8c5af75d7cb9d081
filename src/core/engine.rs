use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline's phases in order: extract, transform, load.
pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Starting conversion");

        let table = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} rows with {} header columns",
            table.rows.len(),
            table.columns.len()
        );
        self.monitor.log_stats("Extract");

        let document = self.pipeline.transform(table).await?;
        let records = document.len();
        let fields = document.header().len();
        tracing::info!("Built {} records with {} fields each", records, fields);
        self.monitor.log_stats("Transform");

        let destination = self.pipeline.load(document).await?;
        tracing::info!("Document saved to: {}", destination);
        self.monitor.log_final_stats();

        Ok(ConversionReport {
            destination,
            records,
            fields,
        })
    }
}
