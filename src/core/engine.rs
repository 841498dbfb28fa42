use crate::core::{PatchReport, Pipeline};
use crate::utils::error::Result;

pub struct PatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<PatchReport> {
        tracing::info!("Starting patch process...");

        // Read
        let content = self.pipeline.read_source().await?;
        tracing::info!("Loaded {} bytes", content.len());

        // Apply
        let result = self.pipeline.apply(content).await?;
        for outcome in &result.outcomes {
            tracing::info!(
                "'{}': {} occurrence(s) replaced",
                outcome.name,
                outcome.occurrences
            );
        }

        // Write
        let report = self.pipeline.commit(result).await?;
        if report.written {
            tracing::info!("Saved {}", report.target);
        }

        Ok(report)
    }
}
