use crate::core::{FlattenSummary, Pipeline};
use crate::utils::error::Result;

/// Drives the load/flatten/write pipeline and collects the summary
/// statistics reported to the console.
pub struct FlattenEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FlattenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<FlattenSummary> {
        tracing::info!("🔄 Starting JSON to CSV conversion...");

        let catalog = self.pipeline.load()?;
        tracing::info!("✅ Catalog loaded ({} categories)", catalog.categories.len());

        let rows = self.pipeline.flatten(&catalog);
        tracing::info!("Flattened into {} rows", rows.len());

        let written = self.pipeline.write(&rows)?;

        let output_path = self.pipeline.output_path().to_string();
        // Size is reporting only, so a failed stat degrades to zero.
        let file_size = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(FlattenSummary {
            categories: catalog.categories.len(),
            rows: written,
            output_path,
            file_size,
        })
    }
}
