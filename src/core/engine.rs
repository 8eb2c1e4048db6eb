use crate::domain::ports::SectionPipeline;
use crate::utils::error::Result;

/// Runs one section pipeline start to finish.
pub struct SectionEngine<P: SectionPipeline> {
    pipeline: P,
}

impl<P: SectionPipeline> SectionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let name = self.pipeline.name().to_string();
        tracing::info!("🔄 Resolving section '{}'", name);

        let resolved = self.pipeline.extract().await?;
        tracing::info!(
            "📦 Section '{}': {} records ({:?})",
            name,
            resolved.posts.len(),
            resolved.origin
        );

        let output = self.pipeline.transform(resolved).await?;
        tracing::info!("🃏 Section '{}': {} cards", name, output.count);

        let path = self.pipeline.load(output).await?;
        tracing::info!("📁 Section '{}' written to {}", name, path);

        Ok(path)
    }
}
