use crate::core::replace::apply_all;
use crate::core::{ConfigProvider, PatchReport, PatchResult, Pipeline, Storage};
use crate::utils::error::Result;

/// Reads the target file, applies the configured patch set in memory and
/// writes the result back to the same path.
pub struct FilePatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePatchPipeline<S, C> {
    async fn read_source(&self) -> Result<String> {
        let target = &self.config.patch_set().target;
        tracing::debug!("Reading {}", target);

        let bytes = self.storage.read_file(target).await?;
        let content = String::from_utf8(bytes)?;

        tracing::debug!("Read {} bytes from {}", content.len(), target);
        Ok(content)
    }

    async fn apply(&self, content: String) -> Result<PatchResult> {
        let patch_set = self.config.patch_set();
        tracing::debug!(
            "Applying {} replacement(s) from '{}'",
            patch_set.replacements.len(),
            patch_set.name
        );
        apply_all(content, &patch_set.replacements)
    }

    async fn commit(&self, result: PatchResult) -> Result<PatchReport> {
        let patch_set = self.config.patch_set();
        let dry_run = self.config.dry_run();

        let written = if dry_run {
            tracing::info!("Dry run, {} left untouched", patch_set.target);
            false
        } else if !result.changed() {
            tracing::info!("No changes for {}, skipping write", patch_set.target);
            false
        } else {
            tracing::debug!(
                "Writing {} bytes to {}",
                result.patched.len(),
                patch_set.target
            );
            self.storage
                .write_file(&patch_set.target, result.patched.as_bytes())
                .await?;
            true
        };

        Ok(PatchReport {
            patch_set: patch_set.name.clone(),
            target: patch_set.target.clone(),
            outcomes: result.outcomes,
            written,
            dry_run,
        })
    }
}
