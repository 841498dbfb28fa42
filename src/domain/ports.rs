use crate::domain::model::{PatchReport, PatchResult, PatchSet};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn patch_set(&self) -> &PatchSet;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn read_source(&self) -> Result<String>;
    async fn apply(&self, content: String) -> Result<PatchResult>;
    async fn commit(&self, result: PatchResult) -> Result<PatchReport>;
}
