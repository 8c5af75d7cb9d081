use crate::domain::dialect::Dialect;
use crate::domain::model::{Document, SourceTable};
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
    fn source_path(&self) -> &str;
    fn destination_path(&self) -> &str;
    fn dialect(&self) -> Dialect;
    fn indent(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceTable>;
    async fn transform(&self, table: SourceTable) -> Result<Document>;
    /// Writes the document and returns where it went.
    async fn load(&self, document: Document) -> Result<String>;
}
