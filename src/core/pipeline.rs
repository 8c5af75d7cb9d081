use crate::adapters::{csv_source::read_table, json_sink::render_document};
use crate::core::{ConfigProvider, Document, Pipeline, SourceTable, Storage};
use crate::utils::error::{ConvertError, Result};
use std::io;

/// Reads a CSV source and writes it back out as a JSON document.
pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    async fn extract(&self) -> Result<SourceTable> {
        let source = self.config.source_path();
        tracing::debug!("Reading source table from: {}", source);

        let bytes = match self.storage.read_file(source).await {
            Ok(bytes) => bytes,
            Err(ConvertError::IoError(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                return Err(ConvertError::SourceNotFound {
                    path: source.to_string(),
                    source: e,
                });
            }
            Err(ConvertError::IoError(e)) => {
                return Err(ConvertError::SourceReadError {
                    path: source.to_string(),
                    source: e,
                });
            }
            Err(e) => return Err(e),
        };

        let table = read_table(&bytes, &self.config.dialect())?;
        tracing::debug!(
            "Parsed {} header columns and {} data rows ({} bytes)",
            table.columns.len(),
            table.rows.len(),
            bytes.len()
        );
        Ok(table)
    }

    async fn transform(&self, table: SourceTable) -> Result<Document> {
        let document = Document::from_table(&table, &self.config.dialect())?;
        tracing::debug!("Fields: {}", document.header().names().join(", "));
        Ok(document)
    }

    async fn load(&self, document: Document) -> Result<String> {
        let destination = self.config.destination_path();
        let data = render_document(&document, self.config.indent())?;

        tracing::debug!("Writing {} bytes to {}", data.len(), destination);
        self.storage.write_file(destination, &data).await?;

        Ok(destination.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialect::{Dialect, DuplicateHeaders, ExtraFields};
    use crate::utils::error::{ErrorCategory, ErrorKind};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_error: Option<io::ErrorKind>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                read_error: None,
            }
        }

        fn failing_reads(kind: io::ErrorKind) -> Self {
            Self {
                read_error: Some(kind),
                ..Self::new()
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            if let Some(kind) = self.read_error {
                return Err(ConvertError::IoError(io::Error::new(kind, "mock failure")));
            }
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ConvertError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        dialect: Dialect,
        indent: usize,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                dialect: Dialect::default(),
                indent: 4,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn source_path(&self) -> &str {
            "input.csv"
        }

        fn destination_path(&self) -> &str {
            "output.json"
        }

        fn dialect(&self) -> Dialect {
            self.dialect
        }

        fn indent(&self) -> usize {
            self.indent
        }
    }

    #[tokio::test]
    async fn test_extract_reads_source_table() {
        let storage = MockStorage::new();
        storage.put_file("input.csv", b"id,name\n1,Alice\n2,Bob\n").await;
        let pipeline = CsvJsonPipeline::new(storage, MockConfig::new());

        let table = pipeline.extract().await.unwrap();

        assert_eq!(table.columns, vec!["id", "name"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].values, vec!["2", "Bob"]);
    }

    #[tokio::test]
    async fn test_extract_missing_source_is_source_not_found() {
        let pipeline = CsvJsonPipeline::new(MockStorage::new(), MockConfig::new());

        let err = pipeline.extract().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
        assert!(matches!(err, ConvertError::SourceNotFound { ref path, .. } if path == "input.csv"));
    }

    #[tokio::test]
    async fn test_extract_unreadable_source_is_source_not_found() {
        let storage = MockStorage::failing_reads(io::ErrorKind::PermissionDenied);
        let pipeline = CsvJsonPipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    }

    #[tokio::test]
    async fn test_extract_other_read_failures_are_generic() {
        let storage = MockStorage::failing_reads(io::ErrorKind::Interrupted);
        let pipeline = CsvJsonPipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GenericFailure);
        assert_eq!(err.category(), ErrorCategory::Source);
        assert!(matches!(err, ConvertError::SourceReadError { ref path, .. } if path == "input.csv"));
    }

    #[tokio::test]
    async fn test_transform_applies_dialect_policies() {
        let mut config = MockConfig::new();
        config.dialect = Dialect {
            delimiter: b',',
            duplicate_headers: DuplicateHeaders::LastWins,
            extra_fields: ExtraFields::Truncate,
        };

        let storage = MockStorage::new();
        storage.put_file("input.csv", b"a,b,a\n1,2,3,4\n").await;
        let pipeline = CsvJsonPipeline::new(storage, config);

        let table = pipeline.extract().await.unwrap();
        let document = pipeline.transform(table).await.unwrap();

        assert_eq!(document.header().names(), ["a", "b"]);
        assert_eq!(document.records()[0].get("a"), Some("3"));
        assert_eq!(document.records()[0].get("b"), Some("2"));
    }

    #[tokio::test]
    async fn test_transform_rejects_duplicate_header_by_default() {
        let storage = MockStorage::new();
        storage.put_file("input.csv", b"a,a\n1,2\n").await;
        let pipeline = CsvJsonPipeline::new(storage, MockConfig::new());

        let table = pipeline.extract().await.unwrap();
        let err = pipeline.transform(table).await.unwrap_err();
        assert!(matches!(err, ConvertError::DuplicateHeaderError { .. }));
    }

    #[tokio::test]
    async fn test_load_writes_rendered_document() {
        let mut config = MockConfig::new();
        config.indent = 0;

        let storage = MockStorage::new();
        storage.put_file("input.csv", b"name,age\nAlice,30\nBob,\n").await;
        let pipeline = CsvJsonPipeline::new(storage.clone(), config);

        let table = pipeline.extract().await.unwrap();
        let document = pipeline.transform(table).await.unwrap();
        let destination = pipeline.load(document).await.unwrap();

        assert_eq!(destination, "output.json");
        let written = storage.get_file("output.json").await.unwrap();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            r#"[{"name":"Alice","age":"30"},{"name":"Bob","age":""}]"#
        );
    }
}
