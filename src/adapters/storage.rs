use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

/// Hidden sibling the document is written to before it replaces the target.
fn staging_path(target: &Path) -> io::Result<PathBuf> {
    let file_name = target.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", target.display()),
        )
    })?;

    let mut staged = OsString::from(".");
    staged.push(file_name);
    staged.push(".partial");
    Ok(target.with_file_name(staged))
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        let data = fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let staged = staging_path(&full_path)?;

        // Missing parent directories are an error, not created here.
        if let Err(e) = fs::write(&staged, data).await {
            let _ = fs::remove_file(&staged).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&staged, &full_path).await {
            let _ = fs::remove_file(&staged).await;
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConvertError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("out.json", b"[]").await.unwrap();
        assert_eq!(storage.read_file("out.json").await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_write_overwrites_and_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage
            .write_file("out.json", b"a much longer previous document")
            .await
            .unwrap();
        storage.write_file("out.json", b"[]").await.unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join("out.json")).unwrap(), b"[]");
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("out.json")]);
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let result = storage.write_file("missing/out.json", b"[]").await;
        assert!(matches!(result, Err(ConvertError::IoError(_))));
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        match storage.read_file("nope.csv").await {
            Err(ConvertError::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        let staged = staging_path(Path::new("/tmp/data/out.json")).unwrap();
        assert_eq!(staged, PathBuf::from("/tmp/data/.out.json.partial"));
    }
}
