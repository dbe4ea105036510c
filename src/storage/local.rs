use crate::{
    error::{CoverError, Result},
    storage::traits::ObjectStore,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Mirrors the bucket layout under a local directory: `{root}/{bucket}/{key}`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        let relative = Path::new(bucket).join(key);
        if relative
            .components()
            .any(|component| !matches!(component, std::path::Component::Normal(_)))
        {
            return Err(CoverError::StorageError(format!(
                "refusing to map '{}/{}' outside the store root",
                bucket, key
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<()> {
        let path = self.path_for(bucket, key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoverError::StorageError(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| CoverError::StorageError(format!("failed to write {}: {}", path.display(), e)))?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(bucket, key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| CoverError::StorageError(format!("failed to read {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_and_reads_under_root() {
        let root = std::env::temp_dir().join(format!("covergen-{}", uuid::Uuid::new_v4()));
        let store = LocalObjectStore::new(&root);

        store
            .put_object("bucket", "covers/A+Court+of+Mist+and+Fury.png", vec![7, 7], "image/png")
            .await
            .unwrap();

        let path = store
            .path_for("bucket", "covers/A+Court+of+Mist+and+Fury.png")
            .unwrap();
        assert!(path.starts_with(&root));
        assert_eq!(
            store
                .get_object("bucket", "covers/A+Court+of+Mist+and+Fury.png")
                .await
                .unwrap(),
            vec![7, 7]
        );

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn rejects_escaping_keys() {
        let store = LocalObjectStore::new("/tmp/covers");
        assert!(store.path_for("bucket", "../etc/passwd").is_err());
        assert!(store.path_for("bucket", "/abs").is_err());
    }
}
