//! Disk storage for laudo photos.
//!
//! Photos live under the configured uploads root, one directory per
//! laudo. Keys are opaque to callers: they are stored on the photo
//! record and handed back here for deletion.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Local-disk storage sink rooted at the uploads directory.
#[derive(Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Create a storage sink, ensuring the root directory exists.
    pub async fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create uploads dir: {}", e)))?;

        info!("Photo storage initialized: root={}", root.display());

        Ok(Self { root })
    }

    /// Build the storage key for a photo of a laudo.
    ///
    /// Format: `laudos/{laudo_id}/{stem}_{timestamp}{ext}`. The original
    /// filename is flattened to a safe character set first, so client
    /// input can never escape the per-laudo directory.
    pub fn foto_key(laudo_id: i32, original_name: &str) -> String {
        let safe = sanitize_filename(original_name);
        let (stem, ext) = split_extension(&safe);
        let timestamp = Utc::now().timestamp_millis();
        format!("laudos/{}/{}_{}{}", laudo_id, stem, timestamp, ext)
    }

    /// Storage key prefix holding every photo of a laudo.
    pub fn laudo_prefix(laudo_id: i32) -> String {
        format!("laudos/{}", laudo_id)
    }

    /// Absolute path backing a storage key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// The uploads root, for static file serving.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write photo bytes. A failure here must prevent the corresponding
    /// metadata record from being persisted.
    pub async fn put(&self, key: &str, data: &[u8]) -> AppResult<()> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to create photo dir: {}", e)))?;
        }

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write photo: {}", e)))?;

        Ok(())
    }

    /// Delete the file backing a key. A missing file is not an error.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to delete photo: {}", e))),
        }
    }

    /// Delete the whole directory of a laudo (cascade on laudo removal).
    /// A missing directory is not an error.
    pub async fn delete_laudo_dir(&self, laudo_id: i32) -> AppResult<()> {
        let path = self.root.join(Self::laudo_prefix(laudo_id));

        match tokio::fs::remove_dir_all(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete laudo photo dir: {}",
                e
            ))),
        }
    }
}

/// Flatten a client-supplied filename to `[A-Za-z0-9._-]`, dropping any
/// path components.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.trim_matches(['.', '_']).is_empty() {
        "foto".to_string()
    } else {
        safe
    }
}

fn split_extension(name: &str) -> (&str, String) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], name[idx..].to_string()),
        _ => (name, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foto_key_format() {
        let key = Storage::foto_key(42, "frente.jpg");
        assert!(key.starts_with("laudos/42/frente_"), "key={key}");
        assert!(key.ends_with(".jpg"), "key={key}");
    }

    #[test]
    fn test_foto_key_flattens_path_traversal() {
        let key = Storage::foto_key(7, "../../etc/passwd");
        assert!(key.starts_with("laudos/7/"), "key={key}");
        assert!(!key.contains(".."), "key={key}");
    }

    #[test]
    fn test_foto_key_handles_odd_names() {
        let key = Storage::foto_key(1, "foto lateral (2).png");
        assert!(key.starts_with("laudos/1/foto_lateral__2__"), "key={key}");
        assert!(key.ends_with(".png"), "key={key}");

        let sem_nome = Storage::foto_key(1, "...");
        assert!(sem_nome.starts_with("laudos/1/foto"), "key={sem_nome}");
    }

    #[test]
    fn test_laudo_prefix() {
        assert_eq!(Storage::laudo_prefix(9), "laudos/9");
    }

    #[tokio::test]
    async fn test_put_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path()).await.unwrap();

        let key = "laudos/1/frente_123.jpg";
        storage.put(key, b"jpeg-bytes").await.unwrap();
        assert!(storage.path_for(key).exists());

        storage.delete(key).await.unwrap();
        assert!(!storage.path_for(key).exists());

        // deleting again is not an error
        storage.delete(key).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_laudo_dir_is_missing_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path()).await.unwrap();

        storage.put("laudos/5/a_1.jpg", b"a").await.unwrap();
        storage.put("laudos/5/b_2.jpg", b"b").await.unwrap();

        storage.delete_laudo_dir(5).await.unwrap();
        assert!(!storage.path_for("laudos/5").exists());

        storage.delete_laudo_dir(5).await.unwrap();
    }
}
