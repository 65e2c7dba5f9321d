//! Local disk storage for uploaded files.
//!
//! Files are written flat into a single upload directory and named
//! `<unix millis>-<original name>`. The same directory backs the public
//! `/uploads` static route.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload directory unavailable: {0}")]
    Root(#[source] std::io::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Metadata describing a file after it has been written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredFile {
    /// Form field the file arrived in.
    pub fieldname: String,
    /// Name supplied by the client.
    pub originalname: String,
    pub mimetype: String,
    /// Directory the file was written to.
    pub destination: String,
    /// Generated name, unique per millisecond and original name.
    pub filename: String,
    pub path: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at `config::upload_dir()`.
    pub fn from_config() -> Self {
        Self::new(config::upload_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory (and parents) if missing.
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(StorageError::Root)
    }

    /// Writes `bytes` under a freshly generated name and returns its metadata.
    pub async fn store(
        &self,
        field_name: &str,
        original_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, StorageError> {
        self.ensure_root().await?;

        let filename = stored_filename(original_name, Utc::now());
        let path = self.root.join(&filename);

        let mut file = fs::File::create(&path)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        file.write_all(bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        file.flush().await.map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(file = %path.display(), size = bytes.len(), "Stored upload");

        Ok(StoredFile {
            fieldname: field_name.to_string(),
            originalname: original_name.to_string(),
            mimetype: mime_type.to_string(),
            destination: self.root.display().to_string(),
            filename,
            path: path.display().to_string(),
            size: bytes.len() as u64,
        })
    }

    /// Full path of a stored file. Does not check existence.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub async fn exists(&self, filename: &str) -> bool {
        fs::try_exists(self.path_of(filename)).await.unwrap_or(false)
    }

    /// Names of every stored file, sorted.
    pub async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(StorageError::Root(e)),
        };
        while let Some(entry) = entries.next_entry().await.map_err(StorageError::Root)? {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// `<unix millis>-<basename>`; directory components of the client name are dropped.
pub fn stored_filename(original_name: &str, now: DateTime<Utc>) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or("upload");
    format!("{}-{}", now.timestamp_millis(), base)
}
