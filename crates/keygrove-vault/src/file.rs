//! File-Backed Adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{VaultError, VaultResult};
use crate::record::VaultRecord;
use crate::vault::KeyVault;

const RECORD_EXTENSION: &str = "json";

/// A vault storing one JSON file per record under a root directory
///
/// Record ids become file names, so ids are restricted to characters that
/// cannot climb out of the root: path separators and `..` components are
/// rejected before any filesystem access. Writes go through a temporary file
/// and a rename, so a crash mid-write leaves either the old record or none.
#[derive(Debug, Clone)]
pub struct FileVault {
    root: PathBuf,
}

impl FileVault {
    /// Open a vault at `root`, creating the directory if needed
    pub async fn open<P: AsRef<Path>>(root: P) -> VaultResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// The vault's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: &str) -> VaultResult<PathBuf> {
        validate_id(id)?;
        Ok(self.root.join(format!("{}.{}", id, RECORD_EXTENSION)))
    }
}

fn validate_id(id: &str) -> VaultResult<()> {
    if id.is_empty() {
        return Err(VaultError::invalid_id("id must not be empty"));
    }
    if id.contains('/') || id.contains('\\') {
        return Err(VaultError::invalid_id(format!(
            "id '{}' contains a path separator",
            id
        )));
    }
    if id == "." || id == ".." {
        return Err(VaultError::invalid_id(format!(
            "id '{}' is a reserved path component",
            id
        )));
    }
    Ok(())
}

#[async_trait]
impl KeyVault for FileVault {
    async fn list(&self) -> VaultResult<Vec<String>> {
        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    async fn get(&self, id: &str) -> VaultResult<VaultRecord> {
        let path = self.record_path(id)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::not_found(id));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn set(&self, record: VaultRecord) -> VaultResult<()> {
        let path = self.record_path(&record.id)?;
        let bytes = serde_json::to_vec_pretty(&record)?;

        // Write-then-rename keeps the record file whole under a crash
        let staging = path.with_extension("tmp");
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &path).await?;

        debug!(id = %record.id, path = %path.display(), "stored record file");
        Ok(())
    }

    async fn del(&self, id: &str) -> VaultResult<()> {
        let path = self.record_path(id)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(VaultError::not_found(id))
            }
            Err(err) => Err(err.into()),
        }
    }
}
