use super::Result;
use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Plain-text store for the single ExchangeRate-API key.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when the file is missing or holds only whitespace.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let key = content.trim();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::FileIo {
                path: self.path.to_string_lossy().to_string(),
                source,
            }),
        }
    }

    /// Overwrites any existing key.
    pub fn save(&self, api_key: &str) -> Result<()> {
        fs::write(&self.path, api_key).map_err(|source| StorageError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        })
    }
}
