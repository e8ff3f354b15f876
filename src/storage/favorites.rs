use super::Result;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePair {
    pub from_currency: String,
    pub to_currency: String,
}

impl FavoritePair {
    /// Codes are stored upper-cased.
    pub fn new(from_currency: &str, to_currency: &str) -> Self {
        Self {
            from_currency: from_currency.trim().to_uppercase(),
            to_currency: to_currency.trim().to_uppercase(),
        }
    }
}

/// JSON-backed list of favorite pairs, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<FavoritePair>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::FileIo {
                    path: self.path.to_string_lossy().to_string(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| StorageError::FavoritesParse {
            path: self.path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, favorites: &[FavoritePair]) -> Result<()> {
        let json = serde_json::to_string_pretty(favorites).map_err(|e| {
            StorageError::FavoritesSerialize {
                message: e.to_string(),
            }
        })?;

        fs::write(&self.path, json).map_err(|source| StorageError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        })
    }

    /// Loads the list, pushes `pair` and writes the whole list back.
    pub fn append(&self, pair: FavoritePair) -> Result<Vec<FavoritePair>> {
        let mut favorites = self.load()?;
        favorites.push(pair);
        self.save(&favorites)?;
        Ok(favorites)
    }
}
