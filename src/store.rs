//! Local key-value persistence.
//!
//! A [`Store`] is a directory with one pretty-printed JSON file per key:
//!
//! ```text
//! .genimg/
//! ├── genimg-config.json    # SavedConfig, the form session
//! └── genimg-photos.json    # Vec<PhotoRecord>, newest first
//! ```
//!
//! Reads are forgiving: a missing file is a first run, and a file that no
//! longer parses is logged and treated as absent so the caller falls back to
//! defaults instead of refusing to start. Writes create the directory on
//! demand and surface every error.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::gallery::{Gallery, PhotoRecord};
use crate::session::SavedConfig;

/// Key of the saved form session.
pub const CONFIG_KEY: &str = "genimg-config";

/// Key of the saved gallery.
pub const PHOTOS_KEY: &str = "genimg-photos";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and decode `key`, or `None` if it is missing or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, starting empty", path.display());
                return None;
            }
            Err(e) => {
                log::warn!("ignoring unreadable {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring unreadable {}: {e}", path.display());
                None
            }
        }
    }

    /// Encode and write `value` under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    pub fn load_config(&self) -> Option<SavedConfig> {
        self.load(CONFIG_KEY)
    }

    pub fn save_config(&self, config: &SavedConfig) -> Result<(), StoreError> {
        self.save(CONFIG_KEY, config)
    }

    /// Saved gallery; empty when nothing was saved yet.
    pub fn load_gallery(&self) -> Gallery {
        self.load::<Vec<PhotoRecord>>(PHOTOS_KEY)
            .map(Gallery::from_photos)
            .unwrap_or_default()
    }

    pub fn save_gallery(&self, gallery: &Gallery) -> Result<(), StoreError> {
        self.save(PHOTOS_KEY, gallery.photos())
    }
}
