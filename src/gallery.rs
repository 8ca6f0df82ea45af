//! Generated-photo gallery.
//!
//! The gallery is an ordered list of [`PhotoRecord`]s, newest first. New
//! generations are prepended; deleting only drops the local record (the
//! image file on the server is untouched). Any photo can seed the form again
//! through [`Gallery::copy_settings`].
//!
//! ## Filenames
//!
//! Generated images are named after their creation time, down to the
//! millisecond, so names sort chronologically and rarely collide:
//!
//! ```text
//! 20241105_090307_042.jpg
//! ```

use chrono::{NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SavedConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no photo with id {0}")]
    NotFound(u64),
    #[error("a photo with id {0} already exists")]
    DuplicateId(u64),
    #[error("no photo ids left after {}", u64::MAX)]
    IdsExhausted,
}

/// One generated image as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: u64,
    /// Full URL of the image.
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub filename: String,
    /// ISO-8601 creation time.
    pub created_at: String,
}

/// What the generation backend reports for a finished image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub id: u64,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub prompt: String,
    pub negative_prompt: Option<String>,
}

impl PhotoRecord {
    pub fn from_generated(image: GeneratedImage, base_url: &str, created_at: String) -> Self {
        Self {
            id: image.id,
            src: photo_src(base_url, &image.filename),
            width: image.width,
            height: image.height,
            prompt: image.prompt,
            negative_prompt: image.negative_prompt.filter(|n| !n.is_empty()),
            filename: image.filename,
            created_at,
        }
    }
}

/// Join `base_url` and `filename` with exactly one `/`.
pub fn photo_src(base_url: &str, filename: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        filename.trim_start_matches('/')
    )
}

/// Timestamped filename for a newly generated image.
pub fn generated_filename(at: &NaiveDateTime) -> String {
    format!("{}.jpg", at.format("%Y%m%d_%H%M%S_%3f"))
}

/// Current UTC time in the `createdAt` format.
pub fn created_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Photos in display order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    photos: Vec<PhotoRecord>,
}

impl Gallery {
    pub fn from_photos(photos: Vec<PhotoRecord>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Put a new photo at the front. Ids are unique within a gallery.
    pub fn add(&mut self, photo: PhotoRecord) -> Result<(), GalleryError> {
        if self.get(photo.id).is_some() {
            return Err(GalleryError::DuplicateId(photo.id));
        }
        self.photos.insert(0, photo);
        Ok(())
    }

    /// Remove the photo with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        self.photos.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&PhotoRecord> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// One past the highest id in use.
    pub fn next_id(&self) -> Result<u64, GalleryError> {
        match self.photos.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(GalleryError::IdsExhausted),
        }
    }

    /// Reorder by a curated id list.
    ///
    /// Listed ids come first in list order; the rest keep their relative
    /// order after them.
    pub fn order_by(&mut self, order: &[u64]) {
        self.photos.sort_by_key(|p| {
            order
                .iter()
                .position(|&id| id == p.id)
                .unwrap_or(usize::MAX)
        });
    }

    /// Load a photo's prompt and dimensions into the form.
    ///
    /// The lock flag and any held ratio stay as they were.
    pub fn copy_settings(&self, id: u64, config: &mut SavedConfig) -> Result<(), GalleryError> {
        let photo = self.get(id).ok_or(GalleryError::NotFound(id))?;
        config.prompt = photo.prompt.clone();
        config.negative_prompt = photo.negative_prompt.clone().unwrap_or_default();
        config.width = photo.width;
        config.height = photo.height;
        Ok(())
    }
}
