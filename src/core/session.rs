//! core/session.rs
//!
//! One edit session = one open file.
//!
//! All form state lives here behind named operations so the invariants are in one place:
//! - "cover changed" is exactly `pending_cover.is_some()`; the path travels with it.
//! - a save can only start once the file's tags have been loaded
//! - at most one load or save is in flight
//! - a failed crop or save leaves the session exactly as it was

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::cover::{self, CropRegion, SourceImage};
use super::error::{Error, Result};
use super::types::{CoverImage, PictureKind, TagField, TagSet};

/// What the session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Loading(PathBuf),
    Saving,
}

/// A replacement cover the user picked but has not saved yet.
#[derive(Debug, Clone)]
pub struct PendingCover {
    /// Image file it came from; `None` when re-cropping the embedded cover.
    pub path: Option<PathBuf>,
    pub source: SourceImage,
}

/// Everything a background save needs.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub path: PathBuf,
    pub tags: TagSet,
}

#[derive(Debug, Default)]
pub struct EditSession {
    path: Option<PathBuf>,
    tags: TagSet,
    /// As last read from disk; `revert` goes back here.
    saved_tags: TagSet,
    /// Previous values, newest last.
    history: Vec<(TagField, Option<String>)>,
    pending_cover: Option<PendingCover>,
    crop: CropRegion,
    activity: Activity,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    // --- read-only views ---

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Cover currently embedded in the file (what the preview shows when nothing is pending).
    pub fn original_cover(&self) -> Option<&CoverImage> {
        self.saved_tags.image.as_ref()
    }

    pub fn pending_cover(&self) -> Option<&PendingCover> {
        self.pending_cover.as_ref()
    }

    pub fn is_cover_changed(&self) -> bool {
        self.pending_cover.is_some()
    }

    pub fn crop(&self) -> CropRegion {
        self.crop
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    pub fn is_dirty(&self) -> bool {
        self.is_cover_changed() || !self.tags.same_text(&self.saved_tags)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_save(&self) -> bool {
        self.path.is_some() && !self.is_busy() && self.is_dirty()
    }

    // --- loading ---

    /// Mark `path` as being read. Refused while a save is running.
    pub fn begin_load(&mut self, path: PathBuf) -> Result<()> {
        if self.activity == Activity::Saving {
            return Err(Error::Busy);
        }
        info!(path = %path.display(), "opening file");
        self.activity = Activity::Loading(path);
        Ok(())
    }

    /// Populate from a finished read. Results for a path we are no longer loading are dropped.
    pub fn finish_load(
        &mut self,
        path: PathBuf,
        result: std::result::Result<TagSet, String>,
    ) -> std::result::Result<(), String> {
        if self.activity != Activity::Loading(path.clone()) {
            debug!(path = %path.display(), "ignoring stale load result");
            return Ok(());
        }
        self.activity = Activity::Idle;

        match result {
            Ok(tags) => {
                info!(
                    path = %path.display(),
                    has_cover = tags.image.is_some(),
                    "tags loaded"
                );
                self.path = Some(path);
                self.saved_tags = tags.clone();
                self.tags = tags;
                self.history.clear();
                self.pending_cover = None;
                self.crop = CropRegion::default();
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "tag read failed");
                // Keep whatever was open before.
                Err(e)
            }
        }
    }

    // --- editing ---

    /// Set one text field. Consecutive edits of the same field are one undo step.
    pub fn set_field(&mut self, field: TagField, value: String) {
        let previous = self.tags.get(field).map(str::to_owned);
        if previous.as_deref().unwrap_or("") == value {
            return;
        }

        if self.history.last().map(|(f, _)| *f) != Some(field) {
            self.history.push((field, previous));
        }
        self.tags.set(field, Some(value));
    }

    pub fn undo(&mut self) -> Option<TagField> {
        let (field, previous) = self.history.pop()?;
        self.tags.set(field, previous);
        Some(field)
    }

    /// Drop all unsaved text edits and any pending cover.
    pub fn revert(&mut self) {
        self.tags = self.saved_tags.clone();
        self.history.clear();
        self.pending_cover = None;
        self.crop = CropRegion::default();
    }

    // --- cover ---

    /// Use a newly picked image as the pending cover and seed the crop.
    ///
    /// Refused while a load or save is in flight.
    pub fn choose_cover(&mut self, path: PathBuf, source: SourceImage) -> Result<()> {
        self.ensure_cover_editable()?;
        info!(
            path = %path.display(),
            natural_w = source.natural_width(),
            natural_h = source.natural_height(),
            "cover image chosen"
        );
        self.set_pending(Some(path), source);
        Ok(())
    }

    /// Re-crop the cover that is already embedded in the file.
    pub fn recrop_current_cover(&mut self, source: SourceImage) -> Result<()> {
        self.ensure_cover_editable()?;
        debug!("re-cropping embedded cover");
        self.set_pending(None, source);
        Ok(())
    }

    fn ensure_cover_editable(&self) -> Result<()> {
        if self.path.is_none() {
            return Err(Error::NoFileOpen);
        }
        if self.is_busy() {
            return Err(Error::Busy);
        }
        Ok(())
    }

    fn set_pending(&mut self, path: Option<PathBuf>, source: SourceImage) {
        self.crop = cover::initialize_crop_for_image(&source);
        self.pending_cover = Some(PendingCover { path, source });
    }

    pub fn discard_pending_cover(&mut self) {
        self.pending_cover = None;
        self.crop = CropRegion::default();
    }

    /// Apply an adjusted crop: aspect lock, then clamp to the displayed image.
    pub fn set_crop(&mut self, crop: CropRegion) {
        let Some(pending) = &self.pending_cover else {
            return;
        };
        let bounds = (pending.source.displayed_width, pending.source.displayed_height);
        self.crop = crop.with_aspect_applied().clamped_to(bounds.0, bounds.1);
    }

    // --- saving ---

    /// Build the save request and mark the session as saving.
    ///
    /// When a cover is pending it is cropped here; if that fails nothing changes.
    pub fn begin_save(&mut self) -> Result<SaveRequest> {
        let path = self.path.clone().ok_or(Error::NoFileOpen)?;
        if self.is_busy() {
            return Err(Error::Busy);
        }

        let mut tags = self.tags.clone();
        if let Some(pending) = &self.pending_cover {
            let buf = cover::extract_cropped_region(&pending.source, &self.crop)?;
            info!(width = buf.width(), height = buf.height(), "cover cropped");
            tags.image = Some(CoverImage {
                data: buf.into_bytes(),
                mime: "image/png".to_string(),
                kind: PictureKind::FRONT_COVER,
                description: String::new(),
            });
        }

        self.activity = Activity::Saving;
        info!(path = %path.display(), cover_changed = self.is_cover_changed(), "saving tags");
        Ok(SaveRequest { path, tags })
    }

    /// Apply a finished save. `Ok` carries the tags re-read from disk.
    pub fn finish_save(
        &mut self,
        result: std::result::Result<TagSet, String>,
    ) -> std::result::Result<(), String> {
        if self.activity != Activity::Saving {
            return Ok(());
        }
        self.activity = Activity::Idle;

        match result {
            Ok(tags) => {
                info!("save finished");
                self.saved_tags = tags.clone();
                self.tags = tags;
                self.history.clear();
                self.pending_cover = None;
                self.crop = CropRegion::default();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                Err(e)
            }
        }
    }
}
