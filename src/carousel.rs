//! Photo preview with previous/next stepping.
//!
//! The carousel owns the ordered photo sequence of an album detail view
//! and remembers which photo, if any, is open. Stepping never wraps.

use crate::models::Photo;

/// Ordered photos plus the currently previewed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    photos: Vec<Photo>,
    selected: Option<u32>,
}

impl Carousel {
    /// Create a closed carousel over `photos`.
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            selected: None,
        }
    }

    /// Photos in display order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Open the preview on the photo with `photo_id`.
    ///
    /// Returns `false` and leaves the carousel unchanged if no such photo exists.
    pub fn open(&mut self, photo_id: u32) -> bool {
        if self.position_of(photo_id).is_none() {
            return false;
        }
        self.selected = Some(photo_id);
        true
    }

    /// Close the preview.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Whether a photo is being previewed.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The previewed photo.
    pub fn current(&self) -> Option<&Photo> {
        self.position().map(|i| &self.photos[i])
    }

    /// Index of the previewed photo in the sequence.
    pub fn position(&self) -> Option<usize> {
        self.selected.and_then(|id| self.position_of(id))
    }

    fn position_of(&self, photo_id: u32) -> Option<usize> {
        self.photos.iter().position(|p| p.id == photo_id)
    }

    /// Whether the previous control is shown.
    pub fn has_previous(&self) -> bool {
        matches!(self.position(), Some(i) if i > 0)
    }

    /// Whether the next control is shown.
    pub fn has_next(&self) -> bool {
        matches!(self.position(), Some(i) if i + 1 < self.photos.len())
    }

    /// Step to the previous photo. No-op on the first photo.
    pub fn previous(&mut self) -> Option<&Photo> {
        if let Some(i) = self.position().filter(|i| *i > 0) {
            self.selected = Some(self.photos[i - 1].id);
        }
        self.current()
    }

    /// Step to the next photo. No-op on the last photo.
    pub fn next(&mut self) -> Option<&Photo> {
        if let Some(i) = self.position().filter(|i| i + 1 < self.photos.len()) {
            self.selected = Some(self.photos[i + 1].id);
        }
        self.current()
    }
}
