//! Photo model.

use serde::{Deserialize, Serialize};

/// A photo inside an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// ID of the album the photo belongs to.
    pub album_id: u32,

    /// Photo ID, unique within an album.
    pub id: u32,

    /// Photo caption.
    pub title: String,

    /// Full-size image URL.
    pub url: String,

    /// Thumbnail image URL.
    pub thumbnail_url: String,
}

impl Photo {
    /// Whether this photo belongs to the given album.
    pub fn in_album(&self, album_id: u32) -> bool {
        self.album_id == album_id
    }
}
