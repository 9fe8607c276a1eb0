//! Album model.

use serde::{Deserialize, Serialize};

/// A named collection of photos owned by one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Album ID.
    pub id: u32,

    /// Album title.
    pub title: String,

    /// ID of the owning user.
    pub user_id: u32,
}

impl Album {
    /// Dashboard path of this album's detail view.
    pub fn path(&self) -> String {
        format!("/albums/{}", self.id)
    }

    /// Whether the album belongs to the given user.
    pub fn is_owned_by(&self, user_id: u32) -> bool {
        self.user_id == user_id
    }
}
