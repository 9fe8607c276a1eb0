//! User model and lookup helpers.
//!
//! Only `id`, `name` and `email` are required; the contact and company
//! blocks are defaulted when the API leaves them out.

use serde::{Deserialize, Serialize};

/// Name shown when an album's owner is not in the loaded user list.
pub const UNKNOWN_USER: &str = "Unknown";

/// Geographic coordinates of an address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Geo {
    /// Latitude, as sent by the API.
    pub lat: String,

    /// Longitude, as sent by the API.
    pub lng: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A dashboard user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User ID.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Login handle.
    #[serde(default)]
    pub username: String,

    /// Phone number, free-form.
    #[serde(default)]
    pub phone: String,

    /// Personal website host.
    #[serde(default)]
    pub website: String,

    /// Postal address.
    #[serde(default)]
    pub address: Address,

    /// Employer.
    #[serde(default)]
    pub company: Company,
}

impl User {
    /// Dashboard path of this user's detail view.
    pub fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

/// Find a user by ID.
pub fn find_user(users: &[User], id: u32) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

/// Get a user's name by ID, or [`UNKNOWN_USER`] if absent.
pub fn user_name(users: &[User], id: u32) -> &str {
    find_user(users, id)
        .map(|u| u.name.as_str())
        .unwrap_or(UNKNOWN_USER)
}
