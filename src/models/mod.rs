//! Data models for placeholder API responses.
//!
//! These are read-only projections of the remote JSON: albums, users,
//! and photos, plus the lookup helpers the views use to join them.

pub mod album;
pub mod photo;
pub mod user;

// Re-exports for convenience
pub use album::Album;
pub use photo::Photo;
pub use user::{find_user, user_name, Address, Company, Geo, User, UNKNOWN_USER};
