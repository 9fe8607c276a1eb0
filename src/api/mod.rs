//! API client and asset URLs for the placeholder service.
//!
//! This module provides:
//! - [`PlaceholderApi`]: typed client for the albums/users/photos endpoints
//! - [`AssetUrls`]: avatar and photo URL builders used when rendering

pub mod assets;
pub mod placeholder;

pub use assets::{AssetUrls, AvatarStyle};
pub use placeholder::{Paged, PlaceholderApi};
