//! # albumboard
//!
//! An admin dashboard for the albums, users and photos served by the
//! JSONPlaceholder REST API.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Dashboard`] struct:
//!
//! ```rust,no_run
//! use albumboard::{Dashboard, DashboardConfig, PageState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(DashboardConfig::default())?;
//!
//!     // Second page of the album table, 20 per page
//!     let albums = dashboard.album_list(PageState::new(2, 20)).await?;
//!     println!("{} albums in total", albums.total);
//!
//!     // An album with its owner and first photos
//!     let album = dashboard.album_detail(1).await?;
//!     println!("{} by {}", album.album.title, album.owner.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//!
//! - [`pagination`] - page selector window and page state
//! - [`carousel`] - photo preview with previous/next stepping
//! - [`views`] - screen loaders and the generation-guarded [`ViewSlot`]
//! - [`PlaceholderApi`] - typed client for the remote API

pub mod api;
pub mod carousel;
pub mod config;
mod dashboard;
pub mod error;
pub mod layout;
pub mod models;
pub mod navigation;
pub mod pagination;
pub mod views;

// Main interface (recommended)
pub use dashboard::{Dashboard, Screen};

// Low-level APIs
pub use api::{AssetUrls, AvatarStyle, PlaceholderApi};
pub use carousel::Carousel;
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use models::{Album, Photo, User};
pub use navigation::{Location, Route};
pub use pagination::{Control, PageState};
pub use views::{Ticket, ViewSlot, ViewState};
