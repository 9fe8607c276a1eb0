//! Placeholder data API client.
//!
//! This module provides a client for the JSONPlaceholder REST API
//! (jsonplaceholder.typicode.com). No authentication is required.

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::models::{Album, Photo, User};

/// Header carrying the collection size on paginated requests.
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Size of the whole collection, when the API reports it.
    pub total: Option<u32>,
}

/// Placeholder API client.
///
/// Every method issues exactly one GET request. Any non-success status
/// is reported as [`DashboardError::Status`].
///
/// # Example
///
/// ```rust,no_run
/// use albumboard::{DashboardConfig, PlaceholderApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = PlaceholderApi::new(&DashboardConfig::default())?;
///     let album = api.get_album(1).await?;
///     println!("Album: {}", album.title);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderApi {
    client: Client,
    base_url: String,
}

impl PlaceholderApi {
    /// Create a new client for the configured API root.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and fail on non-success statuses.
    async fn get_api(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!("API returned {} for {}", status, url);
            return Err(DashboardError::Status { status, url });
        }

        Ok(response)
    }

    /// Make a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.get_api(endpoint).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get an album by ID.
    pub async fn get_album(&self, album_id: u32) -> Result<Album> {
        let album_json: Value = self.get_json(&format!("albums/{}", album_id)).await?;

        if is_empty_object(&album_json) {
            return Err(DashboardError::AlbumNotFound(album_id.to_string()));
        }

        Ok(serde_json::from_value(album_json)?)
    }

    /// Get one page of albums.
    ///
    /// `page` is 1-based. The collection size is read from the
    /// `X-Total-Count` header when present.
    pub async fn list_albums(&self, page_size: u32, page: u32) -> Result<Paged<Album>> {
        let response = self
            .get_api(&format!("albums?_limit={}&_page={}", page_size, page))
            .await?;

        let total = total_count(response.headers());
        if total.is_none() {
            warn!("No {} header on album page {}", TOTAL_COUNT_HEADER, page);
        }

        let text = response.text().await?;
        let items: Vec<Album> = serde_json::from_str(&text)?;

        Ok(Paged { items, total })
    }

    /// Get the albums of a user within `[start, end)`.
    pub async fn albums_by_user(&self, user_id: u32, start: u32, end: u32) -> Result<Vec<Album>> {
        self.get_json(&format!(
            "albums?_end={}&_start={}&userId={}",
            end, start, user_id
        ))
        .await
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: u32) -> Result<User> {
        let user_json: Value = self.get_json(&format!("users/{}", user_id)).await?;

        if is_empty_object(&user_json) {
            return Err(DashboardError::UserNotFound(user_id.to_string()));
        }

        Ok(serde_json::from_value(user_json)?)
    }

    /// Get all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("users").await
    }

    /// Get the photos of an album within `[start, end)`.
    pub async fn photos_by_album(&self, album_id: u32, start: u32, end: u32) -> Result<Vec<Photo>> {
        self.get_json(&format!(
            "photos?_end={}&_start={}&albumId={}",
            end, start, album_id
        ))
        .await
    }
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().map(|o| o.is_empty()).unwrap_or(false)
}

fn total_count(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
