//! Dashboard configuration.

use reqwest::Url;

use crate::error::{DashboardError, Result};

/// Base URL for the placeholder data API.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Avatar generation endpoint.
pub const DEFAULT_AVATAR_URL: &str = "https://ui-avatars.com/api/";

/// Image host the API points photos at.
pub const PLACEHOLDER_IMAGE_HOST: &str = "https://via.placeholder.com";

/// Image host photos are served from instead.
pub const REPLACEMENT_IMAGE_HOST: &str = "https://dummyjson.com/image";

const USER_AGENT: &str = concat!("albumboard/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the API client and the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Root of the data API, without a trailing slash.
    pub base_url: String,
    /// Avatar service endpoint.
    pub avatar_url: String,
    /// Photo URL prefix to rewrite.
    pub image_host_from: String,
    /// Prefix substituted for `image_host_from`.
    pub image_host_to: String,
    /// How many photos or albums a detail view loads.
    pub preview_window: u32,
    /// Album count assumed when the API does not report one.
    pub fallback_total: u32,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            image_host_from: PLACEHOLDER_IMAGE_HOST.to_string(),
            image_host_to: REPLACEMENT_IMAGE_HOST.to_string(),
            preview_window: 10,
            fallback_total: 100,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Point the dashboard at a different API root.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Change the number of related items a detail view loads.
    pub fn with_preview_window(mut self, window: u32) -> Self {
        self.preview_window = window;
        self
    }

    /// Change the album total used when the API omits it.
    pub fn with_fallback_total(mut self, total: u32) -> Self {
        self.fallback_total = total;
        self
    }

    /// Check that the URLs parse and the numeric settings are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("base_url", &self.base_url), ("avatar_url", &self.avatar_url)] {
            let url = Url::parse(value)
                .map_err(|e| DashboardError::InvalidConfig(format!("{}: {}", name, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(DashboardError::InvalidConfig(format!(
                    "{}: unsupported scheme {}",
                    name,
                    url.scheme()
                )));
            }
        }

        if self.preview_window == 0 {
            return Err(DashboardError::InvalidConfig(
                "preview_window must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preview_window, 10);
        assert_eq!(config.fallback_total, 100);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = DashboardConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = DashboardConfig::default().with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));

        let config = DashboardConfig::default().with_base_url("ftp://example.test");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_window() {
        let config = DashboardConfig::default().with_preview_window(0);
        assert!(config.validate().is_err());
    }
}
