//! Image URLs used when rendering.
//!
//! Avatars come from an external generator keyed by display name, and
//! photo URLs are moved off the placeholder image host.

use reqwest::Url;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::models::Photo;

/// Avatar variants used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStyle {
    /// Small avatar with a random background, used in tables.
    Row,
    /// Larger avatar with the brand background, used on detail pages.
    Profile,
}

impl AvatarStyle {
    fn size(&self) -> &'static str {
        match self {
            AvatarStyle::Row => "32",
            AvatarStyle::Profile => "40",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            AvatarStyle::Row => "random",
            AvatarStyle::Profile => "00a3e0",
        }
    }
}

/// Builds avatar and photo URLs from the dashboard config.
#[derive(Debug, Clone)]
pub struct AssetUrls {
    avatar_base: Url,
    image_host_from: String,
    image_host_to: String,
}

impl AssetUrls {
    /// Create the URL builder.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let avatar_base = Url::parse(&config.avatar_url)
            .map_err(|e| DashboardError::InvalidConfig(format!("avatar_url: {}", e)))?;

        Ok(Self {
            avatar_base,
            image_host_from: config.image_host_from.clone(),
            image_host_to: config.image_host_to.clone(),
        })
    }

    /// Avatar URL for a display name.
    ///
    /// Blank names are rendered as "Unknown".
    pub fn avatar(&self, name: &str, style: AvatarStyle) -> String {
        let name = match name.trim() {
            "" => "Unknown",
            trimmed => trimmed,
        };

        let mut url = self.avatar_base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("name", name)
            .append_pair("size", style.size())
            .append_pair("background", style.background())
            .append_pair("color", "ffffff")
            .append_pair("rounded", "true");
        url.into()
    }

    /// Move an image URL off the placeholder host.
    pub fn rewrite_image(&self, url: &str) -> String {
        match url.strip_prefix(self.image_host_from.as_str()) {
            Some(rest) => format!("{}{}", self.image_host_to, rest),
            None => url.to_string(),
        }
    }

    /// Full-size URL to show for a photo.
    pub fn photo(&self, photo: &Photo) -> String {
        self.rewrite_image(&photo.url)
    }

    /// Thumbnail URL to show for a photo.
    pub fn thumbnail(&self, photo: &Photo) -> String {
        self.rewrite_image(&photo.thumbnail_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> AssetUrls {
        AssetUrls::new(&DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_avatar_url_generation() {
        let url = assets().avatar("Leanne Graham", AvatarStyle::Profile);
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Leanne+Graham&size=40&background=00a3e0&color=ffffff&rounded=true"
        );
    }

    #[test]
    fn test_avatar_row_style_and_blank_name() {
        let url = assets().avatar("  ", AvatarStyle::Row);
        assert!(url.contains("name=Unknown"));
        assert!(url.contains("size=32"));
        assert!(url.contains("background=random"));
    }

    #[test]
    fn test_image_host_rewrite() {
        let photo = Photo {
            url: "https://via.placeholder.com/600/92c952".to_string(),
            thumbnail_url: "https://via.placeholder.com/150/92c952".to_string(),
            ..Default::default()
        };
        let assets = assets();
        assert_eq!(assets.photo(&photo), "https://dummyjson.com/image/600/92c952");
        assert_eq!(assets.thumbnail(&photo), "https://dummyjson.com/image/150/92c952");
        assert_eq!(
            assets.rewrite_image("https://cdn.example.test/1.png"),
            "https://cdn.example.test/1.png"
        );
    }
}
