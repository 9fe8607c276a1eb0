//! Album detail: owner, title, photo thumbnails and the photo preview.

use std::fmt::Write;

use futures_util::future::try_join;
use tracing::{debug, warn};

use crate::api::{AssetUrls, AvatarStyle, PlaceholderApi};
use crate::carousel::Carousel;
use crate::error::Result;
use crate::models::{Album, User};

/// Everything the album detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDetailData {
    /// The requested album.
    pub album: Album,
    /// User owning the album.
    pub owner: User,
    /// The album's first photos and the preview selection.
    pub carousel: Carousel,
}

/// Load an album, its first `window` photos, then its owner.
///
/// The album and its photos are fetched together; the owner request
/// needs the album's `userId` and runs afterwards.
pub async fn load(api: &PlaceholderApi, album_id: u32, window: u32) -> Result<AlbumDetailData> {
    let (album, mut photos) = try_join(
        api.get_album(album_id),
        api.photos_by_album(album_id, 0, window),
    )
    .await?;

    let owner = api.get_user(album.user_id).await?;

    let fetched = photos.len();
    photos.retain(|p| p.in_album(album.id));
    if photos.len() != fetched {
        warn!(
            "Dropped {} photos not belonging to album {}",
            fetched - photos.len(),
            album.id
        );
    }
    debug!(
        "Loaded album {} owned by user {} with {} photos",
        album.id,
        owner.id,
        photos.len()
    );

    Ok(AlbumDetailData {
        album,
        owner,
        carousel: Carousel::new(photos),
    })
}

impl AlbumDetailData {
    /// Render the detail page, plus the preview when a photo is open.
    pub fn render(&self, assets: &AssetUrls) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Albums > Show");
        let _ = writeln!(out, "Show Album");
        let _ = writeln!(out);
        let _ = writeln!(out, "{} <{}>  {}", self.owner.name, self.owner.email, self.owner.path());
        let _ = writeln!(
            out,
            "  avatar: {}",
            assets.avatar(&self.owner.name, AvatarStyle::Profile)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.album.title);
        let _ = writeln!(out, "{}", "-".repeat(self.album.title.chars().count()));

        for photo in self.carousel.photos() {
            let _ = writeln!(out, "#{} {}  {}", photo.id, photo.title, assets.thumbnail(photo));
        }

        if let Some(photo) = self.carousel.current() {
            let _ = writeln!(out);
            let previous = if self.carousel.has_previous() { "<" } else { " " };
            let next = if self.carousel.has_next() { ">" } else { " " };
            let _ = writeln!(out, "[{}] {} [{}]  (x)", previous, photo.title, next);
            let _ = writeln!(out, "    {}", assets.photo(photo));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::Photo;

    fn data() -> AlbumDetailData {
        let photos = (1..=3)
            .map(|id| Photo {
                album_id: 1,
                id,
                title: format!("photo {}", id),
                url: format!("https://via.placeholder.com/600/{}", id),
                thumbnail_url: format!("https://via.placeholder.com/150/{}", id),
            })
            .collect();

        AlbumDetailData {
            album: Album {
                id: 1,
                title: "quidem molestiae enim".to_string(),
                user_id: 1,
            },
            owner: User {
                id: 1,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                ..Default::default()
            },
            carousel: Carousel::new(photos),
        }
    }

    #[test]
    fn test_render_without_preview() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let out = data().render(&assets);
        assert!(out.contains("Leanne Graham <Sincere@april.biz>  /users/1"));
        assert!(out.contains("#2 photo 2  https://dummyjson.com/image/150/2"));
        assert!(!out.contains("(x)"));
    }

    #[test]
    fn test_render_preview_controls() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let mut data = data();

        data.carousel.open(1);
        let out = data.render(&assets);
        assert!(out.contains("[ ] photo 1 [>]  (x)"));
        assert!(out.contains("    https://dummyjson.com/image/600/1"));

        data.carousel.next();
        data.carousel.next();
        assert!(data.render(&assets).contains("[<] photo 3 [ ]  (x)"));
    }
}
