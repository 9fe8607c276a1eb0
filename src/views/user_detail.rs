//! User detail: profile header and the user's albums.

use std::fmt::Write;

use futures_util::future::try_join;
use tracing::debug;

use crate::api::{AssetUrls, AvatarStyle, PlaceholderApi};
use crate::error::Result;
use crate::models::{Album, User};

use super::render_table;

/// Everything the user detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailData {
    /// The requested user.
    pub user: User,
    /// The user's first albums.
    pub albums: Vec<Album>,
}

/// Load a user and their first `window` albums in parallel.
pub async fn load(api: &PlaceholderApi, user_id: u32, window: u32) -> Result<UserDetailData> {
    let (albums, user) = try_join(
        api.albums_by_user(user_id, 0, window),
        api.get_user(user_id),
    )
    .await?;

    debug!("Loaded user {} with {} albums", user.id, albums.len());

    Ok(UserDetailData { user, albums })
}

impl UserDetailData {
    pub fn render(&self, assets: &AssetUrls) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Users > Show");
        let _ = writeln!(out, "Show User");
        let _ = writeln!(out);
        let _ = writeln!(out, "{} <{}>", self.user.name, self.user.email);
        let _ = writeln!(
            out,
            "  avatar: {}",
            assets.avatar(&self.user.name, AvatarStyle::Profile)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Albums");

        let rows: Vec<Vec<String>> = self
            .albums
            .iter()
            .map(|a| vec![a.id.to_string(), a.title.clone(), a.path()])
            .collect();
        out.push_str(&render_table(&["ID", "Title", "Actions"], &rows));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_render() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let data = UserDetailData {
            user: User {
                id: 2,
                name: "Ervin Howell".to_string(),
                email: "Shanna@melissa.tv".to_string(),
                ..Default::default()
            },
            albums: vec![Album {
                id: 11,
                title: "quam nostrum impedit mollitia quod et dolor".to_string(),
                user_id: 2,
            }],
        };

        let out = data.render(&assets);
        assert!(out.contains("Ervin Howell <Shanna@melissa.tv>"));
        assert!(out.contains("name=Ervin+Howell&size=40&background=00a3e0"));
        assert!(out.contains("11 | quam nostrum impedit mollitia quod et dolor | /albums/11"));
    }
}
