//! User table.

use serde::Serialize;
use tracing::debug;

use crate::api::{AssetUrls, AvatarStyle, PlaceholderApi};
use crate::error::Result;
use crate::models::User;

use super::render_table;

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: u32,
    pub avatar_url: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub href: String,
}

/// Everything the user table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListData {
    pub users: Vec<User>,
}

/// Load all users.
pub async fn load(api: &PlaceholderApi) -> Result<UserListData> {
    let users = api.list_users().await?;
    debug!("Loaded {} users", users.len());
    Ok(UserListData { users })
}

impl UserListData {
    pub fn rows(&self, assets: &AssetUrls) -> Vec<UserRow> {
        self.users
            .iter()
            .map(|u| UserRow {
                id: u.id,
                avatar_url: assets.avatar(&u.name, AvatarStyle::Row),
                name: u.name.clone(),
                email: u.email.clone(),
                phone: u.phone.clone(),
                website: u.website.clone(),
                href: u.path(),
            })
            .collect()
    }

    pub fn render(&self, assets: &AssetUrls) -> String {
        let rows: Vec<Vec<String>> = self
            .rows(assets)
            .into_iter()
            .map(|r| vec![r.id.to_string(), r.name, r.email, r.phone, r.website, r.href])
            .collect();

        render_table(
            &["ID", "Name", "Email", "Phone", "Website", "Actions"],
            &rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_rows_and_render() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let data = UserListData {
            users: vec![User {
                id: 1,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                phone: "1-770-736-8031 x56442".to_string(),
                website: "hildegard.org".to_string(),
                ..Default::default()
            }],
        };

        let rows = data.rows(&assets);
        assert_eq!(rows[0].href, "/users/1");
        assert!(rows[0].avatar_url.contains("size=32"));

        let out = data.render(&assets);
        assert!(out.starts_with("ID | Name"));
        assert!(out.contains(
            "1  | Leanne Graham | Sincere@april.biz | 1-770-736-8031 x56442 | hildegard.org | /users/1"
        ));
    }
}
