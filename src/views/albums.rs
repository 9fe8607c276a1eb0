//! Paginated album table.

use std::fmt::Write;

use futures_util::future::try_join;
use serde::Serialize;
use tracing::debug;

use crate::api::{AssetUrls, AvatarStyle, PlaceholderApi};
use crate::error::Result;
use crate::models::{user_name, Album, User};
use crate::navigation::{Location, Route};
use crate::pagination::{render_controls, Control, PageState, PAGE_SIZE_OPTIONS};

use super::render_table;

/// One row of the album table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRow {
    pub id: u32,
    pub title: String,
    pub user_name: String,
    pub avatar_url: String,
    pub href: String,
}

/// Everything the album table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumListData {
    /// Albums on the current page.
    pub albums: Vec<Album>,
    /// All users, for resolving album owners.
    pub users: Vec<User>,
    /// Size of the whole album collection.
    pub total: u32,
    /// Page the albums belong to.
    pub page: PageState,
}

/// Load one page of albums together with the user list.
///
/// `fallback_total` is used when the API does not report the collection size.
pub async fn load(
    api: &PlaceholderApi,
    page: PageState,
    fallback_total: u32,
) -> Result<AlbumListData> {
    let (albums, users) = try_join(
        api.list_albums(page.page_size, page.current),
        api.list_users(),
    )
    .await?;

    let total = albums.total.unwrap_or(fallback_total);
    debug!(
        "Loaded {} albums (page {}, total {}) and {} users",
        albums.items.len(),
        page.current,
        total,
        users.len()
    );

    Ok(AlbumListData {
        albums: albums.items,
        users,
        total,
        page,
    })
}

/// Activate a page control and write the new page into `location`.
///
/// Returns the route to reload, or `None` if the page did not change.
pub fn activate(location: &mut Location, control: Control, total: u32) -> Option<Route> {
    let mut page = location.page_state();
    if !page.activate(control, total) {
        return None;
    }
    location.replace_page_state(&page);
    Some(Route::Albums(page))
}

/// Switch page size, reset to the first page and write it into `location`.
pub fn change_page_size(location: &mut Location, page_size: u32) -> Route {
    let mut page = location.page_state();
    page.set_page_size(page_size);
    location.replace_page_state(&page);
    Route::Albums(page)
}

impl AlbumListData {
    /// Table rows, with owners resolved against the user list.
    pub fn rows(&self, assets: &AssetUrls) -> Vec<AlbumRow> {
        self.albums
            .iter()
            .map(|album| {
                let name = user_name(&self.users, album.user_id);
                AlbumRow {
                    id: album.id,
                    title: album.title.clone(),
                    user_name: name.to_string(),
                    avatar_url: assets.avatar(name, AvatarStyle::Row),
                    href: album.path(),
                }
            })
            .collect()
    }

    /// Page selector for this page.
    pub fn controls(&self) -> Vec<Control> {
        self.page.controls(self.total)
    }

    /// Page-size selector, current size in brackets.
    pub fn page_size_selector(&self) -> String {
        PAGE_SIZE_OPTIONS
            .iter()
            .map(|size| {
                let label = format!("{}/{}", size, self.total);
                if *size == self.page.page_size {
                    format!("[{}]", label)
                } else {
                    label
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the table followed by the pagination line.
    pub fn render(&self, assets: &AssetUrls) -> String {
        let rows: Vec<Vec<String>> = self
            .rows(assets)
            .into_iter()
            .map(|r| vec![r.id.to_string(), r.title, r.user_name, r.href])
            .collect();

        let mut out = render_table(&["ID", "Title", "User", "Action"], &rows);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}    {}",
            render_controls(&self.controls()),
            self.page_size_selector()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    fn data() -> AlbumListData {
        AlbumListData {
            albums: vec![
                Album {
                    id: 1,
                    title: "quidem molestiae enim".to_string(),
                    user_id: 1,
                },
                Album {
                    id: 2,
                    title: "sunt qui excepturi".to_string(),
                    user_id: 7,
                },
            ],
            users: vec![User {
                id: 1,
                name: "Leanne Graham".to_string(),
                ..Default::default()
            }],
            total: 100,
            page: PageState::default(),
        }
    }

    #[test]
    fn test_rows_resolve_owner() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let rows = data().rows(&assets);
        assert_eq!(rows[0].user_name, "Leanne Graham");
        assert!(rows[0].avatar_url.contains("name=Leanne+Graham"));
        assert_eq!(rows[1].user_name, "Unknown");
        assert_eq!(rows[1].href, "/albums/2");
    }

    #[test]
    fn test_render() {
        let assets = AssetUrls::new(&DashboardConfig::default()).unwrap();
        let out = data().render(&assets);
        assert!(out.starts_with("ID | Title"));
        assert!(out.contains("2  | sunt qui excepturi    | Unknown       | /albums/2"));
        assert!(out.ends_with("(<) [1] 2 3 4 5 ... 10 >    [10/100] 20/100 50/100 100/100\n"));
    }

    #[test]
    fn test_activate_rewrites_location() {
        let mut location = Location::parse("/albums?pageSize=10&current=1").unwrap();
        let next = Control::Next {
            target: 2,
            disabled: false,
        };
        assert_eq!(
            activate(&mut location, next, 100),
            Some(Route::Albums(PageState::new(2, 10)))
        );
        assert_eq!(location.to_string(), "/albums?pageSize=10&current=2");

        let prev = Control::Previous {
            target: 1,
            disabled: true,
        };
        assert_eq!(activate(&mut location, prev, 100), None);
        assert_eq!(location.to_string(), "/albums?pageSize=10&current=2");
    }

    #[test]
    fn test_change_page_size() {
        let mut location = Location::parse("/albums?pageSize=10&current=4").unwrap();
        assert_eq!(
            change_page_size(&mut location, 20),
            Route::Albums(PageState::new(1, 20))
        );
        assert_eq!(location.to_string(), "/albums?pageSize=20&current=1");
    }
}
