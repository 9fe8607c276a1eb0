//! Unified dashboard interface.
//!
//! This module ties the API client, asset URLs and views together:
//! a [`Route`] goes in, a loaded [`Screen`] comes out.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::api::{AssetUrls, AvatarStyle, PlaceholderApi};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::layout::{self, Sidebar};
use crate::navigation::{Location, Route};
use crate::pagination::PageState;
use crate::views::{
    self, AlbumDetailData, AlbumListData, Ticket, UserDetailData, UserListData, ViewSlot,
    ViewState,
};

/// A loaded screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Albums(AlbumListData),
    Album(AlbumDetailData),
    Users(UserListData),
    User(UserDetailData),
}

/// Main dashboard interface.
///
/// # Example
///
/// ```rust,no_run
/// use albumboard::{Dashboard, DashboardConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dashboard = Dashboard::new(DashboardConfig::default())?;
///
///     let screen = dashboard.open("/albums?pageSize=20&current=2").await?;
///     print!("{}", dashboard.render(&screen));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    api: PlaceholderApi,
    assets: AssetUrls,
    config: DashboardConfig,
    sidebar: Sidebar,
}

impl Dashboard {
    /// Create a dashboard for the given configuration.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let api = PlaceholderApi::new(&config)?;
        let assets = AssetUrls::new(&config)?;
        info!("Dashboard using API at {}", api.base_url());

        Ok(Self {
            api,
            assets,
            config,
            sidebar: Sidebar::default(),
        })
    }

    /// The underlying API client.
    pub fn api(&self) -> &PlaceholderApi {
        &self.api
    }

    /// URL builder for avatars and photos.
    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }

    /// Active configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Sidebar state.
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Open or collapse the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    // ==================
    // LOADING
    // ==================

    /// Load one page of the album table.
    pub async fn album_list(&self, page: PageState) -> Result<AlbumListData> {
        views::albums::load(&self.api, page, self.config.fallback_total).await
    }

    /// Load an album with its owner and photos.
    pub async fn album_detail(&self, album_id: u32) -> Result<AlbumDetailData> {
        views::album_detail::load(&self.api, album_id, self.config.preview_window).await
    }

    /// Load the user table.
    pub async fn user_list(&self) -> Result<UserListData> {
        views::users::load(&self.api).await
    }

    /// Load a user with their albums.
    pub async fn user_detail(&self, user_id: u32) -> Result<UserDetailData> {
        views::user_detail::load(&self.api, user_id, self.config.preview_window).await
    }

    /// Load the screen for a route.
    pub async fn load(&self, route: Route) -> Result<Screen> {
        match route {
            Route::Albums(page) => self.album_list(page).await.map(Screen::Albums),
            Route::Album(id) => self.album_detail(id).await.map(Screen::Album),
            Route::Users => self.user_list().await.map(Screen::Users),
            Route::User(id) => self.user_detail(id).await.map(Screen::User),
        }
    }

    /// Parse, route and load a location such as `/albums/3`.
    pub async fn open(&self, location: &str) -> Result<Screen> {
        let route = Location::parse(location)?.route()?;
        self.load(route).await
    }

    /// Load `route` into `slot`.
    ///
    /// The slot stays borrowed until the load finishes, so loads through
    /// `navigate` never overlap. Callers that start a new load while an
    /// older one is in flight use [`ViewSlot::begin`], [`Dashboard::load_ticketed`]
    /// and [`ViewSlot::apply`] instead.
    ///
    /// Returns `false` if a newer load started on the same slot meanwhile
    /// and this result was dropped.
    pub async fn navigate(&self, slot: &mut ViewSlot<Screen>, route: Route) -> bool {
        let ticket = slot.begin();
        let (ticket, result) = self.load_ticketed(ticket, route).await;
        slot.apply(ticket, result)
    }

    /// Load `route` for a ticket issued by [`ViewSlot::begin`].
    ///
    /// The slot is not borrowed here; hand the returned pair to
    /// [`ViewSlot::apply`], which drops it if a newer ticket exists by then.
    pub async fn load_ticketed(&self, ticket: Ticket, route: Route) -> (Ticket, Result<Screen>) {
        debug!("Load generation {} for {:?}", ticket.generation(), route);
        (ticket, self.load(route).await)
    }

    // ==================
    // RENDERING
    // ==================

    /// Render a loaded screen without the layout frame.
    pub fn render(&self, screen: &Screen) -> String {
        match screen {
            Screen::Albums(data) => data.render(&self.assets),
            Screen::Album(data) => data.render(&self.assets),
            Screen::Users(data) => data.render(&self.assets),
            Screen::User(data) => data.render(&self.assets),
        }
    }

    /// Render a screen state inside the header and sidebar.
    pub fn render_page(&self, path: &str, state: &ViewState<Screen>) -> String {
        let body = state.render(|screen| self.render(screen));
        layout::frame(&self.sidebar, path, &body)
    }

    /// JSON view model of a loaded screen.
    pub fn to_json(&self, screen: &Screen) -> Value {
        match screen {
            Screen::Albums(data) => json!({
                "rows": data.rows(&self.assets),
                "total": data.total,
                "pageSize": data.page.page_size,
                "current": data.page.current,
                "controls": data.controls().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            }),
            Screen::Album(data) => json!({
                "album": data.album,
                "owner": data.owner,
                "ownerAvatarUrl": self.assets.avatar(&data.owner.name, AvatarStyle::Profile),
                "photos": data.carousel.photos().iter().map(|p| json!({
                    "id": p.id,
                    "title": p.title,
                    "url": self.assets.photo(p),
                    "thumbnailUrl": self.assets.thumbnail(p),
                })).collect::<Vec<_>>(),
                "preview": data.carousel.current().map(|p| p.id),
            }),
            Screen::Users(data) => json!({ "rows": data.rows(&self.assets) }),
            Screen::User(data) => json!({
                "user": data.user,
                "avatarUrl": self.assets.avatar(&data.user.name, AvatarStyle::Profile),
                "albums": data.albums,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Album, User};

    #[test]
    fn test_new_rejects_bad_config() {
        let config = DashboardConfig::default().with_base_url("nope");
        assert!(Dashboard::new(config).is_err());
    }

    #[test]
    fn test_render_page_states() {
        let mut dashboard = Dashboard::new(DashboardConfig::default()).unwrap();

        let loading = dashboard.render_page("/users", &ViewState::Loading);
        assert!(loading.ends_with("Albums | *Users* <<\n\nLoading...\n"));

        dashboard.toggle_sidebar();
        let failed = dashboard.render_page("/users", &ViewState::Failed("boom".to_string()));
        assert!(failed.ends_with("A | *U* >>\n\nError: boom\n"));
    }

    #[test]
    fn test_user_json() {
        let dashboard = Dashboard::new(DashboardConfig::default()).unwrap();
        let screen = Screen::User(UserDetailData {
            user: User {
                id: 1,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                ..Default::default()
            },
            albums: vec![Album {
                id: 1,
                title: "quidem molestiae enim".to_string(),
                user_id: 1,
            }],
        });

        let value = dashboard.to_json(&screen);
        assert_eq!(value["user"]["name"], "Leanne Graham");
        assert_eq!(value["albums"][0]["userId"], 1);
    }
}
