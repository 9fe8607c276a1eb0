//! Dashboard locations and routes.
//!
//! A [`Location`] is the path plus query string of the current screen,
//! e.g. `/albums?pageSize=20&current=3`. The album list reads its page
//! state from it and rewrites the query in place on every page change.

use std::fmt;

use reqwest::Url;

use crate::error::{DashboardError, Result};
use crate::pagination::PageState;

/// Origin used to resolve dashboard paths; never requested.
const LOCATION_ORIGIN: &str = "http://albumboard.local/";

/// A screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Paginated album table.
    Albums(PageState),
    /// One album with its owner and photos.
    Album(u32),
    /// User table.
    Users,
    /// One user with their albums.
    User(u32),
}

impl Route {
    /// Canonical location of this route.
    pub fn location(&self) -> String {
        match self {
            Route::Albums(page) => format!("/albums?{}", page.to_query()),
            Route::Album(id) => format!("/albums/{}", id),
            Route::Users => "/users".to_string(),
            Route::User(id) => format!("/users/{}", id),
        }
    }
}

/// Path and query of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parse a location such as `/albums/3` or `/albums?current=2`.
    pub fn parse(input: &str) -> Result<Self> {
        let origin = Url::parse(LOCATION_ORIGIN)
            .map_err(|e| DashboardError::InvalidLocation(e.to_string()))?;
        let url = origin
            .join(input.trim())
            .map_err(|e| DashboardError::InvalidLocation(format!("{}: {}", input, e)))?;
        Ok(Self { url })
    }

    /// Path component, always starting with `/`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query component without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Page state encoded in the query, defaults where absent.
    pub fn page_state(&self) -> PageState {
        PageState::from_query_pairs(self.url.query_pairs())
    }

    /// Overwrite the query with `state`, keeping the path.
    pub fn replace_page_state(&mut self, state: &PageState) {
        self.url.set_query(Some(&state.to_query()));
    }

    /// Resolve the route this location points at.
    pub fn route(&self) -> Result<Route> {
        let segments: Vec<&str> = self
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["albums"] => Ok(Route::Albums(self.page_state())),
            ["albums", id] => Ok(Route::Album(parse_id(id, self)?)),
            ["users"] => Ok(Route::Users),
            ["users", id] => Ok(Route::User(parse_id(id, self)?)),
            _ => Err(DashboardError::InvalidLocation(self.to_string())),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.query() {
            Some(query) => write!(f, "{}?{}", self.path(), query),
            None => write!(f, "{}", self.path()),
        }
    }
}

fn parse_id(segment: &str, location: &Location) -> Result<u32> {
    segment
        .parse()
        .map_err(|_| DashboardError::InvalidLocation(location.to_string()))
}
