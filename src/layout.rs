//! Header and sidebar around every screen.

use std::fmt::Write;

/// Title shown in the header.
pub const HEADER_TITLE: &str = "albumboard";

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown when the sidebar is open.
    pub name: &'static str,
    /// Path the entry links to.
    pub href: &'static str,
}

impl NavItem {
    /// Whether `path` is this entry or one of its sub-pages.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.href)
    }

    fn icon(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Sidebar entries, in display order.
pub static NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        name: "Albums",
        href: "/albums",
    },
    NavItem {
        name: "Users",
        href: "/users",
    },
];

/// Collapsible navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self { open: true }
    }
}

impl Sidebar {
    /// Create a sidebar in the given state.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether labels are shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and collapsed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Entry highlighted for `path`.
    pub fn active_item(&self, path: &str) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| item.matches(path))
    }

    /// Render the navigation line for `path`.
    ///
    /// Open: labels with the active one marked. Collapsed: icons only.
    pub fn render(&self, path: &str) -> String {
        let active = self.active_item(path);
        let entries: Vec<String> = NAV_ITEMS
            .iter()
            .map(|item| {
                let label = if self.open {
                    item.name.to_string()
                } else {
                    item.icon().to_string()
                };
                if active == Some(item) {
                    format!("*{}*", label)
                } else {
                    label
                }
            })
            .collect();

        let toggle = if self.open { "<<" } else { ">>" };
        format!("{} {}", entries.join(" | "), toggle)
    }
}

/// Wrap a rendered screen with the header and sidebar.
pub fn frame(sidebar: &Sidebar, path: &str, body: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", HEADER_TITLE);
    let _ = writeln!(out, "{}", sidebar.render(path));
    let _ = writeln!(out);
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item() {
        let sidebar = Sidebar::default();
        assert_eq!(sidebar.active_item("/albums/3").map(|i| i.name), Some("Albums"));
        assert_eq!(sidebar.active_item("/users").map(|i| i.name), Some("Users"));
        assert!(sidebar.active_item("/").is_none());
    }

    #[test]
    fn test_render_open_and_collapsed() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.render("/users/1"), "Albums | *Users* <<");

        sidebar.toggle();
        assert!(!sidebar.is_open());
        assert_eq!(sidebar.render("/albums"), "*A* | U >>");
    }

    #[test]
    fn test_frame() {
        let out = frame(&Sidebar::new(true), "/albums", "body\n");
        assert!(out.starts_with("== albumboard ==\n*Albums* | Users <<\n\n"));
        assert!(out.ends_with("body\n"));
    }
}
