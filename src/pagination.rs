//! Pagination window and page state.
//!
//! [`controls`] is a pure function of `(current, page_size, total)` that
//! yields the page selector: previous, an optional leading first page,
//! a window of at most five page numbers, an optional trailing last page,
//! and next. [`PageState`] holds the selection and clamps every change
//! to the valid page range.

use std::fmt;

/// Most page numbers shown at once.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of pages needed for `total` items, `ceil(total / page_size)`.
pub fn total_pages(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// One element of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Step back one page.
    Previous { target: u32, disabled: bool },
    /// Jump to a page.
    Page { number: u32, active: bool },
    /// Gap between the window and the first or last page.
    Ellipsis,
    /// Step forward one page.
    Next { target: u32, disabled: bool },
}

impl Control {
    /// Page this control selects, if it is enabled.
    pub fn target(&self) -> Option<u32> {
        match *self {
            Control::Previous { target, disabled } | Control::Next { target, disabled } => {
                (!disabled).then_some(target)
            }
            Control::Page { number, .. } => Some(number),
            Control::Ellipsis => None,
        }
    }

    /// Whether the control is rendered but cannot be used.
    pub fn is_disabled(&self) -> bool {
        match *self {
            Control::Previous { disabled, .. } | Control::Next { disabled, .. } => disabled,
            Control::Page { .. } => false,
            Control::Ellipsis => true,
        }
    }

    /// Page number shown by a page control.
    pub fn page_number(&self) -> Option<u32> {
        match *self {
            Control::Page { number, .. } => Some(number),
            _ => None,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Control::Previous { disabled: true, .. } => write!(f, "(<)"),
            Control::Previous { .. } => write!(f, "<"),
            Control::Page { number, active: true } => write!(f, "[{}]", number),
            Control::Page { number, .. } => write!(f, "{}", number),
            Control::Ellipsis => write!(f, "..."),
            Control::Next { disabled: true, .. } => write!(f, "(>)"),
            Control::Next { .. } => write!(f, ">"),
        }
    }
}

/// Build the page selector for the given position.
///
/// An empty collection is shown as a single empty page.
pub fn controls(current: u32, page_size: u32, total: u32) -> Vec<Control> {
    let pages = total_pages(total, page_size);
    let last = pages.max(1);

    // Out-of-range pages (e.g. from a hand-edited URL) anchor at the nearest end.
    let anchor = current.clamp(1, last);

    let mut start = anchor.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let end = last.min(start.saturating_add(MAX_PAGE_BUTTONS - 1));
    if end - start + 1 < MAX_PAGE_BUTTONS {
        start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    }

    let page = |number: u32| Control::Page {
        number,
        active: number == current,
    };

    let mut out = Vec::with_capacity(MAX_PAGE_BUTTONS as usize + 6);

    out.push(Control::Previous {
        target: current.saturating_sub(1).clamp(1, last),
        disabled: current <= 1,
    });

    if start > 2 {
        out.push(page(1));
        out.push(Control::Ellipsis);
    } else if start == 2 {
        out.push(page(1));
    }

    out.extend((start..=end).map(page));

    match pages.saturating_sub(end) {
        0 => {}
        1 => out.push(page(pages)),
        _ => {
            out.push(Control::Ellipsis);
            out.push(page(pages));
        }
    }

    out.push(Control::Next {
        target: current.saturating_add(1).clamp(1, last),
        disabled: current >= pages,
    });

    out
}

/// Render controls as a single line.
pub fn render_controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current page and page size of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Selected page, 1-based.
    pub current: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Create a page state, replacing zero values with the defaults.
    pub fn new(current: u32, page_size: u32) -> Self {
        let defaults = Self::default();
        Self {
            current: if current == 0 { defaults.current } else { current },
            page_size: if page_size == 0 {
                defaults.page_size
            } else {
                page_size
            },
        }
    }

    /// Read `pageSize` and `current` from query pairs.
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut current = 0;
        let mut page_size = 0;

        for (key, value) in pairs {
            let parsed = value.as_ref().trim().parse::<u32>().ok();
            match key.as_ref() {
                "pageSize" => page_size = parsed.unwrap_or(0),
                "current" => current = parsed.unwrap_or(0),
                _ => {}
            }
        }

        Self::new(current, page_size)
    }

    /// Query string reflecting this state.
    pub fn to_query(&self) -> String {
        format!("pageSize={}&current={}", self.page_size, self.current)
    }

    /// Page controls for a collection of `total` items.
    pub fn controls(&self, total: u32) -> Vec<Control> {
        controls(self.current, self.page_size, total)
    }

    /// Select a page, clamped to the pages available for `total` items.
    ///
    /// Returns the page actually selected.
    pub fn select(&mut self, page: u32, total: u32) -> u32 {
        let last = total_pages(total, self.page_size).max(1);
        self.current = page.clamp(1, last);
        self.current
    }

    /// Activate a control. Returns `true` if the page changed.
    pub fn activate(&mut self, control: Control, total: u32) -> bool {
        let before = self.current;
        if let Some(target) = control.target() {
            self.select(target, total);
        }
        self.current != before
    }

    /// Step to the previous page.
    pub fn previous(&mut self, total: u32) -> u32 {
        self.select(self.current.saturating_sub(1), total)
    }

    /// Step to the next page.
    pub fn next(&mut self, total: u32) -> u32 {
        self.select(self.current.saturating_add(1), total)
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.current = 1;
    }
}
