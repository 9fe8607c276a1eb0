//! Screens and their load state.
//!
//! Each screen is loaded by one async function that issues its requests,
//! joined where they are independent. Results land in a [`ViewSlot`],
//! which only accepts the result of the most recently started load.

pub mod album_detail;
pub mod albums;
pub mod user_detail;
pub mod users;

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, warn};

use crate::error::{Result, FALLBACK_MESSAGE};

pub use album_detail::AlbumDetailData;
pub use albums::AlbumListData;
pub use user_detail::UserDetailData;
pub use users::UserListData;

/// Text shown while a load is outstanding.
pub const LOADING_TEXT: &str = "Loading...";

/// What a screen currently shows.
///
/// The three states are exclusive: main content only renders when `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// A load is in flight.
    Loading,
    /// The last load failed with this message.
    Failed(String),
    /// The last load succeeded.
    Ready(T),
}

impl<T> ViewState<T> {
    /// Convert a load result into a state.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => {
                error!("Load failed: {}", e);
                ViewState::Failed(e.to_string())
            }
        }
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable access to the loaded data, if any.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if the last load failed.
    ///
    /// A blank message reads as [`FALLBACK_MESSAGE`].
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) if message.trim().is_empty() => {
                Some(FALLBACK_MESSAGE)
            }
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Render the state, delegating to `content` when ready.
    pub fn render<F>(&self, content: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            ViewState::Loading => format!("{}\n", LOADING_TEXT),
            ViewState::Ready(data) => content(data),
            ViewState::Failed(_) => {
                format!("Error: {}\n", self.error().unwrap_or(FALLBACK_MESSAGE))
            }
        }
    }
}

/// Proof that a load was started; carries its generation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    /// Generation number of the load.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonic load counter shared by everyone loading into one slot.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    /// Start a new load, superseding all earlier tickets.
    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the latest load.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

/// A screen's state guarded by a generation counter.
#[derive(Debug, Clone)]
pub struct ViewSlot<T> {
    state: ViewState<T>,
    generation: Generation,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    /// Create a slot in the loading state.
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: Generation::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Mutable access to the current state, for local UI changes.
    pub fn state_mut(&mut self) -> &mut ViewState<T> {
        &mut self.state
    }

    /// Counter handle, for starting loads from other tasks.
    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Start a load: switch to `Loading` and issue a ticket.
    pub fn begin(&mut self) -> Ticket {
        self.state = ViewState::Loading;
        self.generation.begin()
    }

    /// Store a load result if `ticket` is still the latest.
    ///
    /// Returns `false` when the result was stale and dropped.
    pub fn apply(&mut self, ticket: Ticket, result: Result<T>) -> bool {
        if !self.generation.is_current(ticket) {
            warn!(
                "Dropping stale load result (generation {})",
                ticket.generation()
            );
            return false;
        }
        self.state = ViewState::from_result(result);
        true
    }
}

/// Render a left-aligned text table.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", render_line(headers.iter().copied(), &widths));
    let _ = writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    for row in rows {
        let _ = writeln!(out, "{}", render_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
