//! Candidate popup placement and state.
//!
//! The engine does not draw the popup; it computes where the host should
//! draw it (a clamped screen position for a fixed-size box) and which
//! candidate is highlighted. All placement math funnels through one
//! parametrized per-axis clamp.

use serde::{Deserialize, Serialize};

/// Assumed popup box size, matching the stylesheet the host ships.
pub const POPUP_WIDTH: i32 = 250;
pub const POPUP_HEIGHT: i32 = 200;

/// Gap between the caret anchor and the popup for below/right placement.
const EDGE_GAP: i32 = 20;
/// Gap above the caret for top placement.
const ABOVE_GAP: i32 = 5;
/// Extra gap for left placement.
const SIDE_GAP: i32 = 10;
/// Minimum distance kept between the popup box and the viewport edges.
const VIEWPORT_MARGIN: i32 = 10;

/// Which side of the caret the popup prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupEdge {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// A screen point (x = left, y = top).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A screen rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Compute the popup's top-left corner for the given caret anchor, viewport,
/// and edge preference, keeping the whole popup box inside the viewport.
pub fn place(anchor: Rect, viewport: Rect, edge: PopupEdge) -> Point {
    let (x, y) = match edge {
        PopupEdge::Top => (anchor.x, anchor.y - ABOVE_GAP - POPUP_HEIGHT),
        PopupEdge::Bottom => (anchor.x, anchor.y + EDGE_GAP),
        PopupEdge::Left => (anchor.x - POPUP_WIDTH - SIDE_GAP, anchor.y),
        PopupEdge::Right => (anchor.x + EDGE_GAP, anchor.y),
    };

    Point {
        x: clamp_axis(x, POPUP_WIDTH, viewport.x, viewport.width),
        y: clamp_axis(y, POPUP_HEIGHT, viewport.y, viewport.height),
    }
}

/// Clamp one axis so a box of `size` starting at `start` stays inside the
/// viewport span with the standard margin. The near-edge clamp wins when the
/// viewport is smaller than the box.
fn clamp_axis(start: i32, size: i32, vp_start: i32, vp_size: i32) -> i32 {
    let max_start = vp_start + vp_size - size - VIEWPORT_MARGIN;
    let min_start = vp_start + VIEWPORT_MARGIN;
    start.min(max_start).max(min_start)
}

/// State of the open candidate popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    /// Flat offset of the marker that opened this popup.
    pub marker_offset: usize,
    /// Query typed after the marker so far.
    pub query: String,
    /// Index of the highlighted candidate within the filtered list.
    pub selected_index: usize,
    /// Computed screen position for the host's popup widget.
    pub position: Point,
}

impl PopupState {
    pub fn open_at(marker_offset: usize, query: String, position: Point) -> Self {
        Self {
            marker_offset,
            query,
            selected_index: 0,
            position,
        }
    }

    /// Move the highlight up one entry.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the highlight down one entry, clamped to the filtered list.
    pub fn select_next(&mut self, filtered_len: usize) {
        let last = filtered_len.saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
    }

    /// Re-clamp the highlight after the filtered list shrank.
    pub fn clamp_selection(&mut self, filtered_len: usize) {
        let last = filtered_len.saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
    }
}
