//! Scroll window over the effect list.
//!
//! The effects panel shows at most five rows. [`compute_window`] decides
//! which slice of the list is visible for a given selection, which row is
//! drawn highlighted and, for lists longer than five entries, where the
//! scrollbar thumb sits.
use std::ops::RangeInclusive;

use crate::view_model::layout::YPOS;

/// Rows visible at once.
pub const VISIBLE_ROWS: usize = 5;

/// Geometry of the scrollbar track, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTrack {
    pub top: i32,
    pub height: i32,
    pub min_thumb: i32,
}

impl Default for ScrollTrack {
    fn default() -> Self {
        Self {
            top: YPOS + 152,
            height: 82,
            min_thumb: 18,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thumb {
    /// Absolute y of the thumb's top edge.
    pub offset: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollbarView {
    pub show_up: bool,
    pub show_down: bool,
    pub thumb: Thumb,
}

/// Visible slice of the effect list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowView {
    /// First visible list index.
    pub start: usize,
    /// Last visible list index, inclusive.
    pub end: usize,
    /// Row, relative to the window, drawn as highlighted.
    ///
    /// Near the end of long lists this holds the absolute selection rather
    /// than a window-relative row; [`WindowView::is_highlighted`] accounts
    /// for both readings.
    pub highlight_row: usize,
    pub selected: usize,
    pub scrollbar: Option<ScrollbarView>,
}

impl WindowView {
    /// List indices of the visible rows.
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn row_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the window-relative `row` is drawn highlighted.
    pub fn is_highlighted(&self, row: usize) -> bool {
        row == self.highlight_row || self.start + row == self.selected
    }
}

/// Window for `selected` in a list of `len` entries on the standard track.
///
/// # Panics
///
/// Panics if the list is empty or `selected` is out of range; callers skip
/// windowing for empty lists.
pub fn compute_window(len: usize, selected: usize) -> WindowView {
    compute_window_with(len, selected, &ScrollTrack::default())
}

/// Same as [`compute_window`], on a custom track.
pub fn compute_window_with(len: usize, selected: usize, track: &ScrollTrack) -> WindowView {
    assert!(len > 0, "cannot window an empty effect list");
    assert!(selected < len, "selection {selected} outside list of {len}");

    let last = len - 1;
    if last == 0 {
        return WindowView {
            start: 0,
            end: 0,
            highlight_row: selected,
            selected,
            scrollbar: None,
        };
    }

    let highlight_row = if selected < 4 {
        selected
    } else if selected == last || selected == last - 1 {
        if selected == last - 1 && last - 1 < 5 {
            selected - 1
        } else {
            selected
        }
    } else {
        3
    };

    let mut start = selected.saturating_sub(3);
    let end = if last > selected {
        (start + VISIBLE_ROWS - 1).min(last)
    } else {
        start = last.saturating_sub(VISIBLE_ROWS - 1);
        last
    };

    let scrollbar = (len > VISIBLE_ROWS).then(|| ScrollbarView {
        show_up: selected > 3,
        show_down: selected + 1 < last,
        thumb: thumb(track, start, last),
    });

    WindowView {
        start,
        end,
        highlight_row,
        selected,
        scrollbar,
    }
}

fn thumb(track: &ScrollTrack, start: usize, last: usize) -> Thumb {
    let last = last as i32;
    let mut height = track.height * 4 / last;
    height += ((track.height - height) / 2).min(track.height / 4);
    let height = height.max(track.min_thumb).min(track.height);

    let scroll_range = (last - 4).max(1);
    let offset = track.top + (track.height - height) * start as i32 / scroll_range;

    Thumb { offset, height }
}
