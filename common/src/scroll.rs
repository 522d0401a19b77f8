//! Scroll-window math shared by the contents list and the page viewer.
//!
//! A window of `rows` visible slots slides over `items` entries. Two cursor
//! policies exist side by side and must stay distinct:
//!
//! - **Follow** (single step): the offset moves only as far as needed to keep
//!   the cursor visible.
//! - **Snap** (page step): the offset jumps straight to the new cursor, then
//!   clamps. Paging down near the end therefore leaves the cursor mid-window.
//!
//! Every offset ends clamped to `[0, max(0, items - rows)]` and every cursor to
//! `[0, items - 1]`.

/// Largest valid scroll offset.
#[inline]
pub const fn max_offset(
    items: usize,
    rows: usize,
) -> usize {
    items.saturating_sub(rows)
}

/// Clamp an offset into the valid window range.
#[inline]
pub fn clamp_offset(
    offset: usize,
    items: usize,
    rows: usize,
) -> usize {
    offset.min(max_offset(items, rows))
}

/// Move a free-scrolling offset (no cursor) by `delta`, clamped.
pub fn scroll_by(
    offset: usize,
    delta: isize,
    items: usize,
    rows: usize,
) -> usize {
    clamp_offset(offset.saturating_add_signed(delta), items, rows)
}

/// Cursor plus scroll offset of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListPosition {
    /// Selected entry.
    pub cursor: usize,
    /// First visible entry.
    pub offset: usize,
}

impl ListPosition {
    /// Cursor and offset at the top of the list.
    pub const fn new() -> Self { Self { cursor: 0, offset: 0 } }

    /// Single-step move with incremental follow.
    pub fn step(
        &mut self,
        delta: isize,
        items: usize,
        rows: usize,
    ) {
        self.cursor = move_cursor(self.cursor, delta, items);
        self.reveal(items, rows);
    }

    /// Page move: the offset snaps to the new cursor, then clamps.
    pub fn page(
        &mut self,
        delta: isize,
        items: usize,
        rows: usize,
    ) {
        self.cursor = move_cursor(self.cursor, delta, items);
        self.offset = clamp_offset(self.cursor, items, rows);
    }

    /// Place the cursor on `index` and shift the offset just enough to show it.
    pub fn select(
        &mut self,
        index: usize,
        items: usize,
        rows: usize,
    ) {
        self.cursor = index.min(items.saturating_sub(1));
        self.reveal(items, rows);
    }

    /// Minimal offset correction so the cursor is inside the window.
    pub fn reveal(
        &mut self,
        items: usize,
        rows: usize,
    ) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + rows {
            self.offset = (self.cursor + 1).saturating_sub(rows);
        }
        self.offset = clamp_offset(self.offset, items, rows);
    }

    /// Whether entries exist above the window.
    pub const fn has_above(&self) -> bool { self.offset > 0 }

    /// Whether entries exist below the window.
    pub const fn has_below(
        &self,
        items: usize,
        rows: usize,
    ) -> bool {
        self.offset + rows < items
    }
}

fn move_cursor(
    cursor: usize,
    delta: isize,
    items: usize,
) -> usize {
    cursor.saturating_add_signed(delta).min(items.saturating_sub(1))
}
