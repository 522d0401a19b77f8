//! Table of contents: a scrollable, cursor-driven list of document titles.
//!
//! # Visual Layout
//!
//! ```text
//! row 0    **** THE EMU PAGES ****
//! row 2     12 PAGES LOADED. READY.
//! row 3    --------------------------------------------------------[^]
//! row 4       Controls
//! row 5     > Glossary                                 (inverted)
//!  ...     (22 entries)
//! row 26   --------------------------------------------------------[v]
//! row 27    [UP/DN] SELECT  ...
//! ```
//!
//! # Controls
//!
//! - **Up/Down**: move one entry, window follows incrementally
//! - **L/R**: move a full page, window snaps to the cursor
//! - **A/Right**: open the selected document
//! - **Left**: select the previous entry, then open it

use crate::colors::{CURSOR_FG, DIM, FOREGROUND, HIGHLIGHT, TITLE};
use crate::config::{FOOTER_ROW, HEADER_ROW, LIST_ROWS, TEXT_COLS};
use crate::content::Catalog;
use crate::input::{Button, ButtonSet};
use crate::scroll::ListPosition;
use crate::terminal::{Terminal, centered_col, format_row};

const TITLE_TEXT: &str = "**** THE EMU PAGES ****";
const HINTS: &str = "[UP/DN] SELECT  [L/R] PAGE  [A/RIGHT] OPEN  [LEFT] OPEN PREVIOUS";

const SUMMARY_ROW: usize = 2;
const RULE_ROW: usize = 3;
const LIST_START: usize = 4;
const INDICATOR_COL: usize = TEXT_COLS - 3;

/// Apply one frame of presses. Returns the document to open, if any.
///
/// Presses are handled in a fixed order (Up, Down, L, R, A/Right, Left) and
/// handling stops at the first one that opens a document.
pub fn handle_contents(
    pos: &mut ListPosition,
    pressed: ButtonSet,
    items: usize,
) -> Option<usize> {
    if pressed.contains(Button::Up) {
        pos.step(-1, items, LIST_ROWS);
    }
    if pressed.contains(Button::Down) {
        pos.step(1, items, LIST_ROWS);
    }
    if pressed.contains(Button::L) {
        pos.page(-(LIST_ROWS as isize), items, LIST_ROWS);
    }
    if pressed.contains(Button::R) {
        pos.page(LIST_ROWS as isize, items, LIST_ROWS);
    }
    if pressed.contains(Button::A) || pressed.contains(Button::Right) {
        return Some(pos.cursor);
    }
    if pressed.contains(Button::Left) {
        pos.step(-1, items, LIST_ROWS);
        return Some(pos.cursor);
    }
    None
}

/// Draw the contents screen.
pub fn draw_contents(
    term: &mut Terminal<'_>,
    catalog: &Catalog,
    pos: &ListPosition,
) {
    let items = catalog.len();
    term.clear();

    term.text(centered_col(TITLE_TEXT), HEADER_ROW, TITLE_TEXT, TITLE);
    let summary = format_row(format_args!("{items} PAGES LOADED. READY."));
    term.text(1, SUMMARY_ROW, &summary, FOREGROUND);
    term.rule(RULE_ROW, '-', DIM);

    let visible = catalog.documents().iter().enumerate().skip(pos.offset).take(LIST_ROWS);
    for (row, (index, doc)) in (LIST_START..).zip(visible) {
        if index == pos.cursor {
            let line = format_row(format_args!(" > {:<73}", doc.title));
            term.text_inverted(0, row, &line, CURSOR_FG, HIGHLIGHT);
        } else {
            let line = format_row(format_args!("   {}", doc.title));
            term.text(0, row, &line, FOREGROUND);
        }
    }

    term.rule(FOOTER_ROW - 1, '-', DIM);
    if pos.has_above() {
        term.text(INDICATOR_COL, RULE_ROW, "[^]", DIM);
    }
    if pos.has_below(items, LIST_ROWS) {
        term.text(INDICATOR_COL, FOOTER_ROW - 1, "[v]", DIM);
    }
    term.text(1, FOOTER_ROW, HINTS, DIM);
}
