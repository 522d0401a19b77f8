//! Page viewer: one document's lines in a scrollable window.
//!
//! ```text
//! row 0    << Controls                                   [2/12]
//! row 1    =============================================[^]
//! row 2    == Moving Around ==
//! row 3     Up and Down scroll one line.
//!  ...     (25 lines)
//! row 26   ---------------------------------------------[v]
//! row 27    [UP/DN] SCROLL  ...
//! ```

use crate::colors::{DIM, FOREGROUND, HEADING2, HEADING3, TITLE};
use crate::config::{CONTENT_ROWS, CONTENT_START, FOOTER_ROW, HEADER_ROW, TEXT_COLS};
use crate::content::{Catalog, Line};
use crate::input::{Button, ButtonSet};
use crate::scroll::{max_offset, scroll_by};
use crate::terminal::{Terminal, format_row};

const HINTS: &str = "[UP/DN] SCROLL  [L/R] PG UP/DN  [LEFT/RIGHT] PREV/NEXT  [B] BACK";
const INDICATOR_COL: usize = TEXT_COLS - 3;

/// Open document and its scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub document: usize,
    pub offset: usize,
}

impl PageView {
    /// Top of document `document`.
    pub const fn open(document: usize) -> Self { Self { document, offset: 0 } }
}

/// Apply one frame of presses. Returns `true` when the viewer should close.
///
/// Order: Up, Down, L, R, Left, Right, then B/Start.
pub fn handle_viewer(
    view: &mut PageView,
    pressed: ButtonSet,
    catalog: &Catalog,
) -> bool {
    let lines = catalog.document(view.document).len();
    let rows = CONTENT_ROWS as isize;

    if pressed.contains(Button::Up) {
        view.offset = scroll_by(view.offset, -1, lines, CONTENT_ROWS);
    }
    if pressed.contains(Button::Down) {
        view.offset = scroll_by(view.offset, 1, lines, CONTENT_ROWS);
    }
    if pressed.contains(Button::L) {
        view.offset = scroll_by(view.offset, -rows, lines, CONTENT_ROWS);
    }
    if pressed.contains(Button::R) {
        view.offset = scroll_by(view.offset, rows, lines, CONTENT_ROWS);
    }
    if pressed.contains(Button::Left) {
        let count = catalog.len();
        *view = PageView::open((view.document + count - 1) % count);
    }
    if pressed.contains(Button::Right) {
        *view = PageView::open((view.document + 1) % catalog.len());
    }
    pressed.contains(Button::B) || pressed.contains(Button::Start)
}

/// Draw the viewer screen.
pub fn draw_viewer(
    term: &mut Terminal<'_>,
    catalog: &Catalog,
    view: &PageView,
) {
    let doc = catalog.document(view.document);
    term.clear();

    let header = format_row(format_args!("<< {:<60} [{}/{}]", doc.title, view.document + 1, catalog.len()));
    term.text(0, HEADER_ROW, &header, TITLE);
    term.rule(HEADER_ROW + 1, '=', DIM);

    for (row, line) in (CONTENT_START..).zip(doc.lines.iter().skip(view.offset).take(CONTENT_ROWS)) {
        match line {
            Line::Heading2(text) => {
                term.text(0, row, &format_row(format_args!("== {text} ==")), HEADING2);
            }
            Line::Heading3(text) => {
                term.text(0, row, &format_row(format_args!("--- {text} ---")), HEADING3);
            }
            Line::Body(text) => term.text(1, row, text, FOREGROUND),
        }
    }

    term.rule(FOOTER_ROW - 1, '-', DIM);
    if view.offset > 0 {
        term.text(INDICATOR_COL, HEADER_ROW + 1, "[^]", DIM);
    }
    if view.offset < max_offset(doc.len(), CONTENT_ROWS) {
        term.text(INDICATOR_COL, FOOTER_ROW - 1, "[v]", DIM);
    }
    term.text(1, FOOTER_ROW, HINTS, DIM);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::pack;
    use crate::config::{FRAME_PIXELS, GLYPH_HEIGHT, SCREEN_WIDTH};
    use crate::content::Document;
    use crate::terminal::cell_origin;
    use embedded_graphics::pixelcolor::Rgb888;

    static LONG: [Line; 60] = [Line::Body("line"); 60];
    static MIXED: [Line; 3] = [Line::Heading2("Title"), Line::Heading3("Sub"), Line::Body("Text")];
    static DOCS: [Document; 3] = [
        Document::new("Long", &LONG),
        Document::new("Mixed", &MIXED),
        Document::new("Empty", &[]),
    ];

    fn catalog() -> Catalog { Catalog::new(&DOCS).unwrap() }

    fn press(buttons: &[Button]) -> ButtonSet { ButtonSet::of(buttons) }

    fn row_count(
        buf: &[u32],
        row: usize,
        color: Rgb888,
    ) -> usize {
        let y0 = cell_origin(0, row).y as usize;
        let width = SCREEN_WIDTH as usize;
        buf[y0 * width..(y0 + GLYPH_HEIGHT as usize) * width]
            .iter()
            .filter(|&&p| p == pack(color))
            .count()
    }

    fn render(view: &PageView) -> Vec<u32> {
        let mut buf = vec![0u32; FRAME_PIXELS];
        draw_viewer(&mut Terminal::new(&mut buf), &catalog(), view);
        buf
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    #[test]
    fn test_line_scroll_clamps() {
        let catalog = catalog();
        let mut view = PageView::open(0);
        handle_viewer(&mut view, press(&[Button::Up]), &catalog);
        assert_eq!(view.offset, 0);
        handle_viewer(&mut view, press(&[Button::Down]), &catalog);
        assert_eq!(view.offset, 1);
    }

    #[test]
    fn test_page_scroll_clamps_to_last_window() {
        let catalog = catalog();
        let mut view = PageView::open(0);
        handle_viewer(&mut view, press(&[Button::R]), &catalog);
        assert_eq!(view.offset, 25);
        handle_viewer(&mut view, press(&[Button::R]), &catalog);
        assert_eq!(view.offset, 35, "60 lines - 25 rows");
        handle_viewer(&mut view, press(&[Button::L]), &catalog);
        assert_eq!(view.offset, 10);
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let catalog = catalog();
        let mut view = PageView::open(1);
        handle_viewer(&mut view, press(&[Button::Down]), &catalog);
        handle_viewer(&mut view, press(&[Button::R]), &catalog);
        assert_eq!(view.offset, 0);
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    #[test]
    fn test_prev_next_wrap_and_reset_scroll() {
        let catalog = catalog();
        let mut view = PageView { document: 0, offset: 12 };
        handle_viewer(&mut view, press(&[Button::Left]), &catalog);
        assert_eq!(view, PageView::open(2), "wraps to last");

        handle_viewer(&mut view, press(&[Button::Right]), &catalog);
        assert_eq!(view, PageView::open(0), "wraps to first");

        view.offset = 5;
        handle_viewer(&mut view, press(&[Button::Right]), &catalog);
        assert_eq!(view, PageView::open(1));
    }

    #[test]
    fn test_back_buttons() {
        let catalog = catalog();
        let mut view = PageView::open(1);
        assert!(handle_viewer(&mut view, press(&[Button::B]), &catalog));
        assert!(handle_viewer(&mut view, press(&[Button::Start]), &catalog));
        assert!(!handle_viewer(&mut view, press(&[Button::A]), &catalog));
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn test_line_styles() {
        let buf = render(&PageView::open(1));
        assert!(row_count(&buf, 0, TITLE) > 0, "header");
        assert!(row_count(&buf, 2, HEADING2) > 0);
        assert!(row_count(&buf, 3, HEADING3) > 0);
        assert!(row_count(&buf, 4, FOREGROUND) > 0);
        assert_eq!(row_count(&buf, 5, FOREGROUND), 0);
    }

    #[test]
    fn test_body_is_indented() {
        let buf = render(&PageView::open(1));
        let origin = cell_origin(0, 4);
        let width = SCREEN_WIDTH as usize;
        for y in 0..GLYPH_HEIGHT as usize {
            for x in 0..8 {
                let idx = (origin.y as usize + y) * width + origin.x as usize + x;
                assert_ne!(buf[idx], pack(FOREGROUND), "column 0 must stay empty");
            }
        }
    }

    #[test]
    fn test_indicators() {
        let top = render(&PageView::open(0));
        let middle = render(&PageView { document: 0, offset: 10 });
        let end = render(&PageView { document: 0, offset: 35 });

        assert!(row_count(&middle, 1, DIM) > row_count(&top, 1, DIM), "[^] once scrolled");
        assert!(row_count(&middle, 26, DIM) > row_count(&end, 26, DIM), "[v] until the end");
        assert_eq!(row_count(&top, 26, DIM), row_count(&middle, 26, DIM));
    }

    #[test]
    fn test_empty_document_renders_chrome() {
        let buf = render(&PageView::open(2));
        assert!(row_count(&buf, 0, TITLE) > 0);
        assert_eq!(row_count(&buf, 2, FOREGROUND), 0);
    }
}
