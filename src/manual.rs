//! Built-in manual shown by the simulator.
//!
//! Real content is produced offline and compiled in; the simulator ships this
//! small hand-written catalog so it runs without a content build.

use emu_pages_common::{Catalog, Document, Line};
use emu_pages_common::content::Line::{Body, Heading2, Heading3};

static WELCOME: [Line; 14] = [
    Heading2("The Emu Pages"),
    Body(""),
    Body("A read-only reference library that boots like a home computer"),
    Body("and reads like a paper manual. Everything you see is baked in"),
    Body("ahead of time; nothing is fetched while you read."),
    Body(""),
    Heading3("Getting Started"),
    Body("Pick a page from the contents with Up and Down, then press A."),
    Body("Inside a page, Up and Down scroll one line at a time and the"),
    Body("shoulder buttons scroll a whole screen."),
    Body(""),
    Heading3("Going Back"),
    Body("Press B or Start to return to the contents. The page you were"),
    Body("reading stays selected."),
];

static CONTROLS: [Line; 32] = [
    Heading2("Contents Screen"),
    Body(""),
    Body("UP / DOWN      move the selection by one entry"),
    Body("L / R          move the selection by a full screen of entries"),
    Body("A / RIGHT      open the selected page"),
    Body("LEFT           select the previous entry and open it"),
    Body(""),
    Heading2("Page Screen"),
    Body(""),
    Body("UP / DOWN      scroll by one line"),
    Body("L / R          scroll by a full screen"),
    Body("LEFT / RIGHT   previous / next page (wraps around)"),
    Body("B / START      back to the contents"),
    Body(""),
    Heading2("Holding Buttons"),
    Body(""),
    Body("A held button repeats. The first press fires at once, repeating"),
    Body("starts after about 0.4 seconds and then fires about fifteen times"),
    Body("per second until the button is released."),
    Body(""),
    Heading2("Keyboard (Simulator)"),
    Body(""),
    Body("Arrow keys     D-pad"),
    Body("X / Enter      A"),
    Body("Z / Backspace  B"),
    Body("Q / Page Up    L"),
    Body("W / Page Down  R"),
    Body("Space          Start"),
    Body("Right Shift    Select"),
    Body("F5             restart from the boot sequence"),
    Body(""),
    Body("Close the window to quit."),
];

static BOOT: [Line; 16] = [
    Heading2("Boot Sequence"),
    Body(""),
    Body("Every session starts with a short scripted boot: a BASIC prompt"),
    Body("types its LOAD command, searches, loads and runs, then a splash"),
    Body("screen fades in the mascot while a tape-style progress bar fills."),
    Body(""),
    Heading3("Skipping"),
    Body("Press any button to jump straight to the contents. The button"),
    Body("you pressed is ignored on the contents screen until you let go,"),
    Body("so a held button never moves the selection by surprise."),
    Body(""),
    Heading3("Timing"),
    Body("Left alone, the boot takes ten seconds. Each frame of it is"),
    Body("drawn from the frame number alone, so it looks the same every"),
    Body("time."),
    Body(""),
];

static ABOUT: [Line; 12] = [
    Heading2("About"),
    Body(""),
    Body("The Emu Pages runs at a fixed 60 frames per second on a 640x480"),
    Body("screen laid out as an 80 by 30 grid of text cells. A two-cell"),
    Body("border frames the 76 by 28 reading area."),
    Body(""),
    Heading3("Sound"),
    Body("There is none. A silent block of audio is sent every frame."),
    Body(""),
    Heading3("Saving"),
    Body("Save states are not supported; there is nothing to save beyond"),
    Body("which page you were reading."),
];

static GLOSSARY: [Line; 17] = [
    Heading2("Glossary"),
    Body(""),
    Heading3("Catalog"),
    Body("The ordered list of pages. A page's position is its number."),
    Body(""),
    Heading3("Contents"),
    Body("The screen listing every page title."),
    Body(""),
    Heading3("Frame"),
    Body("One sixtieth of a second: input, update and drawing all happen"),
    Body("once per frame."),
    Body(""),
    Heading3("Scroll Indicator"),
    Body("[^] and [v] at the right edge mean more text above or below."),
    Body(""),
    Heading3("Shoulder Buttons"),
    Body("L and R, used to move a whole screen at a time."),
];

static DOCUMENTS: [Document; 5] = [
    Document::new("Welcome", &WELCOME),
    Document::new("Controls", &CONTROLS),
    Document::new("Boot Sequence", &BOOT),
    Document::new("About", &ABOUT),
    Document::new("Glossary", &GLOSSARY),
];

static CATALOG: Option<Catalog> = Catalog::new(&DOCUMENTS);

/// The built-in catalog.
pub fn catalog() -> Option<&'static Catalog> { CATALOG.as_ref() }

#[cfg(test)]
mod tests {
    use emu_pages_common::config::{CONTENT_ROWS, TEXT_COLS};

    use super::*;

    #[test]
    fn test_catalog_present() {
        let catalog = catalog().expect("built-in catalog");
        assert_eq!(catalog.len(), DOCUMENTS.len());
    }

    #[test]
    fn test_lines_fit_the_screen() {
        for doc in &DOCUMENTS {
            for line in doc.lines {
                let width = match line {
                    Line::Body(t) => t.len() + 1,
                    Line::Heading2(t) => t.len() + 6,
                    Line::Heading3(t) => t.len() + 8,
                };
                assert!(width <= TEXT_COLS, "{:?} too wide in {}", line, doc.title);
                assert!(line.text().is_ascii(), "non-ASCII text in {}", doc.title);
            }
        }
    }

    #[test]
    fn test_controls_page_scrolls() {
        assert!(CONTROLS.len() > CONTENT_ROWS);
    }
}
