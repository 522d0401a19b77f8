//! Pre-baked document catalog.
//!
//! Content is produced offline and compiled in as `'static` data. Nothing here
//! is mutated after construction; page numbers are plain indices into the
//! catalog.

/// One line of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Plain paragraph text.
    Body(&'static str),
    /// Section heading.
    Heading2(&'static str),
    /// Subsection heading.
    Heading3(&'static str),
}

impl Line {
    /// Text carried by the line, without decoration.
    pub const fn text(&self) -> &'static str {
        match self {
            Line::Body(t) | Line::Heading2(t) | Line::Heading3(t) => *t,
        }
    }
}

/// A titled sequence of lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Document {
    pub title: &'static str,
    pub lines: &'static [Line],
}

impl Document {
    pub const fn new(
        title: &'static str,
        lines: &'static [Line],
    ) -> Self {
        Self { title, lines }
    }

    /// Number of lines.
    #[inline]
    pub const fn len(&self) -> usize { self.lines.len() }

    pub const fn is_empty(&self) -> bool { self.lines.is_empty() }
}

/// Ordered, non-empty set of documents.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    documents: &'static [Document],
}

impl Catalog {
    /// Wrap a document slice; `None` when it is empty.
    pub const fn new(documents: &'static [Document]) -> Option<Self> {
        if documents.is_empty() { None } else { Some(Self { documents }) }
    }

    /// Number of documents (always at least one).
    #[inline]
    pub const fn len(&self) -> usize { self.documents.len() }

    /// Document at `index`; out-of-range indices clamp to the last document.
    pub fn document(
        &self,
        index: usize,
    ) -> &'static Document {
        let documents = self.documents;
        &documents[index.min(documents.len() - 1)]
    }

    /// All documents in page order.
    pub const fn documents(&self) -> &'static [Document] { self.documents }
}
