#![forbid(unsafe_code)]

//! The host-document contract.
//!
//! The panel overlays an arbitrary, continuously mutating tree of elements it
//! does not own. This module defines the narrow surface the panel is allowed
//! to touch:
//!
//! - query heading candidates in document order,
//! - attach an identifier to a heading that lacks one,
//! - ask for an element to be scrolled into view.
//!
//! Nothing else. The panel must never restructure the host tree.
//!
//! # Invariants
//!
//! 1. `query_headings` returns candidates in document order; the order of
//!    two candidates never contradicts their relative position in the tree.
//! 2. `assign_id` is the only structural write the panel performs.
//! 3. `scroll_into_view` with an unknown id is a silent no-op — the element
//!    may legitimately have been removed since extraction.

/// Opaque handle to an element in the host document.
///
/// Valid only as long as the host keeps the element alive; the panel never
/// stores one past the next re-extraction except as a scroll back-reference,
/// and resolves it through the document at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Heading depth, classified from the source element's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    /// A second-level section heading.
    H2,
    /// A third-level subsection heading.
    H3,
}

impl HeadingLevel {
    /// Classify a tag name (`"h2"`, `"H3"`, ...). Returns `None` for tags
    /// outside the two supported levels.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.as_bytes() {
            [b'h' | b'H', b'2'] => Some(Self::H2),
            [b'h' | b'H', b'3'] => Some(Self::H3),
            _ => None,
        }
    }

    /// Numeric depth (2 or 3).
    #[must_use]
    pub const fn depth(&self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// A raw heading match, before normalization and dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    /// Handle to the source element.
    pub node: NodeId,
    /// Classified level.
    pub level: HeadingLevel,
    /// Visible text, un-normalized.
    pub text: String,
    /// The element's existing identifier, if it already carries one.
    pub id: Option<String>,
}

/// The ordered set of structural selectors matched by a heading query.
///
/// Each entry scopes a heading level to a known content-container convention
/// (e.g. `"article .markdown h2"`). The list is configuration, not protocol:
/// new container conventions are added here without touching the extraction
/// algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    selectors: Vec<String>,
}

impl SelectorSet {
    /// Build from an explicit selector list.
    #[must_use]
    pub fn from_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// The selectors, in match-priority order.
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }
}

impl Default for SelectorSet {
    /// The known content-container conventions of the reference deployment.
    fn default() -> Self {
        Self::from_selectors([
            "article .markdown h2",
            "article .markdown h3",
            "markdown-element h2",
            "markdown-element h3",
            ".message-content h2",
            ".message-content h3",
            ".model-response-text h2",
            ".model-response-text h3",
            ".font-claude-message h2",
            ".font-claude-message h3",
            ".prose h2",
            ".prose h3",
        ])
    }
}

/// The host-document collaborator.
///
/// Object-safe so the panel can hold a `&mut dyn HostDocument`.
pub trait HostDocument {
    /// All heading candidates matching `selectors`, in document order.
    fn query_headings(&self, selectors: &SelectorSet) -> Vec<HeadingCandidate>;

    /// Attach `id` to the element behind `node`. Unknown handles are
    /// ignored.
    fn assign_id(&mut self, node: NodeId, id: &str);

    /// Scroll the element carrying `id` into the viewport center with smooth
    /// motion. Unknown ids are ignored.
    fn scroll_into_view(&mut self, id: &str);
}
