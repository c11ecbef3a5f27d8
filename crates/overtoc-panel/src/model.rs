#![forbid(unsafe_code)]

//! The outline model: the single source of truth the renderer reads.
//!
//! # Invariants
//!
//! 1. `entries` is in document order of first occurrence; no sorting or
//!    level-based reordering ever happens downstream of extraction.
//! 2. No two entries share normalized text (guaranteed by the extractor; the
//!    model trusts it).
//! 3. `active_id`, if set, equals some entry's id — or dangles transiently
//!    after a re-extraction dropped the previously active heading, in which
//!    case the next render simply highlights nothing. `replace` deliberately
//!    does not touch it.

use overtoc_core::document::{HeadingLevel, NodeId};

/// One deduplicated heading extracted from the host content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Classified level (H2 or H3).
    pub level: HeadingLevel,
    /// Normalized display text: hash markup stripped, trimmed, length >= 2.
    pub text: String,
    /// Stable identifier, unique within a document lifetime.
    pub id: String,
    /// Back-reference to the source element, for scrolling only. The host
    /// owns the element's lifecycle; the reference is resolved through the
    /// document at click time.
    pub node: NodeId,
}

/// Ordered heading list plus the currently active entry.
#[derive(Debug, Clone, Default)]
pub struct OutlineModel {
    entries: Vec<HeadingEntry>,
    active_id: Option<String>,
}

impl OutlineModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry list wholesale. The active id is left as-is; a now
    /// dangling id is tolerated until the user selects again.
    pub fn replace(&mut self, entries: Vec<HeadingEntry>) {
        self.entries = entries;
    }

    /// Mark the entry with `id` active.
    pub fn set_active(&mut self, id: &str) {
        self.active_id = Some(id.to_owned());
    }

    /// The active entry's id, if one is set.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The ordered entries.
    #[must_use]
    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    /// Entry at `index`, if in range.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&HeadingEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the outline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, id: &str) -> HeadingEntry {
        HeadingEntry {
            level: HeadingLevel::H2,
            text: text.to_owned(),
            id: id.to_owned(),
            node: NodeId::new(0),
        }
    }

    #[test]
    fn replace_keeps_active_id_even_when_dangling() {
        let mut model = OutlineModel::new();
        model.replace(vec![entry("Intro", "n0")]);
        model.set_active("n0");
        model.replace(vec![entry("Setup", "n1")]);
        // Dangling is legal transiently; the renderer highlights nothing.
        assert_eq!(model.active_id(), Some("n0"));
        assert!(model.entries().iter().all(|e| e.id != "n0"));
    }

    #[test]
    fn accessors() {
        let mut model = OutlineModel::new();
        assert!(model.is_empty());
        model.replace(vec![entry("Intro", "n0"), entry("Setup", "n1")]);
        assert_eq!(model.len(), 2);
        assert_eq!(model.entry(1).map(|e| e.text.as_str()), Some("Setup"));
        assert!(model.entry(2).is_none());
    }
}
