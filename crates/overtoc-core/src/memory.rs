#![forbid(unsafe_code)]

//! An in-memory [`HostDocument`] for tests and demos.
//!
//! [`MemoryDocument`] models the host as a flat, ordered list of heading
//! elements, each living under a named container convention. It supports the
//! mutations the real host performs while streaming content: appending,
//! inserting, editing text in place, and removing elements. Scroll requests
//! are recorded rather than executed so tests can assert on them.

use ahash::AHashSet;

use crate::document::{HeadingCandidate, HeadingLevel, HostDocument, NodeId, SelectorSet};

#[derive(Debug, Clone)]
struct MemNode {
    node: NodeId,
    level: HeadingLevel,
    text: String,
    id: Option<String>,
    container: String,
}

/// A mutable, ordered heading list posing as the host document.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<MemNode>,
    next_raw: u64,
    scrolled: Vec<String>,
}

/// Container convention used by [`MemoryDocument::push_heading`].
pub const DEFAULT_CONTAINER: &str = ".prose";

impl MemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading under the default container. Returns its handle.
    pub fn push_heading(&mut self, level: HeadingLevel, text: &str) -> NodeId {
        self.push_heading_in(DEFAULT_CONTAINER, level, text)
    }

    /// Append a heading under an explicit container convention.
    pub fn push_heading_in(
        &mut self,
        container: &str,
        level: HeadingLevel,
        text: &str,
    ) -> NodeId {
        let node = self.alloc();
        self.nodes.push(MemNode {
            node,
            level,
            text: text.to_owned(),
            id: None,
            container: container.to_owned(),
        });
        node
    }

    /// Insert a heading at `index` (document order) under the default
    /// container. Indices past the end append.
    pub fn insert_heading(&mut self, index: usize, level: HeadingLevel, text: &str) -> NodeId {
        let node = self.alloc();
        let index = index.min(self.nodes.len());
        self.nodes.insert(
            index,
            MemNode {
                node,
                level,
                text: text.to_owned(),
                id: None,
                container: DEFAULT_CONTAINER.to_owned(),
            },
        );
        node
    }

    /// Edit a heading's visible text in place.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.nodes.iter_mut().find(|n| n.node == node) {
            n.text = text.to_owned();
        }
    }

    /// Remove a heading element.
    pub fn remove(&mut self, node: NodeId) {
        self.nodes.retain(|n| n.node != node);
    }

    /// The identifier currently attached to `node`, if any.
    #[must_use]
    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.node == node)
            .and_then(|n| n.id.as_deref())
    }

    /// Ids passed to [`HostDocument::scroll_into_view`], oldest first.
    #[must_use]
    pub fn scrolled(&self) -> &[String] {
        &self.scrolled
    }

    /// Number of heading elements currently in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the document holds no headings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self) -> NodeId {
        let node = NodeId::new(self.next_raw);
        self.next_raw += 1;
        node
    }
}

impl HostDocument for MemoryDocument {
    fn query_headings(&self, selectors: &SelectorSet) -> Vec<HeadingCandidate> {
        // Precompute which (container, depth) pairs the selector set covers.
        let mut covered: AHashSet<(&str, u8)> = AHashSet::new();
        for sel in selectors.selectors() {
            if let Some((container, tag)) = sel.rsplit_once(' ') {
                if let Some(level) = HeadingLevel::from_tag(tag) {
                    covered.insert((container, level.depth()));
                }
            }
        }
        self.nodes
            .iter()
            .filter(|n| covered.contains(&(n.container.as_str(), n.level.depth())))
            .map(|n| HeadingCandidate {
                node: n.node,
                level: n.level,
                text: n.text.clone(),
                id: n.id.clone(),
            })
            .collect()
    }

    fn assign_id(&mut self, node: NodeId, id: &str) {
        if let Some(n) = self.nodes.iter_mut().find(|n| n.node == node) {
            n.id = Some(id.to_owned());
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        // Unknown ids are a silent no-op per the document contract.
        if self.nodes.iter().any(|n| n.id.as_deref() == Some(id)) {
            self.scrolled.push(id.to_owned());
        }
    }
}
