#![forbid(unsafe_code)]

//! Heading discovery, normalization, dedup, and id assignment.
//!
//! One extraction pass queries the host document for every candidate heading,
//! normalizes the visible text, drops duplicates and too-short texts, and
//! makes sure every accepted heading carries a stable identifier.
//!
//! # Invariants
//!
//! 1. Output order is document order of first occurrence; never sorted.
//! 2. First occurrence of a normalized text wins; later duplicates are
//!    silently dropped. This is content-level dedup, not an error.
//! 3. Synthesized ids are deterministic within a pass: `{prefix}{ordinal}`,
//!    where the ordinal is the candidate's index among ALL matches (rejected
//!    candidates still consume ordinals). The id is written back to the
//!    element, so an unchanged element keeps its id across passes.
//! 4. The pass has no side effect on the host beyond that id write-back.

use ahash::AHashSet;
use overtoc_core::document::{HostDocument, SelectorSet};

use crate::model::HeadingEntry;

/// Default prefix for synthesized heading identifiers.
pub const DEFAULT_ID_PREFIX: &str = "overtoc-node-";

/// Minimum accepted length of normalized heading text.
const MIN_TEXT_LEN: usize = 2;

/// Normalize a heading's visible text: strip the leading hash-mark run and
/// surrounding whitespace.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.trim().trim_start_matches('#').trim().to_owned()
}

/// Run one extraction pass against the document.
///
/// Pure with respect to its own state; the only host mutation is assigning a
/// fallback identifier to accepted headings that lack one.
pub fn extract(
    doc: &mut dyn HostDocument,
    selectors: &SelectorSet,
    id_prefix: &str,
) -> Vec<HeadingEntry> {
    let candidates = doc.query_headings(selectors);
    let span = tracing::debug_span!("outline.extract", candidates = candidates.len());
    let _guard = span.enter();

    let mut entries = Vec::with_capacity(candidates.len());
    let mut seen: AHashSet<String> = AHashSet::with_capacity(candidates.len());

    for (ordinal, candidate) in candidates.into_iter().enumerate() {
        let text = normalize_text(&candidate.text);
        if text.chars().count() < MIN_TEXT_LEN || seen.contains(&text) {
            continue;
        }
        seen.insert(text.clone());

        let id = match candidate.id {
            Some(existing) => existing,
            None => {
                let id = format!("{id_prefix}{ordinal}");
                doc.assign_id(candidate.node, &id);
                id
            }
        };

        entries.push(HeadingEntry {
            level: candidate.level,
            text,
            id,
            node: candidate.node,
        });
    }

    tracing::debug!(kept = entries.len(), "outline.extract.done");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtoc_core::document::HeadingLevel;
    use overtoc_core::memory::MemoryDocument;

    fn run(doc: &mut MemoryDocument) -> Vec<HeadingEntry> {
        extract(doc, &SelectorSet::default(), DEFAULT_ID_PREFIX)
    }

    #[test]
    fn normalizes_hash_markup_and_whitespace() {
        assert_eq!(normalize_text("  ## Getting Started  "), "Getting Started");
        assert_eq!(normalize_text("### x y"), "x y");
        assert_eq!(normalize_text("plain"), "plain");
    }

    #[test]
    fn first_occurrence_wins() {
        let mut doc = MemoryDocument::new();
        doc.push_heading(HeadingLevel::H2, "Intro");
        doc.push_heading(HeadingLevel::H3, "Intro");
        doc.push_heading(HeadingLevel::H2, "Setup");
        let entries = run(&mut doc);
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["Intro", "Setup"]);
        // The surviving Intro is the first occurrence (ordinal 0).
        assert_eq!(entries[0].id, "overtoc-node-0");
    }

    #[test]
    fn rejects_short_text() {
        let mut doc = MemoryDocument::new();
        doc.push_heading(HeadingLevel::H2, "#");
        doc.push_heading(HeadingLevel::H2, " a ");
        doc.push_heading(HeadingLevel::H2, "ok");
        let entries = run(&mut doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "ok");
    }

    #[test]
    fn rejected_candidates_still_consume_ordinals() {
        let mut doc = MemoryDocument::new();
        doc.push_heading(HeadingLevel::H2, "x"); // rejected, ordinal 0
        doc.push_heading(HeadingLevel::H2, "Setup"); // ordinal 1
        let entries = run(&mut doc);
        assert_eq!(entries[0].id, "overtoc-node-1");
    }

    #[test]
    fn reuses_existing_id_without_writeback() {
        let mut doc = MemoryDocument::new();
        let node = doc.push_heading(HeadingLevel::H2, "Intro");
        doc.assign_id(node, "author-id");
        let entries = run(&mut doc);
        assert_eq!(entries[0].id, "author-id");
        assert_eq!(doc.id_of(node), Some("author-id"));
    }

    #[test]
    fn idempotent_on_unchanged_document() {
        let mut doc = MemoryDocument::new();
        doc.push_heading(HeadingLevel::H2, "Intro");
        doc.push_heading(HeadingLevel::H3, "Details");
        doc.push_heading(HeadingLevel::H2, "Wrap Up");
        let first = run(&mut doc);
        let second = run(&mut doc);
        assert_eq!(first, second);
    }

    #[test]
    fn id_survives_rerender_via_writeback() {
        let mut doc = MemoryDocument::new();
        let node = doc.push_heading(HeadingLevel::H2, "Intro");
        let first = run(&mut doc);
        // A later heading appears before it; the ordinal would differ, but
        // the element already carries the id from the first pass.
        doc.insert_heading(0, HeadingLevel::H2, "Prelude");
        let second = run(&mut doc);
        let intro = second.iter().find(|e| e.node == node).unwrap();
        assert_eq!(intro.id, first[0].id);
    }
}
