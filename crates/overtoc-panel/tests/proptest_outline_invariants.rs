//! Property-based invariant tests for heading extraction.
//!
//! These verify the structural invariants that must hold for any document:
//!
//! 1. Extraction is idempotent on an unchanged document (same ids, order).
//! 2. Normalized texts in the output are unique (first occurrence wins).
//! 3. Output preserves document order of first occurrence.
//! 4. Every output text is normalized: no leading hashes, trimmed, len >= 2.
//! 5. Ids are stable across an unrelated prepend (write-back recovery).

use overtoc_core::document::{HeadingLevel, SelectorSet};
use overtoc_core::memory::MemoryDocument;
use overtoc_panel::extract::{DEFAULT_ID_PREFIX, extract, normalize_text};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn heading_text() -> impl Strategy<Value = String> {
    // Mix of markup noise, duplicates-prone short words, and real titles.
    prop_oneof![
        3 => "[A-Za-z][A-Za-z ]{1,20}",
        1 => "#{1,3} [A-Za-z]{2,10}",
        1 => " {0,2}[A-Za-z]{0,3} {0,2}",
        1 => Just("Intro".to_owned()),
    ]
}

fn headings() -> impl Strategy<Value = Vec<(bool, String)>> {
    proptest::collection::vec((any::<bool>(), heading_text()), 0..30)
}

fn build_doc(blueprint: &[(bool, String)]) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    for (is_h2, text) in blueprint {
        let level = if *is_h2 {
            HeadingLevel::H2
        } else {
            HeadingLevel::H3
        };
        doc.push_heading(level, text);
    }
    doc
}

fn run(doc: &mut MemoryDocument) -> Vec<overtoc_panel::HeadingEntry> {
    extract(doc, &SelectorSet::default(), DEFAULT_ID_PREFIX)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn extraction_is_idempotent(blueprint in headings()) {
        let mut doc = build_doc(&blueprint);
        let first = run(&mut doc);
        let second = run(&mut doc);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn texts_are_unique(blueprint in headings()) {
        let mut doc = build_doc(&blueprint);
        let entries = run(&mut doc);
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            prop_assert!(seen.insert(entry.text.clone()), "duplicate: {}", entry.text);
        }
    }

    #[test]
    fn document_order_is_preserved(blueprint in headings()) {
        let mut doc = build_doc(&blueprint);
        let entries = run(&mut doc);

        // The output must be the subsequence of first occurrences.
        let mut expected = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for (_, raw) in &blueprint {
            let text = normalize_text(raw);
            if text.chars().count() >= 2 && seen.insert(text.clone()) {
                expected.push(text);
            }
        }
        let actual: Vec<_> = entries.iter().map(|e| e.text.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn texts_are_normalized(blueprint in headings()) {
        let mut doc = build_doc(&blueprint);
        for entry in run(&mut doc) {
            prop_assert!(!entry.text.starts_with('#'));
            prop_assert_eq!(entry.text.trim(), entry.text.as_str());
            prop_assert!(entry.text.chars().count() >= 2);
        }
    }

    #[test]
    fn ids_survive_prepend(blueprint in headings()) {
        let mut doc = build_doc(&blueprint);
        let before = run(&mut doc);
        doc.insert_heading(0, HeadingLevel::H2, "Entirely Fresh Prelude");
        let after = run(&mut doc);
        for entry in &before {
            if let Some(found) = after.iter().find(|e| e.node == entry.node) {
                prop_assert_eq!(&found.id, &entry.id);
            }
        }
    }
}
