#![forbid(unsafe_code)]

//! Projection of the outline model into the shell's content region.
//!
//! The renderer owns no pixels: it produces an [`OutlineView`] that the
//! visual shell draws into its content region, replacing whatever was there.
//! There are exactly two rendering branches: one row per entry in model
//! order, or a single placeholder message when the outline is empty.

use overtoc_core::document::{HeadingLevel, HostDocument};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::model::OutlineModel;

/// One visual row of the rendered outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    /// The entry's stable id (the click target payload).
    pub id: String,
    /// Display text, truncated grapheme-safe to the configured width.
    pub text: String,
    /// Level, for per-level styling.
    pub level: HeadingLevel,
    /// Whether this row carries the active highlight.
    pub active: bool,
}

/// What the shell should display in its content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineView {
    /// The outline is empty; show a single placeholder message.
    Placeholder(String),
    /// One row per entry, in model order.
    Rows(Vec<OutlineRow>),
}

/// Truncate `text` to at most `max_width` display columns, grapheme-safe,
/// appending an ellipsis when anything was cut.
#[must_use]
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    let budget = max_width.saturating_sub(1); // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Project the model into a view.
#[must_use]
pub fn project(model: &OutlineModel, max_text_width: usize, placeholder: &str) -> OutlineView {
    if model.is_empty() {
        return OutlineView::Placeholder(placeholder.to_owned());
    }
    let rows = model
        .entries()
        .iter()
        .map(|entry| OutlineRow {
            id: entry.id.clone(),
            text: truncate_to_width(&entry.text, max_text_width),
            level: entry.level,
            active: model.active_id() == Some(entry.id.as_str()),
        })
        .collect();
    OutlineView::Rows(rows)
}

/// Handle a click on row `index`: mark it active and ask the document to
/// scroll the heading into view. Returns `true` if the view needs
/// re-projection (always, for a valid index); out-of-range is a no-op.
pub fn activate(model: &mut OutlineModel, doc: &mut dyn HostDocument, index: usize) -> bool {
    let Some(entry) = model.entry(index) else {
        return false;
    };
    let id = entry.id.clone();
    model.set_active(&id);
    doc.scroll_into_view(&id);
    true
}
