#![forbid(unsafe_code)]

//! Outline synchronization and drag/snap positioning for a floating
//! table-of-contents panel.
//!
//! The panel overlays a long-form, dynamically rendered document (a streaming
//! chat transcript, typically) and keeps a deduplicated, ordered outline of
//! its section headings while the document mutates underneath it. Two
//! subsystems carry the real design weight:
//!
//! - **Outline synchronization** ([`extract`], [`detect`], [`model`],
//!   [`render`]): heading discovery, normalization, dedup, and debounced
//!   incremental re-synchronization against a tree mutated by an external,
//!   uncontrolled process.
//! - **Drag/snap positioning** ([`position`], [`store`]): the pointer-drag
//!   state machine, edge-snap resolution, resize re-clamping, and persisted
//!   geometry.
//!
//! [`panel::TocPanel`] ties them together as one explicit state object; the
//! host document, visual shell, and key-value store stay behind the contracts
//! in `overtoc-core`.
//!
//! Every failure mode here degrades to "do nothing" or "show the empty
//! state": the panel runs as an unprivileged passive overlay and must never
//! break the host page.

pub mod detect;
pub mod extract;
pub mod model;
pub mod panel;
pub mod position;
pub mod render;
pub mod store;

pub use detect::{ChangeDetector, ChangePolicy, Resync};
pub use model::{HeadingEntry, OutlineModel};
pub use panel::{PanelConfig, TocPanel};
pub use position::{Placement, PositionController, RestoredGeometry};
pub use render::{OutlineRow, OutlineView};
pub use store::{FileStore, GeometryStore, MemoryStore, PositionRecord, Side, StringStore};
