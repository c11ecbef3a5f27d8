#![forbid(unsafe_code)]

//! The drag/snap position controller.
//!
//! Owns the pointer-drag state machine, edge-snap resolution, resize-driven
//! re-clamping, and geometry persistence. It never touches the outline: the
//! two subsystems are fully independent.
//!
//! # State Machine
//!
//! `Idle -> Dragging` on pointer-down inside the header region, unless the
//! pointer-down landed on an actionable control (that case is ignored).
//! While dragging, every pointer-move yields a free placement at
//! `origin + (current - start)`, which also forces the panel out of
//! right-anchored mode. Pointer-up returns to `Idle` and resolves the snap.
//! A stray pointer-up with no active session is a no-op.
//!
//! # Invariants
//!
//! 1. Snap always resolves to exactly `Left` or `Right`, never unresolved:
//!    `Left` iff the panel's horizontal center at release is left of the
//!    viewport midpoint.
//! 2. The vertical coordinate is never snapped; it stays where the drag
//!    ended.
//! 3. `{side, top}` is merged into the persisted record and written
//!    synchronously on drag-release; `collapsed` is untouched by that path.
//! 4. After any resize event, the panel top never exceeds
//!    `viewport.height - BOTTOM_MARGIN`.

use overtoc_core::event::{PointerEvent, PointerKind, PointerTarget};
use overtoc_core::geometry::{PanelFrame, Point, Viewport};

use crate::store::{GeometryStore, PositionRecord, Side, StringStore};

/// Horizontal inset from the snapped edge, in pixels.
pub const EDGE_INSET: f32 = 20.0;

/// Minimum distance the panel top must keep from the viewport bottom.
pub const BOTTOM_MARGIN: f32 = 100.0;

/// An instruction for the shell to reposition the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Absolute position during an active drag. Right-anchoring is released
    /// for the duration.
    Free {
        /// Left edge in viewport coordinates.
        left: f32,
        /// Top edge in viewport coordinates.
        top: f32,
    },
    /// Post-drag resolution: anchor to `side` at `inset` pixels from that
    /// edge, keep `top`. `animate` asks the shell for its transition class.
    Snapped {
        /// The resolved edge.
        side: Side,
        /// Horizontal inset from the snapped edge (always [`EDGE_INSET`]).
        inset: f32,
        /// Top edge in viewport coordinates.
        top: f32,
        /// Whether the move should animate.
        animate: bool,
    },
    /// Resize reconciliation: clamp the top, leave the anchor alone.
    ClampedTop {
        /// The corrected top edge.
        top: f32,
    },
}

/// Geometry restored from the store at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoredGeometry {
    /// Anchored side (defaults to right when absent or malformed).
    pub side: Side,
    /// Restored top, when present and parseable.
    pub top: Option<f32>,
    /// Whether the panel mounts collapsed.
    pub collapsed: bool,
}

/// Ephemeral drag session; exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer position at drag start.
    start: Point,
    /// Panel top-left at drag start.
    origin: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging(DragSession),
}

/// Pointer-drag tracking, snap resolution, and geometry persistence.
#[derive(Debug)]
pub struct PositionController<S> {
    store: GeometryStore<S>,
    record: PositionRecord,
    state: DragState,
}

impl<S: StringStore> PositionController<S> {
    /// Create a controller over the given backend. The record is not read
    /// until [`restore`](Self::restore).
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self {
            store: GeometryStore::new(backend),
            record: PositionRecord::default(),
            state: DragState::Idle,
        }
    }

    /// Read the persisted record (once, at mount) and report the geometry to
    /// apply. Malformed data degrades to defaults.
    pub fn restore(&mut self) -> RestoredGeometry {
        self.record = self.store.load();
        let restored = RestoredGeometry {
            side: self.record.side,
            top: self.record.top_px(),
            collapsed: self.record.collapsed,
        };
        tracing::debug!(?restored.side, restored.collapsed, "geometry restored");
        restored
    }

    /// True while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Current collapsed state.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.record.collapsed
    }

    /// Feed a pointer event. `frame` is the panel's measured rectangle at
    /// event time; `viewport` the current viewport.
    pub fn pointer(
        &mut self,
        event: &PointerEvent,
        frame: &PanelFrame,
        viewport: &Viewport,
    ) -> Option<Placement> {
        match (event.kind, self.state) {
            (PointerKind::Down, DragState::Idle) => {
                if event.target != PointerTarget::Header {
                    return None;
                }
                self.state = DragState::Dragging(DragSession {
                    start: event.pos,
                    origin: frame.origin(),
                });
                None
            }
            (PointerKind::Move, DragState::Dragging(session)) => {
                let pos = session.origin.offset(event.pos.delta(session.start));
                tracing::trace!(left = pos.x, top = pos.y, "drag move");
                Some(Placement::Free {
                    left: pos.x,
                    top: pos.y,
                })
            }
            (PointerKind::Up, DragState::Dragging(session)) => {
                self.state = DragState::Idle;
                Some(self.snap(&session, event.pos, frame, viewport))
            }
            // Stray up with no session, move without drag, down mid-drag.
            _ => None,
        }
    }

    /// Resolve the snap at drag-release and persist `{side, top}`.
    fn snap(
        &mut self,
        session: &DragSession,
        release: Point,
        frame: &PanelFrame,
        viewport: &Viewport,
    ) -> Placement {
        let end = session.origin.offset(release.delta(session.start));
        let center_x = frame.center_x_at(end.x);
        let side = if center_x < viewport.mid_x() {
            Side::Left
        } else {
            Side::Right
        };

        self.record.side = side;
        self.record.top = Some(PositionRecord::format_px(end.y));
        self.store.save(&self.record);
        tracing::debug!(?side, top = end.y, "snap resolved");

        Placement::Snapped {
            side,
            inset: EDGE_INSET,
            top: end.y,
            animate: true,
        }
    }

    /// Resize reconciliation: keep the panel top at least [`BOTTOM_MARGIN`]
    /// above the viewport bottom. Standalone rule, independent of drag
    /// state, evaluated on every resize event with no debounce. Not
    /// persisted.
    pub fn on_resize(&self, viewport: &Viewport, frame: &PanelFrame) -> Option<Placement> {
        let limit = viewport.height - BOTTOM_MARGIN;
        if frame.top > limit {
            Some(Placement::ClampedTop { top: limit })
        } else {
            None
        }
    }

    /// Flip the collapsed state and persist it. `side`/`top` are untouched.
    /// Returns the new state.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.record.collapsed = !self.record.collapsed;
        self.store.save(&self.record);
        self.record.collapsed
    }

    /// The persistence backend, for assertions.
    #[must_use]
    pub fn backend(&self) -> &S {
        self.store.backend()
    }
}
