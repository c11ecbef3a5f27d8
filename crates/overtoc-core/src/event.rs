#![forbid(unsafe_code)]

//! Pointer input as the panel sees it.
//!
//! The panel only consumes mouse-style pointer input on its header region;
//! the shell is responsible for hit-testing the raw host event and reporting
//! where the pointer landed via [`PointerTarget`].
//!
//! # Design Notes
//!
//! - Coordinates are viewport pixels (see [`crate::geometry`]).
//! - Pointer-down on an actionable control inside the header must not start
//!   a drag; the shell reports that as [`PointerTarget::HeaderControl`].
//! - Move and up events are global: once a drag is active, the controller
//!   tracks the pointer wherever it goes, so their `target` is informational.

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// What kind of pointer transition occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved (with or without a button held).
    Move,
    /// Primary button released.
    Up,
}

/// Where the pointer-down landed, as hit-tested by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The draggable header region.
    Header,
    /// An actionable control inside the header (toggle, refresh). Never
    /// starts a drag.
    HeaderControl,
    /// Anywhere else.
    Outside,
}

/// A pointer event delivered to the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The transition kind.
    pub kind: PointerKind,
    /// Pointer position in viewport coordinates.
    pub pos: Point,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Hit-test result for this event.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers, targeting `Outside`.
    #[must_use]
    pub const fn new(kind: PointerKind, pos: Point) -> Self {
        Self {
            kind,
            pos,
            modifiers: Modifiers::NONE,
            target: PointerTarget::Outside,
        }
    }

    /// Set the hit-test target.
    #[must_use]
    pub const fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convenience: a pointer-down on the header at `pos`.
    #[must_use]
    pub const fn header_down(pos: Point) -> Self {
        Self::new(PointerKind::Down, pos).with_target(PointerTarget::Header)
    }

    /// Convenience: a pointer-move at `pos`.
    #[must_use]
    pub const fn moved(pos: Point) -> Self {
        Self::new(PointerKind::Move, pos)
    }

    /// Convenience: a pointer-up at `pos`.
    #[must_use]
    pub const fn released(pos: Point) -> Self {
        Self::new(PointerKind::Up, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_fields() {
        let ev = PointerEvent::new(PointerKind::Down, Point::new(5.0, 6.0))
            .with_target(PointerTarget::Header)
            .with_modifiers(Modifiers::SHIFT);
        assert_eq!(ev.kind, PointerKind::Down);
        assert_eq!(ev.target, PointerTarget::Header);
        assert!(ev.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn default_target_is_outside() {
        let ev = PointerEvent::moved(Point::default());
        assert_eq!(ev.target, PointerTarget::Outside);
    }
}
