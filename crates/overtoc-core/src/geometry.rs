#![forbid(unsafe_code)]

//! Pixel-space geometric primitives.
//!
//! The host is pixel-addressed, so everything here is `f32` pixels with
//! origin at the viewport's top-left. Only the operations the snap and clamp
//! rules actually need are provided.

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the viewport's left edge.
    pub x: f32,
    /// Vertical offset from the viewport's top edge.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    #[must_use]
    pub fn delta(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise sum `self + other`.
    #[inline]
    #[must_use]
    pub fn offset(&self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The visible viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal midpoint, the snap decision boundary.
    #[inline]
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// The panel's measured rectangle at a given instant.
///
/// Measured by the shell, consumed by the position controller. `left`/`top`
/// are viewport coordinates of the panel's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelFrame {
    /// Left edge in viewport coordinates.
    pub left: f32,
    /// Top edge in viewport coordinates.
    pub top: f32,
    /// Measured size.
    pub size: Size,
}

impl PanelFrame {
    /// Create a new frame.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, size: Size) -> Self {
        Self { left, top, size }
    }

    /// Top-left corner as a point.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Horizontal center for a frame whose left edge is at `left`.
    ///
    /// Snap resolution evaluates the center at the drag-release coordinate,
    /// not at the frame's current `left`, hence the explicit argument.
    #[inline]
    #[must_use]
    pub fn center_x_at(&self, left: f32) -> f32 {
        left + self.size.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_delta_and_offset_are_inverse() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, 7.0);
        assert_eq!(b.offset(a.delta(b)), a);
    }

    #[test]
    fn center_x_uses_supplied_left() {
        let frame = PanelFrame::new(500.0, 0.0, Size::new(240.0, 400.0));
        assert_eq!(frame.center_x_at(100.0), 220.0);
    }

    #[test]
    fn viewport_midpoint() {
        assert_eq!(Viewport::new(1920.0, 1080.0).mid_x(), 960.0);
    }
}
