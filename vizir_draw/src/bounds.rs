// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel rectangles.

use kurbo::Rect;

/// An axis-aligned rectangle in pixel space.
///
/// Edges are stored the way drawing code consumes them: `top`/`bottom` on the
/// (downward) y axis and `left`/`right` on the x axis. Well-formed bounds keep
/// `top <= bottom` and `left <= right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top edge.
    pub top: i32,
    /// Left edge.
    pub left: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Bounds {
    /// Creates bounds from its four edges.
    #[must_use]
    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Creates zero-size bounds at `(x, y)`.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self::new(y, x, x, y)
    }

    /// Returns `right - left`.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Returns `bottom - top`.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns `true` if every edge is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.left == 0 && self.right == 0 && self.bottom == 0
    }

    /// Returns the center point, rounded toward the top-left.
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (
            self.left + (self.width() >> 1),
            self.top + (self.height() >> 1),
        )
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn grow(&self, other: &Self) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Shrinks the bounds by the given insets.
    ///
    /// Insets larger than the bounds collapse it to zero width or height instead of
    /// inverting edges.
    #[must_use]
    pub fn inset(&self, insets: Insets) -> Self {
        let left = (self.left + insets.left).min(self.right);
        let right = (self.right - insets.right).max(left);
        let top = (self.top + insets.top).min(self.bottom);
        let bottom = (self.bottom - insets.bottom).max(top);
        Self::new(top, left, right, bottom)
    }

    /// Converts to a `kurbo` rectangle in the same coordinate space.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

impl From<Bounds> for Rect {
    fn from(value: Bounds) -> Self {
        value.to_rect()
    }
}

/// Resolved per-side spacing in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    /// Space above.
    pub top: i32,
    /// Space to the left.
    pub left: i32,
    /// Space to the right.
    pub right: i32,
    /// Space below.
    pub bottom: i32,
}

impl Insets {
    /// Creates insets from the four sides.
    #[must_use]
    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// The same inset on every side.
    #[must_use]
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn grow_contains_both() {
        let a = Bounds::new(10, 10, 20, 20);
        let b = Bounds::new(5, 15, 30, 18);
        let g = a.grow(&b);
        assert_eq!(g, Bounds::new(5, 10, 30, 20), "grow is a union");
        assert!(g.top <= g.bottom && g.left <= g.right, "grow keeps edges ordered");
        assert_eq!(a.grow(&a), a, "growing by itself is a no-op");
    }

    #[test]
    fn grow_from_anchor_takes_content_extent() {
        let anchor = Bounds::at(3, 4);
        let content = Bounds::new(9, 8, 58, 73);
        let g = anchor.grow(&content);
        assert_eq!(g, Bounds::new(4, 3, 58, 73), "anchor keeps the top-left");
    }

    #[test]
    fn width_height_center() {
        let b = Bounds::new(0, 0, 100, 50);
        assert_eq!(b.width(), 100, "width");
        assert_eq!(b.height(), 50, "height");
        assert_eq!(b.center(), (50, 25), "center");
        assert!(Bounds::default().is_zero(), "default is zero");
        assert!(!b.is_zero(), "non-zero edges");
    }

    #[test]
    fn inset_never_inverts() {
        let b = Bounds::new(0, 0, 100, 50);
        assert_eq!(
            b.inset(Insets::uniform(5)),
            Bounds::new(5, 5, 95, 45),
            "plain inset"
        );
        let collapsed = b.inset(Insets::uniform(80));
        assert!(collapsed.left <= collapsed.right, "x edges stay ordered");
        assert!(collapsed.top <= collapsed.bottom, "y edges stay ordered");
    }

    #[test]
    fn converts_to_kurbo() {
        let r: Rect = Bounds::new(1, 2, 30, 40).into();
        assert_eq!(r, Rect::new(2.0, 1.0, 30.0, 40.0), "x0/y0 come from left/top");
    }
}
