// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-space path assembly.
//!
//! Shapes are assembled into a [`Path`] first and then replayed onto a
//! [`Renderer`], which keeps geometry testable without a renderer and keeps the
//! command order in one place.

use alloc::vec::Vec;

use kurbo::BezPath;

use crate::renderer::Renderer;

/// One path construction command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(i32, i32),
    /// Straight segment to a point.
    LineTo(i32, i32),
    /// Close the current subpath.
    Close,
}

/// An ordered list of path commands in pixel space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An open polyline through `points`: a move to the first point, then a line to
    /// each following point. No points yield an empty path.
    pub fn polyline(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let mut p = Self::new();
        for (i, (x, y)) in points.into_iter().enumerate() {
            if i == 0 {
                p.move_to(x, y);
            } else {
                p.line_to(x, y);
            }
        }
        p
    }

    /// A closed polygon through `points`.
    pub fn polygon(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let mut p = Self::polyline(points);
        if !p.is_empty() {
            p.close();
        }
        p
    }

    /// Appends a move.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    /// Appends a line.
    pub fn line_to(&mut self, x: i32, y: i32) {
        self.commands.push(PathCommand::LineTo(x, y));
    }

    /// Appends a close.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// The commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The end point of the last move or line, if any.
    #[must_use]
    pub fn last_point(&self) -> Option<(i32, i32)> {
        self.commands.iter().rev().find_map(|c| match *c {
            PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => Some((x, y)),
            PathCommand::Close => None,
        })
    }

    /// Issues every command on `r`, in order.
    pub fn replay(&self, r: &mut dyn Renderer) {
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(x, y) => r.move_to(x, y),
                PathCommand::LineTo(x, y) => r.line_to(x, y),
                PathCommand::Close => r.close(),
            }
        }
    }

    /// Converts to a `kurbo` path in the same coordinate space.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(x, y) => p.move_to((f64::from(x), f64::from(y))),
                PathCommand::LineTo(x, y) => p.line_to((f64::from(x), f64::from(y))),
                PathCommand::Close => p.close_path(),
            }
        }
        p
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use kurbo::PathEl;

    use super::*;

    #[test]
    fn polyline_moves_then_lines() {
        let p = Path::polyline([(0, 0), (5, 5), (10, 0)]);
        assert_eq!(
            p.commands(),
            &[
                PathCommand::MoveTo(0, 0),
                PathCommand::LineTo(5, 5),
                PathCommand::LineTo(10, 0),
            ],
            "first point is a move"
        );
        assert_eq!(p.last_point(), Some((10, 0)), "last point");
    }

    #[test]
    fn polygon_closes_and_empty_stays_empty() {
        let p = Path::polygon([(0, 0), (1, 0), (1, 1)]);
        assert_eq!(p.commands().last(), Some(&PathCommand::Close), "closed");
        assert_eq!(p.last_point(), Some((1, 1)), "close has no point");
        assert!(Path::polygon(core::iter::empty()).is_empty(), "no points, no close");
    }

    #[test]
    fn converts_to_bez_path() {
        let p = Path::polygon([(0, 0), (4, 0)]);
        let els: Vec<PathEl> = p.to_bez_path().elements().to_vec();
        assert_eq!(els.len(), 3, "move, line, close");
        assert!(matches!(els[2], PathEl::ClosePath), "ends with close");
    }
}
