// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A renderer that records calls instead of drawing.
//!
//! [`Recorder`] is the test double for every drawing component in this crate, and is
//! also handy when debugging the exact call sequence a chart produces.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::Color;

use crate::bounds::Bounds;
use crate::defaults::Defaults;
use crate::measure::{FontFamily, HeuristicTextMeasurer, TextMeasurer};
use crate::path::PathCommand;
use crate::renderer::Renderer;

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// `set_fill_color`.
    SetFillColor(Color),
    /// `set_stroke_color`.
    SetStrokeColor(Color),
    /// `set_stroke_width`.
    SetStrokeWidth(f64),
    /// `set_stroke_dash_array`.
    SetStrokeDashArray(Vec<f64>),
    /// `set_font`.
    SetFont(Option<FontFamily>),
    /// `set_font_color`.
    SetFontColor(Color),
    /// `set_font_size`.
    SetFontSize(f64),
    /// `move_to`.
    MoveTo(i32, i32),
    /// `line_to`.
    LineTo(i32, i32),
    /// `close`.
    Close,
    /// `fill`.
    Fill,
    /// `stroke`.
    Stroke,
    /// `fill_stroke`.
    FillStroke,
    /// `measure_text`.
    MeasureText(String),
    /// `text`.
    Text {
        /// The drawn string.
        text: String,
        /// Anchor x.
        x: i32,
        /// Anchor y.
        y: i32,
    },
}

impl DrawCall {
    fn path_command(&self) -> Option<PathCommand> {
        match *self {
            Self::MoveTo(x, y) => Some(PathCommand::MoveTo(x, y)),
            Self::LineTo(x, y) => Some(PathCommand::LineTo(x, y)),
            Self::Close => Some(PathCommand::Close),
            _ => None,
        }
    }
}

/// How a recorded path was painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintOp {
    /// `fill`.
    Fill,
    /// `stroke`.
    Stroke,
    /// `fill_stroke`.
    FillStroke,
}

/// A path as it was handed to a paint operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintedPath {
    /// The paint operation that consumed the path.
    pub op: PaintOp,
    /// The path commands issued since the previous paint operation.
    pub commands: Vec<PathCommand>,
}

/// A [`Renderer`] that records every call.
///
/// Text is measured with a [`TextMeasurer`] using the most recently selected font
/// and size.
#[derive(Clone, Debug)]
pub struct Recorder<M = HeuristicTextMeasurer> {
    calls: Vec<DrawCall>,
    measurer: M,
    font: Option<FontFamily>,
    font_size: f64,
}

impl Recorder {
    /// Creates a recorder with the heuristic measurer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_measurer(HeuristicTextMeasurer)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> Recorder<M> {
    /// Creates a recorder that measures text with `measurer`.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            calls: Vec::new(),
            measurer,
            font: None,
            font_size: Defaults::default().font_size,
        }
    }

    /// All recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        core::mem::take(&mut self.calls)
    }

    /// Recorded `text` calls as `(text, x, y)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, i32, i32)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    /// Groups path commands by the paint operation that consumed them.
    ///
    /// Commands issued after the last paint operation are not included.
    #[must_use]
    pub fn painted_paths(&self) -> Vec<PaintedPath> {
        let mut out = Vec::new();
        let mut pending = Vec::new();
        for c in &self.calls {
            if let Some(cmd) = c.path_command() {
                pending.push(cmd);
                continue;
            }
            let op = match c {
                DrawCall::Fill => PaintOp::Fill,
                DrawCall::Stroke => PaintOp::Stroke,
                DrawCall::FillStroke => PaintOp::FillStroke,
                _ => continue,
            };
            out.push(PaintedPath {
                op,
                commands: core::mem::take(&mut pending),
            });
        }
        out
    }

    /// Number of recorded calls equal to `call`.
    #[must_use]
    pub fn count(&self, call: &DrawCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl<M: TextMeasurer> Renderer for Recorder<M> {
    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetStrokeColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetStrokeWidth(width));
    }

    fn set_stroke_dash_array(&mut self, dashes: &[f64]) {
        self.calls.push(DrawCall::SetStrokeDashArray(dashes.to_vec()));
    }

    fn set_font(&mut self, font: Option<&FontFamily>) {
        self.font = font.cloned();
        self.calls.push(DrawCall::SetFont(self.font.clone()));
    }

    fn set_font_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFontColor(color));
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.calls.push(DrawCall::SetFontSize(size));
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn close(&mut self) {
        self.calls.push(DrawCall::Close);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill_stroke(&mut self) {
        self.calls.push(DrawCall::FillStroke);
    }

    fn measure_text(&mut self, text: &str) -> Bounds {
        self.calls.push(DrawCall::MeasureText(text.to_string()));
        self.measurer
            .measure_bounds(text, self.font.as_ref(), self.font_size)
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn groups_paths_by_paint_op() {
        let mut r = Recorder::new();
        r.set_fill_color(Color::BLACK);
        r.move_to(0, 0);
        r.line_to(1, 1);
        r.fill();
        r.move_to(2, 2);
        r.stroke();
        r.move_to(9, 9);

        let paths = r.painted_paths();
        assert_eq!(paths.len(), 2, "trailing commands are not painted");
        assert_eq!(paths[0].op, PaintOp::Fill, "first op");
        assert_eq!(paths[0].commands.len(), 2, "two commands before fill");
        assert_eq!(
            paths[1].commands,
            alloc::vec![PathCommand::MoveTo(2, 2)],
            "second path"
        );
    }

    #[test]
    fn measures_with_current_font_size() {
        let mut r = Recorder::new();
        r.set_font_size(20.0);
        let b = r.measure_text("ab");
        assert_eq!(b, Bounds::new(0, 0, 24, 20), "0.6em * 2 glyphs at 20px");
        assert_eq!(
            r.calls().last(),
            Some(&DrawCall::MeasureText("ab".into())),
            "measurement is recorded"
        );
        assert_eq!(r.take_calls().len(), 2, "setter plus measurement");
        assert!(r.calls().is_empty(), "take_calls empties the log");
    }
}
