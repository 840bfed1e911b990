// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface abstraction.
//!
//! A [`Renderer`] is a stateful 2D surface: setters change the current paint/font,
//! path commands extend the current path, and `fill`/`stroke`/`fill_stroke` paint it.
//! Call order matters, so drawing code always issues style setters before path
//! commands, and path commands before the paint operation.

use peniko::Color;

use crate::bounds::Bounds;
use crate::measure::FontFamily;
use crate::style::Style;

/// A 2D drawing surface in integer pixel coordinates.
///
/// Implementations own all rasterization and font handling. One renderer must not
/// be shared between concurrent draw calls; use one instance per chart.
pub trait Renderer {
    /// Sets the paint used by `fill` and `fill_stroke`.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the paint used by `stroke` and `fill_stroke`.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke width in pixels.
    fn set_stroke_width(&mut self, width: f64);

    /// Sets the dash pattern. An empty pattern draws solid lines.
    fn set_stroke_dash_array(&mut self, dashes: &[f64]);

    /// Selects a font family; `None` selects the backend's default.
    fn set_font(&mut self, font: Option<&FontFamily>);

    /// Sets the text paint.
    fn set_font_color(&mut self, color: Color);

    /// Sets the font size in pixels.
    fn set_font_size(&mut self, size: f64);

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: i32, y: i32);

    /// Adds a straight segment to `(x, y)`.
    fn line_to(&mut self, x: i32, y: i32);

    /// Closes the current subpath.
    fn close(&mut self);

    /// Fills the current path and starts a new one.
    fn fill(&mut self);

    /// Strokes the current path and starts a new one.
    fn stroke(&mut self);

    /// Fills, then strokes, the current path and starts a new one.
    fn fill_stroke(&mut self);

    /// Measures `text` with the current font settings.
    ///
    /// The result is anchored at the origin; only its width and height matter.
    fn measure_text(&mut self, text: &str) -> Bounds;

    /// Draws `text` with its baseline origin at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32);
}

/// A deferred drawing action bound to a canvas region.
///
/// Charts sequence heterogeneous elements (series, callouts, boxes, legends) through
/// this trait without knowing their concrete kind. Implementations hold whatever
/// they draw from as plain fields.
pub trait Renderable {
    /// Draws into `canvas`, using `defaults` for any attribute the element's own
    /// style leaves unset.
    fn draw(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style);
}
