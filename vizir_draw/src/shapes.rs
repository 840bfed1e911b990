// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles.

use crate::bounds::{Bounds, Insets};
use crate::defaults::Defaults;
use crate::path::Path;
use crate::renderer::{Renderable, Renderer};
use crate::style::Style;

/// The outline of `b`, clockwise from the top-left corner and back to it.
#[must_use]
pub fn box_path(b: Bounds) -> Path {
    Path::polyline([
        (b.left, b.top),
        (b.right, b.top),
        (b.right, b.bottom),
        (b.left, b.bottom),
        (b.left, b.top),
    ])
}

/// Draws `b` with a combined fill and stroke.
///
/// An unset fill color fills with transparent paint; stroke color and width fall
/// back to `defaults`.
pub fn draw_box(r: &mut dyn Renderer, b: Bounds, style: &Style, defaults: &Defaults) {
    r.set_fill_color(style.fill_color());
    r.set_stroke_color(style.stroke_color_or(defaults.stroke_color));
    r.set_stroke_width(style.stroke_width_or(defaults.stroke_width));
    r.set_stroke_dash_array(style.stroke_dash_array());

    box_path(b).replay(r);
    r.fill_stroke();
}

/// A box covering the canvas, inset by its style's padding.
///
/// Useful as a plot background or frame.
#[derive(Clone, Debug, Default)]
pub struct BoxShape {
    /// Box style; unset attributes come from the caller's default style.
    pub style: Style,
    /// Fallback constants.
    pub defaults: Defaults,
}

impl BoxShape {
    /// Creates a box renderable with the given style.
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            style,
            defaults: Defaults::default(),
        }
    }

    /// Sets the fallback constants.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The box drawn for `canvas`.
    #[must_use]
    pub fn bounds(&self, canvas: Bounds, defaults: &Style) -> Bounds {
        let padding = self
            .style
            .padding
            .with_defaults_from(&defaults.padding)
            .resolve(Insets::default());
        canvas.inset(padding)
    }
}

impl Renderable for BoxShape {
    fn draw(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style) {
        let style = self.style.with_defaults_from(defaults);
        draw_box(r, self.bounds(canvas, defaults), &style, &self.defaults);
    }
}
