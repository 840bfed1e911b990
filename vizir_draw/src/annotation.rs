// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotation callouts.
//!
//! A callout is a label in a box with a pointer on its left side. The pointer tip
//! sits on the annotated point (the "lead" point); the box extends to the right of
//! it and is vertically centered on it:
//!
//! ```text
//!        +--------------+
//!       /   label       |
//!  tip <                |
//!       \               |
//!        +--------------+
//! ```
//!
//! [`measure_annotation`] and [`draw_annotation`] share [`CalloutGeometry`], so the
//! measured box always matches what gets drawn for the same inputs.

use alloc::string::String;

use crate::bounds::{Bounds, Insets};
use crate::defaults::Defaults;
use crate::float;
use crate::path::Path;
use crate::renderer::{Renderable, Renderer};
use crate::style::Style;

/// Pixel geometry of one callout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalloutGeometry {
    /// The pointer tip (the lead point).
    pub tip: (i32, i32),
    /// The label box, excluding the pointer.
    pub body: Bounds,
    /// Everything the callout covers: pointer, body and stroke overhang.
    pub bounds: Bounds,
    /// Where the label is drawn.
    pub label_anchor: (i32, i32),
}

impl CalloutGeometry {
    /// Computes the callout for a lead point and a measured label box.
    ///
    /// Half the text height is rounded down; the stroke width is rounded up and
    /// only widens `bounds`, not `body`.
    #[must_use]
    pub fn compute(
        lead_x: i32,
        lead_y: i32,
        text: Bounds,
        padding: Insets,
        delta_width: i32,
        stroke_width: f64,
    ) -> Self {
        let half_text_height = text.height() >> 1;
        let top = lead_y.saturating_sub(padding.top + half_text_height);
        let bottom = lead_y.saturating_add(padding.bottom + half_text_height);
        let body_left = lead_x.saturating_add(delta_width);
        let body_right =
            body_left.saturating_add(padding.left + padding.right + text.width());
        let right = body_right.saturating_add(float::ceil_px(stroke_width));

        Self {
            tip: (lead_x, lead_y),
            body: Bounds::new(top, body_left, body_right, bottom),
            bounds: Bounds::new(top, lead_x, right, bottom),
            label_anchor: (
                body_left.saturating_add(padding.left),
                lead_y.saturating_add(half_text_height),
            ),
        }
    }

    /// The closed outline: tip, body corners clockwise from top-left, tip.
    #[must_use]
    pub fn outline(&self) -> Path {
        let b = self.body;
        Path::polygon([
            self.tip,
            (b.left, b.top),
            (b.right, b.top),
            (b.right, b.bottom),
            (b.left, b.bottom),
            self.tip,
        ])
    }
}

fn callout_geometry(
    r: &mut dyn Renderer,
    style: &Style,
    lead_x: i32,
    lead_y: i32,
    label: &str,
    defaults: &Defaults,
) -> CalloutGeometry {
    let text = r.measure_text(label);
    CalloutGeometry::compute(
        lead_x,
        lead_y,
        text,
        style.padding.resolve(defaults.annotation_padding),
        defaults.annotation_delta_width,
        style.stroke_width_or(defaults.stroke_width),
    )
}

fn apply_font(r: &mut dyn Renderer, style: &Style, defaults: &Defaults) {
    r.set_font(style.font());
    r.set_font_color(style.font_color_or(defaults.text_color));
    r.set_font_size(style.font_size_or(defaults.annotation_font_size));
}

/// Returns the box a callout for `label` at `(lead_x, lead_y)` would cover.
///
/// The only renderer calls are the style setters needed for measurement and the
/// measurement itself.
pub fn measure_annotation(
    r: &mut dyn Renderer,
    _canvas: Bounds,
    style: &Style,
    lead_x: i32,
    lead_y: i32,
    label: &str,
    defaults: &Defaults,
) -> Bounds {
    r.set_fill_color(style.fill_color_or(defaults.annotation_fill_color));
    r.set_stroke_color(style.stroke_color());
    r.set_stroke_width(style.stroke_width_or(defaults.stroke_width));
    apply_font(r, style, defaults);

    callout_geometry(r, style, lead_x, lead_y, label, defaults).bounds
}

/// Draws a callout for `label` with its pointer tip at `(lead_x, lead_y)`.
pub fn draw_annotation(
    r: &mut dyn Renderer,
    _canvas: Bounds,
    style: &Style,
    lead_x: i32,
    lead_y: i32,
    label: &str,
    defaults: &Defaults,
) {
    r.set_fill_color(style.fill_color_or(defaults.annotation_fill_color));
    r.set_stroke_color(style.stroke_color());
    r.set_stroke_width(style.stroke_width_or(defaults.stroke_width));
    r.set_stroke_dash_array(style.stroke_dash_array());
    apply_font(r, style, defaults);

    let geometry = callout_geometry(r, style, lead_x, lead_y, label, defaults);
    geometry.outline().replay(r);
    r.fill_stroke();

    let (tx, ty) = geometry.label_anchor;
    r.text(label, tx, ty);
}

/// A standalone callout positioned relative to the canvas top-left corner.
#[derive(Clone, Debug, Default)]
pub struct Callout {
    /// Tip x offset from `canvas.left`.
    pub x: i32,
    /// Tip y offset from `canvas.top`.
    pub y: i32,
    /// Label text.
    pub label: String,
    /// Callout style; unset attributes come from the caller's default style.
    pub style: Style,
    /// Fallback constants.
    pub defaults: Defaults,
}

impl Callout {
    /// Creates a callout with default styling.
    pub fn new(x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            style: Style::default(),
            defaults: Defaults::default(),
        }
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the fallback constants.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The box this callout covers inside `canvas`.
    pub fn measure(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style) -> Bounds {
        let style = self.style.with_defaults_from(defaults);
        measure_annotation(
            r,
            canvas,
            &style,
            canvas.left + self.x,
            canvas.top + self.y,
            &self.label,
            &self.defaults,
        )
    }
}

impl Renderable for Callout {
    fn draw(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style) {
        let style = self.style.with_defaults_from(defaults);
        draw_annotation(
            r,
            canvas,
            &style,
            canvas.left + self.x,
            canvas.top + self.y,
            &self.label,
            &self.defaults,
        );
    }
}
