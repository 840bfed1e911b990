// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text drawing.

use crate::defaults::Defaults;
use crate::renderer::Renderer;
use crate::style::Style;

fn apply_text_style(r: &mut dyn Renderer, style: &Style, defaults: &Defaults) {
    r.set_font_color(style.font_color_or(defaults.text_color));
    r.set_stroke_color(style.stroke_color());
    r.set_stroke_width(style.stroke_width_or(defaults.stroke_width));
    r.set_font(style.font());
    r.set_font_size(style.font_size_or(defaults.font_size));
}

/// Draws `text` with its anchor at `(x, y)`.
pub fn draw_text(
    r: &mut dyn Renderer,
    text: &str,
    x: i32,
    y: i32,
    style: &Style,
    defaults: &Defaults,
) {
    apply_text_style(r, style, defaults);
    r.text(text, x, y);
}

/// Draws `text` centered on `(x, y)`.
///
/// The text is measured with the resolved style and shifted left and up by half
/// its measured width and height.
pub fn draw_text_centered(
    r: &mut dyn Renderer,
    text: &str,
    x: i32,
    y: i32,
    style: &Style,
    defaults: &Defaults,
) {
    apply_text_style(r, style, defaults);
    let tb = r.measure_text(text);
    r.text(text, x - (tb.width() >> 1), y - (tb.height() >> 1));
}
