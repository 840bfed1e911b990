// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series legends.
//!
//! A legend is a framed list of rows, one per visible series. Each row shows the
//! series name followed by a short sample line drawn in the series' own stroke
//! style:
//!
//! ```text
//! +-----------------------+
//! | Revenue  ------------ |
//! | Cost     - - - - - -  |
//! +-----------------------+
//! ```
//!
//! Layout is measurement driven: [`Legend::layout`] measures every label to size
//! the frame, and drawing reuses those measurements to place the rows.

use alloc::vec::Vec;

use crate::bounds::Bounds;
use crate::defaults::Defaults;
use crate::log;
use crate::renderer::{Renderable, Renderer};
use crate::series::{Series, SeriesKind};
use crate::shapes::draw_box;
use crate::style::Style;

/// One measured legend row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow<'a> {
    /// The series name.
    pub label: &'a str,
    /// The measured label size, anchored at the origin.
    pub text: Bounds,
    /// The series' own style, used for the sample line.
    pub style: &'a Style,
}

/// The result of measuring a legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout<'a> {
    /// The frame.
    pub outer: Bounds,
    /// The measured content region: labels plus sample line room.
    pub content: Bounds,
    /// Rows in series order. Series with empty names have no row.
    pub rows: Vec<LegendRow<'a>>,
}

/// A legend for a list of series.
///
/// Line series are listed when their style is zero or has `show` set. Annotation
/// series are never listed.
#[derive(Clone, Debug)]
pub struct Legend<'a> {
    /// Candidate series, in display order.
    pub series: &'a [Series],
    /// Legend frame and label style.
    pub style: Style,
    /// Fallback constants.
    pub defaults: Defaults,
}

impl<'a> Legend<'a> {
    /// Creates an unstyled legend.
    #[must_use]
    pub fn new(series: &'a [Series]) -> Self {
        Self {
            series,
            style: Style::default(),
            defaults: Defaults::default(),
        }
    }

    /// Sets the legend style.
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

    /// The legend style merged over `defaults_style` and the built-in legend look.
    #[must_use]
    pub fn working_style(&self, defaults_style: &Style) -> Style {
        let d = &self.defaults;
        let builtin = Style::default()
            .with_fill_color(d.legend.fill_color)
            .with_font_color(d.text_color)
            .with_font_size(d.legend.font_size)
            .with_stroke_color(d.axis_color)
            .with_stroke_width(d.axis_line_width);
        Style::resolve(&self.style, defaults_style, &builtin)
    }

    /// Series that get a legend row, in order.
    pub fn entries(&self) -> impl Iterator<Item = &'a Series> + 'a {
        self.series.iter().filter(|s| {
            let style = s.style();
            (style.is_zero() || style.show) && s.kind() != SeriesKind::Annotation
        })
    }

    fn apply_font(r: &mut dyn Renderer, working: &Style, d: &Defaults) {
        r.set_font_color(working.font_color_or(d.text_color));
        r.set_font_size(working.font_size_or(d.legend.font_size));
        r.set_font(working.font());
    }

    fn measure_rows(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        working: &Style,
    ) -> LegendLayout<'a> {
        let d = &self.defaults.legend;
        Self::apply_font(r, working, &self.defaults);

        let left = canvas.left + d.padding;
        let top = canvas.top + d.padding;
        let mut content = Bounds::new(top, left, left, top);
        let mut rows = Vec::new();
        for s in self.entries() {
            let label = s.name();
            if label.is_empty() {
                continue;
            }
            let text = r.measure_text(label);
            content.bottom += text.height() + d.tick_vertical_spacing;
            content.right = content
                .right
                .max(left + text.width() + d.line_length_minimum + d.line_text_gap);
            rows.push(LegendRow {
                label,
                text,
                style: s.style(),
            });
        }

        let outer = Bounds::at(canvas.left, canvas.top).grow(&content);
        log::debug!(?outer, rows = rows.len(), "legend layout");
        LegendLayout {
            outer,
            content,
            rows,
        }
    }

    /// Measures the legend without drawing it.
    ///
    /// Only font setters and text measurements are issued.
    pub fn layout(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        defaults_style: &Style,
    ) -> LegendLayout<'a> {
        self.measure_rows(r, canvas, &self.working_style(defaults_style))
    }
}

impl Renderable for Legend<'_> {
    fn draw(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style) {
        let working = self.working_style(defaults);
        let layout = self.measure_rows(r, canvas, &working);
        draw_box(r, layout.outer, &working, &self.defaults);

        let d = &self.defaults.legend;
        let line_right = layout.outer.right - d.padding - d.padding;
        let tx = layout.content.left;
        let mut cursor = layout.content.top;
        for row in &layout.rows {
            let (tw, th) = (row.text.width(), row.text.height());
            cursor += th;
            r.text(row.label, tx, cursor);

            let lx = tx + tw + d.line_text_gap;
            let ly = cursor - (th >> 1);
            r.set_stroke_color(row.style.stroke_color());
            r.set_stroke_width(row.style.stroke_width_or(self.defaults.stroke_width));
            r.set_stroke_dash_array(row.style.stroke_dash_array());
            r.move_to(lx, ly);
            r.line_to(line_right, ly);
            r.stroke();

            cursor += d.tick_vertical_spacing;
        }
    }
}
