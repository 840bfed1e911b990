// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line series drawing, optionally filled down to the canvas bottom.

use alloc::vec::Vec;

use crate::bounds::Bounds;
use crate::defaults::Defaults;
use crate::log;
use crate::path::Path;
use crate::range::Range;
use crate::renderer::Renderer;
use crate::style::Style;
use crate::values::ValueProvider;

/// Projects every data pair into canvas pixels.
///
/// X grows from `canvas.left`; y grows upward from `canvas.bottom`.
pub fn project_points(
    canvas: Bounds,
    x_range: &dyn Range,
    y_range: &dyn Range,
    values: &dyn ValueProvider,
) -> Vec<(i32, i32)> {
    (0..values.len())
        .map(|i| {
            let (vx, vy) = values.value(i);
            (
                canvas.left.saturating_add(x_range.translate(vx)),
                canvas.bottom.saturating_sub(y_range.translate(vy)),
            )
        })
        .collect()
}

/// The closed fill region under a projected polyline: the polyline itself, then
/// straight down to `baseline` at the last x, across to the first x, and closed.
///
/// Returns an empty path when there are no points.
pub fn area_path(points: &[(i32, i32)], baseline: i32) -> Path {
    let (Some(&(first_x, _)), Some(&(last_x, _))) = (points.first(), points.last()) else {
        return Path::new();
    };
    let mut p = Path::polyline(points.iter().copied());
    p.line_to(last_x, baseline);
    p.line_to(first_x, baseline);
    p.close();
    p
}

/// Draws a line series.
///
/// If `style` sets a fill color, the region between the line and the canvas bottom
/// is filled first. The line is then stroked as its own path. An empty provider
/// issues no renderer calls at all.
pub fn draw_line_series(
    r: &mut dyn Renderer,
    canvas: Bounds,
    x_range: &dyn Range,
    y_range: &dyn Range,
    style: &Style,
    values: &dyn ValueProvider,
    defaults: &Defaults,
) {
    if values.is_empty() {
        return;
    }

    let points = project_points(canvas, x_range, y_range, values);
    log::trace!(points = points.len(), "draw_line_series");

    if let Some(fill) = style.fill_color {
        r.set_fill_color(fill);
        area_path(&points, canvas.bottom).replay(r);
        r.fill();
    }

    r.set_stroke_color(style.stroke_color());
    r.set_stroke_dash_array(style.stroke_dash_array());
    r.set_stroke_width(style.stroke_width_or(defaults.stroke_width));

    Path::polyline(points.iter().copied()).replay(r);
    r.stroke();
}
