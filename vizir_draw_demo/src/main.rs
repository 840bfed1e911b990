// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws an annotated two-series chart with a legend and writes it as SVG.
//!
//! Usage: `vizir_draw_demo [OUTPUT]` (defaults to `vizir_draw_demo.svg`).
//! Set `RUST_LOG=vizir_draw=trace` to see layout events.

use peniko::Color;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizir_draw::{
    Annotation, AnnotationSeries, BoxShape, Callout, ContinuousRange, Defaults, Insets,
    Legend, LineSeries, Renderable, Series, SeriesLayer, Style, XyValues,
    draw_text_centered,
};
use vizir_draw_svg::SvgRenderer;

const WIDTH: i32 = 640;
const HEIGHT: i32 = 400;

fn series() -> Vec<Series> {
    let revenue = LineSeries::new(
        "Revenue",
        XyValues::new(
            (0..=10).map(f64::from).collect(),
            vec![12.0, 18.0, 25.0, 22.0, 40.0, 47.0, 45.0, 61.0, 70.0, 68.0, 82.0],
        ),
    )
    .with_style(
        Style::shown()
            .with_stroke_color(Color::from_rgb8(0, 116, 217))
            .with_stroke_width(2.5),
    );

    let cost = LineSeries::new(
        "Cost",
        XyValues::from_points([
            (0.0, 10.0),
            (2.0, 14.0),
            (4.0, 20.0),
            (6.0, 24.0),
            (8.0, 30.0),
            (10.0, 33.0),
        ]),
    )
    .with_style(
        Style::shown()
            .with_fill_color(Color::from_rgba8(255, 133, 27, 64))
            .with_stroke_color(Color::from_rgb8(255, 133, 27))
            .with_stroke_width(1.5)
            .with_stroke_dash_array(&[6.0, 3.0]),
    );

    let notes = AnnotationSeries::new(
        "Notes",
        vec![
            Annotation::new(4.0, 40.0, "launch"),
            Annotation::new(8.0, 70.0, "peak quarter")
                .with_style(Style::default().with_fill_color(Color::from_rgb8(255, 250, 205))),
        ],
    )
    .with_style(
        Style::shown()
            .with_stroke_color(Color::from_rgb8(105, 105, 105))
            .with_stroke_width(1.0),
    );

    vec![revenue.into(), cost.into(), notes.into()]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "vizir_draw_demo.svg".to_string());

    let defaults = Defaults::default();
    let chart_style = Style::default().with_font_color(defaults.text_color);
    let mut svg = SvgRenderer::new(WIDTH, HEIGHT);
    let page = svg.canvas();

    BoxShape::new(
        Style::default()
            .with_fill_color(css::WHITE)
            .with_stroke_color(Color::from_rgb8(211, 211, 211))
            .with_stroke_width(1.0),
    )
    .draw(&mut svg, page, &chart_style);

    draw_text_centered(
        &mut svg,
        "Quarterly results",
        WIDTH / 2,
        28,
        &Style::default().with_font_size(16.0),
        &defaults,
    );

    let plot = page.inset(Insets::new(50, 40, 40, 30));
    BoxShape::new(
        Style::default()
            .with_stroke_color(defaults.axis_color)
            .with_stroke_width(defaults.axis_line_width),
    )
    .draw(&mut svg, plot, &chart_style);

    let all = series();
    let x = ContinuousRange::new(0.0, 10.0, plot.width());
    let y = ContinuousRange::new(0.0, 100.0, plot.height());
    SeriesLayer::new(&all, &x, &y)
        .with_defaults(defaults)
        .draw(&mut svg, plot, &chart_style);

    let legend_area = plot.inset(Insets::uniform(10));
    let legend = Legend::new(&all).with_defaults(defaults);
    let layout = legend.layout(&mut svg, legend_area, &chart_style);
    tracing::info!(rows = layout.rows.len(), outer = ?layout.outer, "legend measured");
    legend.draw(&mut svg, legend_area, &chart_style);

    let note = Callout::new(plot.width() - 130, plot.height() - 40, "source: demo data")
        .with_style(Style::default().with_font_size(9.0));
    let note_box = note.measure(&mut svg, plot, &chart_style);
    if note_box.right <= page.right {
        note.draw(&mut svg, plot, &chart_style);
    } else {
        tracing::warn!(?note_box, "footnote does not fit, skipped");
    }

    std::fs::write(&out, svg.finish()).expect("write SVG output");
    tracing::info!(path = %out, "wrote chart");
    println!("wrote {out}");
}
