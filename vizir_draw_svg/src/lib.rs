// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for `vizir_draw`.
//!
//! [`SvgRenderer`] implements [`vizir_draw::Renderer`] by accumulating the current
//! path in a [`kurbo::BezPath`] and emitting one `<path>` element per paint
//! operation. Text becomes `<text>` elements; text measurement is delegated to a
//! [`TextMeasurer`], since there is no shaping engine here.
//!
//! ```
//! use vizir_draw::{Bounds, BoxShape, Renderable, Style};
//! use vizir_draw_svg::SvgRenderer;
//!
//! let mut svg = SvgRenderer::new(100, 50);
//! BoxShape::default().draw(&mut svg, Bounds::new(0, 0, 100, 50), &Style::default());
//! assert!(svg.finish().contains("<path"));
//! ```

use kurbo::{BezPath, Point};
use peniko::Color;
use vizir_draw::{Bounds, Defaults, FontFamily, HeuristicTextMeasurer, Renderer, TextMeasurer};

/// A [`Renderer`] that writes an SVG document.
#[derive(Clone, Debug)]
pub struct SvgRenderer<M = HeuristicTextMeasurer> {
    width: i32,
    height: i32,
    measurer: M,
    body: String,
    path: BezPath,
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    dashes: Vec<f64>,
    font: Option<FontFamily>,
    font_color: Color,
    font_size: f64,
}

impl SvgRenderer {
    /// Creates a `width` by `height` pixel document measured with the heuristic
    /// measurer.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_measurer(width, height, HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> SvgRenderer<M> {
    /// Creates a document that measures text with `measurer`.
    pub fn with_measurer(width: i32, height: i32, measurer: M) -> Self {
        let defaults = Defaults::default();
        Self {
            width,
            height,
            measurer,
            body: String::new(),
            path: BezPath::new(),
            fill: Color::TRANSPARENT,
            stroke: Color::TRANSPARENT,
            stroke_width: defaults.stroke_width,
            dashes: Vec::new(),
            font: None,
            font_color: defaults.text_color,
            font_size: defaults.font_size,
        }
    }

    /// The canvas covering the whole document.
    #[must_use]
    pub fn canvas(&self) -> Bounds {
        Bounds::new(0, 0, self.width, self.height)
    }

    /// Finishes the document and returns the SVG source.
    ///
    /// Path commands issued after the last paint operation are dropped.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 128);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height,
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn emit_path(&mut self, fill: bool, stroke: bool) {
        let path = std::mem::take(&mut self.path);
        if path.elements().is_empty() {
            return;
        }
        self.body.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
        if fill {
            write_paint_attr(&mut self.body, "fill", self.fill);
        } else {
            self.body.push_str(r#" fill="none""#);
        }
        if stroke {
            write_paint_attr(&mut self.body, "stroke", self.stroke);
            self.body
                .push_str(&format!(r#" stroke-width="{}""#, self.stroke_width));
            if !self.dashes.is_empty() {
                let dashes: Vec<String> = self.dashes.iter().map(f64::to_string).collect();
                self.body
                    .push_str(&format!(r#" stroke-dasharray="{}""#, dashes.join(" ")));
            }
        }
        self.body.push_str("/>\n");
    }
}

impl<M: TextMeasurer> Renderer for SvgRenderer<M> {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn set_stroke_dash_array(&mut self, dashes: &[f64]) {
        self.dashes = dashes.to_vec();
    }

    fn set_font(&mut self, font: Option<&FontFamily>) {
        self.font = font.cloned();
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.move_to(Point::new(f64::from(x), f64::from(y)));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        let p = Point::new(f64::from(x), f64::from(y));
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn close(&mut self) {
        self.path.close_path();
    }

    fn fill(&mut self) {
        self.emit_path(true, false);
    }

    fn stroke(&mut self) {
        self.emit_path(false, true);
    }

    fn fill_stroke(&mut self) {
        self.emit_path(true, true);
    }

    fn measure_text(&mut self, text: &str) -> Bounds {
        self.measurer
            .measure_bounds(text, self.font.as_ref(), self.font_size)
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{}""#,
            self.font_size
        ));
        if let Some(font) = &self.font {
            self.body.push_str(&format!(
                r#" font-family="{}""#,
                escape_xml(font.as_css_family())
            ));
        }
        write_paint_attr(&mut self.body, "fill", self.font_color);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

/// Splits a color into an SVG paint value and an optional opacity.
fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    match rgba.a {
        0 => ("none".to_string(), None),
        255 => (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), None),
        a => (
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
            Some(f64::from(a) / 255.0),
        ),
    }
}

/// Appends ` name="..."`, plus ` name-opacity` for translucent colors.
fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

/// Escapes text for use in element content and attribute values.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use vizir_draw::{
        Annotation, AnnotationSeries, ContinuousRange, Legend, LineSeries, Renderable, Series,
        SeriesLayer, Style, XyValues, draw_annotation, draw_box,
    };

    use super::*;

    #[test]
    fn empty_document() {
        let svg = SvgRenderer::new(320, 200).finish();
        assert!(
            svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 320 200""#),
            "root element carries the size: {svg}"
        );
        assert!(svg.ends_with("</svg>\n"), "closed root: {svg}");
        assert!(!svg.contains("<path"), "nothing drawn: {svg}");
    }

    #[test]
    fn box_becomes_one_filled_and_stroked_path() {
        let mut r = SvgRenderer::new(100, 100);
        draw_box(
            &mut r,
            Bounds::new(10, 20, 30, 40),
            &Style::default()
                .with_fill_color(css::WHITE)
                .with_stroke_color(css::RED)
                .with_stroke_width(1.5),
            &Defaults::default(),
        );
        let svg = r.finish();
        let mut expected = BezPath::new();
        expected.move_to((20.0, 10.0));
        for p in [(30.0, 10.0), (30.0, 40.0), (20.0, 40.0), (20.0, 10.0)] {
            expected.line_to(p);
        }
        let element = format!(
            r##"<path d="{}" fill="#ffffff" stroke="#ff0000" stroke-width="1.5"/>"##,
            expected.to_svg()
        );
        assert!(svg.contains(&element), "box path: {svg}");
    }

    #[test]
    fn stroke_only_paths_have_no_fill() {
        let mut r = SvgRenderer::new(100, 100);
        r.set_stroke_color(css::BLUE);
        r.set_stroke_width(2.0);
        r.set_stroke_dash_array(&[4.0, 2.5]);
        r.move_to(0, 0);
        r.line_to(10, 10);
        r.stroke();
        let svg = r.finish();
        assert!(svg.contains(r#"fill="none""#), "unfilled: {svg}");
        assert!(svg.contains(r##"stroke="#0000ff""##), "stroke color: {svg}");
        assert!(
            svg.contains(r#"stroke-dasharray="4 2.5""#),
            "dash pattern: {svg}"
        );
    }

    #[test]
    fn paint_clears_the_current_path() {
        let mut r = SvgRenderer::new(10, 10);
        r.move_to(0, 0);
        r.line_to(5, 5);
        r.stroke();
        r.stroke();
        r.move_to(1, 1);
        let svg = r.finish();
        assert_eq!(svg.matches("<path").count(), 1, "one path per paint: {svg}");
    }

    #[test]
    fn translucent_colors_emit_opacity() {
        let mut r = SvgRenderer::new(10, 10);
        r.set_fill_color(Color::from_rgba8(255, 0, 0, 51));
        r.move_to(0, 0);
        r.line_to(5, 5);
        r.close();
        r.fill();
        let svg = r.finish();
        assert!(
            svg.contains(r##"fill="#ff0000" fill-opacity="0.2""##),
            "alpha becomes opacity: {svg}"
        );
        assert!(svg.contains("Z"), "closed path: {svg}");
    }

    #[test]
    fn text_is_escaped_and_styled() {
        let mut r = SvgRenderer::new(10, 10);
        r.set_font(Some(&FontFamily::Monospace));
        r.set_font_size(12.0);
        r.set_font_color(css::BLACK);
        r.text("a < b & \"c\"", 3, 4);
        let svg = r.finish();
        assert!(
            svg.contains(r##"<text x="3" y="4" font-size="12" font-family="monospace" fill="#000000">a &lt; b &amp; &quot;c&quot;</text>"##),
            "text element: {svg}"
        );
    }

    #[test]
    fn measures_with_current_font() {
        let mut r = SvgRenderer::new(10, 10);
        r.set_font_size(20.0);
        assert_eq!(
            r.measure_text("abc"),
            Bounds::new(0, 0, 36, 20),
            "heuristic measurement at the current size"
        );
    }

    #[test]
    fn annotation_callout_renders_polygon_and_label() {
        let mut r = SvgRenderer::new(200, 100);
        draw_annotation(
            &mut r,
            Bounds::new(0, 0, 200, 100),
            &Style::default().with_stroke_color(css::BLACK),
            10,
            50,
            "peak",
            &Defaults::default(),
        );
        let svg = r.finish();
        let mut tip = BezPath::new();
        tip.move_to((10.0, 50.0));
        assert!(
            svg.contains(&format!(r#"<path d="{}"#, tip.to_svg())),
            "callout starts at the tip: {svg}"
        );
        assert!(svg.contains(">peak</text>"), "label: {svg}");
    }

    #[test]
    fn chart_with_legend() {
        let series = vec![
            Series::from(
                LineSeries::new("up", XyValues::from_points([(0.0, 0.0), (1.0, 1.0)]))
                    .with_style(Style::shown().with_stroke_color(css::BLUE)),
            ),
            Series::from(AnnotationSeries::new(
                "notes",
                vec![Annotation::new(1.0, 1.0, "top")],
            )),
        ];
        let x = ContinuousRange::new(0.0, 1.0, 100);
        let y = ContinuousRange::new(0.0, 1.0, 100);
        let mut r = SvgRenderer::new(120, 120);
        let canvas = Bounds::new(10, 10, 110, 110);
        SeriesLayer::new(&series, &x, &y).draw(&mut r, canvas, &Style::default());
        Legend::new(&series).draw(&mut r, canvas, &Style::default());
        let svg = r.finish();
        assert!(svg.contains(">up</text>"), "legend row for the line: {svg}");
        assert!(!svg.contains(">notes</text>"), "no legend row for notes: {svg}");
        assert!(svg.contains(">top</text>"), "annotation label: {svg}");
    }
}
