// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart series: polylines of data and annotation callouts.

use alloc::string::String;
use alloc::vec::Vec;

use crate::annotation::{draw_annotation, measure_annotation};
use crate::bounds::Bounds;
use crate::defaults::Defaults;
use crate::line::draw_line_series;
use crate::range::Range;
use crate::renderer::{Renderable, Renderer};
use crate::style::Style;
use crate::values::XyValues;

/// The kind of a [`Series`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// A polyline through data points.
    Line,
    /// Labeled callouts at data points.
    Annotation,
}

/// A named line through `(x, y)` data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineSeries {
    /// Display name; also the legend label.
    pub name: String,
    /// Line style. A fill color turns the line into an area.
    pub style: Style,
    /// Data points.
    pub values: XyValues,
}

impl LineSeries {
    /// Creates an unstyled line series.
    pub fn new(name: impl Into<String>, values: XyValues) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            values,
        }
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Draws the series with its style merged over `defaults_style`.
    pub fn draw(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        x_range: &dyn Range,
        y_range: &dyn Range,
        defaults_style: &Style,
        defaults: &Defaults,
    ) {
        let style = self.style.with_defaults_from(defaults_style);
        draw_line_series(r, canvas, x_range, y_range, &style, &self.values, defaults);
    }
}

/// One labeled point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotation {
    /// Data x.
    pub x: f64,
    /// Data y.
    pub y: f64,
    /// Callout text.
    pub label: String,
    /// Per-annotation overrides of the series style.
    pub style: Style,
}

impl Annotation {
    /// Creates an annotation with no style overrides.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            style: Style::default(),
        }
    }

    /// Sets the style overrides.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// A named set of annotations.
///
/// Drawn only when its style is zero or has `show` set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationSeries {
    /// Display name. Annotation series never appear in legends.
    pub name: String,
    /// Style shared by all annotations.
    pub style: Style,
    /// The callouts, drawn in order.
    pub annotations: Vec<Annotation>,
}

impl AnnotationSeries {
    /// Creates an unstyled annotation series.
    pub fn new(name: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            annotations,
        }
    }

    /// Sets the shared style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns `true` if the series should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.style.is_zero() || self.style.show
    }

    fn lead_point(
        a: &Annotation,
        canvas: Bounds,
        x_range: &dyn Range,
        y_range: &dyn Range,
    ) -> (i32, i32) {
        (
            canvas.left.saturating_add(x_range.translate(a.x)),
            canvas.bottom.saturating_sub(y_range.translate(a.y)),
        )
    }

    /// The union of every callout's box, or `None` if nothing would be drawn.
    pub fn measure(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        x_range: &dyn Range,
        y_range: &dyn Range,
        defaults_style: &Style,
        defaults: &Defaults,
    ) -> Option<Bounds> {
        if !self.is_visible() {
            return None;
        }
        let series_style = self.style.with_defaults_from(defaults_style);
        let mut extent: Option<Bounds> = None;
        for a in &self.annotations {
            let style = a.style.with_defaults_from(&series_style);
            let (lx, ly) = Self::lead_point(a, canvas, x_range, y_range);
            let b = measure_annotation(r, canvas, &style, lx, ly, &a.label, defaults);
            extent = Some(extent.map_or(b, |e| e.grow(&b)));
        }
        extent
    }

    /// Draws every callout at its data point.
    pub fn draw(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        x_range: &dyn Range,
        y_range: &dyn Range,
        defaults_style: &Style,
        defaults: &Defaults,
    ) {
        if !self.is_visible() {
            return;
        }
        let series_style = self.style.with_defaults_from(defaults_style);
        for a in &self.annotations {
            let style = a.style.with_defaults_from(&series_style);
            let (lx, ly) = Self::lead_point(a, canvas, x_range, y_range);
            draw_annotation(r, canvas, &style, lx, ly, &a.label, defaults);
        }
    }
}

/// Any series a chart can draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// See [`LineSeries`].
    Line(LineSeries),
    /// See [`AnnotationSeries`].
    Annotation(AnnotationSeries),
}

impl Series {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Line(s) => &s.name,
            Self::Annotation(s) => &s.name,
        }
    }

    /// The series' own style.
    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Line(s) => &s.style,
            Self::Annotation(s) => &s.style,
        }
    }

    /// Which kind of series this is.
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Annotation(_) => SeriesKind::Annotation,
        }
    }

    /// Draws the series into `canvas`.
    pub fn render(
        &self,
        r: &mut dyn Renderer,
        canvas: Bounds,
        x_range: &dyn Range,
        y_range: &dyn Range,
        defaults_style: &Style,
        defaults: &Defaults,
    ) {
        match self {
            Self::Line(s) => s.draw(r, canvas, x_range, y_range, defaults_style, defaults),
            Self::Annotation(s) => s.draw(r, canvas, x_range, y_range, defaults_style, defaults),
        }
    }
}

impl From<LineSeries> for Series {
    fn from(s: LineSeries) -> Self {
        Self::Line(s)
    }
}

impl From<AnnotationSeries> for Series {
    fn from(s: AnnotationSeries) -> Self {
        Self::Annotation(s)
    }
}

/// Draws a list of series over shared ranges, in order.
#[derive(Clone, Copy)]
pub struct SeriesLayer<'a> {
    /// The series to draw.
    pub series: &'a [Series],
    /// Horizontal mapping.
    pub x_range: &'a dyn Range,
    /// Vertical mapping.
    pub y_range: &'a dyn Range,
    /// Fallback constants.
    pub defaults: Defaults,
}

impl<'a> SeriesLayer<'a> {
    /// Creates a layer with default constants.
    pub fn new(series: &'a [Series], x_range: &'a dyn Range, y_range: &'a dyn Range) -> Self {
        Self {
            series,
            x_range,
            y_range,
            defaults: Defaults::default(),
        }
    }

    /// Sets the fallback constants.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl core::fmt::Debug for SeriesLayer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeriesLayer")
            .field("series", &self.series)
            .field("x_domain", &(self.x_range.min(), self.x_range.max()))
            .field("y_domain", &(self.y_range.min(), self.y_range.max()))
            .finish_non_exhaustive()
    }
}

impl Renderable for SeriesLayer<'_> {
    fn draw(&self, r: &mut dyn Renderer, canvas: Bounds, defaults: &Style) {
        for s in self.series {
            s.render(r, canvas, self.x_range, self.y_range, defaults, &self.defaults);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::path::PathCommand;
    use crate::range::ContinuousRange;
    use crate::recorder::{PaintOp, Recorder};

    const CANVAS: Bounds = Bounds::new(0, 0, 100, 100);

    fn ranges() -> (ContinuousRange, ContinuousRange) {
        (
            ContinuousRange::new(0.0, 10.0, 100),
            ContinuousRange::new(0.0, 10.0, 100),
        )
    }

    fn notes() -> AnnotationSeries {
        AnnotationSeries::new(
            "notes",
            vec![Annotation::new(2.0, 5.0, "a"), Annotation::new(8.0, 1.0, "b")],
        )
    }

    #[test]
    fn series_accessors() {
        let line: Series = LineSeries::new("l", XyValues::default())
            .with_style(Style::shown())
            .into();
        assert_eq!(line.name(), "l", "line name");
        assert_eq!(line.kind(), SeriesKind::Line, "line kind");
        assert!(line.style().show, "line style");

        let notes: Series = notes().into();
        assert_eq!(notes.name(), "notes", "annotation name");
        assert_eq!(notes.kind(), SeriesKind::Annotation, "annotation kind");
    }

    #[test]
    fn line_series_inherits_default_style() {
        let (xr, yr) = ranges();
        let mut r = Recorder::new();
        let s = LineSeries::new("l", XyValues::from_points([(0.0, 0.0), (10.0, 10.0)]));
        s.draw(
            &mut r,
            CANVAS,
            &xr,
            &yr,
            &Style::default().with_fill_color(css::RED),
            &Defaults::default(),
        );
        let ops: Vec<_> = r.painted_paths().iter().map(|p| p.op).collect();
        assert_eq!(ops, [PaintOp::Fill, PaintOp::Stroke], "inherited fill");
    }

    #[test]
    fn annotations_are_placed_at_their_data_points() {
        let (xr, yr) = ranges();
        let mut r = Recorder::new();
        notes().draw(
            &mut r,
            CANVAS,
            &xr,
            &yr,
            &Style::default(),
            &Defaults::default(),
        );
        let paths = r.painted_paths();
        assert_eq!(paths.len(), 2, "one callout per annotation");
        assert_eq!(paths[0].commands[0], PathCommand::MoveTo(20, 50), "first tip");
        assert_eq!(paths[1].commands[0], PathCommand::MoveTo(80, 90), "second tip");
        let labels: Vec<_> = r.texts().map(|(t, _, _)| t).collect();
        assert_eq!(labels, ["a", "b"], "labels in order");
    }

    #[test]
    fn hidden_annotation_series_draws_nothing() {
        let (xr, yr) = ranges();
        let mut r = Recorder::new();
        let hidden = notes().with_style(Style::default().with_stroke_width(1.0));
        hidden.draw(
            &mut r,
            CANVAS,
            &xr,
            &yr,
            &Style::default(),
            &Defaults::default(),
        );
        assert!(r.calls().is_empty(), "styled without show is hidden");
        assert_eq!(
            hidden.measure(
                &mut r,
                CANVAS,
                &xr,
                &yr,
                &Style::default(),
                &Defaults::default()
            ),
            None,
            "hidden series has no extent"
        );
    }

    #[test]
    fn measure_is_union_of_callouts() {
        let (xr, yr) = ranges();
        let d = Defaults::default();
        let s = notes();
        let mut r = Recorder::new();
        let all = s
            .measure(&mut r, CANVAS, &xr, &yr, &Style::default(), &d)
            .unwrap_or_default();

        let mut r = Recorder::new();
        let first = measure_annotation(&mut r, CANVAS, &Style::default(), 20, 50, "a", &d);
        let second = measure_annotation(&mut r, CANVAS, &Style::default(), 80, 90, "b", &d);
        assert_eq!(all, first.grow(&second), "union of both boxes");
        assert_eq!(
            AnnotationSeries::default().measure(&mut r, CANVAS, &xr, &yr, &Style::default(), &d),
            None,
            "no annotations, no extent"
        );
    }

    #[test]
    fn far_out_of_domain_annotation_saturates() {
        let (xr, yr) = ranges();
        let d = Defaults::default();
        let s = AnnotationSeries::new("far", vec![Annotation::new(1.0e9, 5.0, "x")]);
        let mut r = Recorder::new();
        let b = s
            .measure(&mut r, CANVAS, &xr, &yr, &Style::default(), &d)
            .unwrap_or_default();
        assert_eq!(b.left, i32::MAX, "lead point clamps to the i32 bound");
        assert_eq!(b.right, i32::MAX, "box edges clamp instead of wrapping");
        assert!(b.top <= b.bottom, "vertical extent is unaffected");

        let mut r = Recorder::new();
        s.draw(&mut r, CANVAS, &xr, &yr, &Style::default(), &d);
        assert_eq!(
            r.painted_paths()[0].commands[0],
            PathCommand::MoveTo(i32::MAX, 50),
            "callout tip sits at the clamped lead point"
        );
    }

    #[test]
    fn layer_draws_every_series_in_order() {
        let (xr, yr) = ranges();
        let series = vec![
            Series::from(LineSeries::new(
                "l",
                XyValues::from_points([(0.0, 0.0), (10.0, 10.0)]),
            )),
            Series::from(notes()),
        ];
        let mut r = Recorder::new();
        SeriesLayer::new(&series, &xr, &yr).draw(&mut r, CANVAS, &Style::default());
        let ops: Vec<_> = r.painted_paths().iter().map(|p| p.op).collect();
        assert_eq!(
            ops,
            [PaintOp::Stroke, PaintOp::FillStroke, PaintOp::FillStroke],
            "line, then two callouts"
        );
    }
}
