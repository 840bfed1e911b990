// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default drawing constants.
//!
//! All "system defaults" used when a [`crate::Style`] leaves an attribute unset live in
//! [`Defaults`]. Components take it by reference, so tests and callers can override any
//! constant without touching shared state.

use peniko::Color;
use peniko::color::palette::css;

use crate::bounds::Insets;

/// Dark gray used for text and axis lines.
pub const TEXT_GRAY: Color = Color::from_rgb8(51, 51, 51);
/// Blue used for series strokes.
pub const SERIES_BLUE: Color = Color::from_rgb8(0, 116, 217);

/// Fallback values for every drawing component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Defaults {
    /// Stroke width for series, boxes and annotation outlines.
    pub stroke_width: f64,
    /// Stroke paint for boxes.
    pub stroke_color: Color,
    /// Text paint.
    pub text_color: Color,
    /// Font size for plain text.
    pub font_size: f64,
    /// Axis line paint (also the legend frame).
    pub axis_color: Color,
    /// Axis line width (also the legend frame).
    pub axis_line_width: f64,
    /// Annotation callout fill.
    pub annotation_fill_color: Color,
    /// Annotation label font size.
    pub annotation_font_size: f64,
    /// Annotation callout padding around the label.
    pub annotation_padding: Insets,
    /// Horizontal room reserved for the callout's pointer.
    pub annotation_delta_width: i32,
    /// Legend layout constants.
    pub legend: LegendDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            stroke_color: SERIES_BLUE,
            text_color: TEXT_GRAY,
            font_size: 10.0,
            axis_color: TEXT_GRAY,
            axis_line_width: 1.0,
            annotation_fill_color: css::WHITE,
            annotation_font_size: 10.0,
            annotation_padding: Insets::uniform(5),
            annotation_delta_width: 10,
            legend: LegendDefaults::default(),
        }
    }
}

impl Defaults {
    /// Sets the default stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets the default text paint.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the annotation pointer width.
    #[must_use]
    pub fn with_annotation_delta_width(mut self, delta: i32) -> Self {
        self.annotation_delta_width = delta;
        self
    }

    /// Sets the annotation padding.
    #[must_use]
    pub fn with_annotation_padding(mut self, padding: Insets) -> Self {
        self.annotation_padding = padding;
        self
    }

    /// Sets the legend constants.
    #[must_use]
    pub fn with_legend(mut self, legend: LegendDefaults) -> Self {
        self.legend = legend;
        self
    }
}

/// Legend layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendDefaults {
    /// Space between the legend frame and its content.
    pub padding: i32,
    /// Gap between a label and its sample line.
    pub line_text_gap: i32,
    /// Room reserved for the sample line.
    pub line_length_minimum: i32,
    /// Extra vertical space after each row.
    pub tick_vertical_spacing: i32,
    /// Label font size.
    pub font_size: f64,
    /// Frame fill.
    pub fill_color: Color,
}

impl Default for LegendDefaults {
    fn default() -> Self {
        Self {
            padding: 5,
            line_text_gap: 5,
            line_length_minimum: 25,
            tick_vertical_spacing: 20,
            font_size: 8.0,
            fill_color: css::WHITE,
        }
    }
}

impl LegendDefaults {
    /// Sets the frame padding.
    #[must_use]
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the label/line gap.
    #[must_use]
    pub fn with_line_text_gap(mut self, gap: i32) -> Self {
        self.line_text_gap = gap;
        self
    }

    /// Sets the sample line room.
    #[must_use]
    pub fn with_line_length_minimum(mut self, len: i32) -> Self {
        self.line_length_minimum = len;
        self
    }

    /// Sets the per-row vertical spacing.
    #[must_use]
    pub fn with_tick_vertical_spacing(mut self, spacing: i32) -> Self {
        self.tick_vertical_spacing = spacing;
        self
    }
}
