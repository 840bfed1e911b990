// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing styles with default-fallback resolution.
//!
//! Every attribute is optional. Drawing code never reads a field directly; it goes
//! through an accessor that names the value to use when the field is unset, so the
//! precedence is always visible at the call site:
//!
//! ```
//! use peniko::color::palette::css;
//! use vizir_draw::Style;
//!
//! let series = Style::default().with_stroke_width(3.0);
//! let chart = Style::default().with_stroke_color(css::RED).with_stroke_width(1.0);
//! let working = series.with_defaults_from(&chart);
//!
//! assert_eq!(working.stroke_width_or(2.0), 3.0);
//! assert_eq!(working.stroke_color(), css::RED);
//! ```

use peniko::Color;
use smallvec::SmallVec;

use crate::bounds::Insets;
use crate::defaults::Defaults;
use crate::measure::FontFamily;

/// A stroke dash pattern: alternating dash and gap lengths in pixels.
pub type DashArray = SmallVec<[f64; 4]>;

/// Optional per-side padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Space above.
    pub top: Option<i32>,
    /// Space to the left.
    pub left: Option<i32>,
    /// Space to the right.
    pub right: Option<i32>,
    /// Space below.
    pub bottom: Option<i32>,
}

impl Padding {
    /// Sets all four sides.
    #[must_use]
    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            right: Some(right),
            bottom: Some(bottom),
        }
    }

    /// Sets all four sides to the same value.
    #[must_use]
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Returns `true` if no side is set.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.right.is_none() && self.bottom.is_none()
    }

    /// Top padding, or `default` if unset.
    #[must_use]
    pub fn top_or(&self, default: i32) -> i32 {
        self.top.unwrap_or(default)
    }

    /// Left padding, or `default` if unset.
    #[must_use]
    pub fn left_or(&self, default: i32) -> i32 {
        self.left.unwrap_or(default)
    }

    /// Right padding, or `default` if unset.
    #[must_use]
    pub fn right_or(&self, default: i32) -> i32 {
        self.right.unwrap_or(default)
    }

    /// Bottom padding, or `default` if unset.
    #[must_use]
    pub fn bottom_or(&self, default: i32) -> i32 {
        self.bottom.unwrap_or(default)
    }

    /// Resolves every side against `defaults`.
    #[must_use]
    pub fn resolve(&self, defaults: Insets) -> Insets {
        Insets {
            top: self.top_or(defaults.top),
            left: self.left_or(defaults.left),
            right: self.right_or(defaults.right),
            bottom: self.bottom_or(defaults.bottom),
        }
    }

    /// Fills unset sides from `fallback`.
    #[must_use]
    pub fn with_defaults_from(&self, fallback: &Self) -> Self {
        Self {
            top: self.top.or(fallback.top),
            left: self.left.or(fallback.left),
            right: self.right.or(fallback.right),
            bottom: self.bottom.or(fallback.bottom),
        }
    }
}

impl From<Insets> for Padding {
    fn from(value: Insets) -> Self {
        Self::new(value.top, value.left, value.right, value.bottom)
    }
}

/// A bundle of optional drawing attributes.
///
/// A style with nothing set is "zero" (see [`Style::is_zero`]); legends treat a zero
/// style as visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Requests that the styled element be shown.
    pub show: bool,
    /// Fill paint. `None` means "do not fill".
    pub fill_color: Option<Color>,
    /// Stroke paint.
    pub stroke_color: Option<Color>,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// Stroke dash pattern.
    pub stroke_dash_array: Option<DashArray>,
    /// Font family.
    pub font: Option<FontFamily>,
    /// Font size in pixels.
    pub font_size: Option<f64>,
    /// Text paint.
    pub font_color: Option<Color>,
    /// Inner spacing.
    pub padding: Padding,
}

impl Style {
    /// A zero style with only `show` set.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    /// Returns `true` if no attribute is set and `show` is off.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.show
            && self.fill_color.is_none()
            && self.stroke_color.is_none()
            && self.stroke_width.is_none()
            && self.stroke_dash_array.is_none()
            && self.font.is_none()
            && self.font_size.is_none()
            && self.font_color.is_none()
            && self.padding.is_zero()
    }

    /// Fill paint, or transparent if unset.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color_or(Color::TRANSPARENT)
    }

    /// Fill paint, or `default` if unset.
    #[must_use]
    pub fn fill_color_or(&self, default: Color) -> Color {
        self.fill_color.unwrap_or(default)
    }

    /// Stroke paint, or transparent if unset.
    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.stroke_color_or(Color::TRANSPARENT)
    }

    /// Stroke paint, or `default` if unset.
    #[must_use]
    pub fn stroke_color_or(&self, default: Color) -> Color {
        self.stroke_color.unwrap_or(default)
    }

    /// Stroke width, or [`Defaults::stroke_width`] if unset.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width_or(Defaults::default().stroke_width)
    }

    /// Stroke width, or `default` if unset.
    #[must_use]
    pub fn stroke_width_or(&self, default: f64) -> f64 {
        self.stroke_width.unwrap_or(default)
    }

    /// Dash pattern, or a solid line (empty pattern) if unset.
    #[must_use]
    pub fn stroke_dash_array(&self) -> &[f64] {
        self.stroke_dash_array.as_deref().unwrap_or(&[])
    }

    /// Font family, if set.
    #[must_use]
    pub fn font(&self) -> Option<&FontFamily> {
        self.font.as_ref()
    }

    /// Font family, or `default` if unset.
    #[must_use]
    pub fn font_or<'a>(&'a self, default: &'a FontFamily) -> &'a FontFamily {
        self.font.as_ref().unwrap_or(default)
    }

    /// Font size, or [`Defaults::font_size`] if unset.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size_or(Defaults::default().font_size)
    }

    /// Font size, or `default` if unset.
    #[must_use]
    pub fn font_size_or(&self, default: f64) -> f64 {
        self.font_size.unwrap_or(default)
    }

    /// Per-side padding, unset sides taken from [`Defaults::annotation_padding`].
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding.resolve(Defaults::default().annotation_padding)
    }

    /// Text paint, or transparent if unset.
    #[must_use]
    pub fn font_color(&self) -> Color {
        self.font_color_or(Color::TRANSPARENT)
    }

    /// Text paint, or `default` if unset.
    #[must_use]
    pub fn font_color_or(&self, default: Color) -> Color {
        self.font_color.unwrap_or(default)
    }

    /// Returns a copy where every unset attribute is taken from `fallback`.
    ///
    /// `show` is on if either style has it on. Chaining builds a fallback chain:
    /// `a.with_defaults_from(&b.with_defaults_from(&c))`.
    #[must_use]
    pub fn with_defaults_from(&self, fallback: &Self) -> Self {
        Self {
            show: self.show || fallback.show,
            fill_color: self.fill_color.or(fallback.fill_color),
            stroke_color: self.stroke_color.or(fallback.stroke_color),
            stroke_width: self.stroke_width.or(fallback.stroke_width),
            stroke_dash_array: self
                .stroke_dash_array
                .clone()
                .or_else(|| fallback.stroke_dash_array.clone()),
            font: self.font.clone().or_else(|| fallback.font.clone()),
            font_size: self.font_size.or(fallback.font_size),
            font_color: self.font_color.or(fallback.font_color),
            padding: self.padding.with_defaults_from(&fallback.padding),
        }
    }

    /// Merges three styles field by field: `explicit` wins, then `fallback`, then `builtin`.
    #[must_use]
    pub fn resolve(explicit: &Self, fallback: &Self, builtin: &Self) -> Self {
        explicit.with_defaults_from(&fallback.with_defaults_from(builtin))
    }

    /// Sets `show`.
    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the stroke paint.
    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Sets the dash pattern.
    #[must_use]
    pub fn with_stroke_dash_array(mut self, dashes: &[f64]) -> Self {
        self.stroke_dash_array = Some(DashArray::from_slice(dashes));
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font(mut self, font: FontFamily) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the text paint.
    #[must_use]
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn accessors_fall_back_when_unset() {
        let s = Style::default();
        assert_eq!(s.fill_color(), Color::TRANSPARENT, "system default fill");
        assert_eq!(s.fill_color_or(css::WHITE), css::WHITE, "explicit default");
        assert_eq!(s.stroke_width_or(2.0), 2.0, "stroke width default");
        assert!(s.stroke_dash_array().is_empty(), "solid by default");
        assert!(s.font().is_none(), "no font by default");
        assert_eq!(
            s.font_or(&FontFamily::Serif),
            &FontFamily::Serif,
            "font default"
        );
        assert_eq!(s.padding.left_or(7), 7, "padding default");
    }

    #[test]
    fn accessors_prefer_own_value() {
        let s = Style::default()
            .with_fill_color(css::RED)
            .with_stroke_width(4.0)
            .with_font_size(9.0)
            .with_padding(Padding::uniform(3));
        assert_eq!(s.fill_color_or(css::WHITE), css::RED, "own fill wins");
        assert_eq!(s.stroke_width_or(2.0), 4.0, "own width wins");
        assert_eq!(s.font_size_or(12.0), 9.0, "own size wins");
        assert_eq!(s.padding.top_or(5), 3, "own padding wins");
    }

    #[test]
    fn no_argument_accessors_use_system_defaults() {
        let d = Defaults::default();
        let s = Style::default();
        assert_eq!(s.stroke_width(), d.stroke_width, "default stroke width");
        assert_eq!(s.font_size(), d.font_size, "default font size");
        assert_eq!(s.padding(), d.annotation_padding, "default padding");

        let s = Style::default()
            .with_stroke_width(4.0)
            .with_font_size(9.0)
            .with_padding(Padding {
                left: Some(1),
                ..Padding::default()
            });
        assert_eq!(s.stroke_width(), 4.0, "own width wins");
        assert_eq!(s.font_size(), 9.0, "own size wins");
        let p = s.padding();
        assert_eq!(p.left, 1, "own side wins");
        assert_eq!(p.top, d.annotation_padding.top, "unset side falls back");
    }

    #[test]
    fn zero_style_detection() {
        assert!(Style::default().is_zero(), "default is zero");
        assert!(!Style::shown().is_zero(), "show makes it non-zero");
        assert!(
            !Style::default().with_stroke_width(1.0).is_zero(),
            "any attribute makes it non-zero"
        );
        let padded = Style {
            padding: Padding {
                left: Some(1),
                ..Padding::default()
            },
            ..Style::default()
        };
        assert!(!padded.is_zero(), "a single padding side counts");
    }

    #[test]
    fn resolve_precedence_is_explicit_fallback_builtin() {
        let explicit = Style::default().with_stroke_width(3.0);
        let fallback = Style::default()
            .with_stroke_width(2.0)
            .with_stroke_color(css::BLUE);
        let builtin = Style::default()
            .with_stroke_width(1.0)
            .with_stroke_color(css::GRAY)
            .with_fill_color(css::WHITE);

        let r = Style::resolve(&explicit, &fallback, &builtin);
        assert_eq!(r.stroke_width, Some(3.0), "explicit wins");
        assert_eq!(r.stroke_color, Some(css::BLUE), "fallback beats builtin");
        assert_eq!(r.fill_color, Some(css::WHITE), "builtin fills the rest");
        assert!(r.font.is_none(), "unset everywhere stays unset");
    }

    #[test]
    fn merge_is_per_padding_side() {
        let a = Style::default().with_padding(Padding {
            top: Some(1),
            ..Padding::default()
        });
        let b = Style::default().with_padding(Padding::uniform(9));
        let m = a.with_defaults_from(&b);
        assert_eq!(m.padding, Padding::new(1, 9, 9, 9), "sides merge independently");
    }

    #[test]
    fn dash_array_merges_and_clones() {
        let dashed = Style::default().with_stroke_dash_array(&[4.0, 2.0]);
        let merged = Style::default().with_defaults_from(&dashed);
        assert_eq!(merged.stroke_dash_array(), &[4.0, 2.0], "dash inherited");
    }
}
