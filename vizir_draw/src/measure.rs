// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for renderer backends.
//!
//! Layout code never measures text itself; it asks the [`crate::Renderer`]. Backends
//! that have no shaping engine of their own (the [`crate::Recorder`], the SVG
//! backend) delegate to a [`TextMeasurer`].

use alloc::sync::Arc;

use crate::bounds::Bounds;
use crate::float;

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// A minimal single-line text measurement interface.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels.
    ///
    /// `font` is `None` when no font was selected; implementations pick their own
    /// fallback.
    fn measure(&self, text: &str, font: Option<&FontFamily>, font_size: f64) -> (f64, f64);

    /// Measures `text` and returns its extent as bounds anchored at the origin.
    ///
    /// Fractional extents round up so the box always covers the glyphs.
    fn measure_bounds(&self, text: &str, font: Option<&FontFamily>, font_size: f64) -> Bounds {
        let (w, h) = self.measure(text, font, font_size);
        Bounds::new(0, 0, float::ceil_px(w.max(0.0)), float::ceil_px(h.max(0.0)))
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: Option<&FontFamily>, font_size: f64) -> (f64, f64) {
        (**self).measure(text, font, font_size)
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em (~0.62em for monospace) and a
/// height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: Option<&FontFamily>, font_size: f64) -> (f64, f64) {
        let em = match font {
            Some(FontFamily::Monospace) => 0.62,
            _ => 0.6,
        };
        let width = em * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
