// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and layout for chart drawing.
//!
//! This crate turns chart data into primitive drawing calls on an abstract
//! [`Renderer`]:
//! - **Ranges** map data values onto pixel spans.
//! - **Series** become polylines, optionally filled down to the canvas bottom.
//! - **Annotations** become pointed callouts sized from their measured labels.
//! - **Boxes** and **legends** are framed, measurement-driven layouts.
//!
//! Rasterization, font loading and chart composition are out of scope. Drawing
//! components take a `&mut dyn Renderer`, a canvas [`Bounds`], a [`Style`] and a
//! [`Defaults`] bundle, and issue style setters, then path commands, then paint
//! operations. None of them keep state between calls.
//!
//! [`Recorder`] is a renderer that records the call sequence instead of drawing,
//! which is how the components in this crate are tested.
//!
//! ```
//! use vizir_draw::{Bounds, ContinuousRange, Defaults, Recorder, Style, draw_line_series};
//!
//! let x = ContinuousRange::new(0.0, 10.0, 100);
//! let y = ContinuousRange::new(0.0, 10.0, 100);
//! let mut r = Recorder::new();
//! draw_line_series(
//!     &mut r,
//!     Bounds::new(0, 0, 100, 100),
//!     &x,
//!     &y,
//!     &Style::default(),
//!     &[(0.0, 0.0), (10.0, 10.0)],
//!     &Defaults::default(),
//! );
//! assert_eq!(r.painted_paths().len(), 1);
//! ```
//!
//! ## Features
//!
//! - `libm` (default): float math through `libm` for `no_std` builds.
//! - `std`: use the standard library's float math instead.
//! - `tracing`: emit `debug`/`trace` events for layouts and series.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod annotation;
mod bounds;
mod defaults;
mod float;
mod legend;
mod line;
mod log;
mod measure;
mod path;
mod range;
mod recorder;
mod renderer;
mod series;
mod shapes;
mod style;
mod text;
mod values;

pub use annotation::{Callout, CalloutGeometry, draw_annotation, measure_annotation};
pub use bounds::{Bounds, Insets};
pub use defaults::{Defaults, LegendDefaults, SERIES_BLUE, TEXT_GRAY};
pub use legend::{Legend, LegendLayout, LegendRow};
pub use line::{area_path, draw_line_series, project_points};
pub use measure::{FontFamily, HeuristicTextMeasurer, TextMeasurer};
pub use path::{Path, PathCommand};
pub use range::{ContinuousRange, LogRange, Range};
pub use recorder::{DrawCall, PaintOp, PaintedPath, Recorder};
pub use renderer::{Renderable, Renderer};
pub use series::{Annotation, AnnotationSeries, LineSeries, Series, SeriesKind, SeriesLayer};
pub use shapes::{BoxShape, box_path, draw_box};
pub use style::{DashArray, Padding, Style};
pub use text::{draw_text, draw_text_centered};
pub use values::{ValueProvider, XyValues};
