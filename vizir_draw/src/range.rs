// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-to-pixel coordinate mapping.
//!
//! A range pairs a data domain (`min..=max`) with a pixel span and translates data
//! values into pixel offsets inside that span. Offsets are relative: callers add
//! the canvas origin (and flip the y axis) themselves.

use crate::float;

/// Maps data values onto a pixel span.
pub trait Range {
    /// The smallest value of the data domain.
    fn min(&self) -> f64;

    /// The largest value of the data domain.
    fn max(&self) -> f64;

    /// The pixel span the domain maps onto.
    fn domain(&self) -> i32;

    /// Translates a data value into a pixel offset in `0..=domain`.
    ///
    /// Values outside `min..=max` are not clamped; they extrapolate past the span.
    fn translate(&self, value: f64) -> i32;
}

/// A linear range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousRange {
    /// The smallest value of the data domain.
    pub min: f64,
    /// The largest value of the data domain.
    pub max: f64,
    /// The pixel span.
    pub domain: i32,
}

impl ContinuousRange {
    /// Creates a linear range mapping `min..=max` onto `0..=domain` pixels.
    #[must_use]
    pub const fn new(min: f64, max: f64, domain: i32) -> Self {
        Self { min, max, domain }
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// Returns a copy with a different pixel span.
    #[must_use]
    pub const fn with_domain(mut self, domain: i32) -> Self {
        self.domain = domain;
        self
    }
}

impl Range for ContinuousRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn domain(&self) -> i32 {
        self.domain
    }

    fn translate(&self, value: f64) -> i32 {
        let delta = self.delta();
        if delta == 0.0 {
            return 0;
        }
        let ratio = (value - self.min) / delta;
        float::round_px(ratio * f64::from(self.domain))
    }
}

/// A base-10 logarithmic range.
///
/// The domain must be strictly positive; non-positive values translate to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogRange {
    /// The smallest value of the data domain.
    pub min: f64,
    /// The largest value of the data domain.
    pub max: f64,
    /// The pixel span.
    pub domain: i32,
}

impl LogRange {
    /// Creates a log range mapping `min..=max` onto `0..=domain` pixels.
    #[must_use]
    pub const fn new(min: f64, max: f64, domain: i32) -> Self {
        Self { min, max, domain }
    }
}

impl Range for LogRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn domain(&self) -> i32 {
        self.domain
    }

    fn translate(&self, value: f64) -> i32 {
        if value <= 0.0 || self.min <= 0.0 || self.max <= 0.0 {
            return 0;
        }
        let lo = float::log10(self.min);
        let delta = float::log10(self.max) - lo;
        if delta == 0.0 {
            return 0;
        }
        let ratio = (float::log10(value) - lo) / delta;
        float::round_px(ratio * f64::from(self.domain))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_and_midpoint() {
        let r = ContinuousRange::new(0.0, 10.0, 100);
        assert_eq!(r.translate(0.0), 0, "min maps to 0");
        assert_eq!(r.translate(10.0), 100, "max maps to the span");
        assert_eq!(r.translate(5.0), 50, "midpoint");
        assert_eq!(r.translate(3.333), 33, "rounds to the nearest pixel");
    }

    #[test]
    fn linear_extrapolates_outside_domain() {
        let r = ContinuousRange::new(0.0, 10.0, 100);
        assert_eq!(r.translate(20.0), 200, "no clamping above");
        assert_eq!(r.translate(-5.0), -50, "no clamping below");
    }

    #[test]
    fn linear_offset_domain() {
        let r = ContinuousRange::new(100.0, 200.0, 50);
        assert_eq!(r.translate(150.0), 25, "offset min is subtracted first");
        assert_eq!(r.with_domain(10).translate(150.0), 5, "with_domain rescales");
    }

    #[test]
    fn degenerate_domain_maps_to_zero() {
        let r = ContinuousRange::new(3.0, 3.0, 100);
        assert_eq!(r.translate(3.0), 0, "zero delta");
        assert_eq!(r.translate(42.0), 0, "zero delta, any value");
    }

    #[test]
    fn log_range_decades_are_even() {
        let r = LogRange::new(1.0, 1000.0, 300);
        assert_eq!(r.translate(1.0), 0, "min");
        assert_eq!(r.translate(10.0), 100, "first decade");
        assert_eq!(r.translate(100.0), 200, "second decade");
        assert_eq!(r.translate(1000.0), 300, "max");
        assert_eq!(r.translate(0.0), 0, "non-positive values");
    }
}
