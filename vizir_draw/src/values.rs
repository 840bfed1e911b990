// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indexable `(x, y)` data sources.

use alloc::vec::Vec;

/// An ordered, indexable sequence of `(x, y)` pairs.
pub trait ValueProvider {
    /// Number of pairs.
    fn len(&self) -> usize;

    /// Returns the pair at `index`.
    ///
    /// Callers only pass indices below [`ValueProvider::len`].
    fn value(&self, index: usize) -> (f64, f64);

    /// Returns `true` when there are no pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValueProvider for [(f64, f64)] {
    fn len(&self) -> usize {
        <[(f64, f64)]>::len(self)
    }

    fn value(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

impl ValueProvider for Vec<(f64, f64)> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn value(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

impl<const N: usize> ValueProvider for [(f64, f64); N] {
    fn len(&self) -> usize {
        N
    }

    fn value(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn value(&self, index: usize) -> (f64, f64) {
        (**self).value(index)
    }
}

/// Parallel x and y columns.
///
/// The length is the shorter of the two columns; trailing values of the longer one
/// are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyValues {
    /// X values.
    pub x: Vec<f64>,
    /// Y values.
    pub y: Vec<f64>,
}

impl XyValues {
    /// Creates a provider from two columns.
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    /// Splits pairs into columns.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self { x, y }
    }
}

impl ValueProvider for XyValues {
    fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    fn value(&self, index: usize) -> (f64, f64) {
        (self.x[index], self.y[index])
    }
}
