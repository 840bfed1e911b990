// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds and pixel snapping.
//!
//! Rust's float math methods like `f64::ceil` and `f64::log10` are not available in `core`.
//! We provide a small trait that dispatches to `libm` when `std` is off, plus the helpers
//! that turn layout math into integer pixel coordinates.

/// Float math helpers for `f64` in `no_std` mode.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatExt {
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vizir_draw requires either the `std` or `libm` feature");

/// Converts an already-snapped value into a pixel coordinate.
///
/// Non-finite input maps to `0`; out-of-range input saturates.
fn to_px(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "`as` saturates at the i32 bounds, which is the clamping we want"
    )]
    {
        v as i32
    }
}

/// Rounds to the nearest pixel.
pub(crate) fn round_px(v: f64) -> i32 {
    to_px(v.round())
}

/// Rounds up to the next whole pixel.
pub(crate) fn ceil_px(v: f64) -> i32 {
    to_px(v.ceil())
}

pub(crate) fn log10(v: f64) -> f64 {
    v.log10()
}
