//! Density-independent pixels (dp) for style parameters.
//!
//! Style defaults are specified in dp so they keep the same physical size
//! across screen densities; all geometry below the style layer works in
//! device pixels. The conversion is controlled by a process-wide scale
//! factor that the host toolkit sets once it knows the display density.

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between dp and device pixels.
///
/// Typically written once at startup from the display density, and re-written
/// only when the window moves to a monitor with a different density. Reads
/// fall back to `1.0` while unset, which keeps headless use (tests, golden
/// geometry dumps) deterministic.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global dp scale factor.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(factor));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// A length in density-independent pixels.
///
/// `Dp(48.0)` is roughly the same physical size on a low-DPI laptop screen
/// and a high-DPI phone. Convert to device pixels with
/// [`to_pixels_f32`](Dp::to_pixels_f32) or [`to_px`](Dp::to_px) when a
/// pixel-precise measurement is required.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to device pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts this dp value to device pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Creates a `Dp` value from device pixels.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts this `Dp` value to a rounded [`Px`] value.
    pub fn to_px(&self) -> Px {
        Px::from_f32(self.to_pixels_f32())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}
