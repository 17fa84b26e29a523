//! Device pixel values for measured sizes.
//!
//! Measurement resolves whole device pixels ([`Px`]), matching what a parent
//! layout container allocates; draw-plan geometry below that level is `f32`.

use std::ops::{Add, Sub};

use crate::Dp;

/// A device pixel coordinate value.
///
/// Supports negative values so degenerate layouts (padding larger than the
/// allocation) stay representable instead of faulting.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The maximum possible pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, rounding to the nearest pixel.
    ///
    /// Out-of-range values saturate instead of overflowing.
    pub fn from_f32(value: f32) -> Self {
        Px(value.round() as i32)
    }

    /// Creates a `Px` from a [`Dp`] value using the global scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        dp.to_px()
    }

    /// Returns the larger of two pixel values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Returns the smaller of two pixel values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

/// A measured size in device pixels, the result of a layout pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width in device pixels.
    pub width: Px,
    /// Height in device pixels.
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}
