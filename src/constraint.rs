//! Layout constraints proposed by a parent container.
//!
//! A parent proposes each axis in one of three ways: an exact size
//! ([`DimensionValue::Fixed`]), an intrinsic size with optional bounds
//! ([`DimensionValue::Wrap`]), or all available space with optional bounds
//! ([`DimensionValue::Fill`]). The engines honor `Fixed` verbatim and treat
//! any `max` bound as an upper cap on their intrinsic size.

use crate::Px;

/// Defines how a dimension (width or height) should be calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    /// The dimension is an exact value in device pixels.
    ///
    /// A fixed dimension cannot be overridden by the measured component and
    /// is returned unchanged by constraint resolution.
    Fixed(Px),

    /// The dimension should wrap its content, optionally bounded by min
    /// and/or max device pixels.
    Wrap {
        /// Optional lower bound on the resolved size.
        min: Option<Px>,
        /// Optional upper bound on the resolved size.
        max: Option<Px>,
    },

    /// The dimension should fill the available space, optionally bounded by
    /// min and/or max device pixels.
    Fill {
        /// Optional lower bound on the resolved size.
        min: Option<Px>,
        /// Optional upper bound on the resolved size.
        max: Option<Px>,
    },
}

impl DimensionValue {
    /// Wrap with no bounds: the component picks its own size.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Fill with no bounds.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Returns the maximum value of this dimension, if defined.
    pub fn get_max(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { max, .. } => *max,
            DimensionValue::Fill { max, .. } => *max,
        }
    }

    /// Returns the minimum value of this dimension, if defined.
    pub fn get_min(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { min, .. } => *min,
            DimensionValue::Fill { min, .. } => *min,
        }
    }

    /// Resolves this constraint against a component's intrinsic size.
    ///
    /// - `Fixed` returns the constrained value, ignoring `intrinsic`.
    /// - Bounded `Wrap`/`Fill` clamp `intrinsic` into `[min, max]`.
    /// - Unbounded `Wrap`/`Fill` return `intrinsic` unchanged.
    pub fn resolve(&self, intrinsic: Px) -> Px {
        match *self {
            DimensionValue::Fixed(value) => value,
            DimensionValue::Wrap { min, max } | DimensionValue::Fill { min, max } => intrinsic
                .max(min.unwrap_or(Px::ZERO))
                .min(max.unwrap_or(Px::MAX)),
        }
    }

    /// Returns the space a parent makes available on this axis.
    ///
    /// This is the width rule for components that never propose their own
    /// width: `Fixed` yields the exact value, bounded modes yield their cap,
    /// and an unbounded axis degenerates to zero available space.
    pub fn available(&self) -> Px {
        match self {
            DimensionValue::Fixed(value) => *value,
            DimensionValue::Wrap { max, .. } => max.unwrap_or(Px::ZERO),
            DimensionValue::Fill { max, .. } => max.unwrap_or(Px::ZERO),
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        DimensionValue::WRAP
    }
}

/// Layout constraints for both axes of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraint {
    /// The width dimension constraint.
    pub width: DimensionValue,
    /// The height dimension constraint.
    pub height: DimensionValue,
}

impl Constraint {
    /// A constraint that specifies no preference on either axis.
    pub const NONE: Self = Self {
        width: DimensionValue::WRAP,
        height: DimensionValue::WRAP,
    };

    /// Creates a new constraint with the specified width and height.
    pub fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// Creates a constraint fixing both axes to exact pixel sizes.
    pub fn exact(width: Px, height: Px) -> Self {
        Self {
            width: DimensionValue::Fixed(width),
            height: DimensionValue::Fixed(height),
        }
    }
}
