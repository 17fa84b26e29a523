//! Style parameters shared by the linear and circular engines.
//!
//! Configuration follows a two-step shape: [`ProgressStyleArgs`] is the
//! mutable builder in density-independent units, and [`ProgressStyle`] is the
//! immutable device-pixel snapshot the engines read during a frame. Any
//! runtime style change resolves a fresh snapshot; nothing mutates a style a
//! frame is currently observing.

use derive_setters::Setters;
use thiserror::Error;

use crate::{Color, Dp};

/// Invalid style parameter reported at configuration time.
///
/// Frame computation never fails; every style constraint is checked once,
/// when the snapshot is resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// The text size must be strictly positive.
    #[error("text size must be positive, got {0}px")]
    NonPositiveTextSize(f32),
    /// Stroke widths must be non-negative.
    #[error("stroke width must be non-negative, got {0}px")]
    NegativeStrokeWidth(f32),
    /// The configured radius must be non-negative.
    #[error("radius must be non-negative, got {0}px")]
    NegativeRadius(f32),
    /// The label gap must be non-negative.
    #[error("text offset must be non-negative, got {0}px")]
    NegativeTextOffset(f32),
}

/// Default style values.
///
/// These mirror the stock appearance of the widget: a thin two-pixel track
/// with a magenta reached segment and label.
pub struct StyleDefaults;

impl StyleDefaults {
    /// Default label size.
    pub const TEXT_SIZE: Dp = Dp(10.0);
    /// Default track thickness, reached and unreached.
    pub const STROKE_WIDTH: Dp = Dp(2.0);
    /// Default gap reserved between the label and the unreached track.
    pub const TEXT_OFFSET: Dp = Dp(10.0);
    /// Default ring radius for the circular form.
    pub const RADIUS: Dp = Dp(30.0);

    /// Default label and reached-segment color.
    pub fn reached_color() -> Color {
        Color::from_argb_u32(0xFFFC00D1)
    }

    /// Default unreached-track color.
    pub fn unreached_color() -> Color {
        Color::from_argb_u32(0xFFD3D6DA)
    }
}

/// Configurable style parameters, in density-independent units.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ProgressStyleArgs {
    /// Size of the percentage label.
    pub text_size: Dp,
    /// Color of the percentage label.
    pub text_color: Color,
    /// Color of the unreached track.
    pub unreached_color: Color,
    /// Stroke width of the unreached track.
    pub unreached_stroke_width: Dp,
    /// Color of the reached segment / progress arc.
    pub reached_color: Color,
    /// Stroke width of the reached segment / progress arc.
    pub reached_stroke_width: Dp,
    /// Gap reserved between the label and the unreached track.
    pub text_offset: Dp,
    /// Ring radius hint for the circular form.
    ///
    /// The circular engine re-derives the effective radius from the resolved
    /// size, so this is a hint, not a guarantee, when space is constrained.
    pub radius: Dp,
}

impl Default for ProgressStyleArgs {
    fn default() -> Self {
        Self {
            text_size: StyleDefaults::TEXT_SIZE,
            text_color: StyleDefaults::reached_color(),
            unreached_color: StyleDefaults::unreached_color(),
            unreached_stroke_width: StyleDefaults::STROKE_WIDTH,
            reached_color: StyleDefaults::reached_color(),
            reached_stroke_width: StyleDefaults::STROKE_WIDTH,
            text_offset: StyleDefaults::TEXT_OFFSET,
            radius: StyleDefaults::RADIUS,
        }
    }
}

impl ProgressStyleArgs {
    /// Validates the parameters and resolves them into a device-pixel
    /// snapshot.
    pub fn resolve(&self) -> Result<ProgressStyle, StyleError> {
        let style = ProgressStyle {
            text_size: self.text_size.to_pixels_f32(),
            text_color: self.text_color,
            unreached_color: self.unreached_color,
            unreached_stroke_width: self.unreached_stroke_width.to_pixels_f32(),
            reached_color: self.reached_color,
            reached_stroke_width: self.reached_stroke_width.to_pixels_f32(),
            text_offset: self.text_offset.to_pixels_f32(),
            radius: self.radius.to_pixels_f32(),
        };
        if style.text_size <= 0.0 {
            return Err(StyleError::NonPositiveTextSize(style.text_size));
        }
        if style.reached_stroke_width < 0.0 {
            return Err(StyleError::NegativeStrokeWidth(style.reached_stroke_width));
        }
        if style.unreached_stroke_width < 0.0 {
            return Err(StyleError::NegativeStrokeWidth(
                style.unreached_stroke_width,
            ));
        }
        if style.radius < 0.0 {
            return Err(StyleError::NegativeRadius(style.radius));
        }
        if style.text_offset < 0.0 {
            return Err(StyleError::NegativeTextOffset(style.text_offset));
        }
        Ok(style)
    }
}

/// Resolved style snapshot in device pixels, read by the engines.
///
/// Created once per configuration change and treated as immutable for the
/// lifetime of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStyle {
    /// Label size in device pixels.
    pub text_size: f32,
    /// Label color.
    pub text_color: Color,
    /// Unreached-track color.
    pub unreached_color: Color,
    /// Unreached-track stroke width in device pixels.
    pub unreached_stroke_width: f32,
    /// Reached-segment color.
    pub reached_color: Color,
    /// Reached-segment stroke width in device pixels.
    pub reached_stroke_width: f32,
    /// Label gap in device pixels.
    pub text_offset: f32,
    /// Ring radius hint in device pixels.
    pub radius: f32,
}

impl ProgressStyle {
    /// The wider of the two track strokes.
    pub fn max_stroke_width(&self) -> f32 {
        self.reached_stroke_width.max(self.unreached_stroke_width)
    }
}

/// Padding around the drawable area, in device pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl EdgeInsets {
    /// No padding.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Uniform padding on all four edges.
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Uniform padding from a dp value, via the global scale factor.
    pub fn all_dp(value: Dp) -> Self {
        Self::all(value.to_pixels_f32())
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
