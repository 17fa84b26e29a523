//! Progress value pair driving both engines.

use thiserror::Error;

/// Invalid progress value reported at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// The maximum must be strictly positive, otherwise the ratio is
    /// undefined.
    #[error("progress maximum must be positive")]
    ZeroMax,
}

/// A current/maximum progress pair.
///
/// `current > max` is accepted and clamped when the ratio is computed, so a
/// host that overshoots its own bookkeeping renders a full indicator instead
/// of a faulty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progress {
    current: u32,
    max: u32,
}

impl Progress {
    /// Creates a progress pair, rejecting a zero maximum.
    pub fn new(current: u32, max: u32) -> Result<Self, ProgressError> {
        if max == 0 {
            return Err(ProgressError::ZeroMax);
        }
        Ok(Self { current, max })
    }

    /// The current value.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// The maximum value.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns this pair with a new current value.
    pub fn with_current(self, current: u32) -> Self {
        Self { current, ..self }
    }

    /// Fractional completion, clamped to `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// The percentage label, e.g. `"50%"`.
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.ratio() * 100.0).round() as u32)
    }
}
