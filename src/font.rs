//! Text measurement capability consumed by both layout engines.
//!
//! The engines never shape text themselves; the host supplies an object that
//! can report advance widths and vertical font metrics for a font size. The
//! sign convention follows the usual raster convention: `ascent` is the
//! offset from the baseline to the top of the line and is `<= 0`, `descent`
//! is the offset to the bottom and is `>= 0`.

/// Font measurement interface for the percentage label.
pub trait FontMetrics {
    /// Returns the advance width of `text` at `font_size`, in device pixels.
    fn measure_width(&self, text: &str, font_size: f32) -> f32;

    /// Baseline-relative top of a line at `font_size`. Non-positive.
    fn ascent(&self, font_size: f32) -> f32;

    /// Baseline-relative bottom of a line at `font_size`. Non-negative.
    fn descent(&self, font_size: f32) -> f32;

    /// Vertical extent a single line of text occupies at `font_size`.
    fn line_height(&self, font_size: f32) -> f32 {
        (self.descent(font_size) - self.ascent(font_size)).abs()
    }
}

/// Ratio-based font metrics for headless use.
///
/// Approximates a typical Latin UI face with fixed ratios of the font size.
/// Good enough for golden-geometry tests and for hosts that have not wired a
/// real shaper yet; production hosts should implement [`FontMetrics`] on top
/// of their text stack instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxFontMetrics {
    /// Ascent as a (negative) fraction of the font size.
    pub ascent_ratio: f32,
    /// Descent as a (positive) fraction of the font size.
    pub descent_ratio: f32,
    /// Per-character advance as a fraction of the font size.
    pub advance_ratio: f32,
}

impl Default for ApproxFontMetrics {
    fn default() -> Self {
        Self {
            ascent_ratio: -0.93,
            descent_ratio: 0.24,
            advance_ratio: 0.6,
        }
    }
}

impl FontMetrics for ApproxFontMetrics {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_ratio * font_size
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.ascent_ratio * font_size
    }

    fn descent(&self, font_size: f32) -> f32 {
        self.descent_ratio * font_size
    }
}

/// Fixed-output metrics so scenario tests can pin exact label widths.
#[cfg(test)]
pub(crate) struct StubMetrics {
    pub text_width: f32,
    pub ascent: f32,
    pub descent: f32,
}

#[cfg(test)]
impl FontMetrics for StubMetrics {
    fn measure_width(&self, _text: &str, _font_size: f32) -> f32 {
        self.text_width
    }

    fn ascent(&self, _font_size: f32) -> f32 {
        self.ascent
    }

    fn descent(&self, _font_size: f32) -> f32 {
        self.descent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_metrics_sign_convention() {
        let metrics = ApproxFontMetrics::default();
        assert!(metrics.ascent(10.0) < 0.0);
        assert!(metrics.descent(10.0) > 0.0);
        assert_eq!(metrics.line_height(10.0), 0.24 * 10.0 + 0.93 * 10.0);
    }

    #[test]
    fn test_approx_width_scales_with_size_and_length() {
        let metrics = ApproxFontMetrics::default();
        let narrow = metrics.measure_width("5%", 10.0);
        let wide = metrics.measure_width("100%", 10.0);
        assert!(wide > narrow);
        assert_eq!(metrics.measure_width("50%", 20.0), 3.0 * 0.6 * 20.0);
    }
}
