//! Layout engine for the horizontal bar form.
//!
//! The bar is a single row: reached segment, percentage label, unreached
//! segment, all vertically centered on the allocated box's horizontal
//! centerline. The engine is a pure function of the style snapshot, the
//! allocated size, and the text-measurement capability; the only state it
//! keeps is the drawable width recorded by the last measure pass.

use crate::{
    Constraint, DimensionValue, EdgeInsets, FontMetrics, Progress, ProgressStyle, Px, PxSize,
    Renderer,
};

/// Resolved geometry for one frame of the bar form.
///
/// Recomputed every frame and never cached across frames; progress, size, or
/// style may change in between.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPlan {
    /// Drawable width: allocated width minus horizontal padding.
    pub real_width: f32,
    /// End of the reached segment. Not drawn when `<= 0`.
    pub end_x: f32,
    /// Label start x, after overflow correction.
    pub progress_x: f32,
    /// Advance width of the label.
    pub text_width: f32,
    /// Label baseline offset from the centerline.
    pub label_baseline_y: f32,
    /// Start of the unreached segment.
    pub unreached_start: f32,
    /// Whether the unreached segment is fully occluded by the label and
    /// skipped.
    pub skip_unreached: bool,
    /// The percentage label text.
    pub label: String,
}

/// Layout and draw-plan engine for the bar form.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LinearEngine {
    real_width: f32,
    allocated_height: f32,
}

impl LinearEngine {
    /// Creates an engine with no measured geometry yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawable width recorded by the last measure pass.
    pub fn real_width(&self) -> f32 {
        self.real_width
    }

    /// Resolves the allocated size for this frame.
    ///
    /// Width is taken verbatim from the constraint; the bar never proposes
    /// its own width. Height honors an exact constraint unchanged, otherwise
    /// it is the tallest of the two strokes and a line of label text, plus
    /// vertical padding, capped by any upper bound.
    pub fn measure(
        &mut self,
        constraint: &Constraint,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
    ) -> PxSize {
        let width = constraint.width.available();

        let height = match constraint.height {
            DimensionValue::Fixed(value) => value,
            other => {
                let text_height = metrics.line_height(style.text_size);
                let intrinsic = padding.vertical()
                    + style
                        .reached_stroke_width
                        .max(style.unreached_stroke_width)
                        .max(text_height);
                other.resolve(Px::from_f32(intrinsic))
            }
        };

        self.real_width = width.to_f32() - padding.horizontal();
        self.allocated_height = height.to_f32();
        PxSize::new(width, height)
    }

    /// Computes the draw plan for one frame.
    ///
    /// Never fails: a zero or negative drawable width degenerates to a plan
    /// that draws nothing but the label.
    pub fn plan(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        metrics: &dyn FontMetrics,
    ) -> LinearPlan {
        let real_width = self.real_width;
        let ratio = progress.ratio();
        let label = progress.percent_label();
        let text_width = metrics.measure_width(&label, style.text_size);

        let end_x = ratio * real_width - style.text_offset / 2.0;
        let mut progress_x = ratio * real_width;
        let mut skip_unreached = false;
        // Keep the label inside the right edge; at that point it fully
        // occludes what remains of the unreached track.
        if progress_x + text_width > real_width {
            progress_x = real_width - text_width;
            skip_unreached = true;
        }

        let ascent = metrics.ascent(style.text_size);
        let descent = metrics.descent(style.text_size);

        LinearPlan {
            real_width,
            end_x,
            progress_x,
            text_width,
            label_baseline_y: -(descent + ascent) / 2.0,
            unreached_start: progress_x + style.text_offset + text_width,
            skip_unreached,
            label,
        }
    }

    /// Computes this frame's plan and replays it as drawing primitives.
    pub fn record(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
        renderer: &mut dyn Renderer,
    ) {
        let plan = self.plan(progress, style, metrics);

        renderer.translate(padding.left, self.allocated_height / 2.0);

        if plan.end_x > 0.0 {
            renderer.draw_line(
                0.0,
                0.0,
                plan.end_x,
                0.0,
                style.reached_stroke_width,
                style.reached_color,
            );
        }

        renderer.draw_text(
            &plan.label,
            plan.progress_x,
            plan.label_baseline_y,
            style.text_color,
        );

        if !plan.skip_unreached {
            renderer.draw_line(
                plan.unreached_start,
                0.0,
                plan.real_width,
                0.0,
                style.unreached_stroke_width,
                style.unreached_color,
            );
        }
    }
}
