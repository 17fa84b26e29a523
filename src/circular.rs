//! Layout engine for the circular ring form.
//!
//! The ring is always square, sized to the tighter of the two axes. The
//! configured radius is a hint: measurement re-derives the effective radius
//! from the resolved side, so a constrained allocation shrinks the ring
//! instead of clipping it. The label is centered inside the ring by
//! construction, so no overflow policy exists in this form.

use crate::{
    ArcCap, Constraint, EdgeInsets, FontMetrics, Progress, ProgressStyle, Px, PxSize, Rect,
    Renderer,
};

/// Resolved geometry for one frame of the ring form.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularPlan {
    /// Effective radius re-derived from the resolved side.
    pub resolved_radius: f32,
    /// The wider of the two track strokes.
    pub max_stroke_width: f32,
    /// Clockwise arc sweep from 0°, in degrees.
    pub sweep_angle_degrees: f32,
    /// Baseline origin of the centered label.
    pub label_origin: (f32, f32),
    /// Advance width of the label.
    pub text_width: f32,
    /// The percentage label text.
    pub label: String,
}

/// Layout and draw-plan engine for the ring form.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CircularEngine {
    radius: f32,
    max_stroke_width: f32,
}

impl CircularEngine {
    /// Creates an engine with no measured geometry yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective radius recorded by the last measure pass.
    pub fn resolved_radius(&self) -> f32 {
        self.radius
    }

    /// Resolves the square allocated size for this frame.
    ///
    /// Wants `radius*2 + maxStrokeWidth` plus horizontal padding on both
    /// axes; each axis is resolved independently against its constraint and
    /// the square side is the smaller result. The effective radius is then
    /// re-derived from that side.
    pub fn measure(
        &mut self,
        constraint: &Constraint,
        style: &ProgressStyle,
        padding: EdgeInsets,
        _metrics: &dyn FontMetrics,
    ) -> PxSize {
        let max_stroke_width = style.max_stroke_width();
        let expected = Px::from_f32(
            style.radius * 2.0 + max_stroke_width + padding.left + padding.right,
        );

        let width = constraint.width.resolve(expected);
        let height = constraint.height.resolve(expected);
        let side = width.min(height);

        self.max_stroke_width = max_stroke_width;
        self.radius = (side.to_f32() - padding.horizontal() - max_stroke_width) / 2.0;
        PxSize::new(side, side)
    }

    /// Computes the draw plan for one frame.
    pub fn plan(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        metrics: &dyn FontMetrics,
    ) -> CircularPlan {
        let label = progress.percent_label();
        let text_width = metrics.measure_width(&label, style.text_size);
        // Signed baseline offset, not a magnitude: negative when the ascent
        // dominates, which pushes the baseline below the center.
        let text_height =
            (metrics.descent(style.text_size) + metrics.ascent(style.text_size)) / 2.0;

        CircularPlan {
            resolved_radius: self.radius,
            max_stroke_width: self.max_stroke_width,
            sweep_angle_degrees: progress.ratio() * 360.0,
            label_origin: (
                self.radius - text_width / 2.0,
                self.radius - text_height,
            ),
            text_width,
            label,
        }
    }

    /// Computes this frame's plan and replays it as drawing primitives.
    ///
    /// The background ring is always drawn; the progress arc is emitted only
    /// for a positive sweep, mirroring the bar form's reached-segment guard.
    pub fn record(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
        renderer: &mut dyn Renderer,
    ) {
        let plan = self.plan(progress, style, metrics);
        let radius = plan.resolved_radius;

        renderer.translate(
            padding.left + plan.max_stroke_width / 2.0,
            padding.top + plan.max_stroke_width / 2.0,
        );

        renderer.draw_circle_outline(
            radius,
            radius,
            radius,
            style.unreached_stroke_width,
            style.unreached_color,
        );

        if plan.sweep_angle_degrees > 0.0 {
            renderer.draw_arc(
                Rect::new(0.0, 0.0, radius * 2.0, radius * 2.0),
                0.0,
                plan.sweep_angle_degrees,
                style.reached_stroke_width,
                ArcCap::Round,
                style.reached_color,
            );
        }

        renderer.draw_text(
            &plan.label,
            plan.label_origin.0,
            plan.label_origin.1,
            style.text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StubMetrics;
    use crate::render::{CommandRecorder, DrawCommand};
    use crate::style::ProgressStyleArgs;
    use crate::{Color, DimensionValue, Dp};

    fn style() -> ProgressStyle {
        ProgressStyleArgs::default().resolve().expect("valid style")
    }

    fn metrics(text_width: f32) -> StubMetrics {
        StubMetrics {
            text_width,
            ascent: -8.0,
            descent: 2.0,
        }
    }

    #[test]
    fn test_exact_constraints_rederive_radius() {
        // Both axes Exact(200): side is 200 and the configured 30dp radius
        // hint is replaced by (200 - maxStroke) / 2.
        let mut engine = CircularEngine::new();
        let size = engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        assert_eq!(size, PxSize::new(Px(200), Px(200)));
        assert_eq!(engine.resolved_radius(), 99.0);
    }

    #[test]
    fn test_unconstrained_measure_honors_radius_hint() {
        // expected = 30*2 + 2 = 62; with no bounds the hint survives the
        // re-derivation exactly.
        let mut engine = CircularEngine::new();
        let size = engine.measure(
            &Constraint::NONE,
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        assert_eq!(size, PxSize::new(Px(62), Px(62)));
        assert_eq!(engine.resolved_radius(), 30.0);
    }

    #[test]
    fn test_side_is_tighter_axis() {
        let mut engine = CircularEngine::new();
        let size = engine.measure(
            &Constraint::exact(Px(200), Px(100)),
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        assert_eq!(size, PxSize::new(Px(100), Px(100)));
        assert_eq!(engine.resolved_radius(), 49.0);
    }

    #[test]
    fn test_rederived_radius_fits_resolved_side() {
        // radius*2 + maxStroke + paddingLeft + paddingRight <= side, for
        // hinted radii both above and below the available space.
        let padding = EdgeInsets {
            left: 4.0,
            top: 0.0,
            right: 6.0,
            bottom: 0.0,
        };
        for (hint, cap) in [(30.0, 50), (30.0, 500), (120.0, 90)] {
            let style = ProgressStyleArgs::default()
                .radius(Dp(hint))
                .resolve()
                .expect("valid style");
            let mut engine = CircularEngine::new();
            let size = engine.measure(
                &Constraint::new(
                    DimensionValue::Wrap {
                        min: None,
                        max: Some(Px(cap)),
                    },
                    DimensionValue::Wrap {
                        min: None,
                        max: Some(Px(cap)),
                    },
                ),
                &style,
                padding,
                &metrics(20.0),
            );
            let side = size.width.to_f32();
            let occupied = engine.resolved_radius() * 2.0
                + style.max_stroke_width()
                + padding.left
                + padding.right;
            assert!(occupied <= side + 1e-3);
        }
    }

    #[test]
    fn test_sweep_angle_boundaries() {
        let mut engine = CircularEngine::new();
        engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        let empty = engine.plan(Progress::new(0, 100).expect("valid"), &style(), &metrics(20.0));
        assert_eq!(empty.sweep_angle_degrees, 0.0);
        let full = engine.plan(
            Progress::new(100, 100).expect("valid"),
            &style(),
            &metrics(20.0),
        );
        assert_eq!(full.sweep_angle_degrees, 360.0);
    }

    #[test]
    fn test_label_centered_inside_ring() {
        // radius 99, textWidth 40, textHeight (2 + (-8)) / 2 = -3: origin
        // (99 - 20, 99 + 3).
        let mut engine = CircularEngine::new();
        engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &style(),
            EdgeInsets::ZERO,
            &metrics(40.0),
        );
        let plan = engine.plan(Progress::new(50, 100).expect("valid"), &style(), &metrics(40.0));
        assert_eq!(plan.label_origin, (79.0, 102.0));
    }

    #[test]
    fn test_record_emits_ring_arc_label() {
        let mut engine = CircularEngine::new();
        let padding = EdgeInsets {
            left: 3.0,
            top: 5.0,
            right: 0.0,
            bottom: 0.0,
        };
        engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &style(),
            padding,
            &metrics(20.0),
        );
        let mut recorder = CommandRecorder::new();
        engine.record(
            Progress::new(25, 100).expect("valid"),
            &style(),
            padding,
            &metrics(20.0),
            &mut recorder,
        );

        // Local origin at (paddingLeft + maxStroke/2, paddingTop + maxStroke/2).
        assert_eq!(
            recorder.commands[0],
            DrawCommand::Translate { dx: 4.0, dy: 6.0 }
        );
        assert!(matches!(
            recorder.commands[1],
            DrawCommand::CircleOutline { .. }
        ));
        match &recorder.commands[2] {
            DrawCommand::Arc {
                start_angle_degrees,
                sweep_angle_degrees,
                cap,
                bounds,
                ..
            } => {
                assert_eq!(*start_angle_degrees, 0.0);
                assert_eq!(*sweep_angle_degrees, 90.0);
                assert_eq!(*cap, ArcCap::Round);
                assert_eq!(bounds.width, bounds.height);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        assert!(matches!(recorder.commands[3], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_zero_progress_still_draws_background_ring() {
        let mut engine = CircularEngine::new();
        engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        let mut recorder = CommandRecorder::new();
        engine.record(
            Progress::new(0, 100).expect("valid"),
            &style(),
            EdgeInsets::ZERO,
            &metrics(20.0),
            &mut recorder,
        );

        // Translate, ring, label; no arc for a zero sweep.
        assert_eq!(recorder.commands.len(), 3);
        assert!(matches!(
            recorder.commands[1],
            DrawCommand::CircleOutline { .. }
        ));
        assert!(matches!(recorder.commands[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_ring_uses_unreached_paint_and_arc_uses_reached_paint() {
        let custom = ProgressStyleArgs::default()
            .unreached_color(Color::from_rgba_u8(1, 2, 3, 255))
            .reached_color(Color::from_rgba_u8(9, 8, 7, 255))
            .unreached_stroke_width(Dp(3.0))
            .reached_stroke_width(Dp(5.0))
            .resolve()
            .expect("valid style");
        let mut engine = CircularEngine::new();
        engine.measure(
            &Constraint::exact(Px(200), Px(200)),
            &custom,
            EdgeInsets::ZERO,
            &metrics(20.0),
        );
        let mut recorder = CommandRecorder::new();
        engine.record(
            Progress::new(50, 100).expect("valid"),
            &custom,
            EdgeInsets::ZERO,
            &metrics(20.0),
            &mut recorder,
        );

        match &recorder.commands[1] {
            DrawCommand::CircleOutline {
                stroke_width,
                color,
                ..
            } => {
                assert_eq!(*stroke_width, 3.0);
                assert_eq!(*color, custom.unreached_color);
            }
            other => panic!("expected circle outline, got {other:?}"),
        }
        match &recorder.commands[2] {
            DrawCommand::Arc {
                stroke_width,
                color,
                ..
            } => {
                assert_eq!(*stroke_width, 5.0);
                assert_eq!(*color, custom.reached_color);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }
}
