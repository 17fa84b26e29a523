//! Widget facade tying one style snapshot to one layout engine.
//!
//! The two engines are independent implementations of [`LayoutEngine`],
//! selected by the widget variant; neither inherits from the other. Per
//! frame the host calls [`ProgressIndicator::measure`] once with the parent
//! constraint, finalizes the allocation, then calls
//! [`ProgressIndicator::render`] once. Both calls happen on the same thread;
//! style changes must land between frames.

use tracing::trace;

use crate::{
    CircularEngine, Constraint, EdgeInsets, FontMetrics, LinearEngine, Progress, ProgressStyle,
    ProgressStyleArgs, PxSize, Renderer, StyleError,
};

/// Capability set shared by both layout engines: resolve a size, then
/// record a frame.
///
/// Implementations are pure functions of the style snapshot, the allocated
/// size, and the text-measurement capability, plus the geometry memoized by
/// their own last `measure` call.
pub trait LayoutEngine {
    /// Resolves the allocated size against the parent constraint and
    /// memoizes the geometry the draw pass needs.
    fn measure(
        &mut self,
        constraint: &Constraint,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
    ) -> PxSize;

    /// Computes this frame's draw plan and replays it on the renderer.
    fn record(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
        renderer: &mut dyn Renderer,
    );
}

impl LayoutEngine for LinearEngine {
    fn measure(
        &mut self,
        constraint: &Constraint,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
    ) -> PxSize {
        LinearEngine::measure(self, constraint, style, padding, metrics)
    }

    fn record(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
        renderer: &mut dyn Renderer,
    ) {
        LinearEngine::record(self, progress, style, padding, metrics, renderer)
    }
}

impl LayoutEngine for CircularEngine {
    fn measure(
        &mut self,
        constraint: &Constraint,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
    ) -> PxSize {
        CircularEngine::measure(self, constraint, style, padding, metrics)
    }

    fn record(
        &self,
        progress: Progress,
        style: &ProgressStyle,
        padding: EdgeInsets,
        metrics: &dyn FontMetrics,
        renderer: &mut dyn Renderer,
    ) {
        CircularEngine::record(self, progress, style, padding, metrics, renderer)
    }
}

/// A progress indicator widget: one style snapshot, one progress value, and
/// the engine for the selected visual form.
pub struct ProgressIndicator {
    style: ProgressStyle,
    padding: EdgeInsets,
    progress: Progress,
    engine: Box<dyn LayoutEngine>,
}

impl ProgressIndicator {
    /// Creates a horizontal bar indicator.
    pub fn bar(args: &ProgressStyleArgs) -> Result<Self, StyleError> {
        Ok(Self {
            style: args.resolve()?,
            padding: EdgeInsets::ZERO,
            progress: Progress::new(0, 100).expect("0/100 is valid"),
            engine: Box::new(LinearEngine::new()),
        })
    }

    /// Creates a circular ring indicator.
    pub fn ring(args: &ProgressStyleArgs) -> Result<Self, StyleError> {
        Ok(Self {
            style: args.resolve()?,
            padding: EdgeInsets::ZERO,
            progress: Progress::new(0, 100).expect("0/100 is valid"),
            engine: Box::new(CircularEngine::new()),
        })
    }

    /// Sets the padding around the drawable area.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// The current style snapshot.
    pub fn style(&self) -> &ProgressStyle {
        &self.style
    }

    /// The current progress value.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Replaces the progress value.
    ///
    /// Must be called between frames, never between a frame's measure and
    /// render passes.
    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    /// Resolves a new style snapshot from `args`, replacing the current one.
    ///
    /// Style is swapped as a whole snapshot; a frame in flight keeps the one
    /// it started with.
    pub fn set_style(&mut self, args: &ProgressStyleArgs) -> Result<(), StyleError> {
        self.style = args.resolve()?;
        Ok(())
    }

    /// Measurement pass: resolves this frame's allocated size.
    pub fn measure(&mut self, constraint: &Constraint, metrics: &dyn FontMetrics) -> PxSize {
        let size = self
            .engine
            .measure(constraint, &self.style, self.padding, metrics);
        trace!(
            width = size.width.raw(),
            height = size.height.raw(),
            "measured progress indicator"
        );
        size
    }

    /// Draw pass: records this frame's primitives on the renderer.
    pub fn render(&self, renderer: &mut dyn Renderer, metrics: &dyn FontMetrics) {
        trace!(
            current = self.progress.current(),
            max = self.progress.max(),
            "rendering progress indicator"
        );
        self.engine
            .record(self.progress, &self.style, self.padding, metrics, renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StubMetrics;
    use crate::render::{CommandRecorder, DrawCommand};
    use crate::{Dp, Px};

    fn metrics() -> StubMetrics {
        StubMetrics {
            text_width: 20.0,
            ascent: -8.0,
            descent: 2.0,
        }
    }

    #[test]
    fn test_bar_frame_end_to_end() {
        let mut widget =
            ProgressIndicator::bar(&ProgressStyleArgs::default()).expect("valid defaults");
        widget.set_progress(Progress::new(50, 100).expect("valid"));

        let size = widget.measure(&Constraint::exact(Px(300), Px(20)), &metrics());
        assert_eq!(size, PxSize::new(Px(300), Px(20)));

        let mut recorder = CommandRecorder::new();
        widget.render(&mut recorder, &metrics());
        // Reached line, label, unreached line after the origin translate.
        assert_eq!(recorder.commands.len(), 4);
        assert!(matches!(recorder.commands[1], DrawCommand::Line { .. }));
        assert!(matches!(recorder.commands[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_ring_frame_end_to_end() {
        let mut widget =
            ProgressIndicator::ring(&ProgressStyleArgs::default()).expect("valid defaults");
        widget.set_progress(Progress::new(75, 100).expect("valid"));

        let size = widget.measure(&Constraint::exact(Px(200), Px(200)), &metrics());
        assert_eq!(size, PxSize::new(Px(200), Px(200)));

        let mut recorder = CommandRecorder::new();
        widget.render(&mut recorder, &metrics());
        assert!(matches!(
            recorder.commands[1],
            DrawCommand::CircleOutline { .. }
        ));
        match &recorder.commands[2] {
            DrawCommand::Arc {
                sweep_angle_degrees,
                ..
            } => assert_eq!(*sweep_angle_degrees, 270.0),
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_style_rejected_at_construction() {
        let args = ProgressStyleArgs::default().text_size(Dp(-1.0));
        assert!(ProgressIndicator::bar(&args).is_err());
    }

    #[test]
    fn test_style_swap_takes_effect_next_frame() {
        let mut widget =
            ProgressIndicator::bar(&ProgressStyleArgs::default()).expect("valid defaults");
        widget
            .set_style(&ProgressStyleArgs::default().text_offset(Dp(20.0)))
            .expect("valid style");
        assert_eq!(widget.style().text_offset, 20.0);
    }
}
