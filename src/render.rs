//! Drawing primitive vocabulary produced by the engines.
//!
//! The engines translate a draw plan into calls on a [`Renderer`], which a
//! host backs with its 2D drawing surface. [`CommandRecorder`] is the
//! headless implementation: it captures every call as a [`DrawCommand`] for
//! inspection or deferred replay.

use crate::Color;

/// An axis-aligned rectangle in `f32` device pixels.
///
/// Used as the bounding box of the full ellipse an arc is cut from.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extents.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Cap style for stroked arc endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcCap {
    /// Squared-off stroke ends.
    Butt,
    /// Rounded stroke ends.
    Round,
}

/// Immediate-mode drawing surface consumed by the engines.
///
/// Coordinates are `f32` device pixels. Each engine calls [`translate`]
/// exactly once per frame, before any drawing, to establish its local
/// origin; all subsequent coordinates are relative to that origin.
///
/// [`translate`]: Renderer::translate
pub trait Renderer {
    /// Shifts the coordinate origin by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Strokes a straight line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke_width: f32, color: Color);

    /// Strokes an open arc inside `bounds`, starting at `start_angle_degrees`
    /// and sweeping `sweep_angle_degrees` clockwise.
    fn draw_arc(
        &mut self,
        bounds: Rect,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        stroke_width: f32,
        cap: ArcCap,
        color: Color,
    );

    /// Strokes a full circle outline centered at `(cx, cy)`.
    fn draw_circle_outline(&mut self, cx: f32, cy: f32, radius: f32, stroke_width: f32, color: Color);

    /// Fills `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Origin shift.
    Translate {
        /// Horizontal shift.
        dx: f32,
        /// Vertical shift.
        dy: f32,
    },
    /// Stroked line segment.
    Line {
        /// Start x.
        x0: f32,
        /// Start y.
        y0: f32,
        /// End x.
        x1: f32,
        /// End y.
        y1: f32,
        /// Stroke width.
        stroke_width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Stroked open arc.
    Arc {
        /// Bounding box of the full ellipse.
        bounds: Rect,
        /// Start angle in degrees.
        start_angle_degrees: f32,
        /// Clockwise sweep in degrees.
        sweep_angle_degrees: f32,
        /// Stroke width.
        stroke_width: f32,
        /// Endpoint cap style.
        cap: ArcCap,
        /// Stroke color.
        color: Color,
    },
    /// Stroked circle outline.
    CircleOutline {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Circle radius.
        radius: f32,
        /// Stroke width.
        stroke_width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled text run.
    Text {
        /// The text content.
        text: String,
        /// Baseline origin x.
        x: f32,
        /// Baseline origin y.
        y: f32,
        /// Fill color.
        color: Color,
    },
}

/// [`Renderer`] that records primitives instead of rasterizing them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandRecorder {
    /// Captured primitives, in call order.
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for CommandRecorder {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke_width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            stroke_width,
            color,
        });
    }

    fn draw_arc(
        &mut self,
        bounds: Rect,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        stroke_width: f32,
        cap: ArcCap,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Arc {
            bounds,
            start_angle_degrees,
            sweep_angle_degrees,
            stroke_width,
            cap,
            color,
        });
    }

    fn draw_circle_outline(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::CircleOutline {
            cx,
            cy,
            radius,
            stroke_width,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_preserves_call_order() {
        let mut recorder = CommandRecorder::new();
        recorder.translate(4.0, 8.0);
        recorder.draw_line(0.0, 0.0, 10.0, 0.0, 2.0, Color::BLACK);
        recorder.draw_text("50%", 5.0, -1.0, Color::WHITE);

        assert_eq!(recorder.commands.len(), 3);
        assert_eq!(
            recorder.commands[0],
            DrawCommand::Translate { dx: 4.0, dy: 8.0 }
        );
        assert!(matches!(recorder.commands[2], DrawCommand::Text { .. }));
    }
}
