//! The drawing surface the backdrop paints onto.
//!
//! Coordinates are surface-local: `(0, 0)` is the top-left corner and the
//! surface extends to [`Canvas::size`].

use eframe::egui::{Color32, Pos2, Vec2};

/// Minimal 2D surface: the operations one backdrop frame needs.
pub trait Canvas {
    /// Width and height of the surface.
    fn size(&self) -> Vec2;

    /// Discards everything painted so far.
    fn clear(&mut self);

    /// Fills the whole surface with a linear gradient from `from` at the
    /// top-left corner to `to` at the bottom-right corner.
    fn fill_linear_gradient(&mut self, from: Color32, to: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Fills a disc whose colour fades from `inner` at the centre to `outer`
    /// at `radius`.
    fn fill_radial_glow(&mut self, center: Pos2, radius: f32, inner: Color32, outer: Color32);

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
}

/// One recorded call on a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    LinearGradient {
        from: Color32,
        to: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    RadialGlow {
        center: Pos2,
        radius: f32,
        inner: Color32,
        outer: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
}

/// Headless canvas that keeps every command since the last `clear`.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_linear_gradient(&mut self, from: Color32, to: Color32) {
        self.commands.push(DrawCommand::LinearGradient { from, to });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_glow(&mut self, center: Pos2, radius: f32, inner: Color32, outer: Color32) {
        self.commands.push(DrawCommand::RadialGlow {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}
