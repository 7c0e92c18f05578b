//! [`Canvas`] on top of an egui painter.

use std::f32::consts::TAU;

use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use eframe::epaint::{Mesh, Shape};

use crate::canvas::Canvas;

/// Rim vertices of a glow disc.
const GLOW_SEGMENTS: u32 = 24;

/// Paints surface-local coordinates into `rect` on screen.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

/// Component-wise blend of two unmultiplied colours.
fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let a = a.to_srgba_unmultiplied();
    let b = b.to_srgba_unmultiplied();
    let lerp = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(lerp(0), lerp(1), lerp(2), lerp(3))
}

impl Canvas for PainterCanvas<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, Color32::BLACK);
    }

    fn fill_linear_gradient(&mut self, from: Color32, to: Color32) {
        // Gradient runs along the diagonal. Its parameter is affine in the
        // position, so per-vertex colours on two triangles reproduce it exactly.
        let Vec2 { x: w, y: h } = self.rect.size();
        let diag = w * w + h * h;
        let (t_tr, t_bl) = if diag > 0.0 { (w * w / diag, h * h / diag) } else { (0.0, 0.0) };

        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.rect.left_top(), from);
        mesh.colored_vertex(self.rect.right_top(), mix(from, to, t_tr));
        mesh.colored_vertex(self.rect.right_bottom(), to);
        mesh.colored_vertex(self.rect.left_bottom(), mix(from, to, t_bl));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(Shape::mesh(mesh));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn fill_radial_glow(&mut self, center: Pos2, radius: f32, inner: Color32, outer: Color32) {
        let center = self.to_screen(center);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, inner);
        for i in 0..GLOW_SEGMENTS {
            let angle = TAU * i as f32 / GLOW_SEGMENTS as f32;
            mesh.colored_vertex(center + radius * Vec2::angled(angle), outer);
        }
        for i in 0..GLOW_SEGMENTS {
            let next = (i + 1) % GLOW_SEGMENTS;
            mesh.add_triangle(0, i + 1, next + 1);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }
}
