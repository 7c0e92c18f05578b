//! A single backdrop particle: ambient drift, wall bounce and pointer repulsion.

use eframe::egui::{Pos2, Vec2};
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::params::SimulationParams;

const BODY_OPACITY: f32 = 0.8;
const GLOW_OPACITY: f32 = 0.3;
const GLOW_SCALE: f32 = 3.0;
/// Offsets from home at or below this count as settled.
const SETTLE_DISTANCE: f32 = 1e-3;

/// Pointer position as seen by the particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// `None` until the pointer first moves, and again after it leaves.
    pub position: Option<Pos2>,
    pub radius: f32,
}

impl Pointer {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }
}

/// What a particle did on its last update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Sitting on its home position, moving only with ambient drift.
    Drifting,
    /// Pushed away by the pointer this frame.
    Repelled,
    /// Easing back toward its (moving) home position.
    Returning,
}

/// Strength of the pointer push at `distance`: 1 at the pointer, 0 at the
/// radius edge, negative beyond it.
pub fn repulsion_force(distance: f32, radius: f32) -> f32 {
    (radius - distance) / radius
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    /// Where the particle settles without pointer interaction. Drifts with
    /// `velocity` just like `pos`.
    pub home: Pos2,
    pub velocity: Vec2,
    pub size: f32,
    /// Scales the pointer push; fixed for the particle's lifetime.
    pub density: f32,
}

impl Particle {
    /// A particle at rest on its home position.
    pub fn new(pos: Pos2, velocity: Vec2, size: f32, density: f32) -> Self {
        Self {
            pos,
            home: pos,
            velocity,
            size,
            density,
        }
    }

    /// Random particle anywhere on a `bounds`-sized surface.
    pub fn random(rng: &mut impl Rng, bounds: Vec2, params: &SimulationParams) -> Self {
        let size = rng.random::<f32>() * params.size_span + params.size_min;
        let pos = Pos2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y);
        let velocity = Vec2::new(
            (rng.random::<f32>() - 0.5) * params.speed_span,
            (rng.random::<f32>() - 0.5) * params.speed_span,
        );
        let density =
            params.density_min + rng.random::<f32>() * (params.density_max - params.density_min);
        Self::new(pos, velocity, size, density)
    }

    /// Advances one frame: bounce, pointer interaction, then ambient drift.
    pub fn update(&mut self, bounds: Vec2, pointer: &Pointer, home_ease: f32) -> Motion {
        if self.pos.x + self.size > bounds.x || self.pos.x - self.size < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.pos.y + self.size > bounds.y || self.pos.y - self.size < 0.0 {
            self.velocity.y = -self.velocity.y;
        }

        let motion = match pointer.position {
            Some(target) => {
                let delta = target - self.pos;
                let distance = delta.length();
                if distance == 0.0 {
                    // No direction to push along; hold for this frame.
                    Motion::Repelled
                } else if distance < pointer.radius {
                    let force = repulsion_force(distance, pointer.radius);
                    self.pos -= delta / distance * force * self.density;
                    Motion::Repelled
                } else {
                    self.ease_home(home_ease)
                }
            }
            None => self.ease_home(home_ease),
        };

        self.pos += self.velocity;
        self.home += self.velocity;
        motion
    }

    fn ease_home(&mut self, ease: f32) -> Motion {
        if self.pos.x != self.home.x {
            self.pos.x -= (self.pos.x - self.home.x) * ease;
        }
        if self.pos.y != self.home.y {
            self.pos.y -= (self.pos.y - self.home.y) * ease;
        }
        // The eased offset can stall a few ulps from zero; classify with a tolerance.
        if (self.pos - self.home).length() <= SETTLE_DISTANCE {
            Motion::Drifting
        } else {
            Motion::Returning
        }
    }

    /// Body disc plus a soft glow three times its radius.
    pub fn draw(&self, canvas: &mut dyn Canvas, tint: Rgb) {
        canvas.fill_circle(self.pos, self.size, tint.with_opacity(BODY_OPACITY));
        canvas.fill_radial_glow(
            self.pos,
            self.size * GLOW_SCALE,
            tint.with_opacity(GLOW_OPACITY),
            tint.with_opacity(0.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, DrawCommand, RecordingCanvas};
    use eframe::egui::Color32;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Vec2 = Vec2::new(1000.0, 800.0);

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Pos2::new(x, y), Vec2::new(0.2, -0.1), 2.0, 10.0)
    }

    #[test]
    fn force_is_half_at_half_radius() {
        assert_eq!(repulsion_force(75.0, 150.0), 0.5);
        assert_eq!(repulsion_force(0.0, 150.0), 1.0);
        assert!(repulsion_force(200.0, 150.0) < 0.0);
    }

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = SimulationParams::default();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, BOUNDS, &params);
            assert!((1.0..4.0).contains(&p.size));
            assert!((1.0..31.0).contains(&p.density));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((0.0..BOUNDS.x).contains(&p.pos.x));
            assert!((0.0..BOUNDS.y).contains(&p.pos.y));
            assert_eq!(p.pos, p.home);
        }
    }

    #[test]
    fn free_particle_stays_on_home() {
        let mut p = at(500.0, 400.0);
        let pointer = Pointer::new(150.0);
        for _ in 0..200 {
            assert_eq!(p.update(BOUNDS, &pointer, 0.1), Motion::Drifting);
            assert!((p.pos - p.home).length() < 1e-3);
        }
        assert!((p.pos.x - 540.0).abs() < 0.01);
        assert!((p.pos.y - 380.0).abs() < 0.01);
    }

    #[test]
    fn wall_bounce_flips_only_that_axis() {
        let mut p = at(999.0, 400.0);
        let before = p.velocity;
        p.update(BOUNDS, &Pointer::new(150.0), 0.1);
        assert_eq!(p.velocity.x, -before.x);
        assert_eq!(p.velocity.y, before.y);

        let mut p = at(500.0, 1.0);
        let before = p.velocity;
        p.update(BOUNDS, &Pointer::new(150.0), 0.1);
        assert_eq!(p.velocity.x, before.x);
        assert_eq!(p.velocity.y, -before.y);
    }

    #[test]
    fn pointer_inside_radius_pushes_away() {
        let mut p = Particle::new(Pos2::new(500.0, 400.0), Vec2::ZERO, 2.0, 10.0);
        let pointer = Pointer {
            position: Some(Pos2::new(575.0, 400.0)),
            radius: 150.0,
        };
        assert_eq!(p.update(BOUNDS, &pointer, 0.1), Motion::Repelled);
        // force 0.5 * density 10 = 5 units away from the pointer.
        assert!((p.pos.x - 495.0).abs() < 1e-4);
        assert_eq!(p.pos.y, 400.0);
        assert_eq!(p.home, Pos2::new(500.0, 400.0));
    }

    #[test]
    fn pointer_outside_radius_eases_home() {
        let mut p = Particle::new(Pos2::new(500.0, 400.0), Vec2::ZERO, 2.0, 10.0);
        p.pos = Pos2::new(510.0, 390.0);
        let pointer = Pointer {
            position: Some(Pos2::new(900.0, 400.0)),
            radius: 150.0,
        };
        assert_eq!(p.update(BOUNDS, &pointer, 0.1), Motion::Returning);
        assert!((p.pos.x - 509.0).abs() < 1e-4);
        assert!((p.pos.y - 391.0).abs() < 1e-4);
    }

    #[test]
    fn repelled_particle_settles_back_to_drifting() {
        let mut p = Particle::new(Pos2::new(500.0, 400.0), Vec2::new(0.03, -0.02), 2.0, 25.0);
        let pointer = Pointer {
            position: Some(Pos2::new(530.0, 410.0)),
            radius: 150.0,
        };
        assert_eq!(p.update(BOUNDS, &pointer, 0.1), Motion::Repelled);
        assert!((p.pos - p.home).length() > 10.0);

        let free = Pointer::new(150.0);
        assert_eq!(p.update(BOUNDS, &free, 0.1), Motion::Returning);
        let mut last = Motion::Returning;
        for _ in 0..5000 {
            last = p.update(BOUNDS, &free, 0.1);
        }
        assert_eq!(last, Motion::Drifting);
        assert!((p.pos - p.home).length() <= 1e-3);
    }

    #[test]
    fn pointer_on_particle_holds_without_nan() {
        let mut p = Particle::new(Pos2::new(500.0, 400.0), Vec2::new(0.1, 0.0), 2.0, 10.0);
        let pointer = Pointer {
            position: Some(Pos2::new(500.0, 400.0)),
            radius: 150.0,
        };
        assert_eq!(p.update(BOUNDS, &pointer, 0.1), Motion::Repelled);
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        assert!((p.pos.x - 500.1).abs() < 1e-4);
    }

    #[test]
    fn draw_emits_body_then_glow() {
        let p = at(10.0, 20.0);
        let mut canvas = RecordingCanvas::new(BOUNDS);
        assert_eq!(canvas.size(), BOUNDS);
        p.draw(&mut canvas, Rgb::new(102.0, 126.0, 234.0));
        assert_eq!(canvas.commands.len(), 2);
        match &canvas.commands[0] {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                assert_eq!(*center, Pos2::new(10.0, 20.0));
                assert_eq!(*radius, 2.0);
                assert_eq!(color.a(), 204);
                assert_eq!(*color, Color32::from_rgba_unmultiplied(102, 126, 234, 204));
            }
            other => panic!("expected body, got {other:?}"),
        }
        match &canvas.commands[1] {
            DrawCommand::RadialGlow {
                center,
                radius,
                inner,
                outer,
            } => {
                assert_eq!(*center, Pos2::new(10.0, 20.0));
                assert_eq!(*radius, 6.0);
                assert_eq!(inner.a(), 77);
                assert_eq!(*inner, Color32::from_rgba_unmultiplied(102, 126, 234, 77));
                assert_eq!(outer.a(), 0);
            }
            other => panic!("expected glow, got {other:?}"),
        }
    }
}
