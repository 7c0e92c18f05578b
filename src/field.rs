//! The particle field: owns the particles, the pointer and the colour
//! transition, and paints one frame per [`ParticleField::tick`].
//!
//! The host is responsible for calling `tick` once per frame and for feeding
//! size and pointer changes in between. Nothing here schedules itself.

use std::f32::consts::SQRT_2;

use eframe::egui::{Color32, Pos2, Vec2};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::linker::{draw_links, find_links};
use crate::params::SimulationParams;
use crate::particle::{Motion, Particle, Pointer};
use crate::scheme::{ColorScheme, HOME};

/// Cursor glow: a 300-unit square whose radial gradient stops at 70 % of the
/// distance to its corner.
const CURSOR_GLOW_RADIUS: f32 = 150.0 * SQRT_2 * 0.7;
const CURSOR_GLOW_COLOR: [u8; 3] = [102, 126, 234];
const CURSOR_GLOW_OPACITY: f32 = 0.15;

/// Counters for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub drifting: usize,
    pub repelled: usize,
    pub returning: usize,
}

impl FrameStats {
    fn record(&mut self, motion: Motion) {
        match motion {
            Motion::Drifting => self.drifting += 1,
            Motion::Repelled => self.repelled += 1,
            Motion::Returning => self.returning += 1,
        }
    }
}

pub struct ParticleField {
    params: SimulationParams,
    rng: StdRng,
    bounds: Vec2,
    particles: Vec<Particle>,
    pointer: Pointer,
    animation: AnimationState,
    section: &'static str,
    frame: u64,
}

impl ParticleField {
    /// Creates a field for a `size` surface, settled on the home scheme.
    pub fn new(size: Vec2, params: SimulationParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut field = Self {
            pointer: Pointer::new(params.interaction_radius),
            params,
            rng,
            bounds: Vec2::ZERO,
            particles: Vec::new(),
            animation: AnimationState::new(&HOME),
            section: HOME.name,
            frame: 0,
        };
        field.initialize(size);
        field
    }

    /// Sets the bounds and regenerates the whole particle batch.
    pub fn initialize(&mut self, size: Vec2) {
        self.bounds = size;
        self.regenerate();
        info!(
            "particle field {}x{}: {} particles",
            size.x,
            size.y,
            self.particles.len()
        );
    }

    /// Same as [`initialize`](Self::initialize); the previous particles are dropped.
    pub fn resize(&mut self, size: Vec2) {
        let previous = self.particles.len();
        self.bounds = size;
        self.regenerate();
        info!(
            "resized to {}x{}: {} -> {} particles",
            size.x,
            size.y,
            previous,
            self.particles.len()
        );
    }

    fn regenerate(&mut self) {
        let count = self.params.particle_count(self.bounds.x, self.bounds.y);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::random(&mut self.rng, self.bounds, &self.params);
            self.particles.push(particle);
        }
    }

    /// Points the colour transition at `tag`'s scheme (home if unknown). The
    /// change shows up gradually over the following frames.
    pub fn retarget(&mut self, tag: &str) -> &'static ColorScheme {
        let scheme = ColorScheme::for_section(tag);
        if scheme.name != tag {
            debug!("no colour scheme for section {tag:?}, using {:?}", scheme.name);
        } else if scheme.name != self.section {
            debug!("retargeting colours {:?} -> {:?}", self.section, scheme.name);
        }
        self.section = scheme.name;
        self.animation.retarget(scheme);
        scheme
    }

    pub fn pointer_moved(&mut self, pos: Pos2) {
        self.pointer.position = Some(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.position = None;
    }

    /// Advances and paints one frame.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> FrameStats {
        self.frame += 1;
        self.animation.advance(self.params.color_transition_speed);

        canvas.clear();
        canvas.fill_linear_gradient(
            self.animation.current_bg1.to_color32(),
            self.animation.current_bg2.to_color32(),
        );

        let tint = self.animation.current_tint;
        let mut stats = FrameStats {
            particles: self.particles.len(),
            ..FrameStats::default()
        };
        for particle in &mut self.particles {
            let motion = particle.update(self.bounds, &self.pointer, self.params.home_return_ease);
            stats.record(motion);
            particle.draw(canvas, tint);
        }

        let links = find_links(&self.particles, self.params.link_threshold);
        draw_links(canvas, &links, tint);
        stats.links = links.len();
        stats
    }

    /// Soft fixed-colour glow under the pointer, painted on top of the frame.
    pub fn paint_cursor_glow(&self, canvas: &mut dyn Canvas) {
        if let Some(pos) = self.pointer.position {
            let [r, g, b] = CURSOR_GLOW_COLOR;
            let alpha = (CURSOR_GLOW_OPACITY * 255.0).round() as u8;
            canvas.fill_radial_glow(
                pos,
                CURSOR_GLOW_RADIUS,
                Color32::from_rgba_unmultiplied(r, g, b, alpha),
                Color32::TRANSPARENT,
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Name of the scheme the colours are heading toward.
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Frames ticked since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}
