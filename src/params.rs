//! Fixed tuning constants for the backdrop and the parameter struct that carries them.

// ===================================================================================
// Default Constants
// ===================================================================================

/// Radius around the pointer inside which particles are pushed away.
pub const INTERACTION_RADIUS: f32 = 150.0;
/// Lower bound of the per-particle density (inclusive).
pub const DENSITY_MIN: f32 = 1.0;
/// Upper bound of the per-particle density (exclusive).
pub const DENSITY_MAX: f32 = 31.0;
/// Particles closer than this are joined by a line.
pub const LINK_THRESHOLD: f32 = 120.0;
/// Fraction of the remaining colour distance covered per frame.
pub const COLOR_TRANSITION_SPEED: f32 = 0.05;
/// Fraction of the offset from home removed per frame.
pub const HOME_RETURN_EASE: f32 = 0.1;
/// Surface area per particle.
pub const AREA_PER_PARTICLE: f32 = 9000.0;

const SIZE_MIN: f32 = 1.0;
const SIZE_SPAN: f32 = 3.0;
const SPEED_SPAN: f32 = 0.5;

// ===================================================================================
// Simulation Parameters
// ===================================================================================

/// Configuration the field is built with. The defaults are the only values the
/// host uses; tests override individual fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub interaction_radius: f32,
    pub density_min: f32,
    pub density_max: f32,
    pub link_threshold: f32,
    pub color_transition_speed: f32,
    pub home_return_ease: f32,
    pub area_per_particle: f32,
    /// Particle radius is drawn from `size_min..size_min + size_span`.
    pub size_min: f32,
    pub size_span: f32,
    /// Each ambient velocity component is drawn from `-speed_span / 2..speed_span / 2`.
    pub speed_span: f32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            interaction_radius: INTERACTION_RADIUS,
            density_min: DENSITY_MIN,
            density_max: DENSITY_MAX,
            link_threshold: LINK_THRESHOLD,
            color_transition_speed: COLOR_TRANSITION_SPEED,
            home_return_ease: HOME_RETURN_EASE,
            area_per_particle: AREA_PER_PARTICLE,
            size_min: SIZE_MIN,
            size_span: SIZE_SPAN,
            speed_span: SPEED_SPAN,
            seed: None,
        }
    }
}

impl SimulationParams {
    /// Same parameters with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Number of particles for a `width` x `height` surface, `floor(area / divisor)`.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        // f64 keeps the floor exact for any realistic viewport.
        (width as f64 * height as f64 / self.area_per_particle as f64).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_floors_area_over_divisor() {
        let params = SimulationParams::default();
        assert_eq!(params.particle_count(900.0, 900.0), 90);
        assert_eq!(params.particle_count(1920.0, 1080.0), 230);
        assert_eq!(params.particle_count(94.0, 95.0), 0);
        assert_eq!(params.particle_count(0.0, 1080.0), 0);
    }

    #[test]
    fn seeded_keeps_defaults() {
        let params = SimulationParams::seeded(7);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.interaction_radius, INTERACTION_RADIUS);
        assert_eq!(params.link_threshold, LINK_THRESHOLD);
    }
}
