//! Current vs. target colours, advanced once per frame.

use crate::color::{HexColor, Rgb};
use crate::scheme::ColorScheme;

/// Interpolated colours of the backdrop. `current_*` chase `target_*`; only
/// [`AnimationState::retarget`] changes the targets.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub current_tint: Rgb,
    pub target_tint: Rgb,
    pub current_bg1: HexColor,
    pub target_bg1: HexColor,
    pub current_bg2: HexColor,
    pub target_bg2: HexColor,
}

impl AnimationState {
    /// Starts settled on `scheme`.
    pub fn new(scheme: &ColorScheme) -> Self {
        Self {
            current_tint: scheme.particle,
            target_tint: scheme.particle,
            current_bg1: scheme.bg1,
            target_bg1: scheme.bg1,
            current_bg2: scheme.bg2,
            target_bg2: scheme.bg2,
        }
    }

    pub fn retarget(&mut self, scheme: &ColorScheme) {
        self.target_tint = scheme.particle;
        self.target_bg1 = scheme.bg1;
        self.target_bg2 = scheme.bg2;
    }

    /// One frame of transition: each group moves `speed` of its remaining gap.
    pub fn advance(&mut self, speed: f32) {
        self.current_tint = self.current_tint.lerp(self.target_tint, speed);
        self.current_bg1 = self.current_bg1.lerp(self.target_bg1, speed);
        self.current_bg2 = self.current_bg2.lerp(self.target_bg2, speed);
    }

    /// Remaining tint distance.
    pub fn tint_gap(&self) -> f32 {
        self.current_tint.distance(self.target_tint)
    }
}
