//! Animated particle backdrop: drifting particles that shy away from the
//! pointer, join up with nearby neighbours, and fade between per-section
//! colour schemes.
//!
//! [`ParticleField`] is the entry point. The host feeds it the surface size and
//! pointer events, tells it which section is active, and calls
//! [`ParticleField::tick`] with a [`Canvas`] once per frame.

pub mod animation;
pub mod canvas;
pub mod color;
pub mod field;
pub mod linker;
pub mod painter;
pub mod params;
pub mod particle;
pub mod scheme;

pub use animation::AnimationState;
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use color::{ColorError, HexColor, Rgb, lerp_hex};
pub use field::{FrameStats, ParticleField};
pub use linker::{Link, find_links, link_opacity};
pub use painter::PainterCanvas;
pub use params::SimulationParams;
pub use particle::{Motion, Particle, Pointer, repulsion_force};
pub use scheme::{ColorScheme, HOME, SCHEMES};
