//! Per-section colour schemes.

use crate::color::{HexColor, Rgb};

/// Tint and background gradient for one page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub particle: Rgb,
    /// Gradient start (top-left).
    pub bg1: HexColor,
    /// Gradient end (bottom-right).
    pub bg2: HexColor,
}

/// Scheme used at startup and for unknown section tags.
pub const HOME: ColorScheme = ColorScheme {
    name: "home",
    particle: Rgb::new(102.0, 126.0, 234.0),
    bg1: HexColor::new(0x0a, 0x0e, 0x27),
    bg2: HexColor::new(0x1a, 0x1f, 0x3a),
};

pub const SCHEMES: [ColorScheme; 4] = [
    HOME,
    ColorScheme {
        name: "about",
        particle: Rgb::new(52.0, 211.0, 153.0),
        bg1: HexColor::new(0x0a, 0x1f, 0x1a),
        bg2: HexColor::new(0x1a, 0x2f, 0x2a),
    },
    ColorScheme {
        name: "projects",
        particle: Rgb::new(245.0, 101.0, 101.0),
        bg1: HexColor::new(0x1f, 0x0a, 0x0e),
        bg2: HexColor::new(0x2f, 0x1a, 0x1e),
    },
    ColorScheme {
        name: "contact",
        particle: Rgb::new(250.0, 176.0, 5.0),
        bg1: HexColor::new(0x1f, 0x1a, 0x0a),
        bg2: HexColor::new(0x2f, 0x2a, 0x1a),
    },
];

impl ColorScheme {
    /// Looks up a section tag, `None` if there is no scheme for it.
    pub fn find(tag: &str) -> Option<&'static ColorScheme> {
        SCHEMES.iter().find(|scheme| scheme.name == tag)
    }

    /// Looks up a section tag, falling back to [`HOME`].
    pub fn for_section(tag: &str) -> &'static ColorScheme {
        Self::find(tag).unwrap_or(&SCHEMES[0])
    }
}
