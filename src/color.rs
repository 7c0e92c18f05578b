//! Colour math for the transition engine: float RGB tints, hex background
//! colours and the per-frame interpolation between them.

use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use thiserror::Error;

/// Errors from parsing a hex colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not exactly six hex digits after the optional `#`.
    #[error("expected six hex digits, got {0:?}")]
    BadLength(String),

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// A tint with float channels in `[0, 255]`. Channels are kept unrounded so
/// repeated interpolation converges smoothly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Moves each channel `t` of the way toward `target`.
    pub fn lerp(self, target: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }

    /// Euclidean distance in channel space.
    pub fn distance(self, other: Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Rounds the channels and attaches `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(opacity * 255.0),
        )
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        let [r, g, b] = hex.0;
        Rgb::new(r as f32, g as f32, b as f32)
    }
}

fn channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// An opaque 8-bit colour, written `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Rounds a float tint back to whole channels.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self([channel(rgb.r), channel(rgb.g), channel(rgb.b)])
    }

    /// Interpolates through float RGB and rounds the result, so a channel whose
    /// gap times `t` is under half a level does not move.
    pub fn lerp(self, target: HexColor, t: f32) -> HexColor {
        HexColor::from_rgb(Rgb::from(self).lerp(Rgb::from(target), t))
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.0;
        Color32::from_rgb(r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::BadLength(s.to_owned()));
        }
        // from_str_radix would also accept a leading sign.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_owned()));
        }
        let mut out = [0u8; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorError::BadDigit(s.to_owned()))?;
        }
        Ok(HexColor(out))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Interpolates two `#rrggbb` strings, returning the rounded result.
pub fn lerp_hex(start: &str, end: &str, t: f32) -> Result<HexColor, ColorError> {
    let start: HexColor = start.parse()?;
    let end: HexColor = end.parse()?;
    Ok(start.lerp(end, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!("#0a0e27".parse::<HexColor>(), Ok(HexColor::new(0x0a, 0x0e, 0x27)));
        assert_eq!("1A2F2A".parse::<HexColor>(), Ok(HexColor::new(0x1a, 0x2f, 0x2a)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!("#fff".parse::<HexColor>(), Err(ColorError::BadLength(_))));
        assert!(matches!("#gg0000".parse::<HexColor>(), Err(ColorError::BadDigit(_))));
        assert!(matches!("#+10000".parse::<HexColor>(), Err(ColorError::BadDigit(_))));
        assert!(matches!("#ééé".parse::<HexColor>(), Err(ColorError::BadLength(_))));
    }

    #[test]
    fn displays_lowercase_padded() {
        assert_eq!(HexColor::new(10, 14, 39).to_string(), "#0a0e27");
        assert_eq!(HexColor::new(255, 0, 171).to_string(), "#ff00ab");
    }

    #[test]
    fn tint_lerp_moves_fraction_of_gap() {
        let from = Rgb::new(0.0, 100.0, 200.0);
        let to = Rgb::new(100.0, 100.0, 0.0);
        let next = from.lerp(to, 0.05);
        assert_eq!(next, Rgb::new(5.0, 100.0, 190.0));
        assert!((next.distance(to) - 0.95 * from.distance(to)).abs() < 1e-3);
    }

    #[test]
    fn tint_lerp_is_fixed_at_target() {
        let target = Rgb::new(245.0, 101.0, 101.0);
        assert_eq!(target.lerp(target, 0.05), target);
    }

    #[test]
    fn hex_lerp_rounds_each_step() {
        // 0x0a -> 0x1f: 10 + 21 * 0.05 = 11.05 rounds to 11.
        assert_eq!(lerp_hex("#0a0a0a", "#1f1f1f", 0.05).unwrap(), HexColor::new(11, 11, 11));
        // Gap of 9 moves 0.45 and rounds back.
        assert_eq!(lerp_hex("#161616", "#1f1f1f", 0.05).unwrap(), HexColor::new(22, 22, 22));
    }

    #[test]
    fn hex_lerp_propagates_parse_errors() {
        assert!(lerp_hex("nope", "#000000", 0.5).is_err());
    }

    #[test]
    fn opacity_is_scaled_to_alpha_byte() {
        let c = Rgb::new(102.4, 125.6, 234.0).with_opacity(0.8);
        assert_eq!(c, Color32::from_rgba_unmultiplied(102, 126, 234, 204));
    }
}
