//! Color conversion between rgba notation and packed signed integers.
//!
//! The server stores shape colors as a signed 32-bit integer with the bytes
//! laid out as `[R][G][B][A]`, most significant first. The viewer works with
//! CSS-style `rgba(r,g,b,a)` strings where alpha is a real in `[0, 1]`.
//!
//! ```text
//!  rgba(255,0,0,1)  <->  0xFF0000FF  <->  -16776961
//! ```
//!
//! Conversion is exact for red, green and blue. Alpha is quantized to a byte,
//! so a round trip reproduces it within `1/255`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ColorError;
use crate::params::{parse_int_prefix, parse_real_prefix};

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

// =============================================================================
// Rgba
// =============================================================================

/// A color with 8-bit red, green and blue and a real alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Alpha scaled to a byte, rounding half up.
    pub fn alpha_byte(&self) -> u8 {
        let scaled = self.alpha.clamp(0.0, 1.0) * 255.0;
        let floor = scaled.floor();
        let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
        rounded as u8
    }

    /// Pack into the signed integer encoding.
    pub fn to_packed(&self) -> i32 {
        i32::from_be_bytes([self.red, self.green, self.blue, self.alpha_byte()])
    }

    /// Unpack from the signed integer encoding. Negative values are read as
    /// their unsigned 32-bit equivalent.
    pub fn from_packed(packed: i32) -> Self {
        let [red, green, blue, alpha] = packed.to_be_bytes();
        Self::new(red, green, blue, alpha as f64 / 255.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Parse `rgba(r,g,b,a)` or `rgb(r,g,b)`. Alpha defaults to 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s
            .replace("rgba", "")
            .replace("rgb", "")
            .replace(['(', ')'], "");
        let tokens: Vec<&str> = stripped.split(',').collect();
        if tokens.len() < 3 {
            return Err(ColorError::TooFewComponents(tokens.len()));
        }

        let mut rgb = [0u8; 3];
        for ((value, token), channel) in rgb.iter_mut().zip(&tokens).zip(CHANNEL_NAMES) {
            *value = parse_int_prefix(token)
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| ColorError::InvalidComponent {
                    channel,
                    value: token.trim().to_string(),
                })?;
        }

        let alpha = match tokens.get(3) {
            Some(token) => parse_real_prefix(token)
                .filter(|a| (0.0..=1.0).contains(a))
                .ok_or_else(|| ColorError::InvalidAlpha(token.trim().to_string()))?,
            None => 1.0,
        };

        Ok(Self::new(rgb[0], rgb[1], rgb[2], alpha))
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Encode a color in rgba notation as a signed integer.
///
/// Returns `None` if the color cannot be parsed.
///
/// # Example
///
/// ```
/// use iviewer::color::rgba_to_signed_integer;
///
/// assert_eq!(rgba_to_signed_integer("rgba(255,0,0,1)"), Some(-16776961));
/// assert_eq!(rgba_to_signed_integer("rgb(0,255,0)"), Some(0x00FF00FF));
/// assert_eq!(rgba_to_signed_integer("red"), None);
/// ```
pub fn rgba_to_signed_integer(rgba: &str) -> Option<i32> {
    rgba.parse::<Rgba>().ok().map(|c| c.to_packed())
}

/// Decode a signed integer color into rgba notation, e.g. `rgba(100,30,255,0.7)`.
pub fn signed_integer_to_rgba(signed_integer: i32) -> String {
    Rgba::from_packed(signed_integer).to_string()
}
