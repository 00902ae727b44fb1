//! CSS-style colors.
//!
//! The mask color is configured the way a page author would write it
//! (`"rgba(0,0,0,0.9)"`, `"#000000e6"`, `"black"`), so [`Rgba`] parses and
//! serializes that textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels and a straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0.0, 1.0]`.
    pub a: f64,
}

/// Failure to parse a color string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}

impl ColorParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Create a color, clamping alpha to `[0.0, 1.0]`.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same channels with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp_alpha(a),
            ..self
        }
    }

    /// Whether alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Linearly interpolate every channel, alpha included.
    pub fn lerp(a: &Rgba, b: &Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgba {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();

        match input.as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(s, hex);
        }
        if let Some(body) = strip_function(&input, "rgba") {
            return parse_channels(s, body, true);
        }
        if let Some(body) = strip_function(&input, "rgb") {
            return parse_channels(s, body, false);
        }

        Err(ColorParseError::new(s, "unrecognized color syntax"))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        0.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_channels(text: &str, body: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::new(
            text,
            format!("expected {expected} components, found {}", parts.len()),
        ));
    }

    let channel = |part: &str| -> Result<u8, ColorParseError> {
        let value: f64 = part
            .parse()
            .map_err(|_| ColorParseError::new(text, format!("bad channel {part:?}")))?;
        Ok(value.round().clamp(0.0, 255.0) as u8)
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        parts[3]
            .parse::<f64>()
            .map_err(|_| ColorParseError::new(text, format!("bad alpha {:?}", parts[3])))?
    } else {
        1.0
    };

    Ok(Rgba::new(r, g, b, a))
}

fn parse_hex(text: &str, hex: &str) -> Result<Rgba, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(text, "non-hex digit"));
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);

    match hex.len() {
        3 | 4 => {
            let expand = |v: u8| v * 17;
            let a = if hex.len() == 4 {
                expand(digit(3)) as f64 / 255.0
            } else {
                1.0
            };
            Ok(Rgba::new(
                expand(digit(0)),
                expand(digit(1)),
                expand(digit(2)),
                a,
            ))
        }
        6 | 8 => {
            let a = if hex.len() == 8 {
                pair(6) as f64 / 255.0
            } else {
                1.0
            };
            Ok(Rgba::new(pair(0), pair(2), pair(4), a))
        }
        n => Err(ColorParseError::new(
            text,
            format!("hex color must have 3, 4, 6 or 8 digits, found {n}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgba_function() {
        let color: Rgba = "rgba(0,0,0,0.9)".parse().unwrap();
        assert_eq!(color, Rgba::new(0, 0, 0, 0.9));

        let spaced: Rgba = " RGBA( 10 , 20, 30 , 0.5 ) ".parse().unwrap();
        assert_eq!(spaced, Rgba::new(10, 20, 30, 0.5));
    }

    #[test]
    fn test_parse_rgb_function_is_opaque() {
        let color: Rgba = "rgb(255, 128, 0)".parse().unwrap();
        assert_eq!(color, Rgba::rgb(255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("#102030".parse::<Rgba>().unwrap(), Rgba::rgb(16, 32, 48));

        let with_alpha: Rgba = "#00000080".parse().unwrap();
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("black".parse::<Rgba>().unwrap(), Rgba::BLACK);
        assert_eq!("Transparent".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("rgba(1,2,3)".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#ggg".parse::<Rgba>().is_err());
        assert!("hsl(0, 0%, 0%)".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_alpha_is_clamped() {
        let color: Rgba = "rgba(0,0,0,1.5)".parse().unwrap();
        assert_eq!(color.a, 1.0);
        assert_eq!(Rgba::BLACK.with_alpha(-0.2).a, 0.0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgba::lerp(&Rgba::BLACK, &Rgba::TRANSPARENT, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (0, 0, 0));
        assert!((mid.a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serde_uses_css_text() {
        let json = serde_json::to_string(&Rgba::new(0, 0, 0, 0.9)).unwrap();
        assert_eq!(json, "\"rgba(0,0,0,0.9)\"");

        let parsed: Rgba = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(parsed, Rgba::rgb(255, 0, 0));

        assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
    }
}
