//! Colors, named palettes and grid line modes

use crate::io::error::{PosterError, Result, invalid_configuration};
use std::fmt;
use std::str::FromStr;

/// 24-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Pure white, used for the label band
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Pure black, used for label text
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Mix `ratio` parts of `self` with `1 - ratio` parts of `other`
    ///
    /// The ratio is clamped to `[0, 1]`.
    #[must_use]
    pub fn blend(self, other: Self, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| ratio.mul_add(f64::from(a), (1.0 - ratio) * f64::from(b)).round() as u8;
        Self::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
        )
    }

    /// Channels as an opaque RGBA quadruple
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 0xff]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = PosterError;

    /// Parse a `#rrggbb` literal
    fn from_str(s: &str) -> Result<Self> {
        let reject = |reason: &str| invalid_configuration("color", &s, &reason);
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| reject("expected '#' followed by six hex digits"))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(reject("expected '#' followed by six hex digits"));
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| reject("malformed hex channel"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Living and dead cell colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    /// Fill color of living cells
    pub living: Rgb,
    /// Background color, which is also the color of dead cells
    pub dead: Rgb,
}

/// Built-in color schemes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Warm yellow on orange
    Yellow,
    /// Pale green on olive
    Green,
    /// Black on pink
    Pink,
    /// Salmon on brick red
    Salmon,
    /// Red on burgundy
    Red,
    /// Navy on light blue
    Blue,
    /// Lime on dark lime
    Lime,
    /// Cream on orange
    Orange,
    /// Lavender on dusky violet
    Violet,
    /// Light gray on charcoal
    Gray,
}

impl Palette {
    /// Every built-in palette
    pub const ALL: [Self; 10] = [
        Self::Yellow,
        Self::Green,
        Self::Pink,
        Self::Salmon,
        Self::Red,
        Self::Blue,
        Self::Lime,
        Self::Orange,
        Self::Violet,
        Self::Gray,
    ];

    /// Name accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Salmon => "salmon",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Lime => "lime",
            Self::Orange => "orange",
            Self::Violet => "violet",
            Self::Gray => "gray",
        }
    }

    /// Living and dead colors of the palette
    pub const fn colors(self) -> ColorPair {
        let (living, dead) = match self {
            Self::Yellow => (Rgb::new(0xff, 0xe1, 0x83), Rgb::new(0xff, 0xa2, 0x4b)),
            Self::Green => (Rgb::new(0xbd, 0xdb, 0xa6), Rgb::new(0x83, 0xb3, 0x5e)),
            Self::Pink => (Rgb::new(0x00, 0x00, 0x00), Rgb::new(0xb8, 0x4c, 0x8c)),
            Self::Salmon => (Rgb::new(0xff, 0xb1, 0xb0), Rgb::new(0xc2, 0x48, 0x48)),
            Self::Red => (Rgb::new(0xfc, 0x5e, 0x5d), Rgb::new(0x8e, 0x00, 0x33)),
            Self::Blue => (Rgb::new(0x4b, 0x66, 0x9b), Rgb::new(0xc0, 0xd6, 0xff)),
            Self::Lime => (Rgb::new(0xcb, 0xe6, 0x38), Rgb::new(0x98, 0xad, 0x20)),
            Self::Orange => (Rgb::new(0xff, 0xe5, 0xdb), Rgb::new(0xf2, 0x93, 0x6d)),
            Self::Violet => (Rgb::new(0xe9, 0xc3, 0xfe), Rgb::new(0x6f, 0x5b, 0x7e)),
            Self::Gray => (Rgb::new(0xdd, 0xdd, 0xdd), Rgb::new(0x33, 0x33, 0x33)),
        };
        ColorPair { living, dead }
    }
}

/// Named palette or an explicit color pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// One of the built-in palettes
    Named(Palette),
    /// Explicit living and dead colors
    Custom(ColorPair),
}

impl ColorScheme {
    /// Resolve to living and dead colors
    pub const fn colors(self) -> ColorPair {
        match self {
            Self::Named(palette) => palette.colors(),
            Self::Custom(pair) => pair,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = PosterError;

    /// Accepts a palette name or `#living,#dead`, nothing else
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(palette) = Palette::ALL
            .iter()
            .find(|palette| palette.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Named(*palette));
        }

        let (living, dead) = trimmed.split_once(',').ok_or_else(|| {
            let names: Vec<_> = Palette::ALL.iter().map(|p| p.name()).collect();
            invalid_configuration(
                "color-scheme",
                &trimmed,
                &format!(
                    "expected one of {} or '#rrggbb,#rrggbb'",
                    names.join(", ")
                ),
            )
        })?;

        let parse = |literal: &str| {
            literal
                .parse::<Rgb>()
                .map_err(|e| invalid_configuration("color-scheme", &trimmed, &e))
        };

        Ok(Self::Custom(ColorPair {
            living: parse(living)?,
            dead: parse(dead)?,
        }))
    }
}

/// Color of the lines drawn around every cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridMode {
    /// Same color as living cells
    Living,
    /// Same color as dead cells
    Dead,
    /// Living and dead colors mixed by the given ratio of living color
    Blend(f64),
    /// No grid lines
    Disabled,
}

impl GridMode {
    /// Line color for the given scheme, or `None` when lines are disabled
    pub fn color(self, colors: &ColorPair) -> Option<Rgb> {
        match self {
            Self::Living => Some(colors.living),
            Self::Dead => Some(colors.dead),
            Self::Blend(ratio) => Some(colors.living.blend(colors.dead, ratio)),
            Self::Disabled => None,
        }
    }
}

impl FromStr for GridMode {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "living" => Ok(Self::Living),
            "dead" => Ok(Self::Dead),
            "none" | "off" => Ok(Self::Disabled),
            _ => {
                let ratio: f64 = trimmed.parse().map_err(|_parse_error| {
                    invalid_configuration(
                        "grid-mode",
                        &trimmed,
                        &"expected 'living', 'dead', 'none' or a ratio between 0 and 1",
                    )
                })?;
                if (0.0..=1.0).contains(&ratio) {
                    Ok(Self::Blend(ratio))
                } else {
                    Err(invalid_configuration(
                        "grid-mode",
                        &trimmed,
                        &"ratio must be between 0 and 1",
                    ))
                }
            }
        }
    }
}
