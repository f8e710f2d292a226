//! Terminal colours: [`NamedColour`], [`ColourValue`] and the colour
//! validator [`resolve`].

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Colour support a terminal needs before numeric indices are kept as-is.
pub const EXTENDED_COLOUR_SUPPORT: u16 = 256;

// ---------------------------------------------------------------------------
// NamedColour
// ---------------------------------------------------------------------------

/// One of the eight standard terminal colours, or the terminal default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NamedColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl NamedColour {
    /// The eight palette colours in SGR order (index 0 is black).
    pub const PALETTE: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
        }
    }

    /// SGR parameter selecting this colour as the foreground.
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Default => 39,
            other => 30 + other.palette_offset(),
        }
    }

    /// SGR parameter selecting this colour as the background.
    pub const fn bg_code(self) -> u8 {
        match self {
            Self::Default => 49,
            other => 40 + other.palette_offset(),
        }
    }

    const fn palette_offset(self) -> u8 {
        match self {
            Self::Black | Self::Default => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }
}

impl fmt::Display for NamedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColour {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PALETTE
            .into_iter()
            .chain(std::iter::once(Self::Default))
            .find(|c| c.name() == s)
            .ok_or_else(|| StyleError::InvalidColourName(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ColourValue
// ---------------------------------------------------------------------------

/// The colour a style actually renders with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColourValue {
    Named(NamedColour),
    Indexed(u8),
}

impl ColourValue {
    /// SGR parameters for this colour as a foreground.
    pub fn fg_params(self) -> String {
        match self {
            Self::Named(c) => c.fg_code().to_string(),
            Self::Indexed(i) => format!("38;5;{i}"),
        }
    }

    /// SGR parameters for this colour as a background.
    pub fn bg_params(self) -> String {
        match self {
            Self::Named(c) => c.bg_code().to_string(),
            Self::Indexed(i) => format!("48;5;{i}"),
        }
    }
}

impl From<NamedColour> for ColourValue {
    fn from(c: NamedColour) -> Self {
        Self::Named(c)
    }
}

impl fmt::Display for ColourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(c) => c.fmt(f),
            Self::Indexed(i) => write!(f, "{i}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a 256-colour `code` and resolve it against a terminal that
/// supports `colour_support` colours.
///
/// Terminals with at least [`EXTENDED_COLOUR_SUPPORT`] colours keep the
/// index. Others get `fallback`, or the nearest 8-colour name when no
/// fallback is given.
pub fn resolve(
    code: i32,
    fallback: Option<NamedColour>,
    colour_support: u16,
) -> Result<ColourValue, StyleError> {
    let index = u8::try_from(code).map_err(|_| StyleError::InvalidColourCode(code))?;
    if colour_support >= EXTENDED_COLOUR_SUPPORT {
        return Ok(ColourValue::Indexed(index));
    }
    Ok(ColourValue::Named(
        fallback.unwrap_or_else(|| map_256_to_8(index)),
    ))
}

/// Map a 256-colour palette index to the closest of the eight named colours.
///
/// - 0-15: palette position, bright variants fold onto their base colour
/// - 16-231: each channel of the 6x6x6 cube counts as lit from level 3
/// - 232-255: the greyscale ramp splits into black and white at mid grey
pub fn map_256_to_8(index: u8) -> NamedColour {
    match index {
        0..=15 => NamedColour::PALETTE[usize::from(index % 8)],
        16..=231 => {
            let idx = index - 16;
            let lit = |level: u8| u8::from(level >= 3);
            let r = lit(idx / 36);
            let g = lit((idx % 36) / 6);
            let b = lit(idx % 6);
            NamedColour::PALETTE[usize::from(r | (g << 1) | (b << 2))]
        }
        232..=243 => NamedColour::Black,
        244..=255 => NamedColour::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for c in NamedColour::PALETTE {
            assert_eq!(c.name().parse::<NamedColour>(), Ok(c));
        }
        assert_eq!("default".parse::<NamedColour>(), Ok(NamedColour::Default));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "purple".parse::<NamedColour>(),
            Err(StyleError::InvalidColourName("purple".to_string()))
        );
        assert!("White".parse::<NamedColour>().is_err());
    }

    #[test]
    fn sgr_codes() {
        assert_eq!(NamedColour::White.fg_code(), 37);
        assert_eq!(NamedColour::Blue.bg_code(), 44);
        assert_eq!(NamedColour::Red.fg_code(), 31);
        assert_eq!(NamedColour::Default.fg_code(), 39);
        assert_eq!(NamedColour::Default.bg_code(), 49);
        assert_eq!(ColourValue::Indexed(206).fg_params(), "38;5;206");
        assert_eq!(ColourValue::Indexed(16).bg_params(), "48;5;16");
    }

    #[test]
    fn resolve_keeps_index_on_256_colour_terminal() {
        assert_eq!(
            resolve(206, Some(NamedColour::Red), 256),
            Ok(ColourValue::Indexed(206))
        );
        assert_eq!(resolve(0, None, 256), Ok(ColourValue::Indexed(0)));
        assert_eq!(resolve(255, None, 256), Ok(ColourValue::Indexed(255)));
    }

    #[test]
    fn resolve_uses_fallback_on_8_colour_terminal() {
        assert_eq!(
            resolve(206, Some(NamedColour::Red), 8),
            Ok(ColourValue::Named(NamedColour::Red))
        );
        assert_eq!(
            resolve(16, Some(NamedColour::White), 8),
            Ok(ColourValue::Named(NamedColour::White))
        );
    }

    #[test]
    fn resolve_maps_without_fallback() {
        assert_eq!(resolve(196, None, 8), Ok(ColourValue::Named(NamedColour::Red)));
        assert_eq!(resolve(21, None, 8), Ok(ColourValue::Named(NamedColour::Blue)));
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        assert_eq!(
            resolve(512, Some(NamedColour::White), 256),
            Err(StyleError::InvalidColourCode(512))
        );
        assert_eq!(
            resolve(-5, Some(NamedColour::White), 8),
            Err(StyleError::InvalidColourCode(-5))
        );
        assert_eq!(
            resolve(256, None, 8).unwrap_err().to_string(),
            "Invalid colour code: 256"
        );
    }

    #[test]
    fn map_256_to_8_regions() {
        assert_eq!(map_256_to_8(1), NamedColour::Red);
        assert_eq!(map_256_to_8(9), NamedColour::Red);
        assert_eq!(map_256_to_8(15), NamedColour::White);
        assert_eq!(map_256_to_8(16), NamedColour::Black);
        assert_eq!(map_256_to_8(46), NamedColour::Green);
        assert_eq!(map_256_to_8(226), NamedColour::Yellow);
        assert_eq!(map_256_to_8(231), NamedColour::White);
        assert_eq!(map_256_to_8(232), NamedColour::Black);
        assert_eq!(map_256_to_8(255), NamedColour::White);
    }

    #[test]
    fn display() {
        assert_eq!(ColourValue::Indexed(16).to_string(), "16");
        assert_eq!(ColourValue::Named(NamedColour::White).to_string(), "white");
    }
}
