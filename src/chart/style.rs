//! Chart styling primitives: bar colors and the cyclic palette.

use std::fmt;

/// Named colors accepted in palettes, with their sRGB values.
///
/// Plain names follow the CSS/X11 definitions; `tab:*` names are the
/// ten-color categorical set common in plotting tools.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("gray", [0x80, 0x80, 0x80]),
    ("green", [0x00, 0x80, 0x00]),
    ("grey", [0x80, 0x80, 0x80]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("navy", [0x00, 0x00, 0x80]),
    ("olive", [0x80, 0x80, 0x00]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("purple", [0x80, 0x00, 0x80]),
    ("red", [0xff, 0x00, 0x00]),
    ("teal", [0x00, 0x80, 0x80]),
    ("white", [0xff, 0xff, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("tab:blue", [0x1f, 0x77, 0xb4]),
    ("tab:orange", [0xff, 0x7f, 0x0e]),
    ("tab:green", [0x2c, 0xa0, 0x2c]),
    ("tab:red", [0xd6, 0x27, 0x28]),
    ("tab:purple", [0x94, 0x67, 0xbd]),
    ("tab:brown", [0x8c, 0x56, 0x4b]),
    ("tab:pink", [0xe3, 0x77, 0xc2]),
    ("tab:gray", [0x7f, 0x7f, 0x7f]),
    ("tab:olive", [0xbc, 0xbd, 0x22]),
    ("tab:cyan", [0x17, 0xbe, 0xcf]),
];

/// A bar color, either one of the named colors or a `#rrggbb` literal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChartColor {
    /// Known color name, stored lowercase (e.g., "orange", "tab:blue")
    Named(String),
    /// Direct RGB color written as hex
    Hex([u8; 3]),
}

impl ChartColor {
    /// Parse a color name or `#rrggbb` literal (case-insensitive).
    ///
    /// # Errors
    /// Returns a description of the problem if the color is not recognised.
    pub fn parse(text: &str) -> Result<Self, String> {
        let trimmed = text.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex)
                .map(Self::Hex)
                .ok_or_else(|| format!("invalid hex color '{trimmed}', expected #rrggbb"));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lookup_named(&lower).is_some() {
            Ok(Self::Named(lower))
        } else {
            Err(format!("unknown color name '{trimmed}'"))
        }
    }

    /// Create a hex color from components.
    #[must_use]
    pub const fn rgb_hex(r: u8, g: u8, b: u8) -> Self {
        Self::Hex([r, g, b])
    }

    /// sRGB components of this color.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = match self {
            Self::Named(name) => lookup_named(name).unwrap_or([0, 0, 0]),
            Self::Hex(rgb) => *rgb,
        };
        (r, g, b)
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Hex([r, g, b]) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl TryFrom<String> for ChartColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> Self {
        color.to_string()
    }
}

fn lookup_named(name: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Ordered, cyclic set of bar colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<'a> {
    colors: &'a [ChartColor],
}

impl<'a> Palette<'a> {
    #[must_use]
    pub const fn new(colors: &'a [ChartColor]) -> Self {
        Self { colors }
    }

    /// Color for the bar at `index`, wrapping around the palette.
    ///
    /// An empty palette falls back to black; config validation rejects it
    /// before rendering.
    #[must_use]
    pub fn color_at(&self, index: usize) -> ChartColor {
        if self.colors.is_empty() {
            return ChartColor::rgb_hex(0, 0, 0);
        }
        self.colors[index % self.colors.len()].clone()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
