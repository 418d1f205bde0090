//! CSS Values & Units
//!
//! Quantities with a physical or relative unit, keywords and colors.
//! Every value renders to exactly one CSS value token.

use std::fmt;

/// A single CSS value token
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Length with a unit (px, pt, em, ...)
    Length(f32, LengthUnit),
    /// Percentage (`50%`)
    Percentage(f32),
    /// Keyword or any raw string passed through verbatim
    Keyword(String),
    /// Unitless number (opacity, line-height, z-index, ...)
    RawNumber(f32),
    /// Color value
    Color(Color),
}

impl Value {
    pub fn px(value: f32) -> Self {
        Self::Length(value, LengthUnit::Px)
    }

    pub fn pt(value: f32) -> Self {
        Self::Length(value, LengthUnit::Pt)
    }

    pub fn em(value: f32) -> Self {
        Self::Length(value, LengthUnit::Em)
    }

    pub fn rem(value: f32) -> Self {
        Self::Length(value, LengthUnit::Rem)
    }

    pub fn vw(value: f32) -> Self {
        Self::Length(value, LengthUnit::Vw)
    }

    pub fn vh(value: f32) -> Self {
        Self::Length(value, LengthUnit::Vh)
    }

    pub fn percent(value: f32) -> Self {
        Self::Percentage(value)
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword(value.into())
    }

    pub fn number(value: f32) -> Self {
        Self::RawNumber(value)
    }

    /// Render as a CSS value token
    pub fn to_css_value(&self) -> String {
        match self {
            Self::Length(value, unit) => format!("{}{}", value, unit.as_str()),
            Self::Percentage(value) => format!("{}%", value),
            Self::Keyword(keyword) => keyword.clone(),
            Self::RawNumber(value) => value.to_string(),
            Self::Color(color) => color.to_css_value(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_value())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Keyword(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Keyword(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::RawNumber(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::RawNumber(value as f32)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

pub fn px(value: f32) -> Value {
    Value::px(value)
}

pub fn pt(value: f32) -> Value {
    Value::pt(value)
}

pub fn em(value: f32) -> Value {
    Value::em(value)
}

pub fn rem(value: f32) -> Value {
    Value::rem(value)
}

pub fn percent(value: f32) -> Value {
    Value::percent(value)
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Pt,
    Em,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Ch,
    Ex,
    Cm,
    Mm,
    In,
}

impl LengthUnit {
    /// CSS suffix for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Ch => "ch",
            Self::Ex => "ex",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
        }
    }
}

/// Font size argument: bare numbers are points
#[derive(Debug, Clone, PartialEq)]
pub struct FontSize(pub Value);

impl From<Value> for FontSize {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<f32> for FontSize {
    fn from(value: f32) -> Self {
        Self(Value::pt(value))
    }
}

impl From<i32> for FontSize {
    fn from(value: i32) -> Self {
        Self(Value::pt(value as f32))
    }
}

/// CSS color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Basic CSS named colors
const NAMED_COLORS: &[(&str, Color)] = &[
    ("transparent", Color::TRANSPARENT),
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("aqua", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("silver", Color::rgb(192, 192, 192)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("olive", Color::rgb(128, 128, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("navy", Color::rgb(0, 0, 128)),
    ("purple", Color::rgb(128, 0, 128)),
    ("teal", Color::rgb(0, 128, 128)),
    ("orange", Color::rgb(255, 165, 0)),
];

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color (#RGB, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex
            .strip_prefix('#')
            .unwrap_or(hex)
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()?;

        let pair = |hi: u8, lo: u8| (hi << 4) | lo;
        match digits[..] {
            [r, g, b] => Some(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Some(Self::rgb(pair(r1, r0), pair(g1, g0), pair(b1, b0)))
            }
            [r1, r0, g1, g0, b1, b0, a1, a0] => Some(Self::rgba(
                pair(r1, r0),
                pair(g1, g0),
                pair(b1, b0),
                pair(a1, a0),
            )),
            _ => None,
        }
    }

    /// Look up a basic named color
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(_, color)| color)
    }

    /// `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css_value(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(pt(12.0).to_css_value(), "12pt");
        assert_eq!(px(1.5).to_css_value(), "1.5px");
        assert_eq!(Value::Length(3.0, LengthUnit::Vmin).to_css_value(), "3vmin");
        assert_eq!(rem(-2.0).to_string(), "-2rem");
    }

    #[test]
    fn test_percent_and_numbers() {
        assert_eq!(percent(50.0).to_css_value(), "50%");
        assert_eq!(Value::number(0.25).to_css_value(), "0.25");
        assert_eq!(Value::from(3).to_css_value(), "3");
    }

    #[test]
    fn test_keyword_passthrough() {
        assert_eq!(Value::from("bold").to_css_value(), "bold");
        assert_eq!(Value::keyword("1px solid black").to_css_value(), "1px solid black");
    }

    #[test]
    fn test_font_size_defaults_to_points() {
        assert_eq!(FontSize::from(16).0, Value::pt(16.0));
        assert_eq!(FontSize::from(em(2.0)).0, Value::em(2.0));
    }

    #[test]
    fn test_hex_rejects_signs_and_non_ascii() {
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert_eq!(Color::from_hex("+ff"), None);
        assert_eq!(Color::from_hex("#ffé"), None);
        assert_eq!(Color::from_hex("#ff"), None);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Color::rgb(255, 0, 16).to_css_value(), "#ff0010");
        assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("zzzzzz"), None);
        assert_eq!(Color::from_hex("#336699cc"), Some(Color::rgba(0x33, 0x66, 0x99, 0xcc)));
        assert_eq!(Color::from_name("grey"), Some(Color::rgb(128, 128, 128)));
        assert_eq!(Color::from_name("chartreuse"), None);
        assert_eq!(Color::from_name("orange"), Some(Color::rgb(255, 165, 0)));
        assert_eq!(Color::TRANSPARENT.to_css_value(), "rgba(0, 0, 0, 0)");
        assert_eq!(Color::rgba(0, 0, 0, 128).to_css_value(), "rgba(0, 0, 0, 0.502)");
    }
}
