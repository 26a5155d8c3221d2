use crate::error::{Error, Result};
use owo_colors::AnsiColors;
use std::fmt;
use std::str::FromStr;

/// Element width used when dumping raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordWidth {
    #[default]
    Bits8,
    Bits16,
    Bits32,
}

impl WordWidth {
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(WordWidth::Bits8),
            16 => Ok(WordWidth::Bits16),
            32 => Ok(WordWidth::Bits32),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            WordWidth::Bits8 => 8,
            WordWidth::Bits16 => 16,
            WordWidth::Bits32 => 32,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Terminal colors available for keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl Color {
    const NAMES: [(&'static str, Color); 17] = [
        ("default", Color::Default),
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("light gray", Color::LightGray),
        ("dark gray", Color::DarkGray),
        ("light red", Color::LightRed),
        ("light green", Color::LightGreen),
        ("light yellow", Color::LightYellow),
        ("light blue", Color::LightBlue),
        ("light magenta", Color::LightMagenta),
        ("light cyan", Color::LightCyan),
        ("white", Color::White),
    ];

    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, color)| *color == self)
            .map_or("default", |(name, _)| name)
    }

    pub(crate) fn ansi(self) -> AnsiColors {
        match self {
            Color::Default => AnsiColors::Default,
            Color::Black => AnsiColors::Black,
            Color::Red => AnsiColors::Red,
            Color::Green => AnsiColors::Green,
            Color::Yellow => AnsiColors::Yellow,
            Color::Blue => AnsiColors::Blue,
            Color::Magenta => AnsiColors::Magenta,
            Color::Cyan => AnsiColors::Cyan,
            Color::LightGray => AnsiColors::White,
            Color::DarkGray => AnsiColors::BrightBlack,
            Color::LightRed => AnsiColors::BrightRed,
            Color::LightGreen => AnsiColors::BrightGreen,
            Color::LightYellow => AnsiColors::BrightYellow,
            Color::LightBlue => AnsiColors::BrightBlue,
            Color::LightMagenta => AnsiColors::BrightMagenta,
            Color::LightCyan => AnsiColors::BrightCyan,
            Color::White => AnsiColors::BrightWhite,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `light blue`, `light-blue`, `light_blue` and `LightBlue` alike.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.replace(' ', "") == wanted)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Formatting switches shared by every syntax.
///
/// The column flags are independent: each enabled one adds a column to every
/// element of a byte dump. With none enabled, dumps fall back to hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintFlags {
    pub width: WordWidth,
    pub hex: bool,
    pub unsigned: bool,
    pub signed: bool,
    pub character: bool,
    pub bold_objects: bool,
    pub key_color: Option<Color>,
    pub progress_width: usize,
}

impl Default for PrintFlags {
    fn default() -> Self {
        Self {
            width: WordWidth::Bits8,
            hex: true,
            unsigned: false,
            signed: false,
            character: false,
            bold_objects: false,
            key_color: None,
            progress_width: 50,
        }
    }
}

impl PrintFlags {
    pub fn with_width(mut self, width: WordWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_columns(mut self, hex: bool, unsigned: bool, signed: bool, character: bool) -> Self {
        self.hex = hex;
        self.unsigned = unsigned;
        self.signed = signed;
        self.character = character;
        self
    }

    pub fn has_columns(&self) -> bool {
        self.hex || self.unsigned || self.signed || self.character
    }

    pub fn is_styled(&self) -> bool {
        self.bold_objects || self.key_color.is_some()
    }
}
