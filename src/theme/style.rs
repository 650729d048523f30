//! SGR escape sequences composed once, when a theme is built, instead of on
//! every rendered line.

use std::fmt;

/// 24-bit colour, for palettes the 16 named terminal colours cannot match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the `#` is optional). Returns `None` on anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One SGR attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sgr {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    CrossedOut,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    White,
    /// Truecolor foreground.
    Rgb(Color),
}

impl Sgr {
    /// Names accepted by [`Sgr::from_name`], in declaration order.
    pub const NAMES: [&'static str; 22] = [
        "reset",
        "bold",
        "faint",
        "italic",
        "underline",
        "crossed-out",
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "gray",
        "bright-black",
        "bright-red",
        "bright-green",
        "bright-yellow",
        "bright-blue",
        "bright-magenta",
        "bright-cyan",
        "white",
    ];

    const fn code(self) -> u8 {
        match self {
            Self::Reset => 0,
            Self::Bold => 1,
            Self::Faint => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::CrossedOut => 9,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::Gray => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::White => 97,
            Self::Rgb(_) => 38,
        }
    }

    /// Looks up a lowercase name; `_` and `-` are interchangeable, and
    /// `#RRGGBB` yields a truecolor attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.starts_with('#') {
            return Color::from_hex(name).map(Self::Rgb);
        }
        let name = name.to_lowercase().replace('_', "-");
        let sgr = match name.as_str() {
            "reset" => Self::Reset,
            "bold" => Self::Bold,
            "faint" | "dim" => Self::Faint,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "crossed-out" | "strike" => Self::CrossedOut,
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "gray" | "grey" => Self::Gray,
            "bright-black" => Self::BrightBlack,
            "bright-red" => Self::BrightRed,
            "bright-green" => Self::BrightGreen,
            "bright-yellow" => Self::BrightYellow,
            "bright-blue" => Self::BrightBlue,
            "bright-magenta" => Self::BrightMagenta,
            "bright-cyan" => Self::BrightCyan,
            "white" => Self::White,
            _ => return None,
        };
        Some(sgr)
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => write!(f, "38;2;{};{};{}", c.r, c.g, c.b),
            other => write!(f, "{}", other.code()),
        }
    }
}

/// A complete escape sequence such as `\x1b[1;31m`. The empty style renders
/// text unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style(String);

impl Style {
    /// Closes any open styling.
    pub const RESET: &'static str = "\x1b[0m";

    /// Joins the attributes into one sequence; no attributes gives the empty style.
    #[must_use]
    pub fn new(attrs: &[Sgr]) -> Self {
        if attrs.is_empty() {
            return Self::none();
        }
        let codes: Vec<String> = attrs.iter().map(ToString::to_string).collect();
        Self(format!("\x1b[{}m", codes.join(";")))
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    /// Parses space-separated attribute names (`"bold bright-red"`,
    /// `"#ff5555"`). An empty string is the empty style.
    ///
    /// # Errors
    /// [`crate::Error::InvalidStyle`] naming the first unknown word.
    pub fn parse(spec: &str) -> Result<Self, crate::Error> {
        let attrs = spec
            .split_whitespace()
            .map(|word| {
                Sgr::from_name(word).ok_or_else(|| crate::Error::InvalidStyle(word.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&attrs))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
