//! Per-severity colors for styled sinks, rendered as 24-bit ANSI escapes.

use crate::level::Level;

/// Foreground color as an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(80, 250, 123);
    pub const YELLOW: Self = Self::new(241, 250, 140);
    pub const RED: Self = Self::new(255, 85, 85);
    pub const BLUE: Self = Self::new(98, 114, 164);
    pub const MAGENTA: Self = Self::new(255, 121, 198);

    /// Clears every SGR attribute.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Trace and debug stay neutral; the rest escalate in urgency.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug | Level::None => Self::WHITE,
            Level::Info => Self::GREEN,
            Level::Warn => Self::YELLOW,
            Level::Error => Self::RED,
            Level::Fatal => Self::BLUE,
            Level::Panic => Self::MAGENTA,
        }
    }

    /// `\x1b[38;2;R;G;Bm`
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Wraps `text` in the color's escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}
