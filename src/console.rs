//! Colored console output for test scripts.
//!
//! Strings are wrapped in raw ANSI escape sequences. A [`Palette`] decides
//! once whether colors are emitted, so piped output stays clean.

use std::io::IsTerminal;

/// ANSI styles and colors understood by the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Bright,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,

    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl Color {
    /// The escape sequence for this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Bright => "\x1b[1m",
            Color::Dim => "\x1b[2m",
            Color::Underscore => "\x1b[4m",
            Color::Blink => "\x1b[5m",
            Color::Reverse => "\x1b[7m",
            Color::Hidden => "\x1b[8m",

            Color::FgBlack => "\x1b[30m",
            Color::FgRed => "\x1b[31m",
            Color::FgGreen => "\x1b[32m",
            Color::FgYellow => "\x1b[33m",
            Color::FgBlue => "\x1b[34m",
            Color::FgMagenta => "\x1b[35m",
            Color::FgCyan => "\x1b[36m",
            Color::FgWhite => "\x1b[37m",

            Color::BgBlack => "\x1b[40m",
            Color::BgRed => "\x1b[41m",
            Color::BgGreen => "\x1b[42m",
            Color::BgYellow => "\x1b[43m",
            Color::BgBlue => "\x1b[44m",
            Color::BgMagenta => "\x1b[45m",
            Color::BgCyan => "\x1b[46m",
            Color::BgWhite => "\x1b[47m",
        }
    }
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colors only when stdout is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean given whether stdout is a TTY.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Applies colors to strings, or passes them through untouched when disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_mode(ColorMode::Auto)
    }
}

impl Palette {
    /// Creates a palette resolving `mode` against the current stdout.
    pub fn from_mode(mode: ColorMode) -> Self {
        Self {
            enabled: mode.should_use_colors(std::io::stdout().is_terminal()),
        }
    }

    /// A palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `s` in `color`, followed by a reset.
    pub fn paint(&self, color: Color, s: impl std::fmt::Display) -> String {
        if self.enabled {
            format!("{}{}{}", color.code(), s, Color::Reset.code())
        } else {
            s.to_string()
        }
    }

    /// The raw escape code, or an empty string when disabled.
    pub fn code(&self, color: Color) -> &'static str {
        if self.enabled {
            color.code()
        } else {
            ""
        }
    }

    pub fn blue(&self, s: impl std::fmt::Display) -> String {
        self.paint(Color::FgBlue, s)
    }

    pub fn red(&self, s: impl std::fmt::Display) -> String {
        self.paint(Color::FgRed, s)
    }

    pub fn green(&self, s: impl std::fmt::Display) -> String {
        self.paint(Color::FgGreen, s)
    }

    pub fn amber(&self, s: impl std::fmt::Display) -> String {
        self.paint(Color::FgYellow, s)
    }

    pub fn bluelog(&self, s: impl std::fmt::Display) {
        println!("{}", self.blue(s));
    }

    pub fn greenlog(&self, s: impl std::fmt::Display) {
        println!("{}", self.green(s));
    }

    pub fn redlog(&self, s: impl std::fmt::Display) {
        println!("{}", self.red(s));
    }

    pub fn amberlog(&self, s: impl std::fmt::Display) {
        println!("{}", self.amber(s));
    }

    /// Formats `total [T] pass [P] fail [F]` with each count in its own color.
    pub fn counts(&self, total: u64, pass: u64, fail: u64) -> String {
        format!(
            "total [{}] pass [{}] fail [{}]",
            self.amber(total),
            self.green(pass),
            self.red(fail)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_passes_through() {
        let palette = Palette::plain();
        assert_eq!(palette.red("boom"), "boom");
        assert_eq!(palette.code(Color::BgGreen), "");
    }

    #[test]
    fn test_enabled_palette_wraps_and_resets() {
        let palette = Palette::from_mode(ColorMode::Always);
        assert_eq!(palette.green("ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(palette.amber(7), "\x1b[33m7\x1b[0m");
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }

    #[test]
    fn test_counts_plain() {
        assert_eq!(
            Palette::plain().counts(5, 3, 2),
            "total [5] pass [3] fail [2]"
        );
    }
}
