//! Severity prefixes use the xterm 256-color palette: one index per severity, no
//! true-color negotiation with the terminal.

/// Index into the xterm 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color256(pub u8);

impl Color256 {
    /// Warning prefix, orange.
    pub const ORANGE: Self = Self(202);
    /// Error prefix, red.
    pub const RED: Self = Self(160);
    /// Log prefix, green.
    pub const GREEN: Self = Self(40);
    /// Debug prefix, pink.
    pub const PINK: Self = Self(167);

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The `\x1b[38;5;Nm` foreground escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;5;{}m", self.0)
    }
}

/// Wraps `text` in a foreground escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color256) -> String {
    let fg = color.fg_ansi();
    let reset = Color256::RESET;
    format!("{fg}{text}{reset}")
}

