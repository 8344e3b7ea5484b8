//! Module for managing the colors of cryptor's terminal output.
//!
//! Each logical output element maps to a 16-color ANSI foreground. Color is
//! only applied when the target stream is a terminal.

use owo_colors::{AnsiColors, OwoColorize};
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for a recovered or recorded shift key.
    Key,
    /// Certainty labels.
    CertaintyHigh,
    CertaintyModerate,
    CertaintyLow,
    /// Messages that could not be decoded.
    Undecoded,
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeStyle {
    /// Foreground color, if any.
    pub fg: Option<AnsiColors>,
}

impl ThemeStyle {
    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        [
            (ThemeEntry::Header, AnsiColors::BrightBlue),
            (ThemeEntry::Success, AnsiColors::Green),
            (ThemeEntry::Info, AnsiColors::Cyan),
            (ThemeEntry::Warn, AnsiColors::Yellow),
            (ThemeEntry::Error, AnsiColors::Red),
            (ThemeEntry::Key, AnsiColors::BrightMagenta),
            (ThemeEntry::CertaintyHigh, AnsiColors::BrightGreen),
            (ThemeEntry::CertaintyModerate, AnsiColors::Yellow),
            (ThemeEntry::CertaintyLow, AnsiColors::BrightRed),
            (ThemeEntry::Undecoded, AnsiColors::BrightBlack),
        ]
        .into_iter()
        .map(|(entry, color)| (entry, ThemeStyle { fg: Some(color) }))
        .collect()
    }
}

/// Renders `text` in the color of `entry`, or unchanged when color is off
/// or the entry has no style.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    match theme.get(&entry).and_then(|style| style.fg) {
        Some(color) if enable_colors => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_styles_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(theme.len(), 10);
        assert!(theme.values().all(|style| style.fg.is_some()));
    }

    #[test]
    fn unstyled_entry_is_left_plain() {
        let mut theme = ThemeStyle::default_theme_map();
        theme.insert(ThemeEntry::Key, ThemeStyle::default());
        assert_eq!(paint("key 3", ThemeEntry::Key, &theme, true), "key 3");
    }

    #[test]
    fn paint_respects_color_switch() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(paint("key 3", ThemeEntry::Key, &theme, false), "key 3");
        let colored = paint("key 3", ThemeEntry::Key, &theme, true);
        assert!(colored.contains("key 3"));
        assert!(colored.starts_with('\u{1b}'));
    }
}
