//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme for the reference presentation,
//! supporting built-in themes and custom themes loaded from TOML files, plus
//! raw style fragments that override individual colors on top of the active
//! theme. It provides utilities for converting hex colors to ANSI escape
//! sequences.
//!
//! # Built-in Themes
//!
//! - `slate-dark`: Dark slate palette (default)
//! - `slate-light`: Light slate palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e2e8f0"
//! row_fg = "#cbd5e1"
//! divider = "#334155"
//! timestamp_fg = "#64748b"
//! ```
//!
//! # Style Fragments
//!
//! A fragment is a flat TOML snippet naming only the colors it overrides:
//!
//! ```
//! use listcard::Theme;
//!
//! let theme = Theme::default().with_overrides("divider = \"#ff0000\"").unwrap();
//! assert_eq!(theme.colors.divider, "#ff0000");
//! ```

use crate::domain::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for rendering a card.
///
/// Can be loaded from built-in themes or custom TOML files, and refined with
/// flat override fragments at card configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all card elements.
    pub colors: ThemeColors,
}

/// Color definitions for all card elements.
///
/// All colors are hex strings (e.g. `"#cbd5e1"`). The header background is
/// optional; themes without one render the header on the terminal default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title header text color.
    pub header_fg: String,
    /// Optional title header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Item row text color.
    pub row_fg: String,
    /// Row divider line color.
    pub divider: String,

    /// Trailing timestamp row color.
    pub timestamp_fg: String,
}

/// Flat override fragment applied over a theme's colors.
#[derive(Debug, Default, Deserialize)]
struct ColorOverrides {
    header_fg: Option<String>,
    header_bg: Option<String>,
    row_fg: Option<String>,
    divider: Option<String>,
    timestamp_fg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `slate-dark`, `slate-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "slate-dark" => include_str!("../../themes/slate-dark.toml"),
            "slate-light" => include_str!("../../themes/slate-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Theme`] when the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CardError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CardError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns a copy of this theme with a flat override fragment applied.
    ///
    /// Only the colors named in the fragment change; everything else carries
    /// over from this theme.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Theme`] when the fragment is not valid TOML.
    pub fn with_overrides(&self, fragment: &str) -> Result<Self> {
        let overrides: ColorOverrides = toml::from_str(fragment)
            .map_err(|e| CardError::Theme(format!("failed to parse style fragment: {e}")))?;

        let mut theme = self.clone();
        if let Some(color) = overrides.header_fg {
            theme.colors.header_fg = color;
        }
        if let Some(color) = overrides.header_bg {
            theme.colors.header_bg = Some(color);
        }
        if let Some(color) = overrides.row_fg {
            theme.colors.row_fg = color;
        }
        if let Some(color) = overrides.divider {
            theme.colors.divider = color;
        }
        if let Some(color) = overrides.timestamp_fg {
            theme.colors.timestamp_fg = color;
        }
        Ok(theme)
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and parses hex digits. Falls back to
    /// white on malformed input so a bad color never aborts a render.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (slate-dark).
    fn default() -> Self {
        Self {
            name: "slate-dark".to_string(),
            colors: ThemeColors {
                header_fg: "#e2e8f0".to_string(),
                header_bg: None,
                row_fg: "#cbd5e1".to_string(),
                divider: "#334155".to_string(),
                timestamp_fg: "#64748b".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        let dark = Theme::from_name("slate-dark").unwrap();
        assert_eq!(dark.name, "slate-dark");
        assert_eq!(dark, Theme::default());

        let light = Theme::from_name("slate-light").unwrap();
        assert_eq!(light.colors.header_bg.as_deref(), Some("#e2e8f0"));
    }

    #[test]
    fn unknown_builtin_yields_none() {
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn theme_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
            name = "custom"

            [colors]
            header_fg = "#111111"
            row_fg = "#222222"
            divider = "#333333"
            timestamp_fg = "#444444"
            "##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.row_fg, "#222222");
    }

    #[test]
    fn missing_theme_file_is_an_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, CardError::Theme(_)));
    }

    #[test]
    fn overrides_change_only_named_colors() {
        let theme = Theme::default()
            .with_overrides("divider = \"#ff0000\"\nheader_bg = \"#000000\"")
            .unwrap();
        assert_eq!(theme.colors.divider, "#ff0000");
        assert_eq!(theme.colors.header_bg.as_deref(), Some("#000000"));
        assert_eq!(theme.colors.row_fg, Theme::default().colors.row_fg);
    }

    #[test]
    fn malformed_fragment_is_an_error() {
        assert!(matches!(
            Theme::default().with_overrides("not = [valid"),
            Err(CardError::Theme(_))
        ));
    }

    #[test]
    fn hex_colors_produce_truecolor_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#bad"), "\u{001b}[38;2;255;255;255m");
    }
}
