//! Colour palette and user settings types.

use ratatui::style::Color;
use std::path::PathBuf;

use crate::state::SortOrder;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for inactive borders.
    pub surface1: Color,
    /// Border color for panels.
    pub surface2: Color,
    /// Muted text for titles and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for focused input and male owners.
    pub sapphire: Color,
    /// Accent for focused panel borders.
    pub mauve: Color,
    /// Active filter buttons.
    pub green: Color,
    /// Sort indicators.
    pub yellow: Color,
    /// Female owners and the "no matches" notice.
    pub red: Color,
    /// Row highlight background.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Mocha
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog JSON file; `None` uses the embedded sample data.
    pub data_path: Option<PathBuf>,
    /// Initial sort for the product table; `None` keeps catalog order.
    pub sort: Option<SortOrder>,
    /// Colour owner names by sex.
    pub owner_colors: bool,
    /// Show the key hint line under the table.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            sort: None,
            owner_colors: true,
            show_keybinds_footer: true,
        }
    }
}
