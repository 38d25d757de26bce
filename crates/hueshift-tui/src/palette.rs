//! Render palettes keyed off the applied theme attribute

use hueshift_themes::catalog::{category_of, ThemeCategory};
use ratatui::style::Color;

/// Render colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub highlight: Color,
}

impl Palette {
    const LIGHT: Self = Self {
        background: Color::Rgb(250, 250, 250),
        foreground: Color::Rgb(31, 41, 55),
        accent: Color::Rgb(59, 130, 246),
        highlight: Color::Rgb(229, 231, 235),
    };

    const DARK: Self = Self {
        background: Color::Rgb(29, 35, 42),
        foreground: Color::Rgb(236, 240, 244),
        accent: Color::Rgb(96, 165, 250),
        highlight: Color::Rgb(55, 65, 81),
    };

    /// Resolve the palette for a theme name.
    ///
    /// A handful of flagship themes get hand-picked colors; everything else
    /// falls back to its partition default. Unknown names render as light,
    /// matching the coordinator's default.
    pub fn for_theme(name: &str) -> Self {
        match name {
            "light" => Self::LIGHT,
            "dark" => Self::DARK,
            "dracula" => Self {
                background: Color::Rgb(40, 42, 54),
                foreground: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(189, 147, 249),
                highlight: Color::Rgb(68, 71, 90),
            },
            "nord" => Self {
                background: Color::Rgb(236, 239, 244),
                foreground: Color::Rgb(46, 52, 64),
                accent: Color::Rgb(94, 129, 172),
                highlight: Color::Rgb(216, 222, 233),
            },
            "synthwave" => Self {
                background: Color::Rgb(26, 16, 60),
                foreground: Color::Rgb(249, 247, 253),
                accent: Color::Rgb(255, 113, 206),
                highlight: Color::Rgb(46, 32, 90),
            },
            "cmyk" => Self {
                background: Color::Rgb(255, 255, 255),
                foreground: Color::Rgb(26, 26, 26),
                accent: Color::Rgb(0, 174, 239),
                highlight: Color::Rgb(236, 0, 140),
            },
            _ => match category_of(name) {
                Some(ThemeCategory::Dark) => Self::DARK,
                _ => Self::LIGHT,
            },
        }
    }
}
