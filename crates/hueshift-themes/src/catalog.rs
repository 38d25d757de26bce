//! Built-in theme catalog
//!
//! The catalog is fixed at compile time and partitioned into three ordered
//! groups: light, dark, and special. Theme names are unique across all
//! partitions, and every validation in the crate goes through
//! [`is_valid_theme`] (or the lookup it wraps).

/// Metadata for a single built-in theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeInfo {
    /// Identifier used for persistence and the applied attribute
    pub name: &'static str,
    /// Display glyph shown next to the label
    pub emoji: &'static str,
    /// Human-readable name
    pub label: &'static str,
}

/// Catalog partition a theme belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCategory {
    Light,
    Dark,
    Special,
}

/// Theme applied when no valid selection exists
pub const DEFAULT_THEME: &str = "light";

const fn theme(name: &'static str, emoji: &'static str, label: &'static str) -> ThemeInfo {
    ThemeInfo { name, emoji, label }
}

/// Light catalog partition
pub const LIGHT_THEMES: &[ThemeInfo] = &[
    theme("light", "☀️", "Light"),
    theme("autumn", "🍂", "Autumn"),
    theme("cupcake", "🧁", "Cupcake"),
    theme("bumblebee", "🐝", "Bumblebee"),
    theme("emerald", "💎", "Emerald"),
    theme("corporate", "🏢", "Corporate"),
    theme("valentine", "💝", "Valentine"),
    theme("garden", "🌻", "Garden"),
    theme("aqua", "🌊", "Aqua"),
    theme("lofi", "🎵", "Lo-Fi"),
    theme("pastel", "🎨", "Pastel"),
    theme("fantasy", "🧚", "Fantasy"),
    theme("wireframe", "📐", "Wireframe"),
    theme("lemonade", "🍋", "Lemonade"),
    theme("winter", "❄️", "Winter"),
    theme("nord", "🏔️", "Nord"),
    theme("caramellatte", "🍮", "Caramel Latte"),
    theme("silk", "🪞", "Silk"),
    theme("retro", "📻", "Retro"),
    theme("cyberpunk", "🤖", "Cyberpunk"),
    theme("acid", "🧪", "Acid"),
];

/// Dark catalog partition
pub const DARK_THEMES: &[ThemeInfo] = &[
    theme("dark", "🌙", "Dark"),
    theme("synthwave", "🌆", "Synthwave"),
    theme("halloween", "🎃", "Halloween"),
    theme("sunset", "🌅", "Sunset"),
    theme("forest", "🌲", "Forest"),
    theme("luxury", "💰", "Luxury"),
    theme("dracula", "🧛", "Dracula"),
    theme("black", "⚫", "Black"),
    theme("business", "💼", "Business"),
    theme("night", "🌃", "Night"),
    theme("coffee", "☕", "Coffee"),
    theme("dim", "🔅", "Dim"),
    theme("abyss", "🕳️", "Abyss"),
];

/// Special catalog partition
pub const SPECIAL_THEMES: &[ThemeInfo] = &[theme("cmyk", "🖨️", "CMYK")];

/// The three catalog partitions, in presentation order
#[derive(Debug, Clone, Copy)]
pub struct ThemeCategories {
    pub light: &'static [ThemeInfo],
    pub dark: &'static [ThemeInfo],
    pub special: &'static [ThemeInfo],
}

/// Get the catalog grouped by category for presentation
pub fn themes_by_category() -> ThemeCategories {
    ThemeCategories {
        light: LIGHT_THEMES,
        dark: DARK_THEMES,
        special: SPECIAL_THEMES,
    }
}

/// Iterate over every theme in the catalog, in partition order
pub fn all_themes() -> impl Iterator<Item = &'static ThemeInfo> {
    LIGHT_THEMES
        .iter()
        .chain(DARK_THEMES)
        .chain(SPECIAL_THEMES)
}

/// Look up a theme's metadata by name
pub fn theme_info(name: &str) -> Option<&'static ThemeInfo> {
    all_themes().find(|t| t.name == name)
}

/// Check if a theme name is a catalog member
pub fn is_valid_theme(name: &str) -> bool {
    theme_info(name).is_some()
}

/// Get the partition a theme belongs to, if any
pub fn category_of(name: &str) -> Option<ThemeCategory> {
    if LIGHT_THEMES.iter().any(|t| t.name == name) {
        Some(ThemeCategory::Light)
    } else if DARK_THEMES.iter().any(|t| t.name == name) {
        Some(ThemeCategory::Dark)
    } else if SPECIAL_THEMES.iter().any(|t| t.name == name) {
        Some(ThemeCategory::Special)
    } else {
        None
    }
}
