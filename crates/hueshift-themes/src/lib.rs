//! Hueshift Theme Coordination
//!
//! This crate owns the single current-theme selection for a process: a fixed
//! compile-time catalog of themes, a coordinator that validates, persists,
//! and applies selections, and a synchronous broadcast channel that keeps
//! every mounted UI fragment in agreement about the active theme.

pub mod catalog;
pub mod coordinator;
pub mod target;

pub use catalog::{
    all_themes, category_of, is_valid_theme, theme_info, themes_by_category, ThemeCategories,
    ThemeCategory, ThemeInfo, DEFAULT_THEME,
};
pub use coordinator::{ThemeCoordinator, ThemeSubscription};
pub use target::{DocumentRoot, ThemeTarget};
