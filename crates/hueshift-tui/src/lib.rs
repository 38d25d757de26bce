//! Hueshift Terminal UI
//!
//! UI fragments bound to the theme coordinator: a grouped picker, a binary
//! light/dark toggle, and the palettes that key rendering colors off the
//! applied theme attribute. Fragments subscribe to the coordinator on mount
//! and release the subscription when dropped, so any number of them stay
//! synchronized without sharing state directly.

pub mod palette;
pub mod picker;
pub mod toggle;

pub use palette::Palette;
pub use picker::{ThemePicker, ThemePickerWidget};
pub use toggle::{ModeToggle, ModeToggleWidget};
