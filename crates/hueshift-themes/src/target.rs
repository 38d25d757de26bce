//! Theme target: the seam between the coordinator and the rendered surface

use std::sync::RwLock;

/// Receiver for the applied theme attribute.
///
/// Names reaching a target have already been validated against the catalog.
pub trait ThemeTarget: Send + Sync {
    /// Set `name` as the active presentation attribute
    fn apply_theme(&self, name: &'static str);
}

/// Default target: holds the applied attribute for renderers to read.
///
/// All visual styling keys off this one value, so after any attached
/// coordinator call it is always a valid catalog member.
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attr: RwLock<Option<&'static str>>,
}

impl DocumentRoot {
    /// Create a root with no attribute applied yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently applied theme attribute, if any coordinator call has run
    pub fn theme_attr(&self) -> Option<&'static str> {
        self.attr.read().ok().and_then(|attr| *attr)
    }
}

impl ThemeTarget for DocumentRoot {
    fn apply_theme(&self, name: &'static str) {
        if let Ok(mut attr) = self.attr.write() {
            *attr = Some(name);
        }
    }
}
