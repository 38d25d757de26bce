//! Runtime theme selection, persistence, and change broadcast

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, Weak,
    },
};

use hueshift_storage::{PreferenceStore, ThemePreference};

use crate::{
    catalog::{self, ThemeCategory, DEFAULT_THEME},
    target::ThemeTarget,
};

/// Type alias for theme listeners
type Listener = Arc<dyn Fn(&'static str) + Send + Sync>;

/// Coordinates the single current-theme selection for a process.
///
/// The coordinator is the sole writer of both the preference store and the
/// theme target; all writes go through [`set_theme`](Self::set_theme) and
/// [`initialize`](Self::initialize). Every change made through `set_theme`
/// is broadcast synchronously to all registered listeners in the same turn.
/// Cloning is cheap and shares the same underlying state.
///
/// Nothing on this type panics or returns an error: an invalid theme name
/// falls back to [`DEFAULT_THEME`] with a warning, and a coordinator without
/// an attached context turns every operation into a safe no-op.
#[derive(Clone)]
pub struct ThemeCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    context: Option<Context>,
    listeners: Mutex<HashMap<u64, Listener>>,
    next_listener_id: AtomicU64,
}

/// The process-wide resources the coordinator writes to
struct Context {
    store: Arc<dyn PreferenceStore>,
    root: Arc<dyn ThemeTarget>,
}

impl std::fmt::Debug for ThemeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCoordinator")
            .field("attached", &self.inner.context.is_some())
            .field("current_theme", &self.current_theme())
            .finish()
    }
}

impl ThemeCoordinator {
    /// Create a coordinator attached to a preference store and a theme target
    pub fn new(store: Arc<dyn PreferenceStore>, root: Arc<dyn ThemeTarget>) -> Self {
        Self {
            inner: Arc::new(Inner {
                context: Some(Context { store, root }),
                listeners: Mutex::new(HashMap::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Create a coordinator with no attached context.
    ///
    /// Used for headless passes that run before any display exists: reads
    /// return [`DEFAULT_THEME`] and writes are silent no-ops.
    pub fn detached() -> Self {
        Self {
            inner: Arc::new(Inner {
                context: None,
                listeners: Mutex::new(HashMap::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Check whether a context is attached
    pub fn is_attached(&self) -> bool {
        self.inner.context.is_some()
    }

    /// Get the current theme from the preference store.
    ///
    /// An absent, unreadable, or non-catalog value resolves to
    /// [`DEFAULT_THEME`] without mutating storage.
    pub fn current_theme(&self) -> &'static str {
        let Some(context) = &self.inner.context else {
            return DEFAULT_THEME;
        };
        match context.store.load() {
            Ok(Some(preference)) => catalog::theme_info(&preference.current_theme)
                .map(|info| info.name)
                .unwrap_or(DEFAULT_THEME),
            Ok(None) => DEFAULT_THEME,
            Err(e) => {
                tracing::debug!(error = %e, "theme preference unavailable, using default");
                DEFAULT_THEME
            }
        }
    }

    /// Set the theme: persist it, apply it to the target, and broadcast it.
    ///
    /// Names outside the catalog are replaced by [`DEFAULT_THEME`] with a
    /// warning; the broadcast always carries the resolved name.
    pub fn set_theme(&self, name: &str) {
        let Some(context) = &self.inner.context else {
            return;
        };

        let resolved = match catalog::theme_info(name) {
            Some(info) => info.name,
            None => {
                tracing::warn!(theme = name, "Invalid theme requested, using default");
                DEFAULT_THEME
            }
        };

        let preference = ThemePreference {
            current_theme: resolved.to_string(),
            last_updated: Some(chrono::Local::now().to_rfc3339()),
        };
        if let Err(e) = context.store.save(&preference) {
            tracing::debug!(error = %e, theme = resolved, "failed to persist theme preference");
        }

        context.root.apply_theme(resolved);
        self.notify(resolved);
    }

    /// Apply the persisted theme to the target without writing storage or
    /// broadcasting.
    ///
    /// Idempotent; intended as the first call on startup so the display
    /// never shows the wrong theme before the UI mounts.
    pub fn initialize(&self) {
        let Some(context) = &self.inner.context else {
            return;
        };
        context.root.apply_theme(self.current_theme());
    }

    /// Collapse the selection to a binary choice: any dark-partition theme
    /// toggles to `"light"`, everything else (light or special) to `"dark"`.
    pub fn toggle_light_dark(&self) {
        let next = match catalog::category_of(self.current_theme()) {
            Some(ThemeCategory::Dark) => "light",
            _ => "dark",
        };
        self.set_theme(next);
    }

    /// Register a listener for theme changes.
    ///
    /// Delivery is synchronous within the `set_theme` call that triggered
    /// it; ordering between listeners is unspecified. The listener stays
    /// registered until the returned [`ThemeSubscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(&'static str) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.insert(id, Arc::new(listener));
        }
        ThemeSubscription {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    fn notify(&self, theme: &'static str) {
        // Snapshot under the lock, invoke outside it: a listener may
        // re-enter the coordinator (e.g. a fragment reacting to its own
        // selection).
        let snapshot: Vec<Listener> = match self.inner.listeners.lock() {
            Ok(listeners) => listeners.values().cloned().collect(),
            Err(_) => return,
        };
        for listener in snapshot {
            listener(theme);
        }
    }
}

/// Handle for a registered theme-change listener.
///
/// Dropping the handle unregisters the listener, so a fragment torn down for
/// any reason stops receiving notifications.
pub struct ThemeSubscription {
    registry: Weak<Inner>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut listeners) = inner.listeners.lock() {
                listeners.remove(&self.id);
            }
        }
    }
}

impl std::fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSubscription").field("id", &self.id).finish()
    }
}
