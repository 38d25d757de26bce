//! Binary light/dark toggle fragment

use std::sync::{Arc, Mutex};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use hueshift_themes::{
    catalog::{category_of, theme_info, ThemeCategory, DEFAULT_THEME},
    ThemeCoordinator, ThemeSubscription,
};

/// A mounted light/dark toggle.
///
/// Shows a moon glyph while any dark-partition theme is active and a sun
/// otherwise; activating it collapses the whole theme space to plain
/// `"light"` or `"dark"`. Display state follows coordinator broadcasts, so
/// a toggle reflects selections made in any other fragment.
pub struct ModeToggle {
    coordinator: ThemeCoordinator,
    current: Arc<Mutex<&'static str>>,
    _subscription: ThemeSubscription,
}

impl ModeToggle {
    /// Mount the toggle against a coordinator
    pub fn mount(coordinator: &ThemeCoordinator) -> Self {
        let current = Arc::new(Mutex::new(coordinator.current_theme()));
        coordinator.initialize();

        let shared = Arc::clone(&current);
        let subscription = coordinator.subscribe(move |theme| {
            if let Ok(mut cur) = shared.lock() {
                *cur = theme;
            }
        });

        Self {
            coordinator: coordinator.clone(),
            current,
            _subscription: subscription,
        }
    }

    /// The theme this fragment currently displays
    pub fn current(&self) -> &'static str {
        self.current
            .lock()
            .map(|cur| *cur)
            .unwrap_or(DEFAULT_THEME)
    }

    /// Whether the displayed theme belongs to the dark partition
    pub fn is_dark(&self) -> bool {
        category_of(self.current()) == Some(ThemeCategory::Dark)
    }

    /// Glyph for the current state
    pub fn glyph(&self) -> &'static str {
        if self.is_dark() {
            "🌙"
        } else {
            "☀️"
        }
    }

    /// Flip between the light and dark defaults
    pub fn activate(&self) {
        self.coordinator.toggle_light_dark();
    }
}

/// Renders a mounted [`ModeToggle`] as a one-line button
pub struct ModeToggleWidget;

impl StatefulWidget for ModeToggleWidget {
    type State = ModeToggle;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let current = state.current();
        let label = theme_info(current).map(|info| info.label).unwrap_or(current);
        Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", state.glyph())),
            Span::raw(label),
        ]))
        .block(
            Block::default()
                .title("Toggle theme (t)")
                .borders(Borders::ALL),
        )
        .render(area, buf);
    }
}
