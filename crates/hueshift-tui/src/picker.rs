//! Grouped theme picker fragment

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use hueshift_themes::{
    catalog::{themes_by_category, ThemeInfo, DEFAULT_THEME},
    ThemeCoordinator, ThemeSubscription,
};

/// One row in the flattened picker list
#[derive(Debug, Clone, Copy)]
enum PickerRow {
    Header(&'static str),
    Theme(&'static ThemeInfo),
}

fn build_rows() -> Vec<PickerRow> {
    let categories = themes_by_category();
    let mut rows = Vec::new();
    rows.push(PickerRow::Header("☀️ Light Themes"));
    rows.extend(categories.light.iter().map(PickerRow::Theme));
    rows.push(PickerRow::Header("🌙 Dark Themes"));
    rows.extend(categories.dark.iter().map(PickerRow::Theme));
    rows.push(PickerRow::Header("🎨 Special"));
    rows.extend(categories.special.iter().map(PickerRow::Theme));
    rows
}

/// A mounted theme picker.
///
/// Mounting reads the coordinator's current selection, applies it, and
/// subscribes to change broadcasts; dropping the picker releases the
/// subscription. Several pickers mounted against the same coordinator stay
/// synchronized purely through those broadcasts.
pub struct ThemePicker {
    coordinator: ThemeCoordinator,
    current: Arc<Mutex<&'static str>>,
    _subscription: ThemeSubscription,
    rows: Vec<PickerRow>,
    cursor: usize,
    list_state: ListState,
}

impl ThemePicker {
    /// Mount the picker against a coordinator
    pub fn mount(coordinator: &ThemeCoordinator) -> Self {
        let current = Arc::new(Mutex::new(coordinator.current_theme()));
        coordinator.initialize();

        let shared = Arc::clone(&current);
        let subscription = coordinator.subscribe(move |theme| {
            if let Ok(mut cur) = shared.lock() {
                *cur = theme;
            }
        });

        let rows = build_rows();
        let active = current.lock().map(|cur| *cur).unwrap_or(DEFAULT_THEME);
        let cursor = rows
            .iter()
            .position(|row| matches!(row, PickerRow::Theme(info) if info.name == active))
            .unwrap_or(1);

        Self {
            coordinator: coordinator.clone(),
            current,
            _subscription: subscription,
            rows,
            cursor,
            list_state: ListState::default(),
        }
    }

    /// The theme this fragment currently displays as active
    pub fn current(&self) -> &'static str {
        self.current
            .lock()
            .map(|cur| *cur)
            .unwrap_or(DEFAULT_THEME)
    }

    /// Move the cursor to the next theme row, wrapping past the end
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// Move the cursor to the previous theme row, wrapping past the start
    pub fn select_prev(&mut self) {
        self.step(self.rows.len() - 1);
    }

    fn step(&mut self, delta: usize) {
        let len = self.rows.len();
        let mut cursor = self.cursor;
        // Headers are labels, not choices; skip over them.
        for _ in 0..len {
            cursor = (cursor + delta) % len;
            if matches!(self.rows[cursor], PickerRow::Theme(_)) {
                self.cursor = cursor;
                return;
            }
        }
    }

    /// Apply the theme under the cursor.
    ///
    /// Updates the local display state immediately rather than waiting for
    /// the broadcast this call triggers.
    pub fn activate(&mut self) {
        if let PickerRow::Theme(info) = self.rows[self.cursor] {
            self.coordinator.set_theme(info.name);
            if let Ok(mut cur) = self.current.lock() {
                *cur = info.name;
            }
        }
    }

    /// Handle a key event; returns true if the picker consumed it
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                true
            }
            KeyCode::Down => {
                self.select_next();
                true
            }
            KeyCode::Enter => {
                self.activate();
                true
            }
            _ => false,
        }
    }

    /// Name of the theme under the cursor, if a theme row is selected
    pub fn cursor_theme(&self) -> Option<&'static str> {
        match self.rows[self.cursor] {
            PickerRow::Theme(info) => Some(info.name),
            PickerRow::Header(_) => None,
        }
    }
}

/// Renders a mounted [`ThemePicker`]
pub struct ThemePickerWidget;

impl StatefulWidget for ThemePickerWidget {
    type State = ThemePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let active = state.current();
        let items: Vec<ListItem> = state
            .rows
            .iter()
            .map(|row| match row {
                PickerRow::Header(title) => ListItem::new(Line::from(Span::styled(
                    *title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))),
                PickerRow::Theme(info) => {
                    let mut style = Style::default();
                    if info.name == active {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{} ", info.emoji)),
                        Span::raw(info.label),
                    ]))
                    .style(style)
                }
            })
            .collect();

        state.list_state.select(Some(state.cursor));
        let list = List::new(items)
            .block(Block::default().title("Choose Theme").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}
