//! Hueshift TUI - theme picker entry point

use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use hueshift_storage::FilePreferenceStore;
use hueshift_themes::{catalog::DEFAULT_THEME, DocumentRoot, ThemeCoordinator};
use hueshift_tui::{ModeToggle, ModeToggleWidget, Palette, ThemePicker, ThemePickerWidget};

fn main() -> Result<()> {
    // Stderr keeps log lines off the alternate screen
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let store = Arc::new(FilePreferenceStore::with_default_path()?);
    let root = Arc::new(DocumentRoot::new());
    let coordinator = ThemeCoordinator::new(store, root.clone());

    // Apply the persisted theme before any UI renders
    coordinator.initialize();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &coordinator, &root);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("TUI error: {}", e);
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    coordinator: &ThemeCoordinator,
    root: &DocumentRoot,
) -> Result<()> {
    let mut picker = ThemePicker::mount(coordinator);
    let mut toggle = ModeToggle::mount(coordinator);

    loop {
        let palette = Palette::for_theme(root.theme_attr().unwrap_or(DEFAULT_THEME));

        terminal.draw(|frame| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(34), Constraint::Min(0)])
                .split(frame.area());
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(columns[1]);

            frame.render_stateful_widget(ThemePickerWidget, columns[0], &mut picker);
            frame.render_stateful_widget(ModeToggleWidget, right[0], &mut toggle);

            let preview = Paragraph::new("The quick brown fox jumps over the lazy dog.")
                .style(
                    Style::default()
                        .fg(palette.foreground)
                        .bg(palette.background),
                )
                .block(
                    Block::default()
                        .title("Preview")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.accent)),
                );
            frame.render_widget(preview, right[1]);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('t') => toggle.activate(),
                    _ => {
                        picker.handle_key(key);
                    }
                }
            }
        }
    }

    Ok(())
}
