//! Pitchsmith workbench entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pitchsmith_tui::config::TuiConfig;
use pitchsmith_tui::error::TuiError;
use pitchsmith_tui::events::TuiEvent;
use pitchsmith_tui::keys::{map_key, Action};
use pitchsmith_tui::nav::Field;
use pitchsmith_tui::state::App;
use pitchsmith_tui::views::render_view;
use pitchsmith_tui::{logging, notifications::NotificationLevel};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(config.log_path.as_deref())?;
    let mut app = App::new(config);
    if let Err(err) = app.agent_config.validate() {
        app.notify(NotificationLevel::Warning, format!("{}", err));
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            // Editor mode owns the keyboard except for save/cancel.
            if app.editor.is_some() {
                match key.code {
                    crossterm::event::KeyCode::Enter => app.commit_editor(),
                    crossterm::event::KeyCode::Esc => app.cancel_editor(),
                    _ => {
                        if let Some(editor) = app.editor.as_mut() {
                            editor.textarea.input(key);
                        }
                    }
                }
                return false;
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, action);
            }
        }
        TuiEvent::Tick => app.prune_notifications(chrono::Utc::now()),
        TuiEvent::Resize { .. } => {}
    }
    false
}

fn handle_action(app: &mut App, action: Action) -> bool {
    if app.help_visible {
        match action {
            Action::Quit => return true,
            _ => {
                app.help_visible = false;
                return false;
            }
        }
    }
    match action {
        Action::Quit => return true,
        Action::MoveDown => app.focus_next(),
        Action::MoveUp => app.focus_previous(),
        Action::CycleLeft => app.cycle_focused(-1),
        Action::CycleRight => app.cycle_focused(1),
        Action::Select => {
            if app.focus == Field::ChannelMix {
                app.toggle_focused_channel();
            } else {
                app.cycle_focused(1);
            }
        }
        Action::Edit => app.open_editor(),
        Action::Confirm => {
            if app.focus.is_text() {
                app.open_editor();
            } else if app.focus == Field::ChannelMix {
                app.toggle_focused_channel();
            }
        }
        Action::RemovePain => {
            if app.focus == Field::PainPoints {
                app.remove_last_pain();
            }
        }
        Action::CopyPlaybook => app.copy_playbook(),
        Action::CopyChannel => app.copy_focused_channel(),
        Action::OpenHelp => app.help_visible = true,
        Action::Cancel => {}
    }
    false
}
