//! View rendering dispatch.

pub mod form;
pub mod helpers;
pub mod output;

pub use helpers::{centered_rect, two_column};

use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    let (form_area, output_area) = two_column(layout[1], 40);
    form::render(f, app, form_area);
    output::render(f, app, output_area);

    render_footer(f, app, layout[2]);

    if let Some(editor) = &app.editor {
        render_editor(f, app, editor, f.size());
    }
    if app.help_visible {
        render_help(f, app, f.size());
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        "PITCHSMITH | {} | {} persona",
        app.agent_config.selected_product.name, app.agent_config.agent_persona.label
    );
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help =
        "j/k move • h/l cycle • Space toggle • e edit • d drop pain • y copy playbook • c copy channel • ? help • q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_editor(f: &mut Frame<'_>, app: &App, editor: &crate::state::Editor, area: Rect) {
    let overlay = centered_rect(60, 5, area);
    f.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus))
        .title(Span::styled(
            format!(" {} (Enter save, Esc cancel) ", editor.field.title()),
            Style::default()
                .fg(app.theme.border_focus)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);
    f.render_widget(&editor.textarea, inner);
}

fn render_help(f: &mut Frame<'_>, app: &App, area: Rect) {
    let overlay = centered_rect(50, 14, area);
    f.render_widget(Clear, overlay);
    let lines = vec![
        Line::from("j/k or arrows  move between fields"),
        Line::from("h/l or arrows  cycle the focused selection"),
        Line::from("Space          toggle channel / cycle forward"),
        Line::from("e or Enter     edit the focused text field"),
        Line::from("d              drop the last pain point"),
        Line::from("y              copy the full playbook"),
        Line::from("c              copy the highlighted channel"),
        Line::from("?              toggle this help"),
        Line::from("q or Ctrl-C    quit"),
    ];
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus))
                .title(" Keybindings "),
        );
    f.render_widget(widget, overlay);
}
