//! Right column: the generated playbook.

use crate::state::App;
use crate::theme::channel_color;
use crate::widgets::SectionPanel;
use pitchsmith_core::delivery_template;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let followup_height = app.generated.followups.len() as u16 + 5;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(6),
            Constraint::Length(followup_height),
        ])
        .split(area);

    render_subjects(f, app, chunks[0]);
    render_messaging(f, app, chunks[1]);
    render_channels(f, app, chunks[2]);
    render_follow_up_plan(f, app, chunks[3]);
}

fn render_subjects(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = app
        .generated
        .subject
        .iter()
        .map(|subject| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(app.theme.primary)),
                Span::styled(subject.clone(), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();
    SectionPanel {
        title: " Subject Ideas ",
        lines,
        border_style: Style::default().fg(app.theme.border),
        title_style: Style::default().fg(app.theme.primary),
    }
    .render(f, area);
}

fn render_messaging(f: &mut Frame<'_>, app: &App, area: Rect) {
    let generated = &app.generated;
    let mut lines = vec![
        Line::from(Span::styled(
            generated.positioning.clone(),
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for narrative_line in generated.narrative.lines() {
        lines.push(Line::from(Span::styled(
            narrative_line.to_string(),
            Style::default().fg(app.theme.text_dim),
        )));
    }
    lines.push(Line::from(""));
    let mut lever_spans = vec![Span::styled(
        "Levers: ",
        Style::default().fg(app.theme.text_dim),
    )];
    for (idx, lever) in generated.psychological_levers.iter().enumerate() {
        if idx > 0 {
            lever_spans.push(Span::raw("  "));
        }
        lever_spans.push(Span::styled(
            format!("[{}]", lever),
            Style::default().fg(app.theme.accent),
        ));
    }
    lines.push(Line::from(lever_spans));
    SectionPanel {
        title: " Positioning & Narrative ",
        lines,
        border_style: Style::default().fg(app.theme.border),
        title_style: Style::default().fg(app.theme.primary),
    }
    .render(f, area);
}

fn render_channels(f: &mut Frame<'_>, app: &App, area: Rect) {
    let messages = &app.generated.channel_messages;
    if messages.is_empty() {
        return;
    }
    let share = 100 / messages.len() as u16;
    let constraints: Vec<Constraint> = messages
        .iter()
        .map(|_| Constraint::Percentage(share))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (message, chunk) in messages.iter().zip(chunks.iter()) {
        let template = delivery_template(message.channel);
        let color = channel_color(message.channel, &app.theme);
        let mut lines = vec![
            Line::from(Span::styled(
                template.opener.to_string(),
                Style::default().fg(app.theme.text_dim),
            )),
            Line::from(Span::styled(
                template.cadence.to_string(),
                Style::default().fg(app.theme.text_dim),
            )),
        ];
        lines.push(Line::from(""));
        for copy_line in message.copy.lines() {
            lines.push(Line::from(Span::styled(
                copy_line.to_string(),
                Style::default().fg(app.theme.text),
            )));
        }
        SectionPanel {
            title: message.channel.label(),
            lines,
            border_style: Style::default().fg(color),
            title_style: Style::default().fg(color).add_modifier(Modifier::BOLD),
        }
        .render(f, *chunk);
    }
}

fn render_follow_up_plan(f: &mut Frame<'_>, app: &App, area: Rect) {
    let generated = &app.generated;
    let mut lines: Vec<Line> = generated
        .followups
        .iter()
        .map(|play| {
            Line::from(Span::styled(
                play.clone(),
                Style::default().fg(app.theme.text),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("CTA: ", Style::default().fg(app.theme.text_dim)),
        Span::styled(
            generated.call_to_action.clone(),
            Style::default().fg(app.theme.warning),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("North star: ", Style::default().fg(app.theme.text_dim)),
        Span::styled(
            generated.success_metric.clone(),
            Style::default().fg(app.theme.success),
        ),
    ]));
    SectionPanel {
        title: " Follow-Up Plan ",
        lines,
        border_style: Style::default().fg(app.theme.border),
        title_style: Style::default().fg(app.theme.primary),
    }
    .render(f, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use pitchsmith_core::Channel;

    fn rendered_text(app: &App) -> String {
        let backend = ratatui::backend::TestBackend::new(240, 60);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, f.size())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn channel_cards_show_opener_and_cadence() {
        let app = App::new(TuiConfig::default());
        let text = rendered_text(&app);
        for channel in Channel::all() {
            let template = delivery_template(*channel);
            assert!(text.contains(template.opener), "missing {}", template.opener);
        }
        assert!(text.contains("micro-CTA"));
    }
}
