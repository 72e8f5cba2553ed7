//! Left column: the agent configuration form.

use crate::nav::Field;
use crate::state::App;
use crate::theme::{cadence_color, channel_color, stage_color};
use crate::widgets::SectionPanel;
use pitchsmith_core::{archetype_angle, stage_copy, Channel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    render_fields(f, app, chunks[0]);
    render_briefing(f, app, chunks[1]);
}

fn render_fields(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for field in Field::all() {
        let focused = *field == app.focus;
        lines.push(field_line(app, *field, focused));
        if *field == Field::PainPoints {
            lines.extend(pain_lines(app));
        }
        if *field == Field::AgentPersona {
            lines.push(Line::from(Span::styled(
                format!("      {}", app.agent_config.agent_persona.tone),
                Style::default().fg(app.theme.text_dim),
            )));
        }
        if *field == Field::ChannelMix {
            lines.push(channel_line(app, focused));
        }
    }

    let border_style = Style::default().fg(app.theme.border);
    SectionPanel {
        title: " Agent Setup ",
        lines,
        border_style,
        title_style: Style::default().fg(app.theme.primary),
    }
    .render(f, area);
}

fn field_line<'a>(app: &'a App, field: Field, focused: bool) -> Line<'a> {
    let marker = if focused { "› " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(app.theme.border_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_dim)
    };
    let (value, value_style) = field_value(app, field);
    Line::from(vec![
        Span::styled(format!("{}{}: ", marker, field.title()), label_style),
        Span::styled(value, value_style),
    ])
}

fn field_value(app: &App, field: Field) -> (String, Style) {
    let cfg = &app.agent_config;
    let plain = Style::default().fg(app.theme.text);
    match field {
        Field::CustomerName => (display_or(&cfg.customer_name, "(blank)"), plain),
        Field::PipelineStage => (
            cfg.customer_stage.label().to_string(),
            Style::default().fg(stage_color(cfg.customer_stage, &app.theme)),
        ),
        Field::BuyerArchetype => (cfg.archetype.label().to_string(), plain),
        Field::PersonalHook => (display_or(&cfg.personalization_hook, "(blank)"), plain),
        Field::ProductFocus => (
            format!("{} ({})", cfg.selected_product.name, cfg.selected_product.price),
            plain,
        ),
        Field::PrimaryOutcome => (display_or(&cfg.primary_outcome, "(blank)"), plain),
        Field::DreamState => (display_or(&cfg.desire, "(blank)"), plain),
        Field::CredibilityAsset => (display_or(&cfg.credibility_asset, "(blank)"), plain),
        Field::UrgencyWindow => (display_or(&cfg.scarcity_window, "(blank)"), plain),
        Field::PainPoints => (format!("{} listed", cfg.pains.len()), plain),
        Field::AgentPersona => (cfg.agent_persona.label.clone(), plain),
        Field::ChannelMix => (format!("{} active", cfg.channel_mix.len()), plain),
        Field::FollowUpRhythm => (
            cfg.follow_up_cadence.label().to_string(),
            Style::default().fg(cadence_color(cfg.follow_up_cadence, &app.theme)),
        ),
    }
}

fn pain_lines<'a>(app: &'a App) -> Vec<Line<'a>> {
    app.agent_config
        .pains
        .iter()
        .map(|pain| {
            Line::from(Span::styled(
                format!("      • {}", pain),
                Style::default().fg(app.theme.text_dim),
            ))
        })
        .collect()
}

fn channel_line(app: &App, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("      ")];
    for (idx, channel) in Channel::all().iter().enumerate() {
        let active = app.agent_config.channel_mix.contains(channel);
        let under_cursor = focused && idx == app.channel_cursor;
        let check = if active { "[x]" } else { "[ ]" };
        let mut style = Style::default().fg(channel_color(*channel, &app.theme));
        if !active {
            style = Style::default().fg(app.theme.text_dim);
        }
        if under_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{} {}", check, channel.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_briefing(f: &mut Frame<'_>, app: &App, area: Rect) {
    let stage = stage_copy(app.agent_config.customer_stage);
    let angle = archetype_angle(app.agent_config.archetype);
    let lines = vec![
        Line::from(Span::styled(
            stage.headline.to_string(),
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Tone: {}", stage.tone_hint),
            Style::default().fg(app.theme.text_dim),
        )),
        Line::from(Span::styled(
            format!("Hook: {}", angle.hook),
            Style::default().fg(app.theme.accent),
        )),
    ];
    SectionPanel {
        title: " Briefing ",
        lines,
        border_style: Style::default().fg(app.theme.border),
        title_style: Style::default().fg(app.theme.primary),
    }
    .render(f, area);
}

fn display_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
