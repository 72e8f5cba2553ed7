//! Application state for the workbench.
//!
//! The `AgentConfig` is the single source of truth; every committed edit
//! replaces a field and recomposes the `GeneratedMessage` from scratch.

use crate::clipboard;
use crate::config::TuiConfig;
use crate::nav::Field;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SlateTheme;
use chrono::{DateTime, Utc};
use pitchsmith_core::{
    agent_personas, compose, playbook_bundle, product_catalog, AgentConfig, BuyerArchetype,
    Channel, CustomerStage, FollowUpCadence, GeneratedMessage,
};
use tui_textarea::TextArea;

/// An open free-text editor for one form field.
pub struct Editor {
    pub field: Field,
    pub textarea: TextArea<'static>,
}

impl Editor {
    pub fn open(field: Field, initial: &str) -> Self {
        let mut textarea = TextArea::default();
        if !initial.is_empty() {
            textarea.insert_str(initial);
        }
        Self { field, textarea }
    }

    pub fn value(&self) -> String {
        self.textarea.lines().join(" ")
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SlateTheme,
    pub agent_config: AgentConfig,
    pub generated: GeneratedMessage,
    pub focus: Field,
    /// Cursor over `Channel::all()` when the channel mix has focus.
    pub channel_cursor: usize,
    pub editor: Option<Editor>,
    pub help_visible: bool,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let agent_config = AgentConfig::starter();
        let generated = compose(&agent_config);
        Self {
            config,
            theme: SlateTheme::slate(),
            agent_config,
            generated,
            focus: Field::CustomerName,
            channel_cursor: 0,
            editor: None,
            help_visible: false,
            notifications: Vec::new(),
        }
    }

    /// Rebuild the output bundle. Called after every committed edit.
    pub fn recompose(&mut self) {
        self.generated = compose(&self.agent_config);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Open the free-text editor for the focused field, if it has one.
    pub fn open_editor(&mut self) {
        if !self.focus.is_text() {
            return;
        }
        let initial = match self.focus {
            Field::CustomerName => self.agent_config.customer_name.clone(),
            Field::PersonalHook => self.agent_config.personalization_hook.clone(),
            Field::PrimaryOutcome => self.agent_config.primary_outcome.clone(),
            Field::DreamState => self.agent_config.desire.clone(),
            Field::CredibilityAsset => self.agent_config.credibility_asset.clone(),
            Field::UrgencyWindow => self.agent_config.scarcity_window.clone(),
            // Pain entry appends, so it starts blank.
            Field::PainPoints => String::new(),
            _ => return,
        };
        self.editor = Some(Editor::open(self.focus, &initial));
    }

    /// Commit the open editor back into the config.
    pub fn commit_editor(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        let value = editor.value();
        match editor.field {
            Field::CustomerName => self.agent_config.customer_name = value,
            Field::PersonalHook => self.agent_config.personalization_hook = value,
            Field::PrimaryOutcome => self.agent_config.primary_outcome = value,
            Field::DreamState => self.agent_config.desire = value,
            Field::CredibilityAsset => self.agent_config.credibility_asset = value,
            Field::UrgencyWindow => self.agent_config.scarcity_window = value,
            Field::PainPoints => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return;
                }
                self.agent_config.pains.push(trimmed.to_string());
            }
            _ => {}
        }
        self.recompose();
    }

    pub fn cancel_editor(&mut self) {
        self.editor = None;
    }

    /// Cycle the focused selection field. `step` is +1 or -1.
    pub fn cycle_focused(&mut self, step: isize) {
        match self.focus {
            Field::PipelineStage => {
                self.agent_config.customer_stage =
                    cycled(CustomerStage::all(), self.agent_config.customer_stage, step);
            }
            Field::BuyerArchetype => {
                self.agent_config.archetype =
                    cycled(BuyerArchetype::all(), self.agent_config.archetype, step);
            }
            Field::FollowUpRhythm => {
                self.agent_config.follow_up_cadence = cycled(
                    FollowUpCadence::all(),
                    self.agent_config.follow_up_cadence,
                    step,
                );
            }
            Field::ProductFocus => {
                let catalog = product_catalog();
                let idx = catalog
                    .iter()
                    .position(|p| p.id == self.agent_config.selected_product.id)
                    .unwrap_or(0);
                let next = step_index(idx, catalog.len(), step);
                self.agent_config.selected_product = catalog[next].clone();
            }
            Field::AgentPersona => {
                let personas = agent_personas();
                let idx = personas
                    .iter()
                    .position(|p| p.id == self.agent_config.agent_persona.id)
                    .unwrap_or(0);
                let next = step_index(idx, personas.len(), step);
                self.agent_config.agent_persona = personas[next].clone();
            }
            Field::ChannelMix => {
                self.channel_cursor = step_index(self.channel_cursor, Channel::all().len(), step);
                return;
            }
            _ => return,
        }
        self.recompose();
    }

    /// Toggle `channel` in the mix. Removing the last remaining channel is
    /// a no-op; re-enabling a channel appends it to the mix order.
    pub fn toggle_channel(&mut self, channel: Channel) {
        let mix = &mut self.agent_config.channel_mix;
        if let Some(idx) = mix.iter().position(|c| *c == channel) {
            if mix.len() > 1 {
                mix.remove(idx);
            }
        } else {
            mix.push(channel);
        }
        self.recompose();
    }

    /// Toggle the channel under the cursor (Space on the channel field).
    pub fn toggle_focused_channel(&mut self) {
        let channel = Channel::all()[self.channel_cursor];
        self.toggle_channel(channel);
    }

    pub fn remove_last_pain(&mut self) {
        if self.agent_config.pains.pop().is_some() {
            self.recompose();
        }
    }

    pub fn copy_playbook(&mut self) {
        let bundle = playbook_bundle(&self.generated);
        self.copy_with_label(&bundle, "playbook".to_string());
    }

    /// Copy the message for the channel under the cursor.
    pub fn copy_focused_channel(&mut self) {
        let channel = Channel::all()[self.channel_cursor];
        let Some(message) = self
            .generated
            .channel_messages
            .iter()
            .find(|m| m.channel == channel)
        else {
            self.notify(
                NotificationLevel::Warning,
                format!("{} is not in the channel mix", channel.label()),
            );
            return;
        };
        let payload = message.copy.clone();
        self.copy_with_label(&payload, channel.label().to_string());
    }

    fn copy_with_label(&mut self, payload: &str, label: String) {
        match clipboard::copy(payload) {
            Ok(()) => {
                tracing::info!(target: "pitchsmith_tui", %label, "copied to clipboard");
                self.notify(NotificationLevel::Success, format!("Copied {}", label));
            }
            Err(err) => {
                tracing::warn!(target: "pitchsmith_tui", %err, "clipboard write failed");
                self.notify(NotificationLevel::Error, format!("Copy failed: {}", err));
            }
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let ttl = self.config.copied_indicator_ms as i64;
        self.notifications.push(Notification::new(level, message, ttl));
    }

    /// Drop expired notifications. Called on every tick.
    pub fn prune_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications.retain(|n| !n.expired_at(now));
    }
}

fn step_index(current: usize, len: usize, step: isize) -> usize {
    let len = len as isize;
    let next = (current as isize + step).rem_euclid(len);
    next as usize
}

fn cycled<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[step_index(idx, all.len(), step)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    #[test]
    fn toggling_last_channel_is_a_noop() {
        let mut app = app();
        app.agent_config.channel_mix = vec![Channel::Sms];
        app.recompose();
        app.toggle_channel(Channel::Sms);
        assert_eq!(app.agent_config.channel_mix, vec![Channel::Sms]);
    }

    #[test]
    fn reenabling_a_channel_appends_it() {
        let mut app = app();
        app.toggle_channel(Channel::Email);
        assert_eq!(
            app.agent_config.channel_mix,
            vec![Channel::Sms, Channel::Dm]
        );
        app.toggle_channel(Channel::Email);
        assert_eq!(
            app.agent_config.channel_mix,
            vec![Channel::Sms, Channel::Dm, Channel::Email]
        );
        assert_eq!(app.generated.channel_messages.len(), 3);
    }

    #[test]
    fn committed_edit_recomposes() {
        let mut app = app();
        app.focus = Field::CustomerName;
        app.open_editor();
        let editor = app.editor.as_mut().unwrap();
        editor.textarea.select_all();
        editor.textarea.cut();
        editor.textarea.insert_str("Jordan");
        app.commit_editor();
        assert_eq!(app.agent_config.customer_name, "Jordan");
        assert!(app.generated.subject[0].starts_with("Jordan, "));
    }

    #[test]
    fn blank_pain_entry_is_ignored() {
        let mut app = app();
        let before = app.agent_config.pains.len();
        app.focus = Field::PainPoints;
        app.open_editor();
        app.editor.as_mut().unwrap().textarea.insert_str("   ");
        app.commit_editor();
        assert_eq!(app.agent_config.pains.len(), before);
    }

    #[test]
    fn pain_entries_are_trimmed_and_appended() {
        let mut app = app();
        app.focus = Field::PainPoints;
        app.open_editor();
        app.editor
            .as_mut()
            .unwrap()
            .textarea
            .insert_str("  follow-up slips through the cracks  ");
        app.commit_editor();
        assert_eq!(
            app.agent_config.pains.last().map(String::as_str),
            Some("follow-up slips through the cracks")
        );
    }

    #[test]
    fn cycling_product_changes_selection_and_output() {
        let mut app = app();
        app.focus = Field::ProductFocus;
        let before = app.agent_config.selected_product.id.clone();
        app.cycle_focused(1);
        assert_ne!(app.agent_config.selected_product.id, before);
        assert!(app
            .generated
            .subject[1]
            .contains(&app.agent_config.selected_product.name));
    }

    #[test]
    fn expired_notifications_are_pruned() {
        let mut app = app();
        app.notify(NotificationLevel::Success, "Copied playbook");
        assert_eq!(app.notifications.len(), 1);
        let later = Utc::now() + chrono::Duration::milliseconds(app.config.copied_indicator_ms as i64 + 1);
        app.prune_notifications(later);
        assert!(app.notifications.is_empty());
    }
}
