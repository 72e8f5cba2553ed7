use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pitchsmith_core::Channel;
use pitchsmith_tui::config::{ThemeConfig, TuiConfig};
use pitchsmith_tui::keys::{map_key, Action};
use pitchsmith_tui::nav::Field;
use pitchsmith_tui::state::App;
use proptest::prelude::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(TuiConfig::default().validate().is_ok());
}

#[test]
fn zero_tick_interval_rejected() {
    let mut config = TuiConfig::default();
    config.tick_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn zero_copied_indicator_rejected() {
    let mut config = TuiConfig::default();
    config.copied_indicator_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn unknown_theme_rejected() {
    let mut config = TuiConfig::default();
    config.theme = ThemeConfig {
        name: "neon".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn vim_and_arrow_keys_agree() {
    assert_eq!(map_key(key(KeyCode::Char('k'))), map_key(key(KeyCode::Up)));
    assert_eq!(map_key(key(KeyCode::Char('j'))), map_key(key(KeyCode::Down)));
    assert_eq!(map_key(key(KeyCode::Char('h'))), map_key(key(KeyCode::Left)));
    assert_eq!(
        map_key(key(KeyCode::Char('l'))),
        map_key(key(KeyCode::Right))
    );
}

#[test]
fn ctrl_c_quits() {
    let event = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    };
    assert_eq!(map_key(event), Some(Action::Quit));
}

#[test]
fn plain_c_copies_channel() {
    assert_eq!(map_key(key(KeyCode::Char('c'))), Some(Action::CopyChannel));
}

proptest! {
    #[test]
    fn focus_ring_wraps_both_ways(steps in 0usize..64) {
        let mut field = Field::CustomerName;
        for _ in 0..steps {
            field = field.next();
        }
        for _ in 0..steps {
            field = field.previous();
        }
        prop_assert_eq!(field, Field::CustomerName);
    }

    #[test]
    fn full_lap_returns_to_start(start_idx in 0usize..13) {
        let start = Field::all()[start_idx % Field::all().len()];
        let mut field = start;
        for _ in 0..Field::all().len() {
            field = field.next();
        }
        prop_assert_eq!(field, start);
    }

    #[test]
    fn last_channel_survives_any_toggle_sequence(
        toggles in prop::collection::vec(0usize..3, 0..20),
    ) {
        let mut app = App::new(TuiConfig::default());
        for idx in toggles {
            app.toggle_channel(Channel::all()[idx]);
            prop_assert!(!app.agent_config.channel_mix.is_empty());
            prop_assert_eq!(
                app.generated.channel_messages.len(),
                app.agent_config.channel_mix.len()
            );
        }
    }

    #[test]
    fn channel_cursor_stays_in_range(steps in prop::collection::vec(prop_oneof![Just(-1isize), Just(1isize)], 0..32)) {
        let mut app = App::new(TuiConfig::default());
        app.focus = Field::ChannelMix;
        for step in steps {
            app.cycle_focused(step);
            prop_assert!(app.channel_cursor < Channel::all().len());
        }
    }

    #[test]
    fn cycling_selection_fields_never_panics(
        field_idx in 0usize..13,
        steps in prop::collection::vec(prop_oneof![Just(-1isize), Just(1isize)], 0..16),
    ) {
        let mut app = App::new(TuiConfig::default());
        app.focus = Field::all()[field_idx % Field::all().len()];
        for step in steps {
            app.cycle_focused(step);
        }
        prop_assert!(app.agent_config.validate().is_ok());
    }
}
