//! Slate theme and color utilities.

use crate::notifications::NotificationLevel;
use pitchsmith_core::{Channel, CustomerStage, FollowUpCadence};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct SlateTheme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SlateTheme {
    pub fn slate() -> Self {
        Self {
            primary: Color::Rgb(56, 189, 248),
            accent: Color::Rgb(232, 121, 249),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(56, 189, 248),
            text: Color::Rgb(241, 245, 249),
            text_dim: Color::Rgb(148, 163, 184),
            border: Color::Rgb(51, 65, 85),
            border_focus: Color::Rgb(56, 189, 248),
        }
    }
}

impl Default for SlateTheme {
    fn default() -> Self {
        Self::slate()
    }
}

pub fn stage_color(stage: CustomerStage, theme: &SlateTheme) -> Color {
    match stage {
        CustomerStage::NewLead => theme.primary,
        CustomerStage::WarmLead => theme.warning,
        CustomerStage::ActiveCustomer => theme.success,
        CustomerStage::PastClient => theme.accent,
    }
}

pub fn channel_color(channel: Channel, theme: &SlateTheme) -> Color {
    match channel {
        Channel::Email => theme.primary,
        Channel::Sms => theme.success,
        Channel::Dm => theme.accent,
    }
}

pub fn cadence_color(cadence: FollowUpCadence, theme: &SlateTheme) -> Color {
    match cadence {
        FollowUpCadence::Light => theme.text_dim,
        FollowUpCadence::Standard => theme.primary,
        FollowUpCadence::Intense => theme.warning,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SlateTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
