//! Notification system for the TUI.
//!
//! Notifications are transient: each one expires `ttl_ms` after creation
//! and is pruned on the next tick. The "Copied" indicator rides on this.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub ttl_ms: i64,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>, ttl_ms: i64) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
            ttl_ms,
        }
    }

    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::milliseconds(self.ttl_ms)
    }
}
