//! Error types for configurator validation

use thiserror::Error;

/// Validation errors for a submitted [`crate::AgentConfig`].
///
/// The enum fields are closed types, so the only structural violation a
/// caller can produce is an empty channel mix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("channel_mix must contain at least one channel")]
    EmptyChannelMix,
}
