//! Generated output records

use crate::enums::Channel;
use serde::{Deserialize, Serialize};

/// Copy written for one delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMessage {
    pub channel: Channel,
    pub copy: String,
}

/// The full derived text bundle. Recomputed fresh on every config change;
/// it has no identity beyond value equality and is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMessage {
    pub subject: Vec<String>,
    pub positioning: String,
    pub narrative: String,
    pub psychological_levers: Vec<String>,
    pub call_to_action: String,
    pub channel_messages: Vec<ChannelMessage>,
    pub followups: Vec<String>,
    pub success_metric: String,
}
