//! Form focus ring.
//!
//! The workbench is a single screen; navigation moves focus through the
//! blueprint fields in the order the original form lays them out.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    CustomerName,
    PipelineStage,
    BuyerArchetype,
    PersonalHook,
    ProductFocus,
    PrimaryOutcome,
    DreamState,
    CredibilityAsset,
    UrgencyWindow,
    PainPoints,
    AgentPersona,
    ChannelMix,
    FollowUpRhythm,
}

impl Field {
    pub fn title(&self) -> &'static str {
        match self {
            Field::CustomerName => "Customer name",
            Field::PipelineStage => "Pipeline stage",
            Field::BuyerArchetype => "Buyer archetype",
            Field::PersonalHook => "Personal hook",
            Field::ProductFocus => "Product focus",
            Field::PrimaryOutcome => "Primary outcome",
            Field::DreamState => "Dream state",
            Field::CredibilityAsset => "Credibility asset",
            Field::UrgencyWindow => "Urgency window",
            Field::PainPoints => "Pain points",
            Field::AgentPersona => "Agent persona",
            Field::ChannelMix => "Channels",
            Field::FollowUpRhythm => "Follow up rhythm",
        }
    }

    /// Whether the field opens the free-text editor.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Field::CustomerName
                | Field::PersonalHook
                | Field::PrimaryOutcome
                | Field::DreamState
                | Field::CredibilityAsset
                | Field::UrgencyWindow
                | Field::PainPoints
        )
    }

    pub fn all() -> &'static [Field] {
        &[
            Field::CustomerName,
            Field::PipelineStage,
            Field::BuyerArchetype,
            Field::PersonalHook,
            Field::ProductFocus,
            Field::PrimaryOutcome,
            Field::DreamState,
            Field::CredibilityAsset,
            Field::UrgencyWindow,
            Field::PainPoints,
            Field::AgentPersona,
            Field::ChannelMix,
            Field::FollowUpRhythm,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Field {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Field {
        let all = Self::all();
        let idx = self.index();
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}
