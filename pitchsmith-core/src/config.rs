//! Agent configuration record

use crate::catalog::{agent_personas, product_catalog, AgentPersona, Product};
use crate::enums::{BuyerArchetype, Channel, CustomerStage, FollowUpCadence};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Everything the user can tune on the form, as one immutable value.
///
/// Edits replace the record wholesale; the composer derives a fresh
/// [`crate::GeneratedMessage`] from it on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub customer_name: String,
    pub customer_stage: CustomerStage,
    pub archetype: BuyerArchetype,
    pub primary_outcome: String,
    pub pains: Vec<String>,
    pub desire: String,
    pub credibility_asset: String,
    pub scarcity_window: String,
    pub channel_mix: Vec<Channel>,
    pub selected_product: Product,
    pub agent_persona: AgentPersona,
    pub personalization_hook: String,
    pub follow_up_cadence: FollowUpCadence,
}

impl AgentConfig {
    /// The seeded blueprint shown when the workbench opens.
    pub fn starter() -> Self {
        Self {
            customer_name: "Alex".to_string(),
            customer_stage: CustomerStage::WarmLead,
            archetype: BuyerArchetype::Visionary,
            primary_outcome: "Ship a magnetic offer funnel that prints qualified calls"
                .to_string(),
            pains: vec![
                "Launching new offers eats weeks".to_string(),
                "Team lacks persuasive copy on-demand".to_string(),
                "Lead nurture feels generic".to_string(),
            ],
            desire: "turn every touchpoint into a buying moment".to_string(),
            credibility_asset: "loom.com/share/sprint-breakdown".to_string(),
            scarcity_window: "Friday".to_string(),
            channel_mix: vec![Channel::Email, Channel::Sms, Channel::Dm],
            selected_product: product_catalog()[1].clone(),
            agent_persona: agent_personas()[0].clone(),
            personalization_hook:
                "Congrats on crossing 5M ARR—your latest product drop was a masterclass in positioning."
                    .to_string(),
            follow_up_cadence: FollowUpCadence::Standard,
        }
    }

    /// Boundary check for configs arriving from outside the form UI.
    /// The UI itself keeps the channel mix non-empty structurally.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_mix.is_empty() {
            return Err(ValidationError::EmptyChannelMix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_config_is_valid() {
        let config = AgentConfig::starter();
        assert!(config.validate().is_ok());
        assert_eq!(config.channel_mix.len(), 3);
        assert_eq!(config.selected_product.id, "evergreen-agents");
        assert_eq!(config.agent_persona.id, "the-closer");
    }

    #[test]
    fn empty_channel_mix_is_rejected() {
        let mut config = AgentConfig::starter();
        config.channel_mix.clear();
        assert_eq!(config.validate(), Err(ValidationError::EmptyChannelMix));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AgentConfig::starter();
        let json = serde_json::to_string(&config).unwrap();
        let back: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert!(json.contains("\"warm-lead\""));
    }
}
