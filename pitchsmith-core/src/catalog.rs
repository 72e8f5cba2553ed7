//! Fixed product and persona catalogs
//!
//! Both catalogs are immutable after initialization. The UI selects whole
//! records out of them; `AgentConfig` then owns its copy of the selection.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An offer the agent can pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub promise: String,
    pub proof: String,
    pub urgency_cue: String,
}

/// A named communication style with associated tone and rhetorical levers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPersona {
    pub id: String,
    pub label: String,
    pub headline: String,
    pub tone: String,
    pub levers: Vec<String>,
    pub strategy: String,
}

static PRODUCT_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "conversion-lab".to_string(),
            name: "Conversion Lab Accelerator".to_string(),
            price: "$1,497".to_string(),
            promise: "Launch a high-converting funnel in 30 days".to_string(),
            proof: "Average clients see a 3.2x lift in demo bookings".to_string(),
            urgency_cue: "Spots reset every quarter and we have 6 left".to_string(),
        },
        Product {
            id: "evergreen-agents".to_string(),
            name: "Evergreen AI Agent Suite".to_string(),
            price: "$349/mo".to_string(),
            promise: "Automate buyer conversations across email, SMS, and social".to_string(),
            proof: "Built-in playbooks trained on 1.2M sales interactions".to_string(),
            urgency_cue: "Founding membership pricing increases next month".to_string(),
        },
        Product {
            id: "offer-mastery".to_string(),
            name: "Offer Mastery Bootcamp".to_string(),
            price: "$997".to_string(),
            promise: "Design offers that convert across cold and warm channels".to_string(),
            proof: "Used by 800+ founders to scale past their revenue plateaus".to_string(),
            urgency_cue: "Cohort kicks off on Monday—bonus workshop expires in 72 hours"
                .to_string(),
        },
    ]
});

static AGENT_PERSONAS: Lazy<Vec<AgentPersona>> = Lazy::new(|| {
    vec![
        AgentPersona {
            id: "the-closer".to_string(),
            label: "The Closer".to_string(),
            headline: "High-conversion agent using urgency and proof".to_string(),
            tone: "decisive, energetic, laser-focused on outcomes".to_string(),
            levers: vec![
                "AIDA sequencing".to_string(),
                "loss aversion".to_string(),
                "scarcity cues".to_string(),
            ],
            strategy: "Fast-track conversions by spotlighting specific ROI and time-sensitive wins."
                .to_string(),
        },
        AgentPersona {
            id: "the-strategist".to_string(),
            label: "The Strategist".to_string(),
            headline: "Strategic advisor who co-creates the roadmap".to_string(),
            tone: "consultative, insightful, confident".to_string(),
            levers: vec![
                "authority bias".to_string(),
                "future pacing".to_string(),
                "risk mitigation".to_string(),
            ],
            strategy: "Guide the buyer to picture themselves succeeding with your offer already in place."
                .to_string(),
        },
        AgentPersona {
            id: "the-champion".to_string(),
            label: "The Champion".to_string(),
            headline: "Relationship-first guide who makes buyers feel understood".to_string(),
            tone: "warm, human, supportive".to_string(),
            levers: vec![
                "likability bias".to_string(),
                "reciprocity".to_string(),
                "belonging".to_string(),
            ],
            strategy: "Amplify empathy and align your product with their values and culture."
                .to_string(),
        },
    ]
});

/// The fixed three-product catalog, in display order.
pub fn product_catalog() -> &'static [Product] {
    &PRODUCT_CATALOG
}

/// The fixed three-persona catalog, in display order.
pub fn agent_personas() -> &'static [AgentPersona] {
    &AGENT_PERSONAS
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    product_catalog().iter().find(|p| p.id == id)
}

pub fn persona_by_id(id: &str) -> Option<&'static AgentPersona> {
    agent_personas().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_three_entries() {
        assert_eq!(product_catalog().len(), 3);
        assert_eq!(agent_personas().len(), 3);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            product_by_id("evergreen-agents").map(|p| p.price.as_str()),
            Some("$349/mo")
        );
        assert_eq!(
            persona_by_id("the-champion").map(|p| p.levers.len()),
            Some(3)
        );
        assert!(product_by_id("missing").is_none());
    }

    #[test]
    fn every_persona_carries_levers() {
        for persona in agent_personas() {
            assert!(!persona.levers.is_empty(), "{} has no levers", persona.id);
        }
    }
}
