//! Enum types for the configurator domain
//!
//! Every lookup table in [`crate::templates`] is keyed by one of these
//! closed enums, so missing-key errors are impossible by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the buyer currently sits in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerStage {
    NewLead,
    WarmLead,
    ActiveCustomer,
    PastClient,
}

/// Buyer psychology category used to select motivational language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuyerArchetype {
    Visionary,
    Pragmatist,
    Skeptic,
    Relationship,
}

/// Outreach surface a message is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Email,
    Sms,
    Dm,
}

/// Follow-up frequency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FollowUpCadence {
    Light,
    #[default]
    Standard,
    Intense,
}

impl CustomerStage {
    pub fn all() -> &'static [CustomerStage] {
        &[
            CustomerStage::NewLead,
            CustomerStage::WarmLead,
            CustomerStage::ActiveCustomer,
            CustomerStage::PastClient,
        ]
    }

    /// Human-facing label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStage::NewLead => "New Lead",
            CustomerStage::WarmLead => "Warm Lead",
            CustomerStage::ActiveCustomer => "Active Customer",
            CustomerStage::PastClient => "Past Client",
        }
    }
}

impl BuyerArchetype {
    pub fn all() -> &'static [BuyerArchetype] {
        &[
            BuyerArchetype::Visionary,
            BuyerArchetype::Pragmatist,
            BuyerArchetype::Skeptic,
            BuyerArchetype::Relationship,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuyerArchetype::Visionary => "Visionary Pioneers",
            BuyerArchetype::Pragmatist => "Pragmatic Operators",
            BuyerArchetype::Skeptic => "Data Skeptics",
            BuyerArchetype::Relationship => "Relationship Builders",
        }
    }
}

impl Channel {
    pub fn all() -> &'static [Channel] {
        &[Channel::Email, Channel::Sms, Channel::Dm]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "SMS",
            Channel::Dm => "Direct Message",
        }
    }
}

impl FollowUpCadence {
    pub fn all() -> &'static [FollowUpCadence] {
        &[
            FollowUpCadence::Light,
            FollowUpCadence::Standard,
            FollowUpCadence::Intense,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FollowUpCadence::Light => "Light",
            FollowUpCadence::Standard => "Standard",
            FollowUpCadence::Intense => "Intense",
        }
    }
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for CustomerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CustomerStage::NewLead => "new-lead",
            CustomerStage::WarmLead => "warm-lead",
            CustomerStage::ActiveCustomer => "active-customer",
            CustomerStage::PastClient => "past-client",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for CustomerStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "newlead" => Ok(CustomerStage::NewLead),
            "warmlead" => Ok(CustomerStage::WarmLead),
            "activecustomer" => Ok(CustomerStage::ActiveCustomer),
            "pastclient" => Ok(CustomerStage::PastClient),
            _ => Err(format!("Invalid CustomerStage: {}", s)),
        }
    }
}

impl fmt::Display for BuyerArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            BuyerArchetype::Visionary => "visionary",
            BuyerArchetype::Pragmatist => "pragmatist",
            BuyerArchetype::Skeptic => "skeptic",
            BuyerArchetype::Relationship => "relationship",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for BuyerArchetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "visionary" => Ok(BuyerArchetype::Visionary),
            "pragmatist" => Ok(BuyerArchetype::Pragmatist),
            "skeptic" => Ok(BuyerArchetype::Skeptic),
            "relationship" => Ok(BuyerArchetype::Relationship),
            _ => Err(format!("Invalid BuyerArchetype: {}", s)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Dm => "dm",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "email" => Ok(Channel::Email),
            "sms" | "text" => Ok(Channel::Sms),
            "dm" | "directmessage" => Ok(Channel::Dm),
            _ => Err(format!("Invalid Channel: {}", s)),
        }
    }
}

impl fmt::Display for FollowUpCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FollowUpCadence::Light => "light",
            FollowUpCadence::Standard => "standard",
            FollowUpCadence::Intense => "intense",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for FollowUpCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "light" => Ok(FollowUpCadence::Light),
            "standard" => Ok(FollowUpCadence::Standard),
            "intense" => Ok(FollowUpCadence::Intense),
            _ => Err(format!("Invalid FollowUpCadence: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_round_trips_through_display() {
        for stage in CustomerStage::all() {
            let parsed: CustomerStage = stage.to_string().parse().unwrap();
            assert_eq!(parsed, *stage);
        }
    }

    #[test]
    fn serde_uses_kebab_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&CustomerStage::NewLead).unwrap(),
            "\"new-lead\""
        );
        assert_eq!(
            serde_json::to_string(&CustomerStage::ActiveCustomer).unwrap(),
            "\"active-customer\""
        );
        assert_eq!(serde_json::to_string(&Channel::Dm).unwrap(), "\"dm\"");
        assert_eq!(
            serde_json::to_string(&FollowUpCadence::Intense).unwrap(),
            "\"intense\""
        );
    }

    #[test]
    fn every_enum_value_has_a_display_label() {
        for stage in CustomerStage::all() {
            assert!(!stage.label().is_empty());
        }
        for archetype in BuyerArchetype::all() {
            assert!(!archetype.label().is_empty());
        }
        for channel in Channel::all() {
            assert!(!channel.label().is_empty());
        }
        assert_eq!(FollowUpCadence::Light.label(), "Light");
        assert_eq!(FollowUpCadence::Standard.label(), "Standard");
        assert_eq!(FollowUpCadence::Intense.label(), "Intense");
    }

    #[test]
    fn parse_tolerates_separators_and_case() {
        assert_eq!(
            "New Lead".parse::<CustomerStage>().unwrap(),
            CustomerStage::NewLead
        );
        assert_eq!(
            "past_client".parse::<CustomerStage>().unwrap(),
            CustomerStage::PastClient
        );
        assert_eq!("SMS".parse::<Channel>().unwrap(), Channel::Sms);
        assert!("fax".parse::<Channel>().is_err());
    }
}
