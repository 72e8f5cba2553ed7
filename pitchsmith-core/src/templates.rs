//! Static copy tables keyed by the domain enums
//!
//! Each function is total over its enum domain and returns `'static` data,
//! so the registry has no failure modes and no mutation after init.

use crate::enums::{BuyerArchetype, Channel, CustomerStage, FollowUpCadence};

/// Tone guidance for a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCopy {
    pub headline: &'static str,
    pub tone_hint: &'static str,
}

/// Motivational angle for a buyer archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeAngle {
    pub motivators: &'static [&'static str],
    pub objections: &'static [&'static str],
    pub hook: &'static str,
}

/// Structural guidance for a delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTemplate {
    pub opener: &'static str,
    pub cadence: &'static str,
}

pub fn stage_copy(stage: CustomerStage) -> &'static StageCopy {
    match stage {
        CustomerStage::NewLead => &StageCopy {
            headline: "Spark curiosity with relevance and social proof",
            tone_hint: "High energy with a focus on quick wins",
        },
        CustomerStage::WarmLead => &StageCopy {
            headline: "Re-ignite momentum with tailored outcomes",
            tone_hint: "Confident and collaborative",
        },
        CustomerStage::ActiveCustomer => &StageCopy {
            headline: "Expand the partnership by highlighting hidden value",
            tone_hint: "Partner-centric with strategic vision",
        },
        CustomerStage::PastClient => &StageCopy {
            headline: "Win back attention with a refreshed promise",
            tone_hint: "Warm, respectful, and forward-looking",
        },
    }
}

pub fn archetype_angle(archetype: BuyerArchetype) -> &'static ArchetypeAngle {
    match archetype {
        BuyerArchetype::Visionary => &ArchetypeAngle {
            motivators: &[
                "category leadership",
                "innovation edge",
                "transformational ROI",
            ],
            objections: &["status quo fatigue", "differentiation concerns"],
            hook: "Paint the future they want to pioneer",
        },
        BuyerArchetype::Pragmatist => &ArchetypeAngle {
            motivators: &[
                "operational efficiency",
                "measurable ROI",
                "proven playbooks",
            ],
            objections: &["resource risk", "implementation drag"],
            hook: "Lead with proof and process",
        },
        BuyerArchetype::Skeptic => &ArchetypeAngle {
            motivators: &["risk mitigation", "clarity", "transparent logic"],
            objections: &["too good to be true", "lack of control"],
            hook: "Offer evidence and options",
        },
        BuyerArchetype::Relationship => &ArchetypeAngle {
            motivators: &["trust", "values alignment", "long-term support"],
            objections: &["impersonal vendors", "lack of rapport"],
            hook: "Lead with empathy and partnership",
        },
    }
}

pub fn delivery_template(channel: Channel) -> &'static DeliveryTemplate {
    match channel {
        Channel::Email => &DeliveryTemplate {
            opener: "Expansive storytelling with layered value",
            cadence: "Subject line → pattern interrupt → insight → offer → CTA",
        },
        Channel::Sms => &DeliveryTemplate {
            opener: "Punchy, outcome-first message",
            cadence: "Hook → payoff → micro-CTA",
        },
        Channel::Dm => &DeliveryTemplate {
            opener: "Conversational bridge with quick proof",
            cadence: "Context → insight → question",
        },
    }
}

/// Milestone strings for the follow-up plan, in send order.
pub fn follow_up_plays(cadence: FollowUpCadence) -> &'static [&'static str] {
    match cadence {
        FollowUpCadence::Light => &[
            "Day 2 · Send a value nugget recap with 1-sentence CTA",
            "Day 6 · Share testimonial or micro-case study that mirrors their objection",
            "Day 12 · Soft close with open loop about next milestone",
        ],
        FollowUpCadence::Standard => &[
            "Day 1 · Deliver custom loom showing their current gap vs desired outcome",
            "Day 4 · Text reminder framing the cost of inaction",
            "Day 8 · Share playbook excerpt with 2-line CTA",
            "Day 12 · Scarcity reminder + offer to co-build first step",
        ],
        FollowUpCadence::Intense => &[
            "Hour 6 · SMS nudge with pattern interrupt and a yes/no question",
            "Day 2 · Email case study with emphasized ROI",
            "Day 3 · DM voice note (human touch) highlighting next micro win",
            "Day 5 · Invite to private workshop slot",
            "Day 9 · Final notice tying urgency cue to their desired outcome",
        ],
    }
}

pub fn success_metric(stage: CustomerStage) -> &'static str {
    match stage {
        CustomerStage::NewLead => "Book a discovery call and secure verbal commitment",
        CustomerStage::WarmLead => "Move to proposal review with written buying criteria",
        CustomerStage::ActiveCustomer => "Close expansion deal with 25% ACV uplift",
        CustomerStage::PastClient => "Reactivate account with pilot payment received",
    }
}
