//! Message composer
//!
//! `compose` is the whole engine: a pure mapping from an [`AgentConfig`] to
//! a [`GeneratedMessage`], built from the static tables in
//! [`crate::templates`] plus string interpolation. Deterministic, no I/O,
//! idempotent for equal inputs.

use crate::config::AgentConfig;
use crate::enums::{Channel, FollowUpCadence};
use crate::message::{ChannelMessage, GeneratedMessage};
use crate::templates::{archetype_angle, follow_up_plays, stage_copy, success_metric};
use std::collections::HashSet;

/// Compose the full output bundle for one configuration.
pub fn compose(config: &AgentConfig) -> GeneratedMessage {
    let stage_insight = stage_copy(config.customer_stage);
    let archetype = archetype_angle(config.archetype);

    let mut lever_sources: Vec<String> = config.agent_persona.levers.clone();
    lever_sources.push(stage_insight.headline.to_string());
    lever_sources.push(archetype.hook.to_string());
    lever_sources.push(config.selected_product.urgency_cue.clone());
    let psychological_levers = dedup_first_seen(lever_sources);

    let positioning = format!("{} · {}", config.agent_persona.label, stage_insight.headline);

    let buyer = non_empty(&config.customer_name, "your buyer");
    let pains_clause = if config.pains.is_empty() {
        "the current friction".to_string()
    } else {
        config.pains.join(" and ")
    };
    let narrative = format!(
        "We anchor the conversation around {} so {} sees the finish line first. \
         Then we layer {} to trigger action. \
         By naming {}, we earn the right to present {} as the obvious next move.",
        config.primary_outcome.to_lowercase(),
        buyer,
        archetype.motivators.join(", "),
        pains_clause,
        config.selected_product.name,
    );

    let sprint_kind = if config.follow_up_cadence == FollowUpCadence::Intense {
        "fast-track"
    } else {
        "priority"
    };
    let call_to_action = format!(
        "Secure a {} strategy sprint before {}.",
        sprint_kind, config.scarcity_window
    );

    let channel_messages = config
        .channel_mix
        .iter()
        .map(|channel| ChannelMessage {
            channel: *channel,
            copy: write_channel(*channel, config),
        })
        .collect();

    GeneratedMessage {
        subject: subject_variants(config),
        positioning,
        narrative,
        psychological_levers,
        call_to_action,
        channel_messages,
        followups: follow_up_plays(config.follow_up_cadence)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        success_metric: success_metric(config.customer_stage).to_string(),
    }
}

/// Five deterministic subject-line candidates.
fn subject_variants(config: &AgentConfig) -> Vec<String> {
    let archetype = archetype_angle(config.archetype);
    let product = &config.selected_product;
    let lever = config
        .agent_persona
        .levers
        .first()
        .map(String::as_str)
        .unwrap_or("");

    let name_prefix = if config.customer_name.is_empty() {
        String::new()
    } else {
        format!("{}, ", config.customer_name)
    };

    vec![
        format!("{}{}", name_prefix, first_words(&product.promise, 4)),
        format!("{} → {}", archetype.hook, product.name),
        format!(
            "{} path to {}",
            product.price,
            config.primary_outcome.to_lowercase()
        ),
        format!(
            "{}: lock in {}",
            config.scarcity_window,
            product.urgency_cue.replacen("Spots", "spots", 1)
        ),
        format!("{} + {}", lever, config.primary_outcome),
    ]
}

fn write_channel(channel: Channel, config: &AgentConfig) -> String {
    match channel {
        Channel::Email => write_email(config),
        Channel::Sms => write_sms(config),
        Channel::Dm => write_dm(config),
    }
}

fn write_email(config: &AgentConfig) -> String {
    let bullets = if config.pains.is_empty() {
        // Empty pains would otherwise render an empty bullet block.
        "• the usual friction".to_string()
    } else {
        config
            .pains
            .iter()
            .map(|pain| format!("• {}", pain))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first_pain = config
        .pains
        .first()
        .map(String::as_str)
        .unwrap_or("teams");

    format!(
        "Hey {},\n\n\
         {}\n\n\
         What jumped out to me was how often {} stalls progress. The teams we partner with usually feel it in three places:\n\
         {}\n\n\
         Here is how {} helps:\n\
         • Promise: {}\n\
         • Proof: {}\n\
         • Payoff: {}\n\n\
         If we align this with your plan to {}, we can have a rollout in motion before {}. I recorded a fast teardown that shows the exact workflow ({}).\n\n\
         Would it be wild to block › 20 minutes on {} to reverse-engineer this for you?\n\n\
         {} at your service,\n\
         {}",
        non_empty(&config.customer_name, "there"),
        config.personalization_hook,
        first_pain,
        bullets,
        config.selected_product.name,
        config.selected_product.promise,
        config.selected_product.proof,
        config.primary_outcome,
        config.desire,
        config.scarcity_window,
        config.credibility_asset,
        config.scarcity_window,
        config.agent_persona.label,
        config.agent_persona.headline,
    )
}

fn write_sms(config: &AgentConfig) -> String {
    let first_pain = config
        .pains
        .first()
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| "the usual friction".to_string());
    let blueprint = config
        .selected_product
        .name
        .split_whitespace()
        .next()
        .unwrap_or("");

    format!(
        "{} — quick thought. {} gets you {} without {}. {}. Shall I send the {} blueprint before {}?",
        non_empty(&config.customer_name, "Hey"),
        config.selected_product.name,
        config.primary_outcome.to_lowercase(),
        first_pain,
        config.selected_product.proof,
        blueprint,
        config.scarcity_window,
    )
}

fn write_dm(config: &AgentConfig) -> String {
    let sprint = if config.follow_up_cadence == FollowUpCadence::Intense {
        "90-day"
    } else {
        "45-day"
    };
    let first_pain = config
        .pains
        .first()
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| "the main blockers".to_string());

    format!(
        "Saw your note about wanting to {}. I've been helping teams like yours using {}. {}. If I mapped a {} sprint that clears {}, would you take a peek?",
        config.desire.to_lowercase(),
        config.selected_product.name,
        config.selected_product.proof,
        sprint,
        first_pain,
    )
}

/// Union with first-seen insertion order.
fn dedup_first_seen(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn first_words(text: &str, count: usize) -> String {
    text.split(' ').take(count).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{BuyerArchetype, CustomerStage};
    use crate::catalog::product_catalog;

    fn sample() -> AgentConfig {
        AgentConfig::starter()
    }

    #[test]
    fn compose_is_deterministic() {
        let config = sample();
        assert_eq!(compose(&config), compose(&config));
    }

    #[test]
    fn produces_five_subjects() {
        let generated = compose(&sample());
        assert_eq!(generated.subject.len(), 5);
        assert_eq!(
            generated.subject[0],
            "Alex, Automate buyer conversations across"
        );
        assert_eq!(
            generated.subject[1],
            "Paint the future they want to pioneer → Evergreen AI Agent Suite"
        );
    }

    #[test]
    fn subject_drops_name_prefix_when_empty() {
        let mut config = sample();
        config.customer_name.clear();
        let generated = compose(&config);
        assert_eq!(generated.subject[0], "Automate buyer conversations across");
    }

    #[test]
    fn urgency_subject_lowercases_first_spots_only() {
        let mut config = sample();
        config.selected_product = product_catalog()[0].clone();
        let generated = compose(&config);
        assert_eq!(
            generated.subject[3],
            "Friday: lock in spots reset every quarter and we have 6 left"
        );
    }

    #[test]
    fn positioning_joins_persona_and_stage_headline() {
        let generated = compose(&sample());
        assert_eq!(
            generated.positioning,
            "The Closer · Re-ignite momentum with tailored outcomes"
        );
    }

    #[test]
    fn levers_are_deduped_in_first_seen_order() {
        let mut config = sample();
        // Force a collision between a persona lever and the urgency cue.
        config.agent_persona.levers = vec![
            "loss aversion".to_string(),
            "Founding membership pricing increases next month".to_string(),
        ];
        let generated = compose(&config);
        let unique: HashSet<_> = generated.psychological_levers.iter().collect();
        assert_eq!(unique.len(), generated.psychological_levers.len());
        assert_eq!(generated.psychological_levers[0], "loss aversion");
        assert_eq!(
            generated.psychological_levers[1],
            "Founding membership pricing increases next month"
        );
        // The duplicate urgency cue must not reappear at the tail.
        assert_eq!(generated.psychological_levers.len(), 4);
    }

    #[test]
    fn channel_messages_follow_mix_order() {
        let mut config = sample();
        config.channel_mix = vec![Channel::Dm, Channel::Email];
        let generated = compose(&config);
        assert_eq!(generated.channel_messages.len(), 2);
        assert_eq!(generated.channel_messages[0].channel, Channel::Dm);
        assert_eq!(generated.channel_messages[1].channel, Channel::Email);
    }

    #[test]
    fn empty_name_never_renders_hey_comma() {
        let mut config = sample();
        config.customer_name.clear();
        let generated = compose(&config);
        for message in &generated.channel_messages {
            assert!(!message.copy.contains("Hey ,"), "{}", message.copy);
        }
        let email = &generated.channel_messages[0];
        assert!(email.copy.starts_with("Hey there,"));
        assert!(generated.narrative.contains("so your buyer sees"));
    }

    #[test]
    fn empty_pains_fall_back_everywhere() {
        let mut config = sample();
        config.pains.clear();
        let generated = compose(&config);
        assert!(generated.narrative.contains("By naming the current friction,"));
        for message in &generated.channel_messages {
            assert!(!message.copy.contains("• \n"), "{}", message.copy);
            assert!(!message.copy.contains("without ."), "{}", message.copy);
        }
        let sms = generated
            .channel_messages
            .iter()
            .find(|m| m.channel == Channel::Sms)
            .unwrap();
        assert!(sms.copy.contains("without the usual friction."));
        let dm = generated
            .channel_messages
            .iter()
            .find(|m| m.channel == Channel::Dm)
            .unwrap();
        assert!(dm.copy.contains("clears the main blockers,"));
    }

    #[test]
    fn cadence_switches_cta_and_dm_sprint() {
        let mut config = sample();
        config.follow_up_cadence = FollowUpCadence::Intense;
        config.channel_mix = vec![Channel::Dm];
        let generated = compose(&config);
        assert!(generated.call_to_action.starts_with("Secure a fast-track"));
        assert!(generated.channel_messages[0].copy.contains("a 90-day sprint"));

        config.follow_up_cadence = FollowUpCadence::Light;
        let generated = compose(&config);
        assert!(generated.call_to_action.starts_with("Secure a priority"));
        assert!(generated.channel_messages[0].copy.contains("a 45-day sprint"));
    }

    #[test]
    fn new_lead_skeptic_sms_light_profile() {
        let mut config = sample();
        config.customer_name = "Jordan".to_string();
        config.customer_stage = CustomerStage::NewLead;
        config.archetype = BuyerArchetype::Skeptic;
        config.channel_mix = vec![Channel::Sms];
        config.selected_product = product_catalog()[0].clone();
        config.follow_up_cadence = FollowUpCadence::Light;

        let generated = compose(&config);
        assert_eq!(generated.followups.len(), 3);
        assert_eq!(generated.channel_messages[0].channel, Channel::Sms);
        assert_eq!(
            generated.success_metric,
            "Book a discovery call and secure verbal commitment"
        );
    }
}
