//! Plain-text playbook serialization
//!
//! This is the one externally observable format (the clipboard payload), so
//! the section headers and separators are fixed for compatibility: every
//! header after the first is preceded by a blank line.

use crate::message::GeneratedMessage;

/// Serialize the whole bundle for the "copy playbook" action.
pub fn playbook_bundle(message: &GeneratedMessage) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("Subject ideas:".to_string());
    lines.extend(message.subject.iter().cloned());
    lines.push("\nPositioning:".to_string());
    lines.push(message.positioning.clone());
    lines.push("\nNarrative:".to_string());
    lines.push(message.narrative.clone());
    lines.push("\nCTA:".to_string());
    lines.push(message.call_to_action.clone());
    lines.push("\nLevers:".to_string());
    lines.push(message.psychological_levers.join(", "));
    lines.push("\nFollow ups:".to_string());
    lines.push(message.followups.join(" | "));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::config::AgentConfig;

    #[test]
    fn bundle_carries_every_section_header_in_order() {
        let bundle = playbook_bundle(&compose(&AgentConfig::starter()));
        let headers = [
            "Subject ideas:",
            "\n\nPositioning:\n",
            "\n\nNarrative:\n",
            "\n\nCTA:\n",
            "\n\nLevers:\n",
            "\n\nFollow ups:\n",
        ];
        assert!(bundle.starts_with(headers[0]));
        let mut cursor = 0;
        for header in &headers[1..] {
            let at = bundle[cursor..]
                .find(header)
                .unwrap_or_else(|| panic!("missing {:?}", header));
            cursor += at + header.len();
        }
    }

    #[test]
    fn bundle_joins_followups_with_pipes() {
        let message = compose(&AgentConfig::starter());
        let bundle = playbook_bundle(&message);
        let tail = bundle.rsplit("\n\nFollow ups:\n").next().unwrap();
        assert_eq!(tail, message.followups.join(" | "));
    }

    #[test]
    fn subjects_sit_on_their_own_lines() {
        let message = compose(&AgentConfig::starter());
        let bundle = playbook_bundle(&message);
        for subject in &message.subject {
            assert!(bundle.contains(&format!("\n{}", subject)));
        }
    }
}
