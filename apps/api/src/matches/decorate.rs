//! Turns the model's name list into display records.
//!
//! Common skills are real intersections between the caller's lists and the
//! peer's directory record. Peers the directory does not know get empty lists;
//! nothing is sampled or invented.

use uuid::Uuid;

use crate::matches::directory::{PeerDirectory, PeerRecord};
use crate::matches::models::{MatchesRequest, SkillMatch};
use crate::skill_match::SkillMatchResponse;

const AVATAR_BASE_URL: &str = "https://placehold.co/80x80.png";

/// Builds one `SkillMatch` per recommended name, in model order.
/// Names are trimmed; blank names, the caller's own name and repeats are skipped.
pub fn decorate_matches(
    caller: &MatchesRequest,
    response: &SkillMatchResponse,
    directory: &PeerDirectory,
) -> Vec<SkillMatch> {
    let caller_name = caller.name.as_deref().map(|n| n.trim().to_lowercase());
    let mut seen: Vec<String> = Vec::new();
    let mut matches = Vec::new();

    for name in &response.recommended_matches {
        let name = name.trim();
        let key = name.to_lowercase();
        if key.is_empty() || caller_name.as_deref() == Some(key.as_str()) || seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let peer = directory.lookup(name);
        let (they_teach_you, you_teach_them) = match peer {
            Some(peer) => overlaps(caller, peer),
            None => (Vec::new(), Vec::new()),
        };

        let reasoning = if matches.is_empty() {
            response.reasoning.clone()
        } else {
            follow_up_reasoning(name, &they_teach_you, &you_teach_them)
        };

        matches.push(SkillMatch {
            user_id: format!("ai_match_{}", Uuid::new_v4()),
            name: name.to_string(),
            avatar_url: format!("{AVATAR_BASE_URL}?text={}", initials(name)),
            common_skills_to_teach: they_teach_you,
            common_skills_to_learn: you_teach_them,
            reasoning,
        });
    }

    matches
}

/// (skills the peer can teach the caller, skills the caller can teach the peer)
fn overlaps(caller: &MatchesRequest, peer: &PeerRecord) -> (Vec<String>, Vec<String>) {
    (
        common_skills(&caller.skills_to_learn, &peer.skills_to_teach),
        common_skills(&caller.skills_to_teach, &peer.skills_to_learn),
    )
}

/// Case-insensitive intersection, keeping `wanted`'s order and spelling.
pub fn common_skills(wanted: &[String], offered: &[String]) -> Vec<String> {
    let offered: Vec<String> = offered.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut out: Vec<String> = Vec::new();

    for skill in wanted {
        let key = skill.trim().to_lowercase();
        if key.is_empty() || !offered.contains(&key) {
            continue;
        }
        if out.iter().any(|s| s.trim().to_lowercase() == key) {
            continue;
        }
        out.push(skill.trim().to_string());
    }

    out
}

fn follow_up_reasoning(name: &str, they_teach_you: &[String], you_teach_them: &[String]) -> String {
    let teach_you = if they_teach_you.is_empty() {
        "some interesting skills".to_string()
    } else {
        they_teach_you.join(", ")
    };
    let teach_them = if you_teach_them.is_empty() {
        "some of your skills".to_string()
    } else {
        you_teach_them.join(", ")
    };
    format!(
        "This user has skills that complement yours. {name} can teach you {teach_you}, \
         and you could teach them {teach_them}."
    )
}

/// First letter of the first and last word, uppercased. `U` for a blank name.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first_char = |w: &str| w.chars().next().map(|c| c.to_uppercase().collect::<String>());

    match words.as_slice() {
        [] => "U".to_string(),
        [only] => first_char(*only).unwrap_or_else(|| "U".to_string()),
        [first, .., last] => {
            let mut out = first_char(*first).unwrap_or_default();
            out.push_str(&first_char(*last).unwrap_or_default());
            out.chars().take(2).collect()
        }
    }
}
