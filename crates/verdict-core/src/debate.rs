//! Debate domain types
//!
//! Wire field names (`DebateId`, `userId`, `message`, ...) are part of the
//! public contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// One of the two debate sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Parse the wire representation. Anything other than exactly `"A"` or
    /// `"B"` is an unknown team, handled by the aggregation policy.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A" => Some(Team::A),
            "B" => Some(Team::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

/// A single per-team message within a debate.
///
/// The team field stays a raw string so that unknown values survive parsing
/// and can be dropped or rejected per [`crate::UnknownTeamPolicy`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "userId")]
    pub author_id: String,
    pub team: String,
    #[serde(rename = "message")]
    pub text: String,
}

/// A complete debate submitted for evaluation.
///
/// Message order is significant: it fixes the concatenation order within
/// each team's aggregated argument text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateRequest {
    #[serde(rename = "DebateId")]
    pub debate_id: String,
    pub topic: String,
    #[serde(rename = "arguments")]
    pub messages: Vec<Message>,
}

/// The winning side, in its wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Team A")]
    TeamA,
    #[serde(rename = "Team B")]
    TeamB,
}

impl Winner {
    /// Strict greater-than comparison; ties go to Team B.
    pub fn from_scores(score_a: f32, score_b: f32) -> Self {
        if score_a > score_b {
            Winner::TeamA
        } else {
            Winner::TeamB
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::TeamA => write!(f, "Team A"),
            Winner::TeamB => write!(f, "Team B"),
        }
    }
}

/// The result record for a judged debate. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "DebateId")]
    pub debate_id: String,
    pub topic: String,
    pub score_team_a: f32,
    pub score_team_b: f32,
    pub winner: Winner,
    pub justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_parses_exact_values_only() {
        assert_eq!(Team::parse("A"), Some(Team::A));
        assert_eq!(Team::parse("B"), Some(Team::B));
        assert_eq!(Team::parse("a"), None);
        assert_eq!(Team::parse("C"), None);
        assert_eq!(Team::parse(""), None);
    }

    #[test]
    fn winner_requires_strictly_greater_score() {
        assert_eq!(Winner::from_scores(0.8, 0.3), Winner::TeamA);
        assert_eq!(Winner::from_scores(0.3, 0.8), Winner::TeamB);
        // Ties resolve to Team B.
        assert_eq!(Winner::from_scores(0.5, 0.5), Winner::TeamB);
        assert_eq!(Winner::from_scores(-1.0, -1.0), Winner::TeamB);
    }

    #[test]
    fn winner_serializes_to_wire_spelling() {
        assert_eq!(
            serde_json::to_value(Winner::TeamA).unwrap(),
            serde_json::json!("Team A")
        );
        assert_eq!(
            serde_json::to_value(Winner::TeamB).unwrap(),
            serde_json::json!("Team B")
        );
    }

    #[test]
    fn verdict_uses_contract_field_names() {
        let verdict = Verdict {
            debate_id: "D1".to_string(),
            topic: "AI ethics".to_string(),
            score_team_a: 0.8,
            score_team_b: 0.3,
            winner: Winner::TeamA,
            justification: "Team A argued concretely.".to_string(),
        };
        let value = serde_json::to_value(&verdict).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for key in [
            "DebateId",
            "topic",
            "score_team_a",
            "score_team_b",
            "winner",
            "justification",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert!(obj["score_team_a"].is_number());
        assert!(obj["score_team_b"].is_number());
    }

    #[test]
    fn request_parses_wire_names() {
        let request: DebateRequest = serde_json::from_str(
            r#"{
                "DebateId": "D1",
                "topic": "AI ethics",
                "arguments": [
                    {"userId": "u1", "team": "A", "message": "AI improves efficiency"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(request.debate_id, "D1");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].author_id, "u1");
        assert_eq!(request.messages[0].text, "AI improves efficiency");
    }
}
