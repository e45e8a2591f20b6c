//! Per-team argument aggregation
//!
//! Groups an ordered message list into one concatenated argument text per
//! team, preserving original message order within each team. Cross-team
//! interleaving carries no meaning beyond that ordering.

use serde::{Deserialize, Serialize};

use crate::debate::{Message, Team};

/// How to treat messages whose team is neither `"A"` nor `"B"`.
///
/// The original service dropped them silently; that stays the default.
/// `Reject` turns the same condition into a validation failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTeamPolicy {
    #[default]
    Drop,
    Reject,
}

/// Aggregated argument text for both sides. A team with no messages gets
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamArguments {
    pub team_a: String,
    pub team_b: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("message {index} has unknown team {value:?} (expected \"A\" or \"B\")")]
    UnknownTeam { index: usize, value: String },
}

/// Split `messages` by team and space-join each side's text in original
/// order. Deterministic, no side effects.
pub fn aggregate(
    messages: &[Message],
    policy: UnknownTeamPolicy,
) -> Result<TeamArguments, AggregateError> {
    let mut team_a: Vec<&str> = Vec::new();
    let mut team_b: Vec<&str> = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        match Team::parse(&message.team) {
            Some(Team::A) => team_a.push(&message.text),
            Some(Team::B) => team_b.push(&message.text),
            None => match policy {
                UnknownTeamPolicy::Drop => {
                    tracing::debug!(index, team = %message.team, "dropping message with unknown team");
                }
                UnknownTeamPolicy::Reject => {
                    return Err(AggregateError::UnknownTeam {
                        index,
                        value: message.team.clone(),
                    })
                }
            },
        }
    }

    Ok(TeamArguments {
        team_a: team_a.join(" "),
        team_b: team_b.join(" "),
    })
}
