//! Justification prompt construction
//!
//! The labeled-line format is a model contract: the generator was trained
//! against exactly this layout, so the output must stay byte-identical for
//! identical inputs.

use crate::debate::Winner;

/// Build the generation prompt for a judged debate.
pub fn justification_prompt(
    debate_id: &str,
    topic: &str,
    team_a: &str,
    team_b: &str,
    winner: Winner,
) -> String {
    format!(
        "DebateId: {debate_id}\nTopic: {topic}\nTeam A: {team_a}\nTeam B: {team_b}\nWinner: {winner}\nReason:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_matches_trained_layout() {
        let prompt = justification_prompt(
            "D1",
            "AI ethics",
            "AI improves efficiency",
            "AI risks job loss",
            Winner::TeamA,
        );
        assert_eq!(
            prompt,
            "DebateId: D1\nTopic: AI ethics\nTeam A: AI improves efficiency\nTeam B: AI risks job loss\nWinner: Team A\nReason:"
        );
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = justification_prompt("id", "t", "x", "y", Winner::TeamB);
        let b = justification_prompt("id", "t", "x", "y", Winner::TeamB);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_arguments_keep_their_labels() {
        let prompt = justification_prompt("D2", "silence", "", "", Winner::TeamB);
        assert_eq!(
            prompt,
            "DebateId: D2\nTopic: silence\nTeam A: \nTeam B: \nWinner: Team B\nReason:"
        );
    }
}
