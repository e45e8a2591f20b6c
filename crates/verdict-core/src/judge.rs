//! Debate judging orchestration
//!
//! [`DebateJudge`] owns the full pipeline for one request: aggregate,
//! score both sides, decide the winner, generate the justification, and
//! assemble the [`Verdict`]. All-or-nothing: the first failure aborts the
//! judgment, no retries, no partial results.

use async_trait::async_trait;
use std::sync::Arc;

use crate::aggregate::{aggregate, AggregateError, UnknownTeamPolicy};
use crate::debate::{DebateRequest, Team, Verdict, Winner};
use crate::prompt::justification_prompt;

/// Per-request inference failure. Load failures are a startup concern and
/// live with the model implementations.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("tokenization failed: {0}")]
    Tokenization(String),
    #[error("model execution failed: {0}")]
    Execution(String),
}

/// Maps an argument text to a scalar quality score. No bounds guaranteed;
/// the value is whatever the regression model produces.
#[async_trait]
pub trait ArgumentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<f32, InferenceError>;
}

/// Generates the free-text justification from a finished prompt.
#[async_trait]
pub trait JustificationGenerator: Send + Sync {
    async fn justify(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error("scoring team {team}: {source}")]
    Scoring {
        team: Team,
        source: InferenceError,
    },
    #[error("generating justification: {0}")]
    Generation(InferenceError),
}

/// The judge, holding read-only handles to both models. Shared across
/// requests; never mutated after construction.
pub struct DebateJudge {
    scorer: Arc<dyn ArgumentScorer>,
    generator: Arc<dyn JustificationGenerator>,
    policy: UnknownTeamPolicy,
}

impl DebateJudge {
    pub fn new(
        scorer: Arc<dyn ArgumentScorer>,
        generator: Arc<dyn JustificationGenerator>,
        policy: UnknownTeamPolicy,
    ) -> Self {
        Self {
            scorer,
            generator,
            policy,
        }
    }

    /// Judge one debate: score both sides sequentially, pick the winner by
    /// strict comparison, then generate the justification.
    pub async fn judge(&self, request: &DebateRequest) -> Result<Verdict, JudgeError> {
        let arguments = aggregate(&request.messages, self.policy)?;

        let score_a = self
            .scorer
            .score(&arguments.team_a)
            .await
            .map_err(|source| JudgeError::Scoring {
                team: Team::A,
                source,
            })?;
        let score_b = self
            .scorer
            .score(&arguments.team_b)
            .await
            .map_err(|source| JudgeError::Scoring {
                team: Team::B,
                source,
            })?;

        let winner = Winner::from_scores(score_a, score_b);
        tracing::debug!(
            debate_id = %request.debate_id,
            score_a,
            score_b,
            winner = %winner,
            "scored debate"
        );

        let prompt = justification_prompt(
            &request.debate_id,
            &request.topic,
            &arguments.team_a,
            &arguments.team_b,
            winner,
        );
        let justification = self
            .generator
            .justify(&prompt)
            .await
            .map_err(JudgeError::Generation)?;

        Ok(Verdict {
            debate_id: request.debate_id.clone(),
            topic: request.topic.clone(),
            score_team_a: score_a,
            score_team_b: score_b,
            winner,
            justification,
        })
    }
}
