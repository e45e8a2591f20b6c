//! # Verdict Core
//!
//! Domain types and judging logic for the Verdict debate service:
//! - [`DebateRequest`] / [`Verdict`] — the request and result records
//! - [`aggregate`] — per-team argument aggregation
//! - [`DebateJudge`] — scores both teams, decides a winner, drives the
//!   justification generator
//!
//! Model execution lives behind the [`ArgumentScorer`] and
//! [`JustificationGenerator`] traits; this crate never touches weights.

pub mod aggregate;
pub mod debate;
pub mod judge;
pub mod prompt;

pub use aggregate::{aggregate, AggregateError, TeamArguments, UnknownTeamPolicy};
pub use debate::{DebateRequest, Message, Team, Verdict, Winner};
pub use judge::{ArgumentScorer, DebateJudge, InferenceError, JudgeError, JustificationGenerator};
pub use prompt::justification_prompt;
