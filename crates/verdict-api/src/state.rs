//! Application State
//!
//! Holds the judge with its model handles, built once at startup and
//! injected read-only into every handler.

use std::sync::Arc;

use verdict_core::DebateJudge;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    judge: Arc<DebateJudge>,
}

impl AppState {
    /// Create new application state
    pub fn new(judge: Arc<DebateJudge>) -> Self {
        Self { judge }
    }

    /// Get the debate judge (cloned Arc for sharing)
    pub fn judge(&self) -> Arc<DebateJudge> {
        self.judge.clone()
    }
}
