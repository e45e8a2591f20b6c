//! Mock scorer and generator for testing
//!
//! Same trait surface as the real models, no weights needed.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use verdict_core::{ArgumentScorer, InferenceError, JustificationGenerator};

/// A scorer that cycles through canned scores.
#[derive(Debug)]
pub struct MockScorer {
    scores: Vec<f32>,
    index: AtomicUsize,
}

impl MockScorer {
    /// Create a mock cycling through `scores` in order.
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            index: AtomicUsize::new(0),
        }
    }

    /// A mock that always returns the same score.
    pub fn constant(score: f32) -> Self {
        Self::new(vec![score])
    }

    /// A mock scoring by text length, handy when two distinct scores are
    /// needed without fixing their order.
    pub fn by_length() -> Self {
        Self::new(vec![])
    }
}

#[async_trait]
impl ArgumentScorer for MockScorer {
    async fn score(&self, text: &str) -> Result<f32, InferenceError> {
        if self.scores.is_empty() {
            return Ok(text.len() as f32);
        }
        let idx = self.index.fetch_add(1, Ordering::Relaxed);
        Ok(self.scores[idx % self.scores.len()])
    }
}

/// A generator returning a fixed justification, or echoing the prompt.
#[derive(Debug)]
pub struct MockGenerator {
    response: Option<String>,
}

impl MockGenerator {
    /// Always return `response`.
    pub fn constant(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    /// Echo the prompt back, for asserting on prompt construction.
    pub fn echo() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl JustificationGenerator for MockGenerator {
    async fn justify(&self, prompt: &str) -> Result<String, InferenceError> {
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Ok(prompt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_scorer_cycles() {
        let scorer = MockScorer::new(vec![0.8, 0.3]);
        assert_eq!(scorer.score("a").await.unwrap(), 0.8);
        assert_eq!(scorer.score("b").await.unwrap(), 0.3);
        assert_eq!(scorer.score("c").await.unwrap(), 0.8);
    }

    #[tokio::test]
    async fn mock_scorer_by_length() {
        let scorer = MockScorer::by_length();
        assert_eq!(scorer.score("four").await.unwrap(), 4.0);
        assert_eq!(scorer.score("").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn mock_generator_echoes() {
        let generator = MockGenerator::echo();
        let out = generator.justify("Winner: Team A\nReason:").await.unwrap();
        assert_eq!(out, "Winner: Team A\nReason:");
    }
}
