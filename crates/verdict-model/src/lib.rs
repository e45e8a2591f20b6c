//! # Verdict Model
//!
//! Model loading and inference for the Verdict debate service.
//!
//! ## Components
//!
//! | Component | Model | Role |
//! |-----------|-------|------|
//! | [`BertRegressionScorer`] | DistilBERT + linear head | argument quality score |
//! | [`T5Generator`] | T5 encoder-decoder | winner justification text |
//! | [`MockScorer`] / [`MockGenerator`] | none | testing |
//!
//! Both real models load once at startup from a [`ModelSource`] (local
//! directory or HuggingFace Hub repo) and are shared read-only afterwards.
//!
//! ## Quick start
//!
//! ```rust
//! use verdict_model::{MockGenerator, MockScorer};
//! use verdict_core::ArgumentScorer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scorer = MockScorer::new(vec![0.8, 0.3]);
//!     let score = scorer.score("AI improves efficiency").await.unwrap();
//!     assert_eq!(score, 0.8);
//! }
//! ```

pub mod error;
pub mod generator;
pub mod mock;
pub mod scorer;
pub mod source;

pub use error::ModelError;
pub use generator::T5Generator;
pub use mock::{MockGenerator, MockScorer};
pub use scorer::BertRegressionScorer;
pub use source::{ModelFiles, ModelSource};
