//! Argument regression scorer
//!
//! DistilBERT encoder with a single-output linear head over the first
//! token position. The checkpoint carries the encoder under a
//! `distilbert` prefix (HF export convention) or a `bert` prefix
//! (checkpoints converted from the original training attribute name);
//! both load. The head lives under `regressor`. Dropout from training is
//! an inference no-op and is never applied here.

use async_trait::async_trait;
use candle_core::{Device, IndexOp, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::distilbert::{Config, DistilBertModel, DTYPE};
use serde::Deserialize;
use tokenizers::{Tokenizer, TruncationParams};

use verdict_core::{ArgumentScorer, InferenceError};

use crate::error::ModelError;
use crate::source::ModelSource;

/// Encoder dimensions read from `config.json`. The crate's [`Config`]
/// keeps its fields private, so the sizes needed for the truncation
/// limit and the regression head are deserialized separately from the
/// same file.
#[derive(Debug, Deserialize)]
struct EncoderDims {
    dim: usize,
    max_position_embeddings: usize,
}

/// The regression scorer. Immutable after load; safe to share across
/// requests behind an `Arc`.
pub struct BertRegressionScorer {
    model: DistilBertModel,
    regressor: Linear,
    tokenizer: Tokenizer,
    device: Device,
}

impl BertRegressionScorer {
    /// Load the scorer from a resolved model source. CPU-only.
    pub fn load(source: &ModelSource) -> Result<Self, ModelError> {
        let files = source.resolve()?;
        let device = Device::Cpu;

        let config_str = std::fs::read_to_string(&files.config)
            .map_err(|e| ModelError::load("scorer config", e))?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ModelError::load("scorer config", e))?;
        let dims: EncoderDims = serde_json::from_str(&config_str)
            .map_err(|e| ModelError::load("scorer config dimensions", e))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| ModelError::load("scorer tokenizer", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: dims.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| ModelError::load("scorer tokenizer truncation", e))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[&files.weights], DTYPE, &device)
                .map_err(|e| ModelError::load("scorer weights", e))?
        };
        let encoder_vb = if vb.contains_tensor("distilbert.embeddings.word_embeddings.weight") {
            vb.pp("distilbert")
        } else {
            vb.pp("bert")
        };
        let model = DistilBertModel::load(encoder_vb, &config)
            .map_err(|e| ModelError::load("scorer encoder", e))?;
        let regressor = candle_nn::linear(dims.dim, 1, vb.pp("regressor"))
            .map_err(|e| ModelError::load("scorer regression head", e))?;

        tracing::info!(hidden_size = dims.dim, "argument scorer loaded");
        Ok(Self {
            model,
            regressor,
            tokenizer,
            device,
        })
    }

    fn forward(&self, token_ids: &[u32], attention: &[u32]) -> candle_core::Result<f32> {
        let input_ids = Tensor::new(token_ids, &self.device)?.unsqueeze(0)?;
        let mask = inverted_attention_mask(attention, &self.device)?;
        // [1, seq, dim] -> first-token representation -> scalar
        let hidden = self.model.forward(&input_ids, &mask)?;
        let pooled = hidden.i((.., 0))?;
        self.regressor
            .forward(&pooled)?
            .squeeze(1)?
            .squeeze(0)?
            .to_scalar::<f32>()
    }
}

/// candle's distilbert fills nonzero mask entries with `-inf` before the
/// attention softmax, so real tokens must map to zero and padding to one
/// — the inverse of the tokenizer's attention mask.
fn inverted_attention_mask(attention_mask: &[u32], device: &Device) -> candle_core::Result<Tensor> {
    let inverted: Vec<u8> = attention_mask.iter().map(|&m| u8::from(m == 0)).collect();
    Tensor::from_slice(&inverted, (1, attention_mask.len()), device)
}

#[async_trait]
impl ArgumentScorer for BertRegressionScorer {
    async fn score(&self, text: &str) -> Result<f32, InferenceError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| InferenceError::Tokenization(e.to_string()))?;
        self.forward(encoding.get_ids(), encoding.get_attention_mask())
            .map_err(|e| InferenceError::Execution(e.to_string()))
    }
}
