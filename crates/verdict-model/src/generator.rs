//! Justification generator
//!
//! T5 encoder-decoder with greedy decoding: at most
//! [`MAX_NEW_TOKENS`] generated tokens, stopping early at EOS. Greedy
//! mode keeps output reproducible for identical prompts; sampling is
//! deliberately not offered.

use std::sync::Mutex;

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::t5;
use tokenizers::{Tokenizer, TruncationParams};

use verdict_core::{InferenceError, JustificationGenerator};

use crate::error::ModelError;
use crate::source::ModelSource;

/// Hard cap on generated tokens per justification.
pub const MAX_NEW_TOKENS: usize = 128;

// Greedy decoding ignores the seed, but LogitsProcessor wants one.
const DECODE_SEED: u64 = 0;

/// The justification generator.
///
/// The decoder KV cache mutates during generation, so the model sits
/// behind a mutex; requests generate one at a time.
pub struct T5Generator {
    model: Mutex<t5::T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: t5::Config,
    device: Device,
}

impl T5Generator {
    /// Load the generator from a resolved model source. CPU-only.
    pub fn load(source: &ModelSource) -> Result<Self, ModelError> {
        let files = source.resolve()?;
        let device = Device::Cpu;

        let config_str = std::fs::read_to_string(&files.config)
            .map_err(|e| ModelError::load("generator config", e))?;
        let config: t5::Config = serde_json::from_str(&config_str)
            .map_err(|e| ModelError::load("generator config", e))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| ModelError::load("generator tokenizer", e))?;
        // Prompts beyond the encoder limit are truncated; overflow is
        // dropped without warning, matching the trained pipeline.
        tokenizer
            .with_truncation(Some(TruncationParams::default()))
            .map_err(|e| ModelError::load("generator tokenizer truncation", e))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[&files.weights], DType::F32, &device)
                .map_err(|e| ModelError::load("generator weights", e))?
        };
        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| ModelError::load("generator model", e))?;

        tracing::info!("justification generator loaded");
        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
        })
    }

    fn generate(&self, prompt_ids: &[u32]) -> Result<Vec<u32>, InferenceError> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| InferenceError::Execution("generator lock poisoned".to_string()))?;
        model.clear_kv_cache();
        greedy_decode(&mut model, &self.config, &self.device, prompt_ids)
            .map_err(|e| InferenceError::Execution(e.to_string()))
    }
}

fn greedy_decode(
    model: &mut t5::T5ForConditionalGeneration,
    config: &t5::Config,
    device: &Device,
    prompt_ids: &[u32],
) -> candle_core::Result<Vec<u32>> {
    let input_ids = Tensor::new(prompt_ids, device)?.unsqueeze(0)?;
    let encoder_output = model.encode(&input_ids)?;

    let start_token = config
        .decoder_start_token_id
        .unwrap_or(config.pad_token_id) as u32;
    let mut output_ids = vec![start_token];
    let mut logits_processor = LogitsProcessor::new(DECODE_SEED, None, None);

    for step in 0..MAX_NEW_TOKENS {
        let decoder_ids = if step == 0 || !config.use_cache {
            Tensor::new(output_ids.as_slice(), device)?.unsqueeze(0)?
        } else {
            let last = output_ids[output_ids.len() - 1];
            Tensor::new(&[last], device)?.unsqueeze(0)?
        };
        let logits = model.decode(&decoder_ids, &encoder_output)?.squeeze(0)?;
        let next = logits_processor.sample(&logits)?;
        if next as usize == config.eos_token_id {
            break;
        }
        output_ids.push(next);
    }
    Ok(output_ids)
}

#[async_trait]
impl JustificationGenerator for T5Generator {
    async fn justify(&self, prompt: &str) -> Result<String, InferenceError> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| InferenceError::Tokenization(e.to_string()))?;
        let output_ids = self.generate(encoding.get_ids())?;

        // Drop the decoder start token, strip special tokens on decode.
        let text = self
            .tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| InferenceError::Tokenization(e.to_string()))?;
        Ok(text)
    }
}
