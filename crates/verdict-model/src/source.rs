//! Model source resolution
//!
//! A [`ModelSource`] names where a model's files come from; [`resolve`]
//! turns it into concrete local paths exactly once, at startup. Requests
//! never touch the source again.
//!
//! [`resolve`]: ModelSource::resolve

use std::path::{Path, PathBuf};

use crate::error::ModelError;

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";

/// Where to load a model from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A local directory holding `config.json`, `tokenizer.json` and
    /// `model.safetensors`.
    LocalDir(PathBuf),
    /// A HuggingFace Hub repository id, e.g. `"verdict-ai/argument-scorer"`.
    /// Files are downloaded (and cached) by the hub client.
    HubRepo(String),
}

/// Resolved local paths for one model.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

impl ModelSource {
    /// Resolve to local files, downloading from the hub if needed.
    pub fn resolve(&self) -> Result<ModelFiles, ModelError> {
        match self {
            ModelSource::LocalDir(dir) => {
                let files = ModelFiles {
                    config: dir.join(CONFIG_FILE),
                    tokenizer: dir.join(TOKENIZER_FILE),
                    weights: dir.join(WEIGHTS_FILE),
                };
                for path in [&files.config, &files.tokenizer, &files.weights] {
                    require_file(path)?;
                }
                Ok(files)
            }
            ModelSource::HubRepo(repo_id) => {
                tracing::info!(repo = %repo_id, "fetching model from hub");
                let api = hf_hub::api::sync::Api::new()
                    .map_err(|e| ModelError::load("hub client init", e))?;
                let repo = api.model(repo_id.clone());
                let get = |file: &str| {
                    repo.get(file)
                        .map_err(|e| ModelError::load(&format!("{repo_id}/{file}"), e))
                };
                Ok(ModelFiles {
                    config: get(CONFIG_FILE)?,
                    tokenizer: get(TOKENIZER_FILE)?,
                    weights: get(WEIGHTS_FILE)?,
                })
            }
        }
    }
}

fn require_file(path: &Path) -> Result<(), ModelError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ModelError::Load(format!(
            "missing model file: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_local_file_fails_with_path() {
        let source = ModelSource::LocalDir(PathBuf::from("/nonexistent/model-dir"));
        let err = source.resolve().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing model file"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn local_dir_resolves_expected_names() {
        let dir = std::env::temp_dir().join("verdict-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        for file in ["config.json", "tokenizer.json", "model.safetensors"] {
            std::fs::write(dir.join(file), b"stub").unwrap();
        }

        let files = ModelSource::LocalDir(dir.clone()).resolve().unwrap();
        assert_eq!(files.config, dir.join("config.json"));
        assert_eq!(files.tokenizer, dir.join("tokenizer.json"));
        assert_eq!(files.weights, dir.join("model.safetensors"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
