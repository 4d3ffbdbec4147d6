use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default sentence-embedding dimension (MiniLM-class encoders).
pub const SBERT_EMBEDDING_DIM: usize = 384;

/// Default max tokens considered per input.
pub const SBERT_MAX_SEQ_LEN: usize = 256;

#[derive(Debug, Clone)]
/// Configuration for [`SbertEmbedder`](super::SbertEmbedder).
pub struct SbertConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension (must match the model's hidden size).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for SbertConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: SBERT_MAX_SEQ_LEN,
            embedding_dim: SBERT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl SbertConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "HRDESK_MODEL_PATH";

    /// Loads config from the environment (a missing value becomes an empty path).
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_default();

        Self {
            model_dir,
            ..Default::default()
        }
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Path to the transformer config file.
    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    /// Path to the model weights.
    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    /// Path to `tokenizer.json`.
    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join("tokenizer.json")
    }

    /// Returns `true` if all required model files exist.
    pub fn model_available(&self) -> bool {
        self.config_path().is_file()
            && self.weights_path().is_file()
            && self.tokenizer_path().is_file()
    }
}
