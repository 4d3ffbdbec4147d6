//! SBERT-style sentence encoder (BERT + mean pooling).
//!
//! Use [`SbertConfig::stub`] for tests/hosts without model files.

/// Encoder configuration.
pub mod config;


pub use config::{SBERT_EMBEDDING_DIM, SBERT_MAX_SEQ_LEN, SbertConfig};

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use crate::embedding::Embedder;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;

enum EncoderBackend {
    Model {
        model: BertModel,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence embedding generator (supports stub mode).
///
/// Model mode mean-pools the final hidden states and L2-normalizes the
/// result, so cosine similarity equals the dot product of two outputs.
pub struct SbertEmbedder {
    backend: EncoderBackend,
    config: SbertConfig,
}

impl std::fmt::Debug for SbertEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SbertEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SbertEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: SbertConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let (model, tokenizer) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    fn load_model(
        config: &SbertConfig,
        device: &Device,
    ) -> Result<(BertModel, Tokenizer), EmbeddingError> {
        let mut tokenizer = Tokenizer::from_file(config.tokenizer_path()).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_seq_len,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to configure truncation: {}", e),
            })?;

        let config_content = std::fs::read_to_string(config.config_path())?;
        let bert_config: BertConfig = serde_json::from_str(&config_content).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse model config: {}", e),
            }
        })?;

        if config.embedding_dim != bert_config.hidden_size {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim, bert_config.hidden_size
                ),
            });
        }

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[config.weights_path()], DType::F32, device)?
        };
        let model =
            BertModel::load(vb, &bert_config).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT weights: {}", e),
            })?;

        Ok((model, tokenizer))
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertModel,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating sentence embedding"
        );

        // [1, seq_len]
        let input_ids = Tensor::new(&tokens[..], device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // [1, seq_len, hidden] -> mean-pool over the sequence axis
        let hidden_states = model.forward(&input_ids, &token_type_ids, None)?;
        let pooled = hidden_states.mean(1)?.squeeze(0)?;
        let embedding = pooled.to_vec1::<f32>()?;

        Ok(normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(embedding)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &SbertConfig {
        &self.config
    }
}

impl Embedder for SbertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
