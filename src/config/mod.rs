use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Process-wide configuration, read once at startup from CLI flags and the
/// environment, then passed into each client constructor. Never mutated.
#[derive(Debug, Clone, Parser)]
#[command(name = "grammar-scorer")]
#[command(about = "Scores spoken-audio grammar via hosted transcription and correction models")]
pub struct ServiceConfig {
    /// HuggingFace Inference API token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: String,

    /// Model id used for speech recognition
    #[arg(long, env = "HF_ASR_MODEL")]
    pub asr_model: String,

    /// Model id used for grammar correction
    #[arg(long, env = "HF_GRAMMAR_MODEL")]
    pub grammar_model: String,

    /// Base URL of the inference API
    #[arg(long, env = "HF_INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    pub inference_url: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Timeout for each call to the inference API, in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("hf_token", &self.hf_token)?;
        validate_non_empty_string("asr_model", &self.asr_model)?;
        validate_non_empty_string("grammar_model", &self.grammar_model)?;
        validate_url("inference_url", &self.inference_url)?;
        Ok(())
    }
}

impl ConfigProvider for ServiceConfig {
    fn asr_endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.inference_url.trim_end_matches('/'),
            self.asr_model
        )
    }

    fn grammar_endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.inference_url.trim_end_matches('/'),
            self.grammar_model
        )
    }

    fn api_token(&self) -> &str {
        &self.hf_token
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
