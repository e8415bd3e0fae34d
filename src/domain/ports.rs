use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Converts raw audio bytes into a transcript via a remote recognizer.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String>;
}

/// Rewrites a text into its grammatically corrected form.
#[async_trait]
pub trait Corrector: Send + Sync {
    async fn correct(&self, text: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn asr_endpoint(&self) -> String;
    fn grammar_endpoint(&self) -> String;
    fn api_token(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
