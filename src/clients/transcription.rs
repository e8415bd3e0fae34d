use crate::domain::ports::{ConfigProvider, Transcriber};
use crate::utils::error::{Result, ScoreError, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Expected shape of a successful ASR response.
#[derive(Debug, Deserialize)]
struct AsrResponse {
    text: String,
}

/// Sends raw audio bytes to a hosted speech-recognition model and returns the
/// transcript. One POST per call, no retries.
pub struct HfTranscriptionClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl HfTranscriptionClient {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ScoreError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.asr_endpoint(),
            token: config.api_token().to_string(),
        })
    }
}

#[async_trait]
impl Transcriber for HfTranscriptionClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<String> {
        tracing::debug!("Posting audio to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| ScoreError::Transcription(ServiceError::Transport(e)))?;

        let status = response.status();
        tracing::debug!("ASR response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoreError::Transcription(ServiceError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: AsrResponse = response.json().await.map_err(|e| {
            ScoreError::Transcription(ServiceError::Decode {
                detail: e.to_string(),
            })
        })?;

        Ok(parsed.text)
    }
}
