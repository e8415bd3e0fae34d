use crate::domain::ports::{ConfigProvider, Corrector};
use crate::utils::error::{Result, ScoreError, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GrammarRequest<'a> {
    inputs: &'a str,
}

/// The grammar model answers with one generation per input.
#[derive(Debug, Deserialize)]
struct GrammarResponse {
    generated_text: String,
}

/// Sends a transcript to a hosted grammar-correction model and returns the
/// rewritten text. One POST per call, no retries.
pub struct HfCorrectionClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl HfCorrectionClient {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ScoreError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.grammar_endpoint(),
            token: config.api_token().to_string(),
        })
    }
}

#[async_trait]
impl Corrector for HfCorrectionClient {
    async fn correct(&self, text: &str) -> Result<String> {
        tracing::debug!("Posting {} chars to {}", text.len(), self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&GrammarRequest { inputs: text })
            .send()
            .await
            .map_err(|e| ScoreError::Correction(ServiceError::Transport(e)))?;

        let status = response.status();
        tracing::debug!("Grammar response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoreError::Correction(ServiceError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let generations: Vec<GrammarResponse> = response.json().await.map_err(|e| {
            ScoreError::Correction(ServiceError::Decode {
                detail: e.to_string(),
            })
        })?;

        generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| {
                ScoreError::Correction(ServiceError::Decode {
                    detail: "empty generation array".to_string(),
                })
            })
    }
}
