use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("transcription service failed: {0}")]
    Transcription(#[source] ServiceError),

    #[error("grammar correction service failed: {0}")]
    Correction(#[source] ServiceError),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a single remote call failed. Transport covers connect/timeout errors,
/// Status any non-success HTTP response, Decode a success response whose body
/// does not match the expected schema.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response shape: {detail}")]
    Decode { detail: String },
}

impl ScoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
