pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::clients::{HfCorrectionClient, HfTranscriptionClient};
pub use crate::config::ServiceConfig;
pub use crate::core::pipeline::ScoringPipeline;
pub use crate::domain::model::{AlignmentCounts, ScoreReport};
pub use crate::server::{create_router, AppState};
pub use crate::utils::error::{Result, ScoreError, ServiceError};
