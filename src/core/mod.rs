pub mod pipeline;
pub mod scoring;

pub use crate::domain::model::{AlignmentCounts, ScoreReport};
pub use crate::domain::ports::{ConfigProvider, Corrector, Transcriber};
pub use crate::utils::error::Result;
