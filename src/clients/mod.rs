// Adapters for the remote HuggingFace Inference API collaborators.

pub mod correction;
pub mod transcription;

pub use correction::HfCorrectionClient;
pub use transcription::HfTranscriptionClient;
