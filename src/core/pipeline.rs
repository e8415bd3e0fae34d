use crate::core::scoring;
use crate::domain::model::ScoreReport;
use crate::domain::ports::{Corrector, Transcriber};
use crate::utils::error::{Result, ScoreError};

/// Runs the three scoring stages in strict sequence: transcribe the audio,
/// correct the transcript, score the transcript against the correction.
/// Any stage failure aborts the run; later stages are never invoked and no
/// partial result is returned.
pub struct ScoringPipeline<T: Transcriber, C: Corrector> {
    transcriber: T,
    corrector: C,
}

impl<T: Transcriber, C: Corrector> ScoringPipeline<T, C> {
    pub fn new(transcriber: T, corrector: C) -> Self {
        Self {
            transcriber,
            corrector,
        }
    }

    pub async fn run(&self, audio: &[u8]) -> Result<ScoreReport> {
        if audio.is_empty() {
            return Err(ScoreError::invalid_input("empty audio payload"));
        }

        tracing::debug!("Transcribing {} bytes of audio", audio.len());
        let transcript = self.transcriber.transcribe(audio).await?;
        tracing::debug!("Received transcript ({} chars)", transcript.len());

        let corrected = self.corrector.correct(&transcript).await?;
        tracing::debug!("Received correction ({} chars)", corrected.len());

        // The transcript is the reference and the correction the hypothesis:
        // the metric measures how much correction the original needed.
        let report = scoring::score(&transcript, &corrected);
        tracing::info!(
            error_rate = report.error_rate,
            score = report.score,
            "Scored audio sample"
        );

        Ok(report)
    }
}
