use serde::{Deserialize, Serialize};

/// Word-level operation counts from aligning a hypothesis against a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentCounts {
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub reference_words: usize,
}

impl AlignmentCounts {
    pub fn total_edits(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }

    /// Edits per reference word. Uncapped: can exceed 1.0 when the hypothesis
    /// is much longer than the reference. An empty reference counts as one
    /// word in the denominator, so an empty pair yields 0.0 and an empty
    /// reference with H hypothesis words yields H.
    pub fn error_rate(&self) -> f64 {
        self.total_edits() as f64 / std::cmp::max(1, self.reference_words) as f64
    }
}

/// Result of scoring one (reference, hypothesis) text pair. Downstream
/// consumers rely on this shape; treat it as stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub reference_text: String,
    pub hypothesis_text: String,
    pub error_rate: f64,
    /// In [0, 100], rounded to two decimals.
    pub score: f64,
}
