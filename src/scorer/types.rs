use crate::config::AnalysisParams;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Three-way attribution verdict for a window, a token, or a segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AuthorLabel {
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    CandidateA,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    CandidateB,
    #[strum(serialize = "NEITHER")]
    #[serde(rename = "NEITHER")]
    Neither,
}

impl AuthorLabel {
    /// One-letter abbreviation used by the compact word-level rendering.
    pub fn short(&self) -> &'static str {
        match self {
            Self::CandidateA => "A",
            Self::CandidateB => "B",
            Self::Neither => "N",
        }
    }
}

/// One scored sliding window over the accused text. `start..end` is a
/// half-open token index range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub start: usize,
    pub end: usize,
    pub score: f64,
    pub label: AuthorLabel,
    pub snippet: String,
}

/// A maximal half-open run of equal-labeled token positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub label: AuthorLabel,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Label tallies over a set of verdicts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCounts {
    pub candidate_a: usize,
    pub candidate_b: usize,
    pub neither: usize,
}

impl LabelCounts {
    pub fn tally<I: IntoIterator<Item = AuthorLabel>>(labels: I) -> Self {
        let mut counts = Self::default();
        for label in labels {
            match label {
                AuthorLabel::CandidateA => counts.candidate_a += 1,
                AuthorLabel::CandidateB => counts.candidate_b += 1,
                AuthorLabel::Neither => counts.neither += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.candidate_a + self.candidate_b + self.neither
    }
}

/// Full structured output of one analysis run, consumed by any renderer
/// (console tables, JSON emitter). No textual format lives in the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionReport {
    pub params: AnalysisParams,
    /// Window length actually used after clamping to the accused text.
    pub effective_window: usize,
    pub corpus_a_tokens: usize,
    pub corpus_b_tokens: usize,
    /// Accused token sequence, so renderers can align labels with words.
    pub tokens: Vec<String>,
    pub windows: Vec<WindowReport>,
    pub word_labels: Vec<AuthorLabel>,
    pub segments: Vec<Segment>,
    pub window_counts: LabelCounts,
    pub word_counts: LabelCounts,
}
