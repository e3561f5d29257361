pub mod aggregate;
pub mod scan;
pub mod segment;
pub mod types;

pub use self::types::{AttributionReport, AuthorLabel, LabelCounts, Segment, WindowReport};

use crate::model::{bracketed, BigramModel};
use std::collections::BTreeSet;

/// Log-likelihood-ratio scorer over two trained bigram models.
///
/// The vocabulary union is fixed at construction and its size is the one
/// smoothing denominator used for both models; the models are never
/// queried with their private vocabulary sizes.
pub struct LlrScorer {
    model_a: BigramModel,
    model_b: BigramModel,
    vocab_union: Vec<String>,
    eps_neither: f64,
}

impl LlrScorer {
    pub fn new(model_a: BigramModel, model_b: BigramModel, eps_neither: f64) -> Self {
        // BTreeSet gives the sorted set-union directly.
        let union: BTreeSet<&String> = model_a.vocab().iter().chain(model_b.vocab()).collect();
        let vocab_union: Vec<String> = union.into_iter().cloned().collect();

        Self {
            model_a,
            model_b,
            vocab_union,
            eps_neither,
        }
    }

    /// Size of the shared vocabulary union (V).
    pub fn vocab_size(&self) -> usize {
        self.vocab_union.len()
    }

    pub fn eps_neither(&self) -> f64 {
        self.eps_neither
    }

    /// Sums `log2(pA / pB)` over every consecutive bigram of the
    /// sentinel-bracketed window. Positive favors author A, negative
    /// favors author B; magnitude accumulates confidence over the window.
    pub fn score_window(&self, tokens: &[String]) -> f64 {
        let seq = bracketed(tokens);
        let v = self.vocab_size();

        seq.windows(2)
            .map(|pair| {
                let p_a = self.model_a.probability(pair[0], pair[1], v);
                let p_b = self.model_b.probability(pair[0], pair[1], v);
                (p_a / p_b).log2()
            })
            .sum()
    }

    /// Maps a score into the three-way verdict. The neutral band is
    /// symmetric around zero and closed: a score sitting exactly on the
    /// boundary is NEITHER.
    pub fn label(&self, score: f64) -> AuthorLabel {
        if score > self.eps_neither {
            AuthorLabel::CandidateA
        } else if score < -self.eps_neither {
            AuthorLabel::CandidateB
        } else {
            AuthorLabel::Neither
        }
    }
}
