use std::collections::{HashMap, HashSet};

/// Synthetic start-of-sequence marker. Bracketing with sentinels keeps
/// boundary bigrams in the model and stabilizes short windows.
pub const SENT_START: &str = "<s>";
/// Synthetic end-of-sequence marker.
pub const SENT_END: &str = "</s>";

/// Brackets a token sequence with the sentinel markers.
pub fn bracketed(tokens: &[String]) -> Vec<&str> {
    let mut seq = Vec::with_capacity(tokens.len() + 2);
    seq.push(SENT_START);
    seq.extend(tokens.iter().map(String::as_str));
    seq.push(SENT_END);
    seq
}

/// A smoothed bigram language model trained once over a fixed token
/// sequence and immutable thereafter.
///
/// Counts are kept in nested maps so an absent pair or context reads as an
/// explicit zero rather than a lookup failure.
#[derive(Debug, Clone)]
pub struct BigramModel {
    // bigrams[w1][w2] = count of the ordered pair (w1, w2)
    bigrams: HashMap<String, HashMap<String, u32>>,
    // contexts[w1] = count of w1 as the left member of any bigram
    contexts: HashMap<String, u32>,
    vocab: HashSet<String>,
    k: f64,
}

impl BigramModel {
    /// Trains a model from a token sequence with additive smoothing
    /// constant `k`. Empty and length-1 input are fine: the counts
    /// degenerate to the sentinel bigrams only.
    pub fn train(tokens: &[String], k: f64) -> Self {
        let seq = bracketed(tokens);

        let mut bigrams: HashMap<String, HashMap<String, u32>> = HashMap::new();
        let mut contexts: HashMap<String, u32> = HashMap::new();
        let mut vocab: HashSet<String> = HashSet::new();

        for pair in seq.windows(2) {
            *bigrams
                .entry(pair[0].to_string())
                .or_default()
                .entry(pair[1].to_string())
                .or_default() += 1;
            *contexts.entry(pair[0].to_string()).or_default() += 1;
        }
        for w in &seq {
            vocab.insert(w.to_string());
        }

        Self {
            bigrams,
            contexts,
            vocab,
            k,
        }
    }

    /// Add-k smoothed probability of `w2` following `w1`.
    ///
    /// `vocab_size` must be the shared vocabulary-union size agreed with the
    /// other model, never this model's private vocabulary size. Strictly
    /// positive whenever `k > 0`, even for unseen pairs and contexts.
    pub fn probability(&self, w1: &str, w2: &str, vocab_size: usize) -> f64 {
        let pair = self
            .bigrams
            .get(w1)
            .and_then(|next| next.get(w2))
            .copied()
            .unwrap_or(0) as f64;
        let ctx = self.contexts.get(w1).copied().unwrap_or(0) as f64;
        (pair + self.k) / (ctx + self.k * vocab_size as f64)
    }

    pub fn vocab(&self) -> &HashSet<String> {
        &self.vocab
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Raw count of the ordered pair (w1, w2); zero when unseen.
    pub fn bigram_count(&self, w1: &str, w2: &str) -> u32 {
        self.bigrams
            .get(w1)
            .and_then(|next| next.get(w2))
            .copied()
            .unwrap_or(0)
    }

    /// Raw count of `w1` as a bigram context; zero when unseen.
    pub fn context_count(&self, w1: &str) -> u32 {
        self.contexts.get(w1).copied().unwrap_or(0)
    }
}
