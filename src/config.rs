use crate::error::{SgResult, StylogramError};
use clap::Args;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the attribution pipeline: a 20-token window sliding
/// one token at a time, add-1 smoothing, and a ±0.25 neutral band by
/// default.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParams {
    /// Requested sliding-window length in tokens (auto-clamped to the
    /// accused text, never below 2).
    #[arg(long, default_value_t = 20)]
    pub window: usize,

    /// Window stride in tokens.
    #[arg(long, default_value_t = 1)]
    pub step: usize,

    /// Additive smoothing constant applied to every bigram count.
    #[arg(long, default_value_t = 1.0)]
    pub smoothing_k: f64,

    /// Half-width of the symmetric band around zero that maps to NEITHER.
    #[arg(long, default_value_t = 0.25)]
    pub eps_neither: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            window: 20,
            step: 1,
            smoothing_k: 1.0,
            eps_neither: 0.25,
        }
    }
}

impl AnalysisParams {
    /// Rejects malformed parameters before any computation starts.
    /// Everything that passes here degrades gracefully downstream.
    pub fn validate(&self) -> SgResult<()> {
        if self.window < 2 {
            return Err(StylogramError::Config(format!(
                "window must be >= 2 (got {})",
                self.window
            )));
        }
        if self.step < 1 {
            return Err(StylogramError::Config("step must be >= 1".to_string()));
        }
        if !(self.smoothing_k > 0.0) || !self.smoothing_k.is_finite() {
            return Err(StylogramError::Config(format!(
                "smoothing_k must be a finite value > 0 (got {})",
                self.smoothing_k
            )));
        }
        if !(self.eps_neither >= 0.0) || !self.eps_neither.is_finite() {
            return Err(StylogramError::Config(format!(
                "eps_neither must be a finite value >= 0 (got {})",
                self.eps_neither
            )));
        }
        Ok(())
    }
}
