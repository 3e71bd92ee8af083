use serde::{Deserialize, Serialize};

/// Qualitative bucket for current conditional volatility relative to the
/// fitted series' own distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityRegime {
    Low,
    Medium,
    High,
}

impl VolatilityRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityRegime::Low => "Low",
            VolatilityRegime::Medium => "Medium",
            VolatilityRegime::High => "High",
        }
    }
}

/// The fitted GARCH(1,1) parameters, reported in the input series' units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarchParams {
    pub omega: f64,
    pub alpha: f64,
    pub beta: f64,
    /// Gaussian log-likelihood of the fit (on the internally rescaled series).
    pub log_likelihood: f64,
    /// Refinement iterations the coordinate descent used.
    pub iterations: usize,
}

/// A ±2σ envelope around the recent-window mean P/L, for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmaBand {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

/// The full output of a volatility fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    /// Conditional volatility per session, same length and units as the
    /// input P/L series.
    pub conditional_volatility: Vec<f64>,
    pub params: GarchParams,
    pub regime: VolatilityRegime,
    /// The volatility values at the configured low/high quantile cut-points.
    pub regime_cutpoints: (f64, f64),
    pub current_volatility: f64,
    pub mean_volatility: f64,
    /// Percentile rank (0-100) of current volatility within the series.
    pub volatility_percentile: f64,
    pub sigma_band: SigmaBand,
}
