use crate::error::InferenceError;
use crate::report::BootstrapResult;
use core_types::stats;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Below this many hands the estimate is reported but flagged `low_sample`.
pub const MIN_RELIABLE_HANDS: usize = 100;

/// Stride for deriving per-resample seeds (the splitmix64 increment).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapParams {
    pub iterations: usize,
    /// Confidence level of the percentile interval, in (0, 1).
    pub confidence: f64,
    /// Explicit seed for reproducible runs; a random one is drawn otherwise.
    pub seed: Option<u64>,
}

impl Default for BootstrapParams {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            confidence: 0.95,
            seed: None,
        }
    }
}

impl BootstrapParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// A stateless bootstrap estimator for hand-level winrate data.
#[derive(Debug, Default)]
pub struct BootstrapEstimator {}

impl BootstrapEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resamples `hand_results_bb` with replacement at the original sample
    /// size, `iterations` times, and summarizes the distribution of
    /// resampled winrates.
    ///
    /// The interval is the plain percentile interval: the
    /// `[(1-c)/2, 1-(1-c)/2]` empirical quantiles of the resampled means.
    /// This makes intervals nest exactly: on the same data and seed, a 99%
    /// interval always contains the 95% one.
    pub fn estimate(
        &self,
        hand_results_bb: &[f64],
        params: &BootstrapParams,
    ) -> Result<BootstrapResult, InferenceError> {
        let n = hand_results_bb.len();
        if n == 0 {
            return Err(InferenceError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if params.iterations == 0 {
            return Err(InferenceError::InvalidParameter {
                name: "iterations",
                reason: "at least one resample is required".to_string(),
            });
        }
        if !(params.confidence > 0.0 && params.confidence < 1.0) {
            return Err(InferenceError::InvalidParameter {
                name: "confidence",
                reason: "confidence must lie strictly between 0 and 1".to_string(),
            });
        }

        let base_seed = params
            .seed
            .unwrap_or_else(|| Pcg64::from_entropy().next_u64());

        debug!(
            sample_size = n,
            iterations = params.iterations,
            base_seed,
            "running bootstrap winrate estimation"
        );

        let mut resampled: Vec<f64> = (0..params.iterations)
            .into_par_iter()
            .map(|i| {
                let seed = base_seed.wrapping_add((i as u64).wrapping_mul(SEED_STRIDE));
                let mut rng = Pcg64::seed_from_u64(seed);
                let mut sum = 0.0;
                for _ in 0..n {
                    sum += hand_results_bb[rng.gen_range(0..n)];
                }
                sum / n as f64 * 100.0
            })
            .collect();
        resampled.sort_by(|a, b| a.total_cmp(b));

        let alpha = 1.0 - params.confidence;
        let prob_profitable =
            resampled.iter().filter(|w| **w > 0.0).count() as f64 / resampled.len() as f64;

        Ok(BootstrapResult {
            winrate_bb_per_100: stats::mean(hand_results_bb) * 100.0,
            ci_lower: stats::quantile_sorted(&resampled, alpha / 2.0),
            ci_upper: stats::quantile_sorted(&resampled, 1.0 - alpha / 2.0),
            confidence: params.confidence,
            prob_profitable,
            iterations: params.iterations,
            sample_size: n,
            low_sample: n < MIN_RELIABLE_HANDS,
            seed: base_seed,
        })
    }
}
