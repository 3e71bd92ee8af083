use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Per-step percentile envelopes across all trajectories, for fan-chart
/// rendering. Each vector has one entry per simulated step (including the
/// starting bankroll at index 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileBands {
    /// Quantile of the lower envelope (e.g. 0.05).
    pub lower_quantile: f64,
    /// Quantile of the upper envelope (e.g. 0.95).
    pub upper_quantile: f64,
    pub lower: Vec<f64>,
    pub median: Vec<f64>,
    pub upper: Vec<f64>,
}

/// The full output of a bankroll simulation.
///
/// All bankroll figures are in big blinds. The trajectory matrix has one row
/// per simulated path and one column per 100-hand step, column 0 being the
/// starting bankroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub trajectories: Array2<f64>,
    /// Fraction of trajectories that touched zero at least once.
    pub risk_of_ruin: f64,
    /// Mean ending bankroll.
    pub expected_final_bb: f64,
    pub median_final_bb: f64,
    /// Ending bankroll at the lower/upper band quantiles.
    pub final_lower_bb: f64,
    pub final_upper_bb: f64,
    /// Fraction of trajectories whose running maximum reached the target,
    /// when a target bankroll was supplied.
    pub prob_reach_target: Option<f64>,
    /// Median over trajectories of the worst peak-to-trough drawdown.
    pub median_max_drawdown_bb: f64,
    pub bands: PercentileBands,
    pub num_trajectories: usize,
    pub hands_per_trajectory: usize,
    /// The base seed actually used; feeding it back reproduces this result
    /// bit for bit.
    pub seed: u64,
}

/// Kelly-criterion bankroll sizing derived from a winrate/variance pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KellySizing {
    /// Full Kelly fraction `f* = mu / sigma^2` in per-hand bb units. Zero for
    /// a non-positive winrate.
    pub full_kelly_fraction: f64,
    /// Buy-ins (100 bb each) recommended at roughly 2% ruin tolerance.
    pub conservative_buyins: u32,
    /// Buy-ins recommended at roughly 5% ruin tolerance.
    pub moderate_buyins: u32,
    /// Buy-ins recommended at roughly 10% ruin tolerance.
    pub aggressive_buyins: u32,
    pub win_rate_bb_per_100: f64,
    pub std_dev_bb_per_100: f64,
}

impl KellySizing {
    /// Minimum bankroll for a given buy-in under full Kelly: `buy_in / f*`.
    /// `None` when the edge is non-positive, where no bankroll is safe.
    pub fn minimum_bankroll_bb(&self, buy_in_bb: f64) -> Option<f64> {
        if self.full_kelly_fraction > 0.0 {
            Some(buy_in_bb / self.full_kelly_fraction)
        } else {
            None
        }
    }
}
