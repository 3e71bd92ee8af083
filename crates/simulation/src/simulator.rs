use crate::error::SimulationError;
use crate::report::{KellySizing, PercentileBands, SimulationResult};
use core_types::stats;
use ndarray::Array2;
use rand::distributions::Distribution;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;
use tracing::debug;

/// Stride for deriving per-trajectory seeds from the base seed
/// (the splitmix64 increment, chosen for its equidistribution).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Inputs to a bankroll simulation. All bankroll figures are in big blinds;
/// winrate and standard deviation are per 100 hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub starting_bankroll_bb: f64,
    pub win_rate_bb_per_100: f64,
    pub std_dev_bb_per_100: f64,
    pub num_trajectories: usize,
    pub hands_per_trajectory: usize,
    /// Quantiles of the fan-chart envelope, default 5th/95th.
    pub band_quantiles: (f64, f64),
    /// Optional bankroll target; when set, the result reports the fraction
    /// of trajectories that reach it.
    pub target_bankroll_bb: Option<f64>,
    /// Explicit seed for reproducible runs; a random one is drawn otherwise.
    pub seed: Option<u64>,
}

impl SimulationParams {
    pub fn new(
        starting_bankroll_bb: f64,
        win_rate_bb_per_100: f64,
        std_dev_bb_per_100: f64,
        num_trajectories: usize,
        hands_per_trajectory: usize,
    ) -> Self {
        Self {
            starting_bankroll_bb,
            win_rate_bb_per_100,
            std_dev_bb_per_100,
            num_trajectories,
            hands_per_trajectory,
            band_quantiles: (0.05, 0.95),
            target_bankroll_bb: None,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_target(mut self, target_bankroll_bb: f64) -> Self {
        self.target_bankroll_bb = Some(target_bankroll_bb);
        self
    }
}

/// Everything we need from one finished path before the matrix is assembled.
struct Trajectory {
    path: Vec<f64>,
    ruined: bool,
    max_drawdown: f64,
    peak: f64,
}

/// A stateless Monte Carlo engine for bankroll risk analysis.
#[derive(Debug, Default)]
pub struct MonteCarloSimulator {}

impl MonteCarloSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the simulation described by `params`.
    ///
    /// Each trajectory draws one normal increment per 100-hand block
    /// (mean = winrate, sd = standard deviation, both per 100 hands) and
    /// accumulates from the starting bankroll. Ruin is sticky: the first
    /// step at or below zero freezes the path there for the remaining
    /// steps. Percentile bands are computed column-wise at every step so
    /// the caller can render a fan chart, not just an endpoint histogram.
    pub fn simulate(
        &self,
        params: &SimulationParams,
    ) -> Result<SimulationResult, SimulationError> {
        self.validate(params)?;

        let steps = params.hands_per_trajectory.div_ceil(100);
        let base_seed = params
            .seed
            .unwrap_or_else(|| Pcg64::from_entropy().next_u64());

        // Validated above: std_dev > 0, so construction cannot fail.
        let increment = Normal::new(params.win_rate_bb_per_100, params.std_dev_bb_per_100)
            .map_err(|e| SimulationError::InternalError(e.to_string()))?;

        debug!(
            trajectories = params.num_trajectories,
            steps, base_seed, "running bankroll simulation"
        );

        let start = params.starting_bankroll_bb;
        let trajectories: Vec<Trajectory> = (0..params.num_trajectories)
            .into_par_iter()
            .map(move |i| {
                let seed = base_seed.wrapping_add((i as u64).wrapping_mul(SEED_STRIDE));
                let mut rng = Pcg64::seed_from_u64(seed);

                let mut path = Vec::with_capacity(steps + 1);
                path.push(start);

                let mut bankroll = start;
                let mut ruined = false;
                let mut peak = start;
                let mut max_drawdown = 0.0f64;

                for _ in 0..steps {
                    if !ruined {
                        bankroll += increment.sample(&mut rng);
                        if bankroll <= 0.0 {
                            ruined = true;
                        }
                    }
                    path.push(bankroll);
                    peak = peak.max(bankroll);
                    max_drawdown = max_drawdown.max(peak - bankroll);
                }

                Trajectory {
                    path,
                    ruined,
                    max_drawdown,
                    peak,
                }
            })
            .collect();

        let risk_of_ruin = trajectories.iter().filter(|t| t.ruined).count() as f64
            / params.num_trajectories as f64;

        let finals: Vec<f64> = trajectories
            .iter()
            .map(|t| *t.path.last().unwrap_or(&start))
            .collect();
        let mut finals_sorted = finals.clone();
        finals_sorted.sort_by(|a, b| a.total_cmp(b));

        let (lower_q, upper_q) = params.band_quantiles;
        let bands = self.percentile_bands(&trajectories, steps, lower_q, upper_q);

        let prob_reach_target = params.target_bankroll_bb.map(|target| {
            if target <= start {
                1.0
            } else {
                trajectories.iter().filter(|t| t.peak >= target).count() as f64
                    / params.num_trajectories as f64
            }
        });

        let mut drawdowns: Vec<f64> = trajectories.iter().map(|t| t.max_drawdown).collect();
        drawdowns.sort_by(|a, b| a.total_cmp(b));

        let flat: Vec<f64> = trajectories.into_iter().flat_map(|t| t.path).collect();
        let matrix = Array2::from_shape_vec((params.num_trajectories, steps + 1), flat)
            .map_err(|e| SimulationError::InternalError(e.to_string()))?;

        Ok(SimulationResult {
            trajectories: matrix,
            risk_of_ruin,
            expected_final_bb: stats::mean(&finals),
            median_final_bb: stats::quantile_sorted(&finals_sorted, 0.5),
            final_lower_bb: stats::quantile_sorted(&finals_sorted, lower_q),
            final_upper_bb: stats::quantile_sorted(&finals_sorted, upper_q),
            prob_reach_target,
            median_max_drawdown_bb: stats::quantile_sorted(&drawdowns, 0.5),
            bands: PercentileBands {
                lower_quantile: lower_q,
                upper_quantile: upper_q,
                lower: bands.0,
                median: bands.1,
                upper: bands.2,
            },
            num_trajectories: params.num_trajectories,
            hands_per_trajectory: params.hands_per_trajectory,
            seed: base_seed,
        })
    }

    /// Kelly-criterion sizing from a winrate/variance pair.
    ///
    /// Converts to per-hand units (mu = wr/100, sigma = sd/10, since variance
    /// scales linearly in hands) and applies `f* = mu / sigma^2`. Buy-in
    /// recommendations come from the classic risk-of-ruin bound
    /// `bankroll = sigma^2 / (2 mu) * ln(1 / ror)`, floored at the
    /// conventional 50/30/20 buy-in minimums.
    pub fn kelly(
        &self,
        win_rate_bb_per_100: f64,
        std_dev_bb_per_100: f64,
    ) -> Result<KellySizing, SimulationError> {
        if std_dev_bb_per_100 <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "std_dev_bb_per_100",
                reason: "standard deviation must be positive".to_string(),
            });
        }

        let mu = win_rate_bb_per_100 / 100.0;
        let sigma = std_dev_bb_per_100 / 10.0;
        let variance = sigma * sigma;

        if mu <= 0.0 {
            // A breakeven or losing winrate has no safe bankroll; report the
            // deepest conventional requirement instead of a division blow-up.
            return Ok(KellySizing {
                full_kelly_fraction: 0.0,
                conservative_buyins: 100,
                moderate_buyins: 100,
                aggressive_buyins: 100,
                win_rate_bb_per_100,
                std_dev_bb_per_100,
            });
        }

        let buyins_at = |ror: f64, floor: u32| -> u32 {
            let bankroll_bb = variance / (2.0 * mu) * (1.0 / ror).ln();
            ((bankroll_bb / 100.0).ceil() as u32).max(floor)
        };

        Ok(KellySizing {
            full_kelly_fraction: mu / variance,
            conservative_buyins: buyins_at(0.02, 50),
            moderate_buyins: buyins_at(0.05, 30),
            aggressive_buyins: buyins_at(0.10, 20),
            win_rate_bb_per_100,
            std_dev_bb_per_100,
        })
    }

    fn validate(&self, params: &SimulationParams) -> Result<(), SimulationError> {
        if params.starting_bankroll_bb <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "starting_bankroll_bb",
                reason: "starting bankroll must be positive".to_string(),
            });
        }
        if params.std_dev_bb_per_100 <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "std_dev_bb_per_100",
                reason: "standard deviation must be positive".to_string(),
            });
        }
        if params.num_trajectories == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "num_trajectories",
                reason: "at least one trajectory is required".to_string(),
            });
        }
        if params.hands_per_trajectory == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "hands_per_trajectory",
                reason: "at least one hand is required".to_string(),
            });
        }
        let (lo, hi) = params.band_quantiles;
        if !(0.0..1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo >= hi {
            return Err(SimulationError::InvalidParameter {
                name: "band_quantiles",
                reason: "quantiles must satisfy 0 <= lower < upper <= 1".to_string(),
            });
        }
        Ok(())
    }

    fn percentile_bands(
        &self,
        trajectories: &[Trajectory],
        steps: usize,
        lower_q: f64,
        upper_q: f64,
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut lower = Vec::with_capacity(steps + 1);
        let mut median = Vec::with_capacity(steps + 1);
        let mut upper = Vec::with_capacity(steps + 1);

        let mut column = vec![0.0f64; trajectories.len()];
        for step in 0..=steps {
            for (slot, t) in column.iter_mut().zip(trajectories) {
                *slot = t.path[step];
            }
            column.sort_by(|a, b| a.total_cmp(b));
            lower.push(stats::quantile_sorted(&column, lower_q));
            median.push(stats::quantile_sorted(&column, 0.5));
            upper.push(stats::quantile_sorted(&column, upper_q));
        }

        (lower, median, upper)
    }
}
