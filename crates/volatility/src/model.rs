use crate::error::VolatilityError;
use crate::report::{GarchParams, SigmaBand, VolatilityRegime, VolatilityResult};
use configuration::RegimeParams;
use core_types::stats;
use tracing::debug;

/// Minimum sessions before a conditional-variance fit is attempted.
pub const MIN_SESSIONS: usize = 10;

/// Sessions included in the ±2σ band around the recent mean.
const BAND_WINDOW: usize = 10;

/// Persistence cap: alpha + beta must stay strictly inside the unit
/// stationarity region.
const MAX_PERSISTENCE: f64 = 0.999;

/// Coordinate-descent step floor; refinement stops once steps shrink below it.
const REFINE_TOLERANCE: f64 = 1e-4;

const MAX_REFINE_ITERATIONS: usize = 200;

/// GARCH(1,1) conditional-volatility model over a session P/L series.
///
/// Stateless: `fit` reads the series, returns a result, and remembers
/// nothing. The regime cut-points are injected configuration.
#[derive(Debug, Clone, Default)]
pub struct VolatilityModel {
    regime: RegimeParams,
}

impl VolatilityModel {
    pub fn new(regime: RegimeParams) -> Self {
        Self { regime }
    }

    /// Fits `sigma_t^2 = omega + alpha * eps_{t-1}^2 + beta * sigma_{t-1}^2`
    /// to the de-meaned P/L series by maximum likelihood and classifies the
    /// most recent conditional volatility into a Low/Medium/High regime.
    pub fn fit(&self, session_pnl: &[f64]) -> Result<VolatilityResult, VolatilityError> {
        if session_pnl.len() < MIN_SESSIONS {
            return Err(VolatilityError::InsufficientData {
                required: MIN_SESSIONS,
                actual: session_pnl.len(),
            });
        }

        let scale = stats::std_dev(session_pnl);
        if scale <= f64::EPSILON {
            return Err(VolatilityError::DegenerateInput(
                "session P/L series has zero variance".to_string(),
            ));
        }

        // Rescale to unit variance for numerical stability; the sample
        // variance of the rescaled residuals is 1, which makes variance
        // targeting (omega = 1 - alpha - beta) exact.
        let mean = stats::mean(session_pnl);
        let residuals: Vec<f64> = session_pnl.iter().map(|x| (x - mean) / scale).collect();

        let (params, sigma2) = self.maximize_likelihood(&residuals)?;

        // Back to the input units: variance scales by scale^2.
        let conditional_volatility: Vec<f64> =
            sigma2.iter().map(|v| v.sqrt() * scale).collect();

        debug!(
            alpha = params.alpha,
            beta = params.beta,
            log_likelihood = params.log_likelihood,
            "GARCH fit converged"
        );

        let current = *conditional_volatility
            .last()
            .ok_or_else(|| VolatilityError::DegenerateInput("empty series".to_string()))?;

        let low_cut = stats::quantile(&conditional_volatility, self.regime.low_quantile);
        let high_cut = stats::quantile(&conditional_volatility, self.regime.high_quantile);
        let regime = if current < low_cut {
            VolatilityRegime::Low
        } else if current > high_cut {
            VolatilityRegime::High
        } else {
            VolatilityRegime::Medium
        };

        let below = conditional_volatility
            .iter()
            .filter(|v| **v < current)
            .count();
        let percentile = below as f64 / conditional_volatility.len() as f64 * 100.0;

        let window_start = session_pnl.len().saturating_sub(BAND_WINDOW);
        let recent_mean = stats::mean(&session_pnl[window_start..]);
        let sigma_band = SigmaBand {
            mean: recent_mean,
            lower: recent_mean - 2.0 * current,
            upper: recent_mean + 2.0 * current,
        };

        Ok(VolatilityResult {
            mean_volatility: stats::mean(&conditional_volatility),
            conditional_volatility,
            params: GarchParams {
                omega: params.omega * scale * scale,
                ..params
            },
            regime,
            regime_cutpoints: (low_cut, high_cut),
            current_volatility: current,
            volatility_percentile: percentile,
            sigma_band,
        })
    }

    /// Coarse grid search over (alpha, beta) under variance targeting,
    /// refined by shrinking-step coordinate descent.
    fn maximize_likelihood(
        &self,
        residuals: &[f64],
    ) -> Result<(GarchParams, Vec<f64>), VolatilityError> {
        let mut best_alpha = 0.0;
        let mut best_beta = 0.0;
        let mut best_ll = f64::NEG_INFINITY;

        for ai in 1..=15 {
            let alpha = ai as f64 * 0.02;
            for bi in 0..=24 {
                let beta = 0.50 + bi as f64 * 0.02;
                if alpha + beta >= MAX_PERSISTENCE {
                    continue;
                }
                if let Some(ll) = log_likelihood(residuals, alpha, beta) {
                    if ll > best_ll {
                        best_ll = ll;
                        best_alpha = alpha;
                        best_beta = beta;
                    }
                }
            }
        }

        if !best_ll.is_finite() {
            return Err(VolatilityError::FitFailed {
                omega: 1.0 - best_alpha - best_beta,
                alpha: best_alpha,
                beta: best_beta,
            });
        }

        let mut step = 0.01;
        let mut iterations = 0;
        while step >= REFINE_TOLERANCE && iterations < MAX_REFINE_ITERATIONS {
            let mut improved = false;
            for (da, db) in [(step, 0.0), (-step, 0.0), (0.0, step), (0.0, -step)] {
                let alpha = best_alpha + da;
                let beta = best_beta + db;
                if alpha <= 0.0 || beta < 0.0 || alpha + beta >= MAX_PERSISTENCE {
                    continue;
                }
                if let Some(ll) = log_likelihood(residuals, alpha, beta) {
                    if ll > best_ll {
                        best_ll = ll;
                        best_alpha = alpha;
                        best_beta = beta;
                        improved = true;
                    }
                }
            }
            if !improved {
                step /= 2.0;
            }
            iterations += 1;
        }

        let omega = 1.0 - best_alpha - best_beta;
        let sigma2 = variance_recursion(residuals, omega, best_alpha, best_beta);

        Ok((
            GarchParams {
                omega,
                alpha: best_alpha,
                beta: best_beta,
                log_likelihood: best_ll,
                iterations,
            },
            sigma2,
        ))
    }
}

/// Conditional variance recursion, seeded with the (unit) sample variance.
fn variance_recursion(residuals: &[f64], omega: f64, alpha: f64, beta: f64) -> Vec<f64> {
    let mut sigma2 = Vec::with_capacity(residuals.len());
    let mut prev_var = 1.0;
    let mut prev_eps2 = 1.0;
    for eps in residuals {
        let var = if sigma2.is_empty() {
            prev_var
        } else {
            omega + alpha * prev_eps2 + beta * prev_var
        };
        sigma2.push(var);
        prev_var = var;
        prev_eps2 = eps * eps;
    }
    sigma2
}

/// Gaussian log-likelihood of the residuals under the recursion; `None`
/// when the variance path degenerates.
fn log_likelihood(residuals: &[f64], alpha: f64, beta: f64) -> Option<f64> {
    let omega = 1.0 - alpha - beta;
    if omega <= 0.0 {
        return None;
    }
    let sigma2 = variance_recursion(residuals, omega, alpha, beta);

    let mut ll = 0.0;
    for (eps, var) in residuals.iter().zip(&sigma2) {
        if *var <= 0.0 || !var.is_finite() {
            return None;
        }
        ll += -0.5 * ((2.0 * std::f64::consts::PI).ln() + var.ln() + eps * eps / var);
    }
    ll.is_finite().then_some(ll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_recursion_starts_at_sample_variance() {
        let sigma2 = variance_recursion(&[0.5, -0.5, 1.0], 0.1, 0.1, 0.8);
        assert_eq!(sigma2[0], 1.0);
        // sigma_1^2 = omega + alpha * eps_0^2 + beta * sigma_0^2
        assert!((sigma2[1] - (0.1 + 0.1 * 0.25 + 0.8)).abs() < 1e-12);
    }

    #[test]
    fn likelihood_rejects_non_stationary_parameters() {
        assert!(log_likelihood(&[0.1, -0.2], 0.6, 0.5).is_none());
    }
}
