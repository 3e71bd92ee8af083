//! Integration tests for the GARCH volatility model.

use configuration::RegimeParams;
use volatility::{VolatilityError, VolatilityModel, VolatilityRegime, MIN_SESSIONS};

/// A deterministic series: `calm` sessions of ±1 followed by `wild`
/// sessions of ±25, alternating signs so the mean stays near zero.
fn regime_series(calm: usize, wild: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(calm + wild);
    for i in 0..calm {
        series.push(if i % 2 == 0 { 1.0 } else { -1.0 });
    }
    for i in 0..wild {
        series.push(if i % 2 == 0 { 25.0 } else { -25.0 });
    }
    series
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_fit_requires_minimum_sessions() {
    let model = VolatilityModel::default();
    let err = model.fit(&[3.0, -1.0, 2.5, 0.0, 4.0]).unwrap_err();
    assert!(matches!(
        err,
        VolatilityError::InsufficientData {
            required: MIN_SESSIONS,
            actual: 5
        }
    ));
}

#[test]
fn test_fit_rejects_zero_variance_series() {
    let model = VolatilityModel::default();
    let flat = vec![7.0; 12];
    assert!(matches!(
        model.fit(&flat),
        Err(VolatilityError::DegenerateInput(_))
    ));
}

// ============================================================================
// Fit output
// ============================================================================

#[test]
fn test_fit_is_deterministic_and_well_formed() {
    let model = VolatilityModel::default();
    let series = regime_series(20, 10);

    let a = model.fit(&series).unwrap();
    let b = model.fit(&series).unwrap();
    assert_eq!(a, b);

    assert_eq!(a.conditional_volatility.len(), series.len());
    assert!(a.conditional_volatility.iter().all(|v| *v > 0.0));

    assert!(a.params.alpha > 0.0);
    assert!(a.params.beta >= 0.0);
    assert!(a.params.alpha + a.params.beta < 1.0);
    assert!(a.params.omega > 0.0);
    assert!(a.params.log_likelihood.is_finite());
}

#[test]
fn test_recent_swings_classify_as_high_regime() {
    let model = VolatilityModel::default();
    let result = model.fit(&regime_series(20, 10)).unwrap();

    assert_eq!(result.regime, VolatilityRegime::High);
    assert!(result.current_volatility > result.mean_volatility);
    assert!(result.volatility_percentile > 50.0);
}

#[test]
fn test_calm_tail_classifies_away_from_high_regime() {
    let model = VolatilityModel::default();

    // Wild start, long calm tail: the latest conditional volatility decays
    // back toward the floor of its own history.
    let mut series = regime_series(0, 10);
    series.extend(regime_series(30, 0));
    let result = model.fit(&series).unwrap();

    assert_ne!(result.regime, VolatilityRegime::High);
    assert!(result.current_volatility < result.mean_volatility);
}

#[test]
fn test_sigma_band_brackets_recent_mean() {
    let model = VolatilityModel::new(RegimeParams::default());
    let result = model.fit(&regime_series(20, 10)).unwrap();

    assert!(result.sigma_band.lower < result.sigma_band.mean);
    assert!(result.sigma_band.mean < result.sigma_band.upper);
    let width = result.sigma_band.upper - result.sigma_band.lower;
    assert!((width - 4.0 * result.current_volatility).abs() < 1e-9);
}
