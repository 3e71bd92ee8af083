//! Integration tests for the bootstrap winrate estimator.

use inference::{BootstrapEstimator, BootstrapParams, InferenceError, MIN_RELIABLE_HANDS};

/// A deterministic winner-leaning sample: mostly small losses, a few big wins.
fn sample_hands(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| match i % 10 {
            0 => 12.0,
            1 => 5.5,
            2 | 3 => 1.0,
            4 | 5 | 6 => -0.5,
            _ => -1.0,
        })
        .collect()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_sample_is_insufficient_data() {
    let est = BootstrapEstimator::new();
    let err = est.estimate(&[], &BootstrapParams::default()).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::InsufficientData {
            required: 1,
            actual: 0
        }
    ));
}

#[test]
fn test_confidence_must_be_a_probability() {
    let est = BootstrapEstimator::new();
    let hands = sample_hands(200);

    for bad in [0.0, 1.0, 1.5, -0.1] {
        let params = BootstrapParams::default().with_confidence(bad);
        assert!(est.estimate(&hands, &params).is_err());
    }
}

#[test]
fn test_zero_iterations_rejected() {
    let est = BootstrapEstimator::new();
    let params = BootstrapParams {
        iterations: 0,
        ..BootstrapParams::default()
    };
    assert!(est.estimate(&sample_hands(200), &params).is_err());
}

// ============================================================================
// Estimates
// ============================================================================

#[test]
fn test_seeded_runs_are_identical() {
    let est = BootstrapEstimator::new();
    let hands = sample_hands(500);
    let params = BootstrapParams::default().with_seed(99);

    let a = est.estimate(&hands, &params).unwrap();
    let b = est.estimate(&hands, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_point_estimate_is_sample_winrate() {
    let est = BootstrapEstimator::new();
    let hands = vec![1.0, -1.0, 2.0, 0.0];
    let params = BootstrapParams::default().with_seed(1);

    let result = est.estimate(&hands, &params).unwrap();
    assert!((result.winrate_bb_per_100 - 50.0).abs() < 1e-12);
}

#[test]
fn test_wider_confidence_contains_narrower_interval() {
    let est = BootstrapEstimator::new();
    let hands = sample_hands(400);

    let narrow = est
        .estimate(&hands, &BootstrapParams::default().with_seed(7))
        .unwrap();
    let wide = est
        .estimate(
            &hands,
            &BootstrapParams::default().with_seed(7).with_confidence(0.99),
        )
        .unwrap();

    assert!(wide.ci_lower <= narrow.ci_lower);
    assert!(wide.ci_upper >= narrow.ci_upper);
}

#[test]
fn test_prob_profitable_tracks_the_sample_sign() {
    let est = BootstrapEstimator::new();
    let params = BootstrapParams::default().with_seed(13);

    let winners = vec![2.0; 300];
    let losers = vec![-2.0; 300];

    assert_eq!(est.estimate(&winners, &params).unwrap().prob_profitable, 1.0);
    assert_eq!(est.estimate(&losers, &params).unwrap().prob_profitable, 0.0);
}

#[test]
fn test_low_sample_flag_below_documented_minimum() {
    let est = BootstrapEstimator::new();
    let params = BootstrapParams::default().with_seed(5);

    let small = est
        .estimate(&sample_hands(MIN_RELIABLE_HANDS - 1), &params)
        .unwrap();
    let large = est
        .estimate(&sample_hands(MIN_RELIABLE_HANDS), &params)
        .unwrap();

    assert!(small.low_sample);
    assert!(!large.low_sample);
}
