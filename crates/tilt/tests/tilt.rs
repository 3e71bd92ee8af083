//! Integration tests for the tilt detector.

use chrono::Utc;
use configuration::TiltParams;
use core_types::{ActionKind, Card, HandRecord, Position, Rank, Street, StreetAction, Suit};
use tilt::{TiltDetector, TiltError, TiltLevel};
use uuid::Uuid;

fn hand(net_bb: f64, vpip: bool, aggressive: bool) -> HandRecord {
    let action = if aggressive {
        ActionKind::Raise
    } else if vpip {
        ActionKind::Call
    } else {
        ActionKind::Fold
    };
    HandRecord {
        id: Uuid::new_v4(),
        session_id: Uuid::nil(),
        played_at: Utc::now(),
        // Rags, so every voluntarily played hand reads as a weak entry.
        hole_cards: [
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Two, Suit::Diamonds),
        ],
        board: Vec::new(),
        position: Position::Btn,
        pot_bb: 10.0,
        net_bb,
        actions: vec![StreetAction {
            street: Street::Preflop,
            action,
            amount_bb: vpip.then_some(2.0),
        }],
        vpip,
        pfr: false,
        aggressive,
        opponent_id: None,
    }
}

/// 100 calm hands: small steady wins, ~20% VPIP, no aggression.
fn flat_series() -> Vec<HandRecord> {
    (0..100).map(|i| hand(0.2, i % 5 == 0, false)).collect()
}

/// The scripted downswing: 50 quiet hands, a 15 bb slide over the next 50,
/// then a VPIP explosion (~50%) on the recovery attempt.
fn downswing_then_chasing_series() -> Vec<HandRecord> {
    let mut hands = Vec::with_capacity(140);
    for i in 0..50 {
        hands.push(hand(0.1, i % 5 == 0 || i == 1, false));
    }
    for i in 50..100 {
        hands.push(hand(-0.3, i % 5 == 0, false));
    }
    for i in 100..140 {
        hands.push(hand(0.0, i % 2 == 0, false));
    }
    hands
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_short_series_is_insufficient_data() {
    let detector = TiltDetector::default();
    let series: Vec<HandRecord> = (0..10).map(|_| hand(0.0, false, false)).collect();

    let err = detector.score(&series).unwrap_err();
    assert!(matches!(
        err,
        TiltError::InsufficientData {
            required: 20,
            actual: 10
        }
    ));
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_flat_series_scores_zero() {
    let detector = TiltDetector::new(TiltParams::default());
    let score = detector.score(&flat_series()).unwrap();

    assert_eq!(score.score, 0.0);
    assert_eq!(score.level, TiltLevel::None);
    assert!(!score.flags.downswing);
    assert!(!score.flags.loss_chasing);
    assert!(!score.flags.aggression_spike);
    assert!(!score.flags.weak_hand_chasing);
    assert_eq!(score.episodes, 0);
}

#[test]
fn test_downswing_plus_vpip_rise_flags_both_and_outscores_flat() {
    let detector = TiltDetector::default();

    let tilted = detector.score(&downswing_then_chasing_series()).unwrap();
    let calm = detector.score(&flat_series()).unwrap();

    assert!(tilted.flags.downswing);
    assert!(tilted.flags.loss_chasing);
    assert!(tilted.flags.vpip_rise_pct > 10.0);
    assert!(tilted.episodes > 0);
    assert!(tilted.score >= calm.score);
    assert!(tilted.score > 0.0);
}

#[test]
fn test_score_is_bounded_for_a_catastrophic_series() {
    let detector = TiltDetector::default();
    // Every hand a loss, every hand played, every hand aggressive.
    let series: Vec<HandRecord> = (0..200).map(|_| hand(-5.0, true, true)).collect();

    let score = detector.score(&series).unwrap();
    assert!(score.score >= 0.0);
    assert!(score.score <= 10.0);
    assert!(score.flags.downswing);
    assert!(score.flags.weak_hand_chasing);
    assert_eq!(score.level, TiltLevel::Severe);
}

#[test]
fn test_scoring_is_stateless_across_calls() {
    let detector = TiltDetector::default();
    let series = downswing_then_chasing_series();

    let a = detector.score(&series).unwrap();
    let b = detector.score(&series).unwrap();
    assert_eq!(a.score, b.score);
    assert_eq!(a.flags, b.flags);
    assert_eq!(a.episodes, b.episodes);
}

#[test]
fn test_series_shorter_than_window_cannot_downswing() {
    let detector = TiltDetector::default();
    // 30 hands, all losing, but no 50-hand window exists.
    let series: Vec<HandRecord> = (0..30).map(|_| hand(-1.0, false, false)).collect();

    let score = detector.score(&series).unwrap();
    assert!(!score.flags.downswing);
    assert_eq!(score.episodes, 0);
}
