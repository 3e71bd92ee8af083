//! Integration tests for the opponent tagger.

use core_types::{Archetype, OpponentStats};
use tagging::{OpponentTagger, TraitTag};

fn stats(vpip: f64, pfr: f64, af: f64, wtsd: f64, hands: u32) -> OpponentStats {
    OpponentStats {
        vpip_pct: vpip,
        pfr_pct: pfr,
        aggression_factor: af,
        wtsd_pct: wtsd,
        three_bet_pct: 4.0,
        hands_sampled: hands,
    }
}

// ============================================================================
// Archetype classification
// ============================================================================

#[test]
fn test_loose_passive_extreme_is_a_calling_station() {
    let tagger = OpponentTagger::default();
    let tag = tagger.tag(&stats(65.0, 5.0, 1.2, 45.0, 300));

    assert_eq!(tag.archetype, Archetype::CallingStation);
    // Deterministic: same stats, same label.
    assert_eq!(
        tagger.tag(&stats(65.0, 5.0, 1.2, 45.0, 300)).archetype,
        Archetype::CallingStation
    );
}

#[test]
fn test_table_order_breaks_overlapping_rules() {
    let tagger = OpponentTagger::default();
    // VPIP 55 / PFR 5 satisfies both the station and whale rows; the
    // station row sits first in the table, so it wins.
    let tag = tagger.tag(&stats(55.0, 5.0, 1.0, 40.0, 200));
    assert_eq!(tag.archetype, Archetype::CallingStation);

    // VPIP 45 misses the station row (>= 50) and falls to the whale row.
    let tag = tagger.tag(&stats(45.0, 5.0, 1.0, 40.0, 200));
    assert_eq!(tag.archetype, Archetype::Whale);
}

#[test]
fn test_standard_profiles_classify_as_expected() {
    let tagger = OpponentTagger::default();

    assert_eq!(
        tagger.tag(&stats(14.0, 10.0, 2.2, 22.0, 400)).archetype,
        Archetype::Nit
    );
    assert_eq!(
        tagger.tag(&stats(23.0, 18.0, 2.5, 26.0, 400)).archetype,
        Archetype::Tag
    );
    assert_eq!(
        tagger.tag(&stats(34.0, 26.0, 3.0, 28.0, 400)).archetype,
        Archetype::Lag
    );
    assert_eq!(
        tagger.tag(&stats(55.0, 42.0, 5.5, 30.0, 400)).archetype,
        Archetype::Maniac
    );
}

#[test]
fn test_thin_sample_is_unknown_regardless_of_profile() {
    let tagger = OpponentTagger::default();
    let tag = tagger.tag(&stats(65.0, 5.0, 1.2, 45.0, 5));

    assert_eq!(tag.archetype, Archetype::Unknown);
    assert!(!tag.note.is_empty());
}

#[test]
fn test_tag_is_total_over_a_stat_grid() {
    let tagger = OpponentTagger::default();

    let mut vpip = 0.0;
    while vpip <= 100.0 {
        let mut pfr = 0.0;
        while pfr <= vpip {
            for af in [0.0, 0.5, 1.5, 2.5, 4.5, 8.0] {
                for wtsd in [10.0, 30.0, 55.0] {
                    let tag = tagger.tag(&stats(vpip, pfr, af, wtsd, 500));
                    // Exactly one label, and always a note to go with it.
                    assert!(!tag.note.is_empty());
                }
            }
            pfr += 5.0;
        }
        vpip += 5.0;
    }
}

// ============================================================================
// Traits and confidence
// ============================================================================

#[test]
fn test_secondary_traits_fire_on_their_thresholds() {
    let tagger = OpponentTagger::default();

    let passive_limper = tagger.tag(&stats(40.0, 8.0, 0.5, 35.0, 300));
    assert!(passive_limper.traits.contains(&TraitTag::Passive));
    assert!(passive_limper.traits.contains(&TraitTag::Limper));

    let aggro = tagger.tag(&stats(30.0, 25.0, 4.5, 25.0, 300));
    assert!(aggro.traits.contains(&TraitTag::Aggro));

    // 3-bet below 3% with a real opening range reads as foldy.
    let mut foldy_stats = stats(24.0, 18.0, 2.0, 25.0, 300);
    foldy_stats.three_bet_pct = 1.5;
    let foldy = tagger.tag(&foldy_stats);
    assert!(foldy.traits.contains(&TraitTag::Foldy));
}

#[test]
fn test_confidence_scales_with_sample() {
    let tagger = OpponentTagger::default();

    use tagging::TagConfidence;
    assert_eq!(tagger.tag(&stats(25.0, 18.0, 2.0, 25.0, 30)).confidence, TagConfidence::Low);
    assert_eq!(tagger.tag(&stats(25.0, 18.0, 2.0, 25.0, 120)).confidence, TagConfidence::Medium);
    assert_eq!(tagger.tag(&stats(25.0, 18.0, 2.0, 25.0, 500)).confidence, TagConfidence::High);
}
