//! Integration tests for the opponent-population clustering engine.

use clustering::{ClusteringEngine, ClusteringError};
use configuration::ClusteringParams;
use core_types::{Archetype, OpponentRecord, OpponentStats};
use uuid::Uuid;

fn opponent(name: &str, vpip: f64, pfr: f64, af: f64, wtsd: f64, hands: u32) -> OpponentRecord {
    OpponentRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        stats: OpponentStats {
            vpip_pct: vpip,
            pfr_pct: pfr,
            aggression_factor: af,
            wtsd_pct: wtsd,
            three_bet_pct: 4.0,
            hands_sampled: hands,
        },
    }
}

/// A population of four tight groups sitting on the default archetype
/// reference points, with small deterministic jitter.
fn synthetic_population(per_group: usize) -> Vec<OpponentRecord> {
    let profiles: [(&str, f64, f64, f64, f64); 4] = [
        ("nit", 14.0, 10.0, 2.0, 20.0),
        ("tag", 23.0, 18.0, 2.5, 25.0),
        ("station", 48.0, 6.0, 0.8, 42.0),
        ("maniac", 55.0, 40.0, 5.0, 30.0),
    ];

    let mut out = Vec::new();
    for (label, vpip, pfr, af, wtsd) in profiles {
        for i in 0..per_group {
            let jitter = (i % 5) as f64 * 0.2 - 0.4;
            out.push(opponent(
                &format!("{label}-{i}"),
                vpip + jitter,
                pfr + jitter,
                af + jitter * 0.05,
                wtsd + jitter,
                100,
            ));
        }
    }
    out
}

// ============================================================================
// Validation and flags
// ============================================================================

#[test]
fn test_too_few_qualified_opponents_is_insufficient_data() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let population = synthetic_population(1); // 4 opponents, k = 4 -> ok
    let result = engine.cluster(&population[..3]);

    assert!(matches!(
        result,
        Err(ClusteringError::InsufficientData {
            required: 4,
            actual: 3
        })
    ));
}

#[test]
fn test_short_sampled_opponents_are_excluded() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let mut population = synthetic_population(15);
    population.push(opponent("drive-by", 80.0, 60.0, 6.0, 50.0, 4));

    let result = engine.cluster(&population).unwrap();
    assert_eq!(result.excluded, 1);
    assert_eq!(result.points.len(), 60);
}

#[test]
fn test_identical_population_is_degenerate() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let population: Vec<OpponentRecord> = (0..60)
        .map(|i| opponent(&format!("clone-{i}"), 25.0, 18.0, 2.0, 27.0, 100))
        .collect();

    assert!(matches!(
        engine.cluster(&population),
        Err(ClusteringError::DegenerateInput(_))
    ));
}

#[test]
fn test_small_population_is_flagged_low_confidence() {
    let engine = ClusteringEngine::new(ClusteringParams::default());

    let small = engine.cluster(&synthetic_population(3)).unwrap();
    assert!(small.low_confidence);

    let large = engine.cluster(&synthetic_population(15)).unwrap();
    assert!(!large.low_confidence);
}

// ============================================================================
// Assignments
// ============================================================================

#[test]
fn test_every_opponent_lands_in_exactly_one_cluster() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let result = engine.cluster(&synthetic_population(15)).unwrap();

    assert_eq!(result.k, 4);
    assert_eq!(result.points.len(), 60);
    assert!(result.points.iter().all(|p| p.cluster < 4));

    let sizes: usize = result.clusters.iter().map(|c| c.size).sum();
    assert_eq!(sizes, 60);
}

#[test]
fn test_same_seed_reproduces_assignments() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let population = synthetic_population(15);

    let a = engine.cluster(&population).unwrap();
    let b = engine.cluster(&population).unwrap();

    for (pa, pb) in a.points.iter().zip(&b.points) {
        assert_eq!(pa.cluster, pb.cluster);
        assert_eq!(pa.x, pb.x);
        assert_eq!(pa.y, pb.y);
    }
}

#[test]
fn test_well_separated_groups_recover_their_archetypes() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let result = engine.cluster(&synthetic_population(15)).unwrap();

    let mut labels: Vec<Archetype> = result.clusters.iter().map(|c| c.archetype).collect();
    labels.sort_by_key(|a| a.priority());

    assert_eq!(
        labels,
        vec![
            Archetype::Nit,
            Archetype::Tag,
            Archetype::CallingStation,
            Archetype::Maniac,
        ]
    );
}

#[test]
fn test_projection_carries_most_of_the_variance() {
    let engine = ClusteringEngine::new(ClusteringParams::default());
    let result = engine.cluster(&synthetic_population(15)).unwrap();

    assert!(result.explained_variance > 0.5);
    assert!(result.explained_variance <= 1.0 + 1e-9);
}
