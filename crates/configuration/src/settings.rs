use core_types::Archetype;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the analytics engines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub regime: RegimeParams,
    pub clustering: ClusteringParams,
    pub tilt: TiltParams,
    pub tagging: TaggingParams,
    pub leaks: LeakParams,
}

/// Cut-points for classifying current conditional volatility against the
/// fitted series' own distribution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegimeParams {
    /// Quantile below which the regime is Low.
    pub low_quantile: f64,
    /// Quantile above which the regime is High.
    pub high_quantile: f64,
}

impl Default for RegimeParams {
    /// Bottom/top terciles: the middle third of the historical distribution
    /// is the Medium regime.
    fn default() -> Self {
        Self {
            low_quantile: 1.0 / 3.0,
            high_quantile: 2.0 / 3.0,
        }
    }
}

/// A fixed reference point in opponent stat space used to auto-label
/// k-means centroids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArchetypeCentroid {
    pub archetype: Archetype,
    pub vpip_pct: f64,
    pub pfr_pct: f64,
    pub aggression_factor: f64,
    pub wtsd_pct: f64,
}

/// Parameters for the opponent-population clustering engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringParams {
    /// Number of k-means clusters.
    pub k: usize,
    /// Opponents with fewer sampled hands are excluded before clustering.
    pub min_hands_per_opponent: u32,
    /// Below this many surviving opponents the result is flagged low-confidence.
    pub min_population: usize,
    /// Seed for the k-means++ initialization; fixed so repeated runs over the
    /// same population reproduce identical assignments.
    pub seed: u64,
    /// Lloyd-iteration cap.
    pub max_iterations: usize,
    /// Reference points the cluster centroids are labeled against.
    pub archetypes: Vec<ArchetypeCentroid>,
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self {
            k: 4,
            min_hands_per_opponent: 30,
            min_population: 50,
            seed: 42,
            max_iterations: 100,
            archetypes: vec![
                ArchetypeCentroid {
                    archetype: Archetype::Nit,
                    vpip_pct: 14.0,
                    pfr_pct: 10.0,
                    aggression_factor: 2.0,
                    wtsd_pct: 20.0,
                },
                ArchetypeCentroid {
                    archetype: Archetype::Tag,
                    vpip_pct: 23.0,
                    pfr_pct: 18.0,
                    aggression_factor: 2.5,
                    wtsd_pct: 25.0,
                },
                ArchetypeCentroid {
                    archetype: Archetype::Lag,
                    vpip_pct: 34.0,
                    pfr_pct: 26.0,
                    aggression_factor: 3.0,
                    wtsd_pct: 28.0,
                },
                ArchetypeCentroid {
                    archetype: Archetype::CallingStation,
                    vpip_pct: 48.0,
                    pfr_pct: 6.0,
                    aggression_factor: 0.8,
                    wtsd_pct: 42.0,
                },
                ArchetypeCentroid {
                    archetype: Archetype::Maniac,
                    vpip_pct: 55.0,
                    pfr_pct: 40.0,
                    aggression_factor: 5.0,
                    wtsd_pct: 30.0,
                },
            ],
        }
    }
}

/// Thresholds for the tilt detector's sliding-window rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TiltParams {
    /// Minimum hands before a tilt score is defined at all.
    pub min_hands: usize,
    /// Rolling window for downswing detection.
    pub window_hands: usize,
    /// Cumulative loss within one window that flags a downswing, in bb.
    pub downswing_threshold_bb: f64,
    /// Hands inspected after a downswing for VPIP drift.
    pub post_downswing_hands: usize,
    /// Percentage-point VPIP rise over baseline that flags loss-chasing.
    pub vpip_rise_margin_pct: f64,
    /// Post-loss aggression frequency above this multiple of baseline flags a spike.
    pub aggression_spike_ratio: f64,
    /// A hand losing at least this many bb primes the weak-hand chase check.
    pub chase_trigger_loss_bb: f64,
    /// Preflop strength below which a voluntarily played hand counts as a chase.
    pub chase_strength_cutoff: f64,
    /// Fraction of post-loss hands that must be chases to set the flag.
    pub chase_rate_cutoff: f64,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            min_hands: 20,
            window_hands: 50,
            downswing_threshold_bb: 10.0,
            post_downswing_hands: 30,
            vpip_rise_margin_pct: 10.0,
            aggression_spike_ratio: 1.5,
            chase_trigger_loss_bb: 2.0,
            chase_strength_cutoff: 0.3,
            chase_rate_cutoff: 0.2,
        }
    }
}

/// An inclusive range over one stat dimension. `None` bounds are open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl StatRange {
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value <= m)
    }
}

/// One row of the tagging decision table: every range must match for the
/// rule to fire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRule {
    pub archetype: Archetype,
    pub vpip: StatRange,
    pub pfr: StatRange,
    pub aggression_factor: StatRange,
    pub wtsd: StatRange,
}

/// Thresholds for the secondary trait tags layered on top of the archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraitThresholds {
    /// AF below this (with meaningful VPIP) reads as passive.
    pub passive_af_max: f64,
    /// Minimum VPIP for the passive read to mean anything.
    pub passive_vpip_min: f64,
    /// AF above this reads as postflop aggro.
    pub aggro_af_min: f64,
    /// VPIP-PFR spread above this reads as a habitual limper.
    pub limper_spread_min: f64,
    /// 3-bet% below this (with a real PFR) reads as foldy versus pressure.
    pub foldy_three_bet_max: f64,
    pub foldy_pfr_min: f64,
}

impl Default for TraitThresholds {
    fn default() -> Self {
        Self {
            passive_af_max: 1.0,
            passive_vpip_min: 20.0,
            aggro_af_min: 3.0,
            limper_spread_min: 15.0,
            foldy_three_bet_max: 3.0,
            foldy_pfr_min: 10.0,
        }
    }
}

/// Parameters for the threshold classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggingParams {
    /// Below this sample the classifier returns Unknown rather than a read.
    pub min_hands: u32,
    /// Ordered decision table; the first matching row wins, so table order
    /// is the documented priority.
    pub rules: Vec<TagRule>,
    pub traits: TraitThresholds,
}

impl Default for TaggingParams {
    fn default() -> Self {
        Self {
            min_hands: 10,
            rules: vec![
                // Most extreme profiles first so they are not shadowed by
                // the broader loose-passive rules below them.
                TagRule {
                    archetype: Archetype::CallingStation,
                    vpip: StatRange::at_least(50.0),
                    pfr: StatRange::at_most(8.0),
                    ..TagRule::default()
                },
                TagRule {
                    archetype: Archetype::Whale,
                    vpip: StatRange::at_least(40.0),
                    pfr: StatRange::at_most(10.0),
                    ..TagRule::default()
                },
                TagRule {
                    archetype: Archetype::Maniac,
                    pfr: StatRange::at_least(30.0),
                    aggression_factor: StatRange::at_least(4.0),
                    ..TagRule::default()
                },
                TagRule {
                    archetype: Archetype::Lag,
                    vpip: StatRange::at_least(30.0),
                    pfr: StatRange::at_least(20.0),
                    aggression_factor: StatRange::at_least(2.0),
                    ..TagRule::default()
                },
                TagRule {
                    archetype: Archetype::Nit,
                    vpip: StatRange::at_most(20.0),
                    pfr: StatRange::at_most(15.0),
                    ..TagRule::default()
                },
                TagRule {
                    archetype: Archetype::Tag,
                    vpip: StatRange::between(18.0, 28.0),
                    pfr: StatRange::between(12.0, 22.0),
                    aggression_factor: StatRange::at_least(1.5),
                    ..TagRule::default()
                },
            ],
            traits: TraitThresholds::default(),
        }
    }
}

/// Thresholds for the leak detection rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeakParams {
    /// Minimum hands before a positional or action pattern counts.
    pub min_sample_hands: usize,
    /// Positional winrate below this (bb/100) is a leak.
    pub position_loss_bb100: f64,
    /// Position+action winrate below this (bb/100) is a leak.
    pub combo_loss_bb100: f64,
    /// Winrate in bluffed pots against stations below this (bb/100) is a leak.
    pub station_loss_bb100: f64,
    /// Sessions scoring at or above this tilt score form the "tilted" cohort.
    pub tilt_score_cutoff: f64,
}

impl Default for LeakParams {
    fn default() -> Self {
        Self {
            min_sample_hands: 30,
            position_loss_bb100: -10.0,
            combo_loss_bb100: -5.0,
            station_loss_bb100: -5.0,
            tilt_score_cutoff: 5.0,
        }
    }
}
