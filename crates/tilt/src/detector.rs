use crate::error::TiltError;
use crate::report::{TiltConfidence, TiltFlags, TiltLevel, TiltScore};
use crate::strength::preflop_strength;
use configuration::TiltParams;
use core_types::HandRecord;
use tracing::debug;

/// One downswing episode: a window of hands whose cumulative loss crossed
/// the threshold.
struct Downswing {
    start: usize,
    end: usize,
}

/// Rule-based tilt scoring over a chronological hand series.
///
/// Stateless by contract: the score is recomputed from scratch on every
/// call, so back-to-back invocations over the same series agree exactly.
#[derive(Debug, Clone, Default)]
pub struct TiltDetector {
    params: TiltParams,
}

impl TiltDetector {
    pub fn new(params: TiltParams) -> Self {
        Self { params }
    }

    /// Scores the series on the 0-10 tilt scale.
    ///
    /// Component weights: downswing episodes contribute 1.5 each (capped at
    /// 3), VPIP rise contributes 1.5 per 10 percentage points (capped at 3),
    /// an aggression spike adds 2, weak-hand chasing adds 2; the sum is
    /// capped at 10.
    pub fn score(&self, hands: &[HandRecord]) -> Result<TiltScore, TiltError> {
        let p = &self.params;
        let n = hands.len();
        if n < p.min_hands {
            return Err(TiltError::InsufficientData {
                required: p.min_hands,
                actual: n,
            });
        }

        let downswings = self.find_downswings(hands);
        let episodes = downswings.len();

        let (vpip_rise_pct, aggression_spike) = match downswings.first() {
            Some(first) => (
                self.vpip_rise(hands, first),
                self.aggression_spiked(hands, first),
            ),
            None => (0.0, false),
        };
        let weak_hand_chasing = self.weak_hand_chasing(hands);

        let mut score = 0.0;
        if episodes > 0 {
            score += (episodes as f64 * 1.5).min(3.0);
        }
        if vpip_rise_pct > 0.0 {
            score += (vpip_rise_pct / 10.0 * 1.5).min(3.0);
        }
        if aggression_spike {
            score += 2.0;
        }
        if weak_hand_chasing {
            score += 2.0;
        }
        let score = (score.min(10.0) * 10.0).round() / 10.0;

        debug!(score, episodes, vpip_rise_pct, "tilt series scored");

        let level = match score {
            s if s <= 2.0 => TiltLevel::None,
            s if s <= 4.0 => TiltLevel::Mild,
            s if s <= 7.0 => TiltLevel::Moderate,
            _ => TiltLevel::Severe,
        };

        let confidence = if n > 100 {
            TiltConfidence::High
        } else if n > 50 {
            TiltConfidence::Medium
        } else {
            TiltConfidence::Low
        };

        let (warning, recommendations) = advice(level);

        Ok(TiltScore {
            score,
            level,
            flags: TiltFlags {
                downswing: episodes > 0,
                vpip_rise_pct,
                loss_chasing: vpip_rise_pct > p.vpip_rise_margin_pct,
                aggression_spike,
                weak_hand_chasing,
            },
            episodes,
            hands_analyzed: n,
            confidence,
            warning: warning.to_string(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        })
    }

    /// Every window position whose cumulative result is at or below the
    /// loss threshold. Series shorter than one window cannot downswing.
    fn find_downswings(&self, hands: &[HandRecord]) -> Vec<Downswing> {
        let window = self.params.window_hands;
        if hands.len() < window {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut sum: f64 = hands[..window].iter().map(|h| h.net_bb).sum();
        for start in 0..=(hands.len() - window) {
            if start > 0 {
                sum += hands[start + window - 1].net_bb - hands[start - 1].net_bb;
            }
            if sum <= -self.params.downswing_threshold_bb {
                found.push(Downswing {
                    start,
                    end: start + window,
                });
            }
        }
        found
    }

    /// VPIP drift around the first downswing: the window before it versus
    /// the hands right after it, in percentage points.
    fn vpip_rise(&self, hands: &[HandRecord], downswing: &Downswing) -> f64 {
        let before_start = downswing.start.saturating_sub(self.params.window_hands);
        let before = &hands[before_start..downswing.start];
        let after_end = (downswing.end + self.params.post_downswing_hands).min(hands.len());
        let after = &hands[downswing.end..after_end];

        vpip_pct(after) - vpip_pct(before)
    }

    fn aggression_spiked(&self, hands: &[HandRecord], downswing: &Downswing) -> bool {
        let after_end = (downswing.end + self.params.post_downswing_hands).min(hands.len());
        let after = &hands[downswing.end..after_end];
        if after.is_empty() {
            return false;
        }

        let baseline = aggression_freq(hands);
        baseline > 0.0 && aggression_freq(after) > baseline * self.params.aggression_spike_ratio
    }

    /// Voluntarily playing weak cards right after losing a pot. Counts the
    /// hands that follow a significant loss; the flag fires when too many
    /// of them are weak-hand entries.
    fn weak_hand_chasing(&self, hands: &[HandRecord]) -> bool {
        let p = &self.params;
        let mut post_loss = 0usize;
        let mut chases = 0usize;

        for pair in hands.windows(2) {
            if pair[0].net_bb <= -p.chase_trigger_loss_bb {
                post_loss += 1;
                let current = &pair[1];
                if current.vpip && preflop_strength(&current.hole_cards) < p.chase_strength_cutoff {
                    chases += 1;
                }
            }
        }

        post_loss > 0 && chases as f64 / post_loss as f64 > p.chase_rate_cutoff
    }
}

fn vpip_pct(hands: &[HandRecord]) -> f64 {
    if hands.is_empty() {
        return 0.0;
    }
    hands.iter().filter(|h| h.vpip).count() as f64 / hands.len() as f64 * 100.0
}

fn aggression_freq(hands: &[HandRecord]) -> f64 {
    if hands.is_empty() {
        return 0.0;
    }
    hands.iter().filter(|h| h.aggressive).count() as f64 / hands.len() as f64
}

fn advice(level: TiltLevel) -> (&'static str, &'static [&'static str]) {
    match level {
        TiltLevel::None => (
            "No significant tilt detected.",
            &[
                "Keep focusing on decision quality over results.",
            ],
        ),
        TiltLevel::Mild => (
            "Mild tilt indicators. Stay aware of your emotional state.",
            &[
                "Take a short break if frustration builds.",
                "Re-check your session goals before continuing.",
            ],
        ),
        TiltLevel::Moderate => (
            "Moderate tilt detected. Consider stepping away.",
            &[
                "Take a 15-30 minute break before the next orbit.",
                "Set a stop-loss for the rest of the session.",
                "End the session if losses continue.",
            ],
        ),
        TiltLevel::Severe => (
            "Severe tilt detected. Stop playing now.",
            &[
                "End the session immediately.",
                "Review this session tomorrow with fresh eyes.",
                "Confirm the bankroll still supports this stake.",
            ],
        ),
    }
}
