use crate::error::LeakError;
use crate::report::{LeakAnalysis, LeakItem};
use crate::rules;
use configuration::LeakParams;
use core_types::{HandRecord, SessionRecord};
use itertools::Itertools;
use tagging::OpponentTag;
use tilt::TiltScore;
use tracing::debug;
use uuid::Uuid;

/// Aggregates every detection rule into one ranked leak report.
#[derive(Debug, Clone, Default)]
pub struct LeakFinder {
    params: LeakParams,
}

impl LeakFinder {
    pub fn new(params: LeakParams) -> Self {
        Self { params }
    }

    /// Runs every detection rule over the supplied snapshots and ranks the
    /// findings by estimated bb/100 cost, most expensive first; equal-cost
    /// items order by earliest first-seen timestamp. Recomputed from
    /// scratch on every call.
    pub fn analyze(
        &self,
        sessions: &[SessionRecord],
        hands: &[HandRecord],
        opponent_tags: &[(Uuid, OpponentTag)],
        tilt_scores: &[(Uuid, TiltScore)],
    ) -> Result<LeakAnalysis, LeakError> {
        if hands.is_empty() {
            return Err(LeakError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let mut items: Vec<LeakItem> = Vec::new();
        items.extend(rules::position_leaks(hands, &self.params));
        items.extend(rules::position_action_leaks(hands, &self.params));
        items.extend(rules::tilt_spill(
            sessions,
            hands,
            tilt_scores,
            &self.params,
        ));
        items.extend(rules::station_payoff(hands, opponent_tags, &self.params));

        let mut ranked: Vec<LeakItem> = items
            .into_iter()
            .sorted_by(|a, b| {
                b.ev_impact_bb_per_100
                    .total_cmp(&a.ev_impact_bb_per_100)
                    .then_with(|| a.first_seen.cmp(&b.first_seen))
            })
            .collect();
        for (i, item) in ranked.iter_mut().enumerate() {
            item.priority = i + 1;
        }

        debug!(leaks = ranked.len(), hands = hands.len(), "leak analysis complete");

        Ok(LeakAnalysis::new(ranked))
    }
}
