use chrono::{DateTime, Utc};
use core_types::{ActionKind, HandRecord, Position};
use itertools::Itertools;
use std::collections::HashMap;

/// Accumulated results for one slice of hands (a position, an action, a
/// cohort). All figures in big blinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotStats {
    pub net_bb: f64,
    pub hands: usize,
    pub first_seen: DateTime<Utc>,
}

impl SpotStats {
    pub fn winrate_bb_per_100(&self) -> f64 {
        if self.hands == 0 {
            return 0.0;
        }
        self.net_bb / self.hands as f64 * 100.0
    }
}

fn accumulate<'a>(hands: impl IntoIterator<Item = &'a HandRecord>) -> SpotStats {
    let mut net_bb = 0.0;
    let mut count = 0usize;
    let mut first_seen = DateTime::<Utc>::MAX_UTC;
    for hand in hands {
        net_bb += hand.net_bb;
        count += 1;
        first_seen = first_seen.min(hand.played_at);
    }
    SpotStats {
        net_bb,
        hands: count,
        first_seen,
    }
}

/// Hands grouped and summed by table position.
pub fn by_position(hands: &[HandRecord]) -> HashMap<Position, SpotStats> {
    hands
        .iter()
        .map(|h| (h.position, h))
        .into_group_map()
        .into_iter()
        .map(|(pos, group)| (pos, accumulate(group)))
        .collect()
}

/// Hands grouped and summed by (position, first preflop action). Hands with
/// no recorded preflop action are skipped.
pub fn by_position_action(hands: &[HandRecord]) -> HashMap<(Position, ActionKind), SpotStats> {
    hands
        .iter()
        .filter_map(|h| h.preflop_action().map(|a| ((h.position, a), h)))
        .into_group_map()
        .into_iter()
        .map(|(key, group)| (key, accumulate(group)))
        .collect()
}

/// Sums an arbitrary cohort of hands.
pub fn cohort<'a>(hands: impl IntoIterator<Item = &'a HandRecord>) -> SpotStats {
    accumulate(hands)
}
