use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which detection rule produced an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeakCategory {
    /// An entire table position bleeding money.
    Position,
    /// A specific preflop action from a specific position.
    PositionAction,
    /// The winrate gap between tilted sessions and the rest.
    TiltSpill,
    /// Bluffing opponents who do not fold.
    StationPayoff,
}

/// One ranked improvement item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakItem {
    pub category: LeakCategory,
    pub description: String,
    /// Observed winrate inside the leaking pattern, bb/100 (negative).
    pub winrate_bb_per_100: f64,
    /// Estimated cost of the pattern, bb/100 (positive magnitude). Items
    /// rank by this figure.
    pub ev_impact_bb_per_100: f64,
    pub sample_hands: usize,
    /// When the pattern was first observed; the tie-break for equal impact.
    pub first_seen: DateTime<Utc>,
    /// 1-based rank after sorting, most expensive leak first.
    pub priority: usize,
    pub recommendation: String,
}

/// The ranked outcome of one `analyze` call.
///
/// Finite and restartable: `iter` hands out a fresh pass over the ranked
/// items every time, and nothing is cached between `analyze` calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakAnalysis {
    items: Vec<LeakItem>,
}

impl LeakAnalysis {
    pub(crate) fn new(items: Vec<LeakItem>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeakItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The single most expensive leak, if any was found.
    pub fn worst(&self) -> Option<&LeakItem> {
        self.items.first()
    }
}

impl IntoIterator for LeakAnalysis {
    type Item = LeakItem;
    type IntoIter = std::vec::IntoIter<LeakItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a LeakAnalysis {
    type Item = &'a LeakItem;
    type IntoIter = std::slice::Iter<'a, LeakItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
