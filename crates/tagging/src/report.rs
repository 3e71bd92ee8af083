use core_types::Archetype;
use serde::{Deserialize, Serialize};

/// Secondary behavioral reads layered on top of the primary archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitTag {
    /// Rarely 3-bets despite opening; folds to pressure.
    Foldy,
    /// Calls far more than raises postflop.
    Passive,
    /// High postflop aggression regardless of entry style.
    Aggro,
    /// Habitually open-limps preflop.
    Limper,
}

/// Sample-size grade behind a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagConfidence {
    Low,
    Medium,
    High,
}

/// The classifier's verdict for one opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentTag {
    pub archetype: Archetype,
    pub traits: Vec<TraitTag>,
    /// Canned exploitation advice keyed by the archetype.
    pub note: String,
    pub confidence: TagConfidence,
    pub hands_sampled: u32,
}
