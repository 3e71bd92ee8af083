use serde::{Deserialize, Serialize};

/// Severity bucket for a composite tilt score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiltLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

/// How much weight the score deserves, graded by sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiltConfidence {
    Low,
    Medium,
    High,
}

/// Which behavioral patterns fired, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltFlags {
    /// A 50-hand window lost more than the configured threshold.
    pub downswing: bool,
    /// Percentage-point VPIP change from before the first downswing to after.
    pub vpip_rise_pct: f64,
    /// VPIP rose past the configured margin (loss-chasing by widening).
    pub loss_chasing: bool,
    /// Post-downswing aggression frequency exceeded its baseline multiple.
    pub aggression_spike: bool,
    /// Too many weak hands voluntarily played right after losing pots.
    pub weak_hand_chasing: bool,
}

/// The composite tilt verdict for one hand series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltScore {
    /// 0 (stone cold) to 10 (full tilt).
    pub score: f64,
    pub level: TiltLevel,
    pub flags: TiltFlags,
    /// Number of distinct downswing windows found.
    pub episodes: usize,
    pub hands_analyzed: usize,
    pub confidence: TiltConfidence,
    pub warning: String,
    pub recommendations: Vec<String>,
}
