use core_types::Archetype;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One opponent's position in the 2-D principal-component projection,
/// with their cluster assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentPoint {
    pub opponent_id: Uuid,
    pub name: String,
    /// First principal component.
    pub x: f64,
    /// Second principal component.
    pub y: f64,
    pub cluster: usize,
}

/// Summary of one k-means cluster in original stat space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: usize,
    pub size: usize,
    pub mean_vpip_pct: f64,
    pub mean_pfr_pct: f64,
    pub mean_aggression_factor: f64,
    pub mean_wtsd_pct: f64,
    /// The predefined archetype whose reference point sits closest to this
    /// cluster's centroid.
    pub archetype: Archetype,
}

/// The full output of a population clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub points: Vec<OpponentPoint>,
    pub clusters: Vec<ClusterSummary>,
    pub k: usize,
    /// Opponents dropped for not meeting the per-opponent hand floor.
    pub excluded: usize,
    /// Fraction of total variance the two plotted components carry.
    pub explained_variance: f64,
    /// Set when the surviving population is below the documented floor;
    /// clusters are still produced but archetype reads are weak.
    pub low_confidence: bool,
}
