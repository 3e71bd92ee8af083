//! # Railbird Opponent Clustering
//!
//! Unsupervised grouping of the opponent population: standardize each
//! opponent's (VPIP, PFR, AF, WTSD) vector, project to two dimensions via
//! the covariance matrix's top principal components for plotting, run
//! seeded k-means in the standardized space, and label each cluster by the
//! nearest predefined archetype reference point.
//!
//! The engine always runs once enough opponents survive the per-opponent
//! hand-sample floor; below the population floor the result is merely
//! flagged low-confidence rather than refused.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::ClusteringEngine;
pub use error::ClusteringError;
pub use report::{ClusterResult, ClusterSummary, OpponentPoint};
