//! # Railbird Winrate Inference
//!
//! Bootstrap resampling over hand-level results: how sure can we be about
//! the true winrate behind an observed sample? The estimator resamples the
//! hand sequence with replacement, collects the empirical distribution of
//! resampled winrates, and reports a percentile confidence interval plus
//! the probability of long-term profitability.

pub mod bootstrap;
pub mod error;
pub mod report;

pub use bootstrap::{BootstrapEstimator, BootstrapParams, MIN_RELIABLE_HANDS};
pub use error::InferenceError;
pub use report::BootstrapResult;
