//! # Railbird
//!
//! A quantitative analytics engine for personal poker-session review.
//!
//! Railbird is a collection of stateless computation crates: the caller
//! supplies session, hand, and opponent records, and each engine returns a
//! structured, serializable result. Persistence, visualization, and report
//! rendering live outside this workspace.
//!
//! ## Components
//!
//! - [`simulation`]: Monte Carlo bankroll trajectories, risk of ruin, Kelly sizing.
//! - [`volatility`]: GARCH(1,1) conditional-variance fit and regime classification.
//! - [`inference`]: bootstrap winrate estimation and probability of profit.
//! - [`clustering`]: PCA + k-means grouping of the opponent population.
//! - [`tilt`]: rule-based tilt scoring over a hand time series.
//! - [`tagging`]: threshold classification of opponents into archetypes.
//! - [`leakfinder`]: ranked leak detection aggregating the other engines' output.
//!
//! Every engine is a pure function over immutable snapshots: no shared state,
//! no I/O, and reproducible output whenever a seed is supplied.

pub use clustering;
pub use configuration;
pub use core_types;
pub use inference;
pub use leakfinder;
pub use simulation;
pub use tagging;
pub use tilt;
pub use volatility;
