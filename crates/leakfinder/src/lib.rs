//! # Railbird Leak Finder
//!
//! The one aggregator in the workspace: it consumes raw session/hand
//! records plus the *outputs* of the tilt detector and opponent tagger, and
//! produces a ranked list of leaks: concrete, negative-EV patterns with an
//! estimated bb/100 cost attached.
//!
//! Each detection rule is an independent, named computation returning typed
//! items; a pure ranking step merges them. Nothing is cached: every
//! `analyze` call recomputes from the snapshots it is handed.

pub mod error;
pub mod finder;
pub mod report;
pub mod rules;
pub mod stats;

pub use error::LeakError;
pub use finder::LeakFinder;
pub use report::{LeakAnalysis, LeakCategory, LeakItem};
