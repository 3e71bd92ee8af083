//! # Railbird Opponent Tagger
//!
//! A pure threshold classifier from an opponent's stat snapshot to a
//! behavioral archetype plus exploitation advice. The classifier is a
//! data-driven decision table (an ordered list of stat-range rules), so
//! every boundary is testable in isolation and priority is explicit table
//! order, not implied branch order.
//!
//! `tag` is a total function: any stats vector gets exactly one archetype
//! (falling back to `Unknown` for thin samples or profiles no rule claims).

pub mod report;
pub mod tagger;

pub use report::{OpponentTag, TagConfidence, TraitTag};
pub use tagger::OpponentTagger;
