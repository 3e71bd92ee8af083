//! # Railbird Core Types
//!
//! The shared vocabulary of the analytics engine: session, hand, and
//! opponent records as supplied by the external store, plus the card and
//! action enums the engines interpret.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** this crate depends on nothing else in the workspace.
//!   Every engine crate depends on it.
//! - **Read-only records:** the analytics core never mutates a record.
//!   Currency fields stay `Decimal`; the engines convert to `f64` at their
//!   own boundary when they need floating-point statistics.

pub mod enums;
pub mod error;
pub mod records;
pub mod stats;

// Re-export the core types to provide a clean public API.
pub use enums::{ActionKind, Archetype, Card, Position, Rank, Street, Suit};
pub use error::CoreError;
pub use records::{
    HandRecord, OpponentRecord, OpponentStats, SessionRecord, Stakes, StreetAction,
    winrate_bb_per_100, MIN_WINRATE_HANDS,
};
