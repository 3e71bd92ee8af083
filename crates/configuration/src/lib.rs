//! # Railbird Configuration
//!
//! Every numeric threshold the engines apply, gathered into plain parameter
//! structs. This is a key part of dependency injection: an engine doesn't
//! load configuration, it is GIVEN its parameters. Defaults live here;
//! overrides come from whatever settings source the application uses.

pub mod settings;

pub use settings::{
    AnalyticsConfig, ArchetypeCentroid, ClusteringParams, LeakParams, RegimeParams, StatRange,
    TagRule, TaggingParams, TiltParams, TraitThresholds,
};
