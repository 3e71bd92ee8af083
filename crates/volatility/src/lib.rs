//! # Railbird Volatility Model
//!
//! Fits a GARCH(1,1) conditional-variance model to a per-session P/L series
//! and classifies the current volatility regime against the series' own
//! history. This is the "how swingy is my game right now" engine.
//!
//! The fit is a maximum-likelihood search: a coarse grid over the (alpha,
//! beta) persistence parameters under variance targeting, refined by
//! shrinking-step coordinate descent. It is fully deterministic: the same
//! series always produces the same parameters.

pub mod error;
pub mod model;
pub mod report;

pub use error::VolatilityError;
pub use model::{VolatilityModel, MIN_SESSIONS};
pub use report::{GarchParams, SigmaBand, VolatilityRegime, VolatilityResult};
