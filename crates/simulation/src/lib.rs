//! # Railbird Monte Carlo Simulator
//!
//! Bankroll trajectory simulation: given a winrate and standard deviation in
//! bb/100, project thousands of independent random walks forward and report
//! risk of ruin, percentile fan-chart bands, and Kelly bankroll sizing.
//!
//! ## Architectural Principles
//!
//! - **Stateless calculation:** `MonteCarloSimulator` holds no state; every
//!   call is a pure function of its parameters.
//! - **Reproducibility:** with an explicit seed the full trajectory matrix is
//!   identical run to run, including across different rayon thread counts,
//!   because each trajectory derives its own PRNG from the base seed.

pub mod error;
pub mod report;
pub mod simulator;

pub use error::SimulationError;
pub use report::{KellySizing, PercentileBands, SimulationResult};
pub use simulator::{MonteCarloSimulator, SimulationParams};
