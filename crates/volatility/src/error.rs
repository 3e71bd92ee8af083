use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolatilityError {
    #[error("Not enough data: {required} sessions required, {actual} supplied")]
    InsufficientData { required: usize, actual: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error(
        "GARCH fit failed to converge (last attempted omega={omega}, alpha={alpha}, beta={beta})"
    )]
    FitFailed { omega: f64, alpha: f64, beta: f64 },
}
