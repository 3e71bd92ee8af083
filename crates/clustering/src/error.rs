use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusteringError {
    #[error("Not enough data: {required} qualified opponents required, {actual} available")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}
