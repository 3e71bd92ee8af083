use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Not enough data: {required} hand results required, {actual} supplied")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
