use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not enough data: {required} records required, {actual} supplied")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}
