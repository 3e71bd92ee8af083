use thiserror::Error;

#[derive(Error, Debug)]
pub enum TiltError {
    #[error("Not enough data: {required} hands required, {actual} supplied")]
    InsufficientData { required: usize, actual: usize },
}
