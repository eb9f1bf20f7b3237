//! Error types for famledger

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Non-finite amount in {0}")]
    NonFiniteAmount(&'static str),

    #[error("Projection overflow: {0} months")]
    ProjectionOverflow(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
