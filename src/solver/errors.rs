use thiserror::Error;

use crate::utils::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Search timed out before completion")]
    Timeout,
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}
