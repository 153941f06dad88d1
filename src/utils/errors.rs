use thiserror::Error;

/// Errors reported by fail-fast input validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Source number list cannot be empty")]
    EmptySourceNumbers,
    #[error("Too many source numbers: {count} (limit {limit})")]
    TooManySourceNumbers { count: usize, limit: usize },
    #[error("max_matches must be positive")]
    ZeroMaxMatches,
}
