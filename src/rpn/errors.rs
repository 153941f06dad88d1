use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder")]
    NonIntegerQuotient,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Malformed postfix sequence")]
    MalformedSkeleton,
}
