use log::debug;

use crate::rpn::errors::EvalError;
use crate::rpn::token::Token;

/// Evaluate a postfix token sequence with a single value stack.
///
/// # Errors
///
/// Returns an error when the sequence is not a well-formed postfix
/// expression (stack underflow, or more than one value left at the end),
/// or when an operator application fails one of the Countdown domain
/// rules: division by zero, division with a remainder, `i64` overflow.
pub fn evaluate(tokens: &[Token]) -> Result<i64, EvalError> {
    let mut stack: Vec<i64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Operator(op) => {
                let rhs = stack.pop().ok_or(EvalError::MalformedSkeleton)?;
                let lhs = stack.pop().ok_or(EvalError::MalformedSkeleton)?;
                stack.push(op.apply(lhs, rhs)?);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => {
            debug!("postfix sequence left the stack unbalanced");
            Err(EvalError::MalformedSkeleton)
        }
    }
}
