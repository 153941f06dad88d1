use crate::rpn::errors::EvalError;
use crate::rpn::ops::Op;
use crate::rpn::token::Token;

fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
    }
}

// A sub-expression needs parens when it binds looser than its parent, or
// equally loose on the right of a non-commutative operator.
fn wrap(text: String, inner: Option<Op>, parent: Op, right_side: bool) -> String {
    let needs_parens = match inner {
        None => false,
        Some(inner_op) => {
            let ip = precedence(inner_op);
            let pp = precedence(parent);
            ip < pp || (ip == pp && right_side && matches!(parent, Op::Sub | Op::Div))
        }
    };

    if needs_parens {
        format!("({})", text)
    } else {
        text
    }
}

/// Render a postfix token sequence as a human-readable infix string.
///
/// # Errors
///
/// Returns an error if the sequence is not a well-formed postfix expression.
pub fn to_infix(tokens: &[Token]) -> Result<String, EvalError> {
    let mut stack: Vec<(String, Option<Op>)> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(n) => stack.push((n.to_string(), None)),
            Token::Operator(op) => {
                let (rhs, rhs_op) = stack.pop().ok_or(EvalError::MalformedSkeleton)?;
                let (lhs, lhs_op) = stack.pop().ok_or(EvalError::MalformedSkeleton)?;
                let text = format!(
                    "{} {} {}",
                    wrap(lhs, lhs_op, *op, false),
                    op,
                    wrap(rhs, rhs_op, *op, true)
                );
                stack.push((text, Some(*op)));
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some((text, _)), true) => Ok(text),
        _ => Err(EvalError::MalformedSkeleton),
    }
}
