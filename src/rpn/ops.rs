use std::fmt;

use crate::rpn::errors::EvalError;

/// Symbol placed between tokens when a skeleton is rendered as text.
pub const TOKEN_SEPARATOR: char = ' ';

/// The four Countdown operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Every operator, in the fixed order the generator iterates them.
    /// This order determines result discovery order.
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator to two already-evaluated operands.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Division that leaves a remainder (Countdown permits only exact division)
    /// - Any operation that overflows `i64`
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            Op::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            Op::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            Op::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            Op::Div => match lhs.checked_rem(rhs) {
                None => {
                    if rhs == 0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Err(EvalError::Overflow)
                    }
                }
                Some(0) => lhs.checked_div(rhs).ok_or(EvalError::Overflow),
                Some(_) => Err(EvalError::NonIntegerQuotient),
            },
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
