use crate::rpn::{EvalError, Op, Skeleton, Token, evaluate, to_infix};

fn num(n: i64) -> Token {
    Token::Number(n)
}

fn op(o: Op) -> Token {
    Token::Operator(o)
}

#[test]
fn test_operator_order_is_fixed() {
    assert_eq!(Op::ALL, [Op::Add, Op::Sub, Op::Mul, Op::Div]);
}

#[test]
fn test_evaluate_basic_arithmetic() {
    let result = evaluate(&[num(3), num(4), op(Op::Add)]);
    assert_eq!(result, Ok(7));

    let result = evaluate(&[num(3), num(4), op(Op::Sub)]);
    assert_eq!(result, Ok(-1));

    let result = evaluate(&[num(3), num(4), op(Op::Mul)]);
    assert_eq!(result, Ok(12));

    let result = evaluate(&[num(12), num(4), op(Op::Div)]);
    assert_eq!(result, Ok(3));
}

#[test]
fn test_evaluate_nested_expression() {
    // (25 + 50) * 4
    let tokens = [num(25), num(50), op(Op::Add), num(4), op(Op::Mul)];
    let result = evaluate(&tokens);
    assert_eq!(result, Ok(300));
}

#[test]
fn test_evaluate_single_number() {
    let result = evaluate(&[num(42)]);
    assert_eq!(result, Ok(42));
}

#[test]
fn test_evaluate_division_by_zero() {
    let result = evaluate(&[num(5), num(0), op(Op::Div)]);
    assert_eq!(result, Err(EvalError::DivisionByZero));
}

#[test]
fn test_evaluate_non_integer_quotient() {
    let result = evaluate(&[num(7), num(2), op(Op::Div)]);
    assert_eq!(result, Err(EvalError::NonIntegerQuotient));
}

#[test]
fn test_evaluate_overflow() {
    let result = evaluate(&[num(i64::MAX), num(1), op(Op::Add)]);
    assert_eq!(result, Err(EvalError::Overflow));

    let result = evaluate(&[num(i64::MIN), num(-1), op(Op::Div)]);
    assert_eq!(result, Err(EvalError::Overflow));
}

#[test]
fn test_evaluate_malformed_operator_first() {
    let result = evaluate(&[op(Op::Add), num(1), num(2)]);
    assert_eq!(result, Err(EvalError::MalformedSkeleton));
}

#[test]
fn test_evaluate_malformed_leftover_operands() {
    let result = evaluate(&[num(1), num(2)]);
    assert_eq!(result, Err(EvalError::MalformedSkeleton));
}

#[test]
fn test_evaluate_malformed_empty() {
    let result = evaluate(&[]);
    assert_eq!(result, Err(EvalError::MalformedSkeleton));
}

#[test]
fn test_to_infix_flat() {
    let result = to_infix(&[num(1), num(2), op(Op::Add)]);
    assert_eq!(result.as_deref(), Ok("1 + 2"));
}

#[test]
fn test_to_infix_parenthesizes_looser_operand() {
    // (1 + 2) * 3
    let tokens = [num(1), num(2), op(Op::Add), num(3), op(Op::Mul)];
    let result = to_infix(&tokens);
    assert_eq!(result.as_deref(), Ok("(1 + 2) * 3"));
}

#[test]
fn test_to_infix_flattens_equal_precedence_on_left() {
    // 1 + 2 + 3 needs no parens
    let tokens = [num(1), num(2), op(Op::Add), num(3), op(Op::Add)];
    let result = to_infix(&tokens);
    assert_eq!(result.as_deref(), Ok("1 + 2 + 3"));
}

#[test]
fn test_to_infix_right_side_of_subtraction() {
    // 10 - (2 + 3): the right operand of `-` keeps its parens
    let tokens = [num(10), num(2), num(3), op(Op::Add), op(Op::Sub)];
    let result = to_infix(&tokens);
    assert_eq!(result.as_deref(), Ok("10 - (2 + 3)"));
}

#[test]
fn test_to_infix_right_side_of_division() {
    // 100 / (5 * 2)
    let tokens = [num(100), num(5), num(2), op(Op::Mul), op(Op::Div)];
    let result = to_infix(&tokens);
    assert_eq!(result.as_deref(), Ok("100 / (5 * 2)"));
}

#[test]
fn test_to_infix_malformed() {
    let result = to_infix(&[num(1), op(Op::Add)]);
    assert_eq!(result, Err(EvalError::MalformedSkeleton));
}

#[test]
fn test_skeleton_display_joins_with_separator() {
    let skeleton = Skeleton::new(vec![num(25), num(50), op(Op::Add)]);
    assert_eq!(skeleton.to_string(), "25 50 +");
}

#[test]
fn test_infix_agrees_with_evaluation() {
    // ((100 + 6) * 3 * 75 - 50) / 25 = 952
    let tokens = [
        num(100),
        num(6),
        op(Op::Add),
        num(3),
        op(Op::Mul),
        num(75),
        op(Op::Mul),
        num(50),
        op(Op::Sub),
        num(25),
        op(Op::Div),
    ];
    let value = evaluate(&tokens);
    assert_eq!(value, Ok(952));

    let infix = to_infix(&tokens);
    assert_eq!(infix.as_deref(), Ok("((100 + 6) * 3 * 75 - 50) / 25"));
}
