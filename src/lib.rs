//! Countdown - a brute-force solver for the Countdown numbers game
//!
//! Given a set of source numbers and a target, this library enumerates
//! every postfix (RPN) arrangement of the numbers interleaved with the four
//! arithmetic operators, evaluates each one, and collects the expressions
//! whose value equals the target.

pub mod rpn;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use rpn::{EvalError, Op, Skeleton, Token};
pub use solver::{SearchRequest, SearchResult, Solver, SolverError};
pub use utils::{ValidationError, validate_search_input};

/// Find expressions over `numbers` that evaluate to `target`.
///
/// This is a convenience function that runs a default solver (30-second
/// wall-clock budget) over a single request.
///
/// # Arguments
///
/// * `numbers` - Source numbers; each may be used at most once per expression
/// * `target` - The value the expressions must reach
/// * `max_matches` - Optional cap on collected matches (`None` = unbounded)
///
/// # Returns
///
/// * `Ok(results)` - Every match found, in discovery order; empty means no
///   expression reaches the target
/// * `Err(SolverError)` - The input was invalid or the search timed out
///
/// # Errors
///
/// This function will return an error if:
/// * The number list is empty or holds more than 64 entries
/// * `max_matches` is `Some(0)`
/// * The wall-clock budget expires before the search completes
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[1, 2, 3], 6, Some(1)) {
///     Ok(results) if !results.is_empty() => {
///         println!("Found: {} = {}", results[0].infix, results[0].value);
///     }
///     Ok(_) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(
    numbers: &[i64],
    target: i64,
    max_matches: Option<usize>,
) -> Result<Vec<SearchResult>, SolverError> {
    let request = SearchRequest {
        numbers: numbers.to_vec(),
        target,
        max_matches,
    };
    Solver::new().run(&request)
}
