use log::{debug, warn};

use crate::solver::constants::MAX_SOURCE_NUMBERS;
use crate::utils::errors::ValidationError;

/// Validate a search request before any work is done.
///
/// # Errors
///
/// Returns an error if the number list is empty, exceeds the used-slot
/// bitmask capacity, or if a zero match cap was supplied.
pub fn validate_search_input(
    numbers: &[i64],
    max_matches: Option<usize>,
) -> Result<(), ValidationError> {
    debug!(
        "validating {} source numbers, max_matches {:?}",
        numbers.len(),
        max_matches
    );

    if numbers.is_empty() {
        warn!("rejecting empty source number list");
        return Err(ValidationError::EmptySourceNumbers);
    }

    if numbers.len() > MAX_SOURCE_NUMBERS {
        warn!("rejecting oversized source number list: {}", numbers.len());
        return Err(ValidationError::TooManySourceNumbers {
            count: numbers.len(),
            limit: MAX_SOURCE_NUMBERS,
        });
    }

    if max_matches == Some(0) {
        warn!("rejecting zero match cap");
        return Err(ValidationError::ZeroMaxMatches);
    }

    Ok(())
}
