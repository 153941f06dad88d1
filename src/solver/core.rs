use std::time::Duration;

use log::{debug, info, warn};

use crate::rpn::{self, Skeleton};
use crate::solver::constants::DEFAULT_TIME_BUDGET;
use crate::solver::deadline::SearchDeadline;
use crate::solver::errors::SolverError;
use crate::solver::generator::SkeletonGenerator;
use crate::solver::types::{SearchRequest, SearchResult};
use crate::utils::validate_search_input;

/// Brute-force search engine for the Countdown numbers game.
///
/// Enumerates every postfix arrangement of the source numbers, evaluates
/// each against the target and collects the matches, all under a
/// cooperative wall-clock budget.
pub struct Solver {
    time_budget: Duration,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }

    /// A solver whose wall-clock budget differs from the 30-second default.
    pub fn with_time_budget(time_budget: Duration) -> Self {
        Self { time_budget }
    }

    /// Run one search to completion, the match cap, or the deadline.
    ///
    /// An empty result list is a successful outcome meaning no expression
    /// reaches the target.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidInput` - the request fails validation; no
    ///   search is attempted.
    /// * `SolverError::Timeout` - the budget expired mid-search; any
    ///   accumulated matches are discarded and the run fails as a whole.
    pub fn run(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SolverError> {
        validate_search_input(&request.numbers, request.max_matches)?;

        info!(
            "searching {} source numbers for target {}",
            request.numbers.len(),
            request.target
        );

        let mut deadline = SearchDeadline::new(self.time_budget);
        let mut results: Vec<SearchResult> = Vec::new();
        let mut candidates: usize = 0;

        let generator = SkeletonGenerator::new(&request.numbers, &mut deadline, |tokens| {
            candidates += 1;

            // An evaluation error just means this candidate is not a match.
            match rpn::evaluate(tokens) {
                Ok(value) if value == request.target => match rpn::to_infix(tokens) {
                    Ok(infix) => {
                        let skeleton = Skeleton::new(tokens.to_vec());
                        debug!("match: {} = {}", skeleton, value);
                        results.push(SearchResult {
                            skeleton,
                            value,
                            infix,
                        });
                    }
                    Err(err) => warn!("skipping unrenderable match: {}", err),
                },
                Ok(_) => {}
                Err(err) => debug!("candidate rejected: {}", err),
            }

            // The collection stops growing only once its size strictly
            // exceeds the cap, so it can hold one more item than
            // max_matches. Known quirk of the original boundary, kept as-is.
            match request.max_matches {
                Some(cap) => results.len() <= cap,
                None => true,
            }
        });
        generator.run();

        if deadline.is_expired() {
            warn!(
                "deadline expired after {} candidates; discarding {} matches",
                candidates,
                results.len()
            );
            return Err(SolverError::Timeout);
        }

        info!(
            "evaluated {} candidates, found {} matches",
            candidates,
            results.len()
        );
        Ok(results)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
