use crate::rpn::Skeleton;

/// Immutable input of one search run.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Source numbers; duplicates allowed. The input order fixes the
    /// enumeration order but does not affect which targets are reachable.
    pub numbers: Vec<i64>,
    pub target: i64,
    /// Stop collecting shortly after this many matches (`None` = unbounded).
    pub max_matches: Option<usize>,
}

impl SearchRequest {
    pub fn new(numbers: Vec<i64>, target: i64) -> Self {
        Self {
            numbers,
            target,
            max_matches: None,
        }
    }

    #[must_use]
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = Some(max_matches);
        self
    }
}

/// One expression whose value equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub skeleton: Skeleton,
    pub value: i64,
    pub infix: String,
}
