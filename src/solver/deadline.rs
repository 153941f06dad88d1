use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeadlineState {
    Unset,
    Armed(Instant),
    Expired,
}

/// Cooperative wall-clock gate for one search run.
///
/// The first `check` arms the deadline and reports "not expired"; once the
/// deadline passes, the gate latches into `Expired` and never resets for
/// the lifetime of the run. The latched path answers without a time
/// syscall, so checking at every recursion frame stays cheap.
#[derive(Debug, Clone)]
pub struct SearchDeadline {
    budget: Duration,
    state: DeadlineState,
}

impl SearchDeadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            state: DeadlineState::Unset,
        }
    }

    /// Returns `true` once the budget is spent. Arms the deadline on the
    /// first call.
    pub fn check(&mut self) -> bool {
        match self.state {
            DeadlineState::Unset => {
                self.state = DeadlineState::Armed(Instant::now() + self.budget);
                false
            }
            DeadlineState::Expired => true,
            DeadlineState::Armed(deadline) => {
                if Instant::now() >= deadline {
                    self.state = DeadlineState::Expired;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Whether the gate has latched, without consulting the clock.
    pub fn is_expired(&self) -> bool {
        self.state == DeadlineState::Expired
    }
}
