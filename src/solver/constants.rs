use std::time::Duration;

/// Wall-clock budget a search run gets unless the caller overrides it.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Slot capacity of the `u64` used-number bitmask.
pub const MAX_SOURCE_NUMBERS: usize = 64;
