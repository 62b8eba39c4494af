use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::sync::atomic::AtomicU64;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to generate distinct default values such as flight numbers.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current time truncated to whole seconds.
///
/// Factory defaults use whole seconds so values read back from SQLite compare equal
/// regardless of how fractional seconds are rendered.
pub fn now_seconds() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::seconds(1)).unwrap_or(now)
}
