use chrono::{DateTime, Utc};
use services::Clock;

/// Wait until `deadline` passes on `clock`.
///
/// A fixed clock never moves, so this returns at once with whether the
/// deadline has already been reached.
pub async fn sleep_until(clock: Clock, deadline: DateTime<Utc>) -> bool {
    if clock.is_fixed() {
        return clock.now() >= deadline;
    }
    loop {
        let remaining = clock.remaining_until(deadline);
        if remaining.is_zero() {
            return true;
        }
        tokio::time::sleep(remaining).await;
    }
}
