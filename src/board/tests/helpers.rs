//! Shared test helpers for board unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a constant instant, for asserting timestamp stamping.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
