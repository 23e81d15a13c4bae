//! Wall clock.

use chrono::{DateTime, Local, NaiveDate, Utc};

use rotta_core::ports::Clock;

/// System clock. Calendar dates follow the server's local time zone so a
/// Monday-morning check-in is never filed under the previous week.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
