use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time, injected so week arithmetic is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date check-ins and posts are filed under.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
