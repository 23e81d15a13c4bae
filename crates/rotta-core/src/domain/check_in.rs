use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CheckIn entity - one weekly free-text answer. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub week_start: NaiveDate,
    pub response_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    /// Record a check-in. The response is trimmed and an empty answer is
    /// stored as absent.
    pub fn new(agency_id: Uuid, week_start: NaiveDate, response_text: &str) -> Self {
        let trimmed = response_text.trim();
        Self {
            id: Uuid::new_v4(),
            agency_id,
            week_start,
            response_text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            created_at: Utc::now(),
        }
    }
}

/// Monday of the ISO week containing `date`. Sunday belongs to the week that
/// started six days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
