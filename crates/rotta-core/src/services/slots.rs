//! Slot allocator - which platforms are still free on a calendar date.
//!
//! This works on a snapshot and is only a hint for the caller; the storage
//! layer enforces the slot constraint at insert time.

use chrono::NaiveDate;

use crate::domain::{Platform, Post};

/// Platforms with no post on `scheduled_date`, in canonical order.
///
/// Posts without copy do not hold a slot.
pub fn available_platforms(posts: &[Post], scheduled_date: NaiveDate) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|platform| {
            !posts.iter().any(|post| {
                post.scheduled_date == scheduled_date
                    && post.platform == *platform
                    && post.occupies_slot()
            })
        })
        .collect()
}

/// Whether `platform` is free on `scheduled_date`.
pub fn is_available(posts: &[Post], scheduled_date: NaiveDate, platform: Platform) -> bool {
    available_platforms(posts, scheduled_date).contains(&platform)
}
