use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pillar::Pillar;
use super::platform::Platform;

/// Where a post is in its copy/publish lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Ready,
    Copied,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Ready => "ready",
            PostStatus::Copied => "copied",
            PostStatus::Published => "published",
        }
    }

    /// Copied and published posts both count as acted upon.
    pub fn is_acted_upon(&self) -> bool {
        matches!(self, PostStatus::Copied | PostStatus::Published)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(PostStatus::Ready),
            "copied" => Ok(PostStatus::Copied),
            "published" => Ok(PostStatus::Published),
            other => Err(format!("Unknown post status: {other}")),
        }
    }
}

/// The (date, platform) pair a generated post occupies on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub scheduled_date: NaiveDate,
    pub platform: Platform,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.platform, self.scheduled_date)
    }
}

/// Characters ignored when deciding whether copy is blank.
const BLANK_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Post entity - a platform-specific piece of copy scheduled on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub pillar: Pillar,
    pub platform: Platform,
    pub scheduled_date: NaiveDate,
    pub copy_text: String,
    pub status: PostStatus,
    pub copied_at: Option<DateTime<Utc>>,
    pub wa_shared_at: Option<DateTime<Utc>>,
    pub social_shared_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post in the `ready` state.
    pub fn new(
        agency_id: Uuid,
        pillar: Pillar,
        platform: Platform,
        scheduled_date: NaiveDate,
        copy_text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            agency_id,
            pillar,
            platform,
            scheduled_date,
            copy_text,
            status: PostStatus::Ready,
            copied_at: None,
            wa_shared_at: None,
            social_shared_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn slot(&self) -> Slot {
        Slot {
            scheduled_date: self.scheduled_date,
            platform: self.platform,
        }
    }

    /// Only posts with copy hold their slot. Blank means nothing but
    /// `BLANK_CHARS`, the same set the slot index strips in Postgres.
    pub fn occupies_slot(&self) -> bool {
        !self.copy_text.trim_matches(BLANK_CHARS).is_empty()
    }

    /// Record a successful clipboard copy. Repeating it re-stamps `copied_at`;
    /// a published post stays published.
    pub fn mark_copied(&mut self, at: DateTime<Utc>) {
        if self.status != PostStatus::Published {
            self.status = PostStatus::Copied;
        }
        self.copied_at = Some(at);
    }

    pub fn mark_whatsapp_shared(&mut self, at: DateTime<Utc>) {
        self.wa_shared_at = Some(at);
    }

    pub fn mark_social_shared(&mut self, at: DateTime<Utc>) {
        self.social_shared_at = Some(at);
    }

    /// External confirmation that the post went live.
    pub fn mark_published(&mut self) {
        self.status = PostStatus::Published;
    }
}
