//! Test doubles for the core ports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{Agency, CheckIn, Post};
use crate::error::RepoError;
use crate::ports::{
    ActionError, AgencyRepository, BaseRepository, CheckInRepository, Clipboard, Clock,
    GenerationError, GenerationRequest, PostRepository, ShareLauncher, TextGenerator,
};

/// Monday 19 October 2026, 09:30 UTC.
pub fn monday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
}

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

enum Reply {
    Text(String),
    Fail,
    Slow(Duration, String),
}

/// Text generator that answers from a script and records every request.
pub struct ScriptedGenerator {
    reply: Reply,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(Reply::Fail)
    }

    pub fn slow(delay: Duration, text: &str) -> Self {
        Self::with(Reply::Slow(delay, text.to_string()))
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(GenerationError::Upstream("503 Service Unavailable".into())),
            Reply::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }
}

/// Clipboard and share launcher that either records or fails.
#[derive(Default)]
pub struct FakeDevice {
    pub fail: bool,
    seen: Mutex<Vec<String>>,
}

impl FakeDevice {
    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn act(&self, value: &str) -> Result<(), ActionError> {
        if self.fail {
            return Err(ActionError("permission denied".into()));
        }
        self.seen.lock().unwrap().push(value.to_string());
        Ok(())
    }
}

#[async_trait]
impl Clipboard for FakeDevice {
    async fn write_text(&self, text: &str) -> Result<(), ActionError> {
        self.act(text)
    }
}

#[async_trait]
impl ShareLauncher for FakeDevice {
    async fn open(&self, url: &str) -> Result<(), ActionError> {
        self.act(url)
    }
}

/// Minimal store honouring the slot constraint.
#[derive(Default)]
pub struct FakeStore {
    agencies: Mutex<HashMap<Uuid, Agency>>,
    check_ins: Mutex<Vec<CheckIn>>,
    posts: Mutex<Vec<Post>>,
}

impl FakeStore {
    pub fn with_agency(agency: Agency) -> Self {
        let store = Self::default();
        store.agencies.lock().unwrap().insert(agency.id, agency);
        store
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    pub fn check_ins(&self) -> Vec<CheckIn> {
        self.check_ins.lock().unwrap().clone()
    }

    pub fn seed_post(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }
}

#[async_trait]
impl BaseRepository<Agency, Uuid> for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Agency>, RepoError> {
        Ok(self.agencies.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, entity: Agency) -> Result<Agency, RepoError> {
        self.agencies
            .lock()
            .unwrap()
            .insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Agency) -> Result<Agency, RepoError> {
        self.agencies
            .lock()
            .unwrap()
            .insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.agencies
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

impl AgencyRepository for FakeStore {}

#[async_trait]
impl BaseRepository<CheckIn, Uuid> for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckIn>, RepoError> {
        Ok(self
            .check_ins
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert(&self, entity: CheckIn) -> Result<CheckIn, RepoError> {
        self.check_ins.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: CheckIn) -> Result<CheckIn, RepoError> {
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.check_ins.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl CheckInRepository for FakeStore {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<CheckIn>, RepoError> {
        Ok(self
            .check_ins()
            .into_iter()
            .filter(|c| c.agency_id == agency_id)
            .collect())
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts().into_iter().find(|p| p.id == id))
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let taken = entity.occupies_slot()
            && posts.iter().any(|p| {
                p.agency_id == entity.agency_id && p.slot() == entity.slot() && p.occupies_slot()
            });
        if taken {
            return Err(RepoError::Duplicate(entity.slot().to_string()));
        }
        posts.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let existing = posts
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *existing = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for FakeStore {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<_> = self
            .posts()
            .into_iter()
            .filter(|p| p.agency_id == agency_id)
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_for_agency(
        &self,
        agency_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts()
            .into_iter()
            .find(|p| p.id == id && p.agency_id == agency_id))
    }

    async fn find_created_since(
        &self,
        agency_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts()
            .into_iter()
            .filter(|p| p.agency_id == agency_id && p.created_at >= since)
            .collect())
    }

    async fn delete_for_agency(&self, agency_id: Uuid, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !(p.id == id && p.agency_id == agency_id));
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
