//! In-memory store - used when no database is configured.
//!
//! Implements every repository port behind async RwLocks. The post slot check
//! and insert happen under one write lock, so the uniqueness guarantee holds
//! across concurrent requests exactly as the database index does.
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use rotta_core::domain::{Agency, CheckIn, Post};
use rotta_core::error::RepoError;
use rotta_core::ports::{AgencyRepository, BaseRepository, CheckInRepository, PostRepository};

pub struct InMemoryStore {
    agencies: RwLock<HashMap<Uuid, Agency>>,
    check_ins: RwLock<HashMap<Uuid, CheckIn>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            agencies: RwLock::new(HashMap::new()),
            check_ins: RwLock::new(HashMap::new()),
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    items
}

#[async_trait]
impl BaseRepository<Agency, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Agency>, RepoError> {
        Ok(self.agencies.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Agency) -> Result<Agency, RepoError> {
        let mut agencies = self.agencies.write().await;
        if agencies.contains_key(&entity.id) {
            return Err(RepoError::Duplicate(format!("agency {}", entity.id)));
        }
        agencies.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Agency) -> Result<Agency, RepoError> {
        let mut agencies = self.agencies.write().await;
        let existing = agencies.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *existing = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.agencies
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)?;
        // Owned rows go with the agency, as the foreign keys cascade.
        self.check_ins.write().await.retain(|_, c| c.agency_id != id);
        self.posts.write().await.retain(|_, p| p.agency_id != id);
        Ok(())
    }
}

impl AgencyRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<CheckIn, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckIn>, RepoError> {
        Ok(self.check_ins.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: CheckIn) -> Result<CheckIn, RepoError> {
        if !self.agencies.read().await.contains_key(&entity.agency_id) {
            return Err(RepoError::Constraint(format!(
                "agency {} does not exist",
                entity.agency_id
            )));
        }
        self.check_ins
            .write()
            .await
            .insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: CheckIn) -> Result<CheckIn, RepoError> {
        let mut check_ins = self.check_ins.write().await;
        let existing = check_ins.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *existing = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.check_ins
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CheckInRepository for InMemoryStore {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<CheckIn>, RepoError> {
        let check_ins = self
            .check_ins
            .read()
            .await
            .values()
            .filter(|c| c.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(check_ins, |c| c.created_at))
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        if !self.agencies.read().await.contains_key(&entity.agency_id) {
            return Err(RepoError::Constraint(format!(
                "agency {} does not exist",
                entity.agency_id
            )));
        }

        // Check and claim under the same write lock.
        let mut posts = self.posts.write().await;
        let slot = entity.slot();
        let taken = entity.occupies_slot()
            && posts.values().any(|p| {
                p.agency_id == entity.agency_id && p.slot() == slot && p.occupies_slot()
            });
        if taken {
            tracing::debug!(agency_id = %entity.agency_id, %slot, "Slot already held");
            return Err(RepoError::Duplicate(slot.to_string()));
        }

        posts.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let slot = entity.slot();
        let clash = entity.occupies_slot()
            && posts.values().any(|p| {
                p.id != entity.id
                    && p.agency_id == entity.agency_id
                    && p.slot() == slot
                    && p.occupies_slot()
            });
        if clash {
            return Err(RepoError::Duplicate(slot.to_string()));
        }

        let existing = posts.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *existing = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(agency_id = %agency_id, "Listing posts");
        let posts = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(posts, |p| p.created_at))
    }

    async fn find_for_agency(
        &self,
        agency_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts
            .read()
            .await
            .get(&id)
            .filter(|p| p.agency_id == agency_id)
            .cloned())
    }

    async fn find_created_since(
        &self,
        agency_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        let posts = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.agency_id == agency_id && p.created_at >= since)
            .cloned()
            .collect();
        Ok(newest_first(posts, |p| p.created_at))
    }

    async fn delete_for_agency(&self, agency_id: Uuid, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        match posts.get(&id) {
            Some(post) if post.agency_id == agency_id => {
                posts.remove(&id);
                Ok(())
            }
            _ => Err(RepoError::NotFound),
        }
    }
}
