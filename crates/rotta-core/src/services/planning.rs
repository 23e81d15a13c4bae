//! Planning view queries: the agency's posts and what is still open.

use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slots::available_platforms;
use crate::domain::{Platform, Post};
use crate::error::DomainError;
use crate::ports::{Clock, PostRepository};

/// A post together with the platforms still free on its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedPost {
    pub post: Post,
    pub available_platforms: Vec<Platform>,
}

/// Activity counts over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub created: usize,
    /// Posts copied or published.
    pub acted_upon: usize,
}

#[derive(Clone)]
pub struct Planning {
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl Planning {
    pub fn new(posts: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { posts, clock }
    }

    /// Posts with copy, newest first, each with its open platforms.
    pub async fn list(&self, agency_id: Uuid) -> Result<Vec<PlannedPost>, DomainError> {
        let posts: Vec<Post> = self
            .posts
            .find_by_agency(agency_id)
            .await?
            .into_iter()
            .filter(Post::occupies_slot)
            .collect();

        Ok(posts
            .iter()
            .map(|post| PlannedPost {
                post: post.clone(),
                available_platforms: available_platforms(&posts, post.scheduled_date),
            })
            .collect())
    }

    pub async fn get(&self, agency_id: Uuid, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_for_agency(agency_id, post_id)
            .await?
            .filter(Post::occupies_slot)
            .ok_or_else(|| DomainError::post_not_found(post_id))
    }

    /// A post with the platforms it could still be replicated to, read from a
    /// single listing of the agency's posts.
    pub async fn replication_targets(
        &self,
        agency_id: Uuid,
        post_id: Uuid,
    ) -> Result<PlannedPost, DomainError> {
        let posts = self.posts.find_by_agency(agency_id).await?;
        let post = posts
            .iter()
            .find(|p| p.id == post_id && p.occupies_slot())
            .cloned()
            .ok_or_else(|| DomainError::post_not_found(post_id))?;
        let available_platforms = available_platforms(&posts, post.scheduled_date);
        Ok(PlannedPost {
            post,
            available_platforms,
        })
    }

    /// Posts created in the last `days` days and how many were acted upon.
    pub async fn recent_activity(
        &self,
        agency_id: Uuid,
        days: i64,
    ) -> Result<ActivitySummary, DomainError> {
        let since = Duration::try_days(days)
            .and_then(|window| self.clock.now().checked_sub_signed(window))
            .ok_or_else(|| DomainError::Validation(format!("days out of range: {days}")))?;
        let posts = self.posts.find_created_since(agency_id, since).await?;
        Ok(ActivitySummary {
            created: posts.len(),
            acted_upon: posts.iter().filter(|p| p.status.is_acted_upon()).count(),
        })
    }
}
