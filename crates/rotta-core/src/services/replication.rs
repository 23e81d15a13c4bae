//! Replication workflow - clone a post's content onto another platform.

use std::sync::Arc;

use uuid::Uuid;

use super::copywriter::{CopyRequest, Copywriter};
use super::{claim_slot, slots};
use crate::domain::{Platform, Post, Slot};
use crate::error::DomainError;
use crate::ports::{AgencyRepository, PostRepository};

#[derive(Clone)]
pub struct ReplicationService {
    agencies: Arc<dyn AgencyRepository>,
    posts: Arc<dyn PostRepository>,
    copywriter: Copywriter,
}

impl ReplicationService {
    pub fn new(
        agencies: Arc<dyn AgencyRepository>,
        posts: Arc<dyn PostRepository>,
        copywriter: Copywriter,
    ) -> Self {
        Self {
            agencies,
            posts,
            copywriter,
        }
    }

    /// Generate a new `ready` post for `target` on the source's date, seeded
    /// with the source's copy. The new post is independent of the source.
    pub async fn replicate(
        &self,
        agency_id: Uuid,
        source_post_id: Uuid,
        target: Platform,
    ) -> Result<Post, DomainError> {
        let source = self
            .posts
            .find_for_agency(agency_id, source_post_id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(source_post_id))?;

        let slot = Slot {
            scheduled_date: source.scheduled_date,
            platform: target,
        };
        let existing = self.posts.find_by_agency(agency_id).await?;
        if !slots::is_available(&existing, slot.scheduled_date, target) {
            tracing::warn!(agency_id = %agency_id, %slot, "Replication target already taken");
            return Err(DomainError::SlotTaken(slot));
        }

        let agency = self
            .agencies
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| DomainError::agency_not_found(agency_id))?;

        let copy_text = self
            .copywriter
            .generate(&CopyRequest {
                seed_text: Some(source.copy_text.clone()),
                agency_name: agency.name.clone(),
                agency_city: agency.city.clone(),
                pillar: agency.pillar_brief(&source.pillar),
                platform: target,
            })
            .await?;

        let post = claim_slot(
            self.posts.as_ref(),
            Post::new(
                agency_id,
                source.pillar.clone(),
                target,
                source.scheduled_date,
                copy_text,
            ),
        )
        .await?;

        tracing::info!(
            agency_id = %agency_id,
            source_post_id = %source.id,
            post_id = %post.id,
            platform = %target,
            "Post replicated"
        );
        Ok(post)
    }
}
