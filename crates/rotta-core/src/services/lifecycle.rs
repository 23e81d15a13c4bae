//! Post lifecycle - copy, share, publish and delete.
//!
//! Status moves `ready -> copied`; `published` only comes from an external
//! confirmation. Share timestamps are tracked beside the status and never
//! change it. A failed clipboard or share action leaves the post untouched.

use std::sync::Arc;

use uuid::Uuid;

use super::share_links::{native_share_url, whatsapp_url};
use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::{Clipboard, Clock, PostRepository, ShareLauncher};

#[derive(Clone)]
pub struct PostLifecycle {
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl PostLifecycle {
    pub fn new(posts: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { posts, clock }
    }

    async fn load(&self, agency_id: Uuid, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_for_agency(agency_id, post_id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(post_id))
    }

    /// Copy the post text to the clipboard and mark the post `copied`.
    pub async fn copy(
        &self,
        agency_id: Uuid,
        post_id: Uuid,
        clipboard: &dyn Clipboard,
    ) -> Result<Post, DomainError> {
        let mut post = self.load(agency_id, post_id).await?;
        if !post.occupies_slot() {
            return Err(DomainError::Validation("Post has no copy".to_string()));
        }

        if let Err(e) = clipboard.write_text(&post.copy_text).await {
            tracing::warn!(post_id = %post_id, error = %e, "Clipboard write failed");
            return Err(DomainError::CopyFailed(e.to_string()));
        }

        post.mark_copied(self.clock.now());
        let saved = self.posts.update(post).await?;
        tracing::info!(post_id = %post_id, status = %saved.status, "Post copied");
        Ok(saved)
    }

    /// Open the WhatsApp share link and stamp `wa_shared_at`.
    pub async fn share_whatsapp(
        &self,
        agency_id: Uuid,
        post_id: Uuid,
        launcher: &dyn ShareLauncher,
    ) -> Result<Post, DomainError> {
        let mut post = self.load(agency_id, post_id).await?;
        let url = whatsapp_url(&post.copy_text);

        if let Err(e) = launcher.open(&url).await {
            tracing::warn!(post_id = %post_id, error = %e, "WhatsApp share failed");
            return Err(DomainError::ShareFailed(e.to_string()));
        }

        post.mark_whatsapp_shared(self.clock.now());
        Ok(self.posts.update(post).await?)
    }

    /// Open the platform's own share composer and stamp `social_shared_at`.
    /// Only facebook, x and linkedin have one.
    pub async fn share_native(
        &self,
        agency_id: Uuid,
        post_id: Uuid,
        launcher: &dyn ShareLauncher,
    ) -> Result<Post, DomainError> {
        let mut post = self.load(agency_id, post_id).await?;
        let url = native_share_url(post.platform, &post.copy_text).ok_or_else(|| {
            DomainError::Validation(format!("{} has no native share", post.platform))
        })?;

        if let Err(e) = launcher.open(&url).await {
            tracing::warn!(post_id = %post_id, error = %e, "Native share failed");
            return Err(DomainError::ShareFailed(e.to_string()));
        }

        post.mark_social_shared(self.clock.now());
        Ok(self.posts.update(post).await?)
    }

    /// Record the external confirmation that the post is live.
    pub async fn confirm_published(
        &self,
        agency_id: Uuid,
        post_id: Uuid,
    ) -> Result<Post, DomainError> {
        let mut post = self.load(agency_id, post_id).await?;
        post.mark_published();
        let saved = self.posts.update(post).await?;
        tracing::info!(post_id = %post_id, "Post published");
        Ok(saved)
    }

    /// Delete a post in any state, freeing its slot.
    pub async fn delete(&self, agency_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        match self.posts.delete_for_agency(agency_id, post_id).await {
            Ok(()) => {
                tracing::info!(agency_id = %agency_id, post_id = %post_id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::post_not_found(post_id)),
            Err(e) => Err(e.into()),
        }
    }
}
