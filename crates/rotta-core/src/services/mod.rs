//! Pipeline services - the content scheduling and generation workflows.
//!
//! Every service receives the agency explicitly and fails fast with a typed
//! [`DomainError`]; nothing here retries.

mod agencies;
mod copywriter;
mod intake;
mod lifecycle;
mod novelty;
mod planning;
mod replication;
mod share_links;
mod slots;

#[cfg(test)]
pub(crate) mod testing;

pub use agencies::AgencyService;
pub use copywriter::{CopyRequest, Copywriter, X_MAX_CHARS, build_prompt, platform_instructions};
pub use intake::{CheckInIntake, CheckInOutcome, SubmitCheckIn};
pub use lifecycle::PostLifecycle;
pub use novelty::{Novelty, classify};
pub use planning::{ActivitySummary, PlannedPost, Planning};
pub use replication::ReplicationService;
pub use share_links::{native_share_url, whatsapp_url};
pub use slots::{available_platforms, is_available};

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Insert a new post, turning a storage unique violation into `SlotTaken`.
async fn claim_slot(posts: &dyn PostRepository, post: Post) -> Result<Post, DomainError> {
    let slot = post.slot();
    match posts.insert(post).await {
        Ok(saved) => Ok(saved),
        Err(RepoError::Duplicate(detail)) => {
            tracing::warn!(%slot, %detail, "Slot claimed concurrently");
            Err(DomainError::SlotTaken(slot))
        }
        Err(e) => Err(e.into()),
    }
}
