use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Agency, CheckIn, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique violations surface as `RepoError::Duplicate`.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Agency repository.
#[async_trait]
pub trait AgencyRepository: BaseRepository<Agency, Uuid> {}

/// Check-in repository.
#[async_trait]
pub trait CheckInRepository: BaseRepository<CheckIn, Uuid> {
    /// All check-ins of an agency, newest first.
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<CheckIn>, RepoError>;
}

/// Post repository.
///
/// `insert` must check and claim the `(agency_id, scheduled_date, platform)`
/// slot atomically for posts with copy, failing with `RepoError::Duplicate`
/// when another post already holds it.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts of an agency, newest first.
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// A post, only if it belongs to the agency.
    async fn find_for_agency(&self, agency_id: Uuid, id: Uuid)
    -> Result<Option<Post>, RepoError>;

    /// Posts of an agency created at or after `since`.
    async fn find_created_since(
        &self,
        agency_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError>;

    /// Delete a post only if it belongs to the agency.
    async fn delete_for_agency(&self, agency_id: Uuid, id: Uuid) -> Result<(), RepoError>;
}
