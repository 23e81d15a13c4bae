//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use rotta_core::domain::{CheckIn, Post};
use rotta_core::error::RepoError;
use rotta_core::ports::{AgencyRepository, CheckInRepository, PostRepository};

use super::entity::agency::Entity as AgencyEntity;
use super::entity::check_in::{self, Entity as CheckInEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL agency repository.
pub type PostgresAgencyRepository = PostgresBaseRepository<AgencyEntity>;

/// PostgreSQL check-in repository.
pub type PostgresCheckInRepository = PostgresBaseRepository<CheckInEntity>;

/// PostgreSQL post repository.
///
/// Slot uniqueness is enforced by the `posts_agency_slot_key` partial index,
/// so concurrent inserts race inside the database and the loser gets
/// `RepoError::Duplicate`.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl AgencyRepository for PostgresAgencyRepository {}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepository {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<CheckIn>, RepoError> {
        let result = CheckInEntity::find()
            .filter(check_in::Column::AgencyId.eq(agency_id))
            .order_by_desc(check_in::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(agency_id = %agency_id, "Listing posts");

        let result = PostEntity::find()
            .filter(post::Column::AgencyId.eq(agency_id))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_for_agency(
        &self,
        agency_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .filter(post::Column::AgencyId.eq(agency_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_created_since(
        &self,
        agency_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AgencyId.eq(agency_id))
            .filter(post::Column::CreatedAt.gte(since))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_for_agency(&self, agency_id: Uuid, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::AgencyId.eq(agency_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(agency_id = %agency_id, post_id = %id, "Post row deleted");
        Ok(())
    }
}
