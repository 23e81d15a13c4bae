//! Post entity for SeaORM.
//!
//! Pillar, platform and status are stored as their text tags. The slot
//! uniqueness lives in the partial index `posts_agency_slot_key`.

use rotta_core::domain::{Pillar, Platform, PostStatus};
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub agency_id: Uuid,
    pub pillar: String,
    pub platform: String,
    pub scheduled_date: Date,
    #[sea_orm(column_type = "Text")]
    pub copy_text: String,
    pub status: String,
    pub copied_at: Option<DateTimeWithTimeZone>,
    pub wa_shared_at: Option<DateTimeWithTimeZone>,
    pub social_shared_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agency::Entity",
        from = "Column::AgencyId",
        to = "super::agency::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Agency,
}

impl Related<super::agency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agency.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// Unknown tags fall back to the defaults rather than failing the read.
impl From<Model> for rotta_core::domain::Post {
    fn from(model: Model) -> Self {
        let status = model.status.parse::<PostStatus>().unwrap_or_else(|_| {
            tracing::warn!(post_id = %model.id, status = %model.status, "Unknown post status");
            PostStatus::default()
        });

        Self {
            id: model.id,
            agency_id: model.agency_id,
            pillar: Pillar::from_tag(&model.pillar),
            platform: Platform::parse_or_default(&model.platform),
            scheduled_date: model.scheduled_date,
            copy_text: model.copy_text,
            status,
            copied_at: model.copied_at.map(Into::into),
            wa_shared_at: model.wa_shared_at.map(Into::into),
            social_shared_at: model.social_shared_at.map(Into::into),
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<rotta_core::domain::Post> for ActiveModel {
    fn from(post: rotta_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            agency_id: Set(post.agency_id),
            pillar: Set(post.pillar.as_str().to_string()),
            platform: Set(post.platform.as_str().to_string()),
            scheduled_date: Set(post.scheduled_date),
            copy_text: Set(post.copy_text),
            status: Set(post.status.as_str().to_string()),
            copied_at: Set(post.copied_at.map(Into::into)),
            wa_shared_at: Set(post.wa_shared_at.map(Into::into)),
            social_shared_at: Set(post.social_shared_at.map(Into::into)),
            created_at: Set(post.created_at.into()),
        }
    }
}
