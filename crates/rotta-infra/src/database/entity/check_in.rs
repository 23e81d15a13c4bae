//! Check-in entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "check_ins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub agency_id: Uuid,
    pub week_start: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub response_text: Option<String>,
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

impl From<Model> for rotta_core::domain::CheckIn {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            agency_id: model.agency_id,
            week_start: model.week_start,
            response_text: model.response_text,
            created_at: model.created_at.into(),
        }
    }
}

impl From<rotta_core::domain::CheckIn> for ActiveModel {
    fn from(check_in: rotta_core::domain::CheckIn) -> Self {
        Self {
            id: Set(check_in.id),
            agency_id: Set(check_in.agency_id),
            week_start: Set(check_in.week_start),
            response_text: Set(check_in.response_text),
            created_at: Set(check_in.created_at.into()),
        }
    }
}
