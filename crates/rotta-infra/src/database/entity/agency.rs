//! Agency entity for SeaORM.

use rotta_core::domain::AgencyPillars;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "agencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub pillar_who: Option<String>,
    pub pillar_what: Option<String>,
    pub pillar_where: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIn,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIn.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Agency.
///
/// Pillars are only set when all three columns are filled.
impl From<Model> for rotta_core::domain::Agency {
    fn from(model: Model) -> Self {
        let pillars = match (model.pillar_who, model.pillar_what, model.pillar_where) {
            (Some(who_we_are), Some(what_we_do), Some(where_we_operate)) => Some(AgencyPillars {
                who_we_are,
                what_we_do,
                where_we_operate,
            }),
            _ => None,
        };

        Self {
            id: model.id,
            name: model.name,
            city: model.city,
            description: model.description,
            pillars,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Agency to SeaORM ActiveModel.
impl From<rotta_core::domain::Agency> for ActiveModel {
    fn from(agency: rotta_core::domain::Agency) -> Self {
        let (who, what, place) = match agency.pillars {
            Some(p) => (
                Some(p.who_we_are),
                Some(p.what_we_do),
                Some(p.where_we_operate),
            ),
            None => (None, None, None),
        };

        Self {
            id: Set(agency.id),
            name: Set(agency.name),
            city: Set(agency.city),
            description: Set(agency.description),
            pillar_who: Set(who),
            pillar_what: Set(what),
            pillar_where: Set(place),
            created_at: Set(agency.created_at.into()),
            updated_at: Set(agency.updated_at.into()),
        }
    }
}
