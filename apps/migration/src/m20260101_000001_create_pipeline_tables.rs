use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// One post per platform per day, counting only posts with copy.
const SLOT_INDEX: &str = "CREATE UNIQUE INDEX posts_agency_slot_key \
     ON posts (agency_id, scheduled_date, platform) \
     WHERE btrim(copy_text, E' \\t\\r\\n') <> ''";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agencies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Agencies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Agencies::Name).string().not_null())
                    .col(ColumnDef::new(Agencies::City).string().not_null())
                    .col(
                        ColumnDef::new(Agencies::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Agencies::PillarWho).string_len(280).null())
                    .col(ColumnDef::new(Agencies::PillarWhat).string_len(280).null())
                    .col(ColumnDef::new(Agencies::PillarWhere).string_len(280).null())
                    .col(
                        ColumnDef::new(Agencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Agencies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CheckIns::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CheckIns::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CheckIns::AgencyId).uuid().not_null())
                    .col(ColumnDef::new(CheckIns::WeekStart).date().not_null())
                    .col(ColumnDef::new(CheckIns::ResponseText).text().null())
                    .col(
                        ColumnDef::new(CheckIns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_agency")
                            .from(CheckIns::Table, CheckIns::AgencyId)
                            .to(Agencies::Table, Agencies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_check_ins_agency_week")
                    .table(CheckIns::Table)
                    .col(CheckIns::AgencyId)
                    .col(CheckIns::WeekStart)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::AgencyId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Pillar).string().not_null())
                    .col(ColumnDef::new(Posts::Platform).string_len(16).not_null())
                    .col(ColumnDef::new(Posts::ScheduledDate).date().not_null())
                    .col(ColumnDef::new(Posts::CopyText).text().not_null())
                    .col(
                        ColumnDef::new(Posts::Status)
                            .string_len(16)
                            .not_null()
                            .default("ready"),
                    )
                    .col(
                        ColumnDef::new(Posts::CopiedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Posts::WaSharedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Posts::SocialSharedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_agency")
                            .from(Posts::Table, Posts::AgencyId)
                            .to(Agencies::Table, Agencies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Partial indexes are not expressible through the index builder.
        manager
            .get_connection()
            .execute_unprepared(SLOT_INDEX)
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_agency_created")
                    .table(Posts::Table)
                    .col(Posts::AgencyId)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CheckIns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Agencies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agencies {
    Table,
    Id,
    Name,
    City,
    Description,
    PillarWho,
    PillarWhat,
    PillarWhere,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CheckIns {
    Table,
    Id,
    AgencyId,
    WeekStart,
    ResponseText,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    AgencyId,
    Pillar,
    Platform,
    ScheduledDate,
    CopyText,
    Status,
    CopiedAt,
    WaSharedAt,
    SocialSharedAt,
    CreatedAt,
}
