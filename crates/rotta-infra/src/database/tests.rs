use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use uuid::Uuid;

use rotta_core::domain::{Agency, Pillar, Platform, Post, PostStatus};
use rotta_core::error::RepoError;
use rotta_core::ports::{BaseRepository, CheckInRepository, PostRepository};

use crate::database::entity::{agency, check_in, post};
use crate::database::postgres_base::map_db_err;
use crate::database::postgres_repo::{
    PostgresAgencyRepository, PostgresCheckInRepository, PostgresPostRepository,
};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn post_model(agency_id: Uuid, platform: &str, status: &str) -> post::Model {
    post::Model {
        id: Uuid::new_v4(),
        agency_id,
        pillar: "cosa_facciamo".to_owned(),
        platform: platform.to_owned(),
        scheduled_date: monday(),
        copy_text: "Tre nuovi incarichi a Brera.".to_owned(),
        status: status.to_owned(),
        copied_at: None,
        wa_shared_at: None,
        social_shared_at: None,
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id_maps_tags() {
    let agency_id = Uuid::new_v4();
    let model = post_model(agency_id, "linkedin", "copied");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.platform, Platform::Linkedin);
    assert_eq!(post.pillar, Pillar::CosaFacciamo);
    assert_eq!(post.status, PostStatus::Copied);
}

#[test]
fn test_unknown_tags_fall_back_to_defaults() {
    let model = post_model(Uuid::new_v4(), "myspace", "archived");
    let post: Post = model.into();
    assert_eq!(post.platform, Platform::Facebook);
    assert_eq!(post.status, PostStatus::Ready);
}

#[tokio::test]
async fn test_find_by_agency_returns_all_rows() {
    let agency_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(agency_id, "x", "ready"),
            post_model(agency_id, "tiktok", "published"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.find_by_agency(agency_id).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].platform, Platform::X);
    assert_eq!(posts[1].status, PostStatus::Published);
}

#[tokio::test]
async fn test_insert_post_returns_stored_row() {
    let agency_id = Uuid::new_v4();
    let stored = post_model(agency_id, "instagram", "ready");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let domain: Post = stored.clone().into();
    let saved = repo.insert(domain).await.unwrap();

    assert_eq!(saved.id, stored.id);
    assert_eq!(saved.platform, Platform::Instagram);
}

#[tokio::test]
async fn test_delete_for_agency_without_match_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo
        .delete_for_agency(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_agency_pillars_round_trip_through_columns() {
    let now = Utc::now();
    let model = agency::Model {
        id: Uuid::new_v4(),
        name: "Immobiliare Rossi".to_owned(),
        city: "Milano".to_owned(),
        description: String::new(),
        pillar_who: Some("Tre generazioni".to_owned()),
        pillar_what: Some("Compravendite".to_owned()),
        pillar_where: Some("Brera".to_owned()),
        created_at: now.into(),
        updated_at: now.into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model.clone()]])
        .into_connection();

    let repo = PostgresAgencyRepository::new(db);
    let agency: Agency = repo.find_by_id(model.id).await.unwrap().unwrap();

    assert!(agency.has_pillars());
    assert_eq!(agency.pillar_brief(&Pillar::DoveLoFacciamo), "dove_lo_facciamo: Brera");
}

#[test]
fn test_partial_pillar_columns_mean_no_pillars() {
    let now = Utc::now();
    let model = agency::Model {
        id: Uuid::new_v4(),
        name: "Casa Blu".to_owned(),
        city: "Torino".to_owned(),
        description: String::new(),
        pillar_who: Some("Famiglia".to_owned()),
        pillar_what: None,
        pillar_where: None,
        created_at: now.into(),
        updated_at: now.into(),
    };
    let agency: Agency = model.into();
    assert!(!agency.has_pillars());
}

#[tokio::test]
async fn test_check_ins_listed_for_agency() {
    let agency_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![check_in::Model {
            id: Uuid::new_v4(),
            agency_id,
            week_start: monday(),
            response_text: None,
            created_at: Utc::now().into(),
        }]])
        .into_connection();

    let repo = PostgresCheckInRepository::new(db);
    let check_ins = repo.find_by_agency(agency_id).await.unwrap();

    assert_eq!(check_ins.len(), 1);
    assert_eq!(check_ins[0].response_text, None);
    assert_eq!(check_ins[0].week_start, monday());
}

#[test]
fn test_db_errors_map_to_repo_errors() {
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".to_owned())),
        RepoError::Query(_)
    ));
}
