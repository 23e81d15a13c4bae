//! Post planning and lifecycle handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use rotta_core::domain::Platform;
use rotta_shared::dto::{ActionReport, AvailablePlatformsResponse, ReplicateRequest};

use super::client_report::ClientReport;
use super::views::{platform_names, post_response};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

type PostPath = web::Path<(Uuid, Uuid)>;

/// GET /api/agencies/{agency_id}/posts
pub async fn list(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let planned = state.planning.list(path.into_inner()).await?;
    let body: Vec<_> = planned
        .iter()
        .map(|p| post_response(&p.post, Some(&p.available_platforms)))
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/agencies/{agency_id}/posts/{post_id}
pub async fn get(state: web::Data<AppState>, path: PostPath) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let post = state.planning.get(agency_id, post_id).await?;
    Ok(HttpResponse::Ok().json(post_response(&post, None)))
}

/// GET /api/agencies/{agency_id}/posts/{post_id}/available-platforms
pub async fn available_platforms(
    state: web::Data<AppState>,
    path: PostPath,
) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let planned = state
        .planning
        .replication_targets(agency_id, post_id)
        .await?;

    Ok(HttpResponse::Ok().json(AvailablePlatformsResponse {
        scheduled_date: planned.post.scheduled_date.to_string(),
        platforms: platform_names(&planned.available_platforms),
    }))
}

/// POST /api/agencies/{agency_id}/posts/{post_id}/copy
pub async fn copy(
    state: web::Data<AppState>,
    path: PostPath,
    body: web::Json<ActionReport>,
) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let report = ClientReport::new(body.into_inner());
    let post = state.lifecycle.copy(agency_id, post_id, &report).await?;
    Ok(HttpResponse::Ok().json(post_response(&post, None)))
}

/// POST /api/agencies/{agency_id}/posts/{post_id}/share/whatsapp
pub async fn share_whatsapp(
    state: web::Data<AppState>,
    path: PostPath,
    body: web::Json<ActionReport>,
) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let report = ClientReport::new(body.into_inner());
    let post = state
        .lifecycle
        .share_whatsapp(agency_id, post_id, &report)
        .await?;
    Ok(HttpResponse::Ok().json(post_response(&post, None)))
}

/// POST /api/agencies/{agency_id}/posts/{post_id}/share/social
pub async fn share_social(
    state: web::Data<AppState>,
    path: PostPath,
    body: web::Json<ActionReport>,
) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let report = ClientReport::new(body.into_inner());
    let post = state
        .lifecycle
        .share_native(agency_id, post_id, &report)
        .await?;
    Ok(HttpResponse::Ok().json(post_response(&post, None)))
}

/// POST /api/agencies/{agency_id}/posts/{post_id}/publish
pub async fn publish(state: web::Data<AppState>, path: PostPath) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let post = state.lifecycle.confirm_published(agency_id, post_id).await?;
    Ok(HttpResponse::Ok().json(post_response(&post, None)))
}

/// POST /api/agencies/{agency_id}/posts/{post_id}/replicate
pub async fn replicate(
    state: web::Data<AppState>,
    path: PostPath,
    body: web::Json<ReplicateRequest>,
) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    let target: Platform = body
        .platform
        .parse()
        .map_err(|e: rotta_core::domain::UnknownPlatform| AppError::BadRequest(e.to_string()))?;

    let post = state
        .replication
        .replicate(agency_id, post_id, target)
        .await?;
    Ok(HttpResponse::Created().json(post_response(&post, None)))
}

/// DELETE /api/agencies/{agency_id}/posts/{post_id}
pub async fn delete(state: web::Data<AppState>, path: PostPath) -> AppResult<HttpResponse> {
    let (agency_id, post_id) = path.into_inner();
    state.lifecycle.delete(agency_id, post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
