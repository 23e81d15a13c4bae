//! Agency profile handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use rotta_core::domain::AgencyPillars;
use rotta_shared::dto::{ActivityResponse, CreateAgencyRequest, PillarsDto, UpdateAgencyRequest};

use super::views::agency_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/agencies
///
/// An empty body creates the default placeholder agency. Anything else must
/// be a valid request body.
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req = parse_create_request(&body)?;

    let agency = match (req.name, req.city) {
        (None, None) => state.agencies.create_placeholder().await?,
        (Some(name), Some(city)) => {
            state
                .agencies
                .create(&name, &city, &req.description)
                .await?
        }
        _ => {
            return Err(AppError::BadRequest(
                "name and city must be given together".to_string(),
            ));
        }
    };

    Ok(HttpResponse::Created().json(agency_response(&agency)))
}

fn parse_create_request(body: &[u8]) -> AppResult<CreateAgencyRequest> {
    if body.trim_ascii().is_empty() {
        return Ok(CreateAgencyRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// GET /api/agencies/{agency_id}
pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let agency = state.agencies.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(agency_response(&agency)))
}

/// PUT /api/agencies/{agency_id}
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAgencyRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let agency = state
        .agencies
        .update_profile(path.into_inner(), &req.name, &req.city, &req.description)
        .await?;
    Ok(HttpResponse::Ok().json(agency_response(&agency)))
}

/// PUT /api/agencies/{agency_id}/pillars
pub async fn configure_pillars(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PillarsDto>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let pillars = AgencyPillars::new(&req.who_we_are, &req.what_we_do, &req.where_we_operate)?;
    let agency = state
        .agencies
        .configure_pillars(path.into_inner(), pillars)
        .await?;
    Ok(HttpResponse::Ok().json(agency_response(&agency)))
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

/// Longest window the activity summary accepts.
const MAX_ACTIVITY_DAYS: i64 = 366;

fn default_days() -> i64 {
    7
}

/// GET /api/agencies/{agency_id}/activity?days=7
pub async fn activity(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ActivityQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days;
    if !(1..=MAX_ACTIVITY_DAYS).contains(&days) {
        return Err(AppError::BadRequest(format!(
            "days must be between 1 and {MAX_ACTIVITY_DAYS}"
        )));
    }

    let summary = state
        .planning
        .recent_activity(path.into_inner(), days)
        .await?;
    Ok(HttpResponse::Ok().json(ActivityResponse {
        days,
        created: summary.created,
        acted_upon: summary.acted_upon,
    }))
}
