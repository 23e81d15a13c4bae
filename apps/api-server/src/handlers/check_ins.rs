//! Weekly check-in handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use rotta_core::domain::{Pillar, Platform};
use rotta_core::services::SubmitCheckIn;
use rotta_shared::dto::{CheckInEntry, CheckInResponse, SubmitCheckInRequest};

use super::views::post_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/agencies/{agency_id}/check-ins
///
/// Always stores the answer. News also returns the generated post; a failed
/// generation or a taken slot is an error even though the check-in was kept.
pub async fn submit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<SubmitCheckInRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let request = SubmitCheckIn {
        response_text: req.response_text,
        platform: req
            .platform
            .as_deref()
            .map(Platform::parse_or_default)
            .unwrap_or_default(),
        pillar: req.pillar.as_deref().map(Pillar::from_tag),
    };

    let outcome = state.intake.submit(path.into_inner(), request).await?;

    let classification = if outcome.classification.is_news() {
        "news"
    } else {
        "no_news"
    };

    Ok(HttpResponse::Created().json(CheckInResponse {
        check_in_id: outcome.check_in.id.to_string(),
        week_start: outcome.week_start.to_string(),
        classification: classification.to_string(),
        post: outcome.post.as_ref().map(|p| post_response(p, None)),
    }))
}

/// GET /api/agencies/{agency_id}/check-ins
pub async fn history(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let agency_id = path.into_inner();
    state.agencies.get(agency_id).await?;

    let entries: Vec<CheckInEntry> = state
        .intake
        .history(agency_id)
        .await?
        .into_iter()
        .map(|c| CheckInEntry {
            id: c.id.to_string(),
            week_start: c.week_start.to_string(),
            response_text: c.response_text,
            created_at: c.created_at.to_rfc3339(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(entries))
}
