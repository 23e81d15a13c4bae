//! Direct copy generation.

use actix_web::{HttpResponse, web};

use rotta_core::domain::Platform;
use rotta_core::services::CopyRequest;
use rotta_shared::dto::{GenerateRequest, GenerateResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/generate
///
/// Unknown platforms fall back to facebook. Nothing is stored.
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let platform = req
        .platform
        .as_deref()
        .map(Platform::parse_or_default)
        .unwrap_or_default();

    let copy = state
        .copywriter
        .generate(&CopyRequest {
            seed_text: req.checkin_response,
            agency_name: req.agency_name,
            agency_city: req.agency_city,
            pillar: req.pillar,
            platform,
        })
        .await
        .map_err(rotta_core::DomainError::from)?;

    Ok(HttpResponse::Ok().json(GenerateResponse { copy }))
}
