//! HTTP handlers and route configuration.

mod agencies;
mod check_ins;
mod client_report;
mod generate;
mod health;
mod posts;
mod views;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/generate", web::post().to(generate::generate))
            .route("/agencies", web::post().to(agencies::create))
            .service(
                web::scope("/agencies/{agency_id}")
                    .route("", web::get().to(agencies::get))
                    .route("", web::put().to(agencies::update_profile))
                    .route("/pillars", web::put().to(agencies::configure_pillars))
                    .route("/activity", web::get().to(agencies::activity))
                    .route("/check-ins", web::post().to(check_ins::submit))
                    .route("/check-ins", web::get().to(check_ins::history))
                    .route("/posts", web::get().to(posts::list))
                    .service(
                        web::scope("/posts/{post_id}")
                            .route("", web::get().to(posts::get))
                            .route("", web::delete().to(posts::delete))
                            .route(
                                "/available-platforms",
                                web::get().to(posts::available_platforms),
                            )
                            .route("/copy", web::post().to(posts::copy))
                            .route("/share/whatsapp", web::post().to(posts::share_whatsapp))
                            .route("/share/social", web::post().to(posts::share_social))
                            .route("/publish", web::post().to(posts::publish))
                            .route("/replicate", web::post().to(posts::replicate)),
                    ),
            ),
    );
}

/// JSON extractor config: malformed bodies become `validation_failed`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
