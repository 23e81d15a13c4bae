//! Domain to wire conversions.

use rotta_core::domain::{Agency, Platform, Post};
use rotta_core::services::{native_share_url, whatsapp_url};
use rotta_shared::dto::{AgencyResponse, PillarsDto, PostResponse};

pub fn agency_response(agency: &Agency) -> AgencyResponse {
    AgencyResponse {
        id: agency.id.to_string(),
        name: agency.name.clone(),
        city: agency.city.clone(),
        description: agency.description.clone(),
        pillars: agency.pillars.as_ref().map(|p| PillarsDto {
            who_we_are: p.who_we_are.clone(),
            what_we_do: p.what_we_do.clone(),
            where_we_operate: p.where_we_operate.clone(),
        }),
        has_pillars: agency.has_pillars(),
        created_at: agency.created_at.to_rfc3339(),
        updated_at: agency.updated_at.to_rfc3339(),
    }
}

pub fn platform_names(platforms: &[Platform]) -> Vec<String> {
    platforms.iter().map(|p| p.as_str().to_string()).collect()
}

pub fn post_response(post: &Post, available: Option<&[Platform]>) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        agency_id: post.agency_id.to_string(),
        pillar: post.pillar.as_str().to_string(),
        platform: post.platform.as_str().to_string(),
        scheduled_date: post.scheduled_date.to_string(),
        copy_text: post.copy_text.clone(),
        status: post.status.as_str().to_string(),
        copied_at: post.copied_at.map(|t| t.to_rfc3339()),
        wa_shared_at: post.wa_shared_at.map(|t| t.to_rfc3339()),
        social_shared_at: post.social_shared_at.map(|t| t.to_rfc3339()),
        created_at: post.created_at.to_rfc3339(),
        whatsapp_url: whatsapp_url(&post.copy_text),
        native_share_url: native_share_url(post.platform, &post.copy_text),
        available_platforms: available.map(platform_names),
    }
}
