//! Data Transfer Objects - request/response types for the API.
//!
//! Dates travel as `YYYY-MM-DD`, timestamps as RFC 3339, ids as strings.

use serde::{Deserialize, Serialize};

/// Request to create an agency.
///
/// Without name and city the default placeholder agency is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAgencyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Replacement profile for an existing agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAgencyRequest {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub description: String,
}

/// The agency's three pillar descriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarsDto {
    pub who_we_are: String,
    pub what_we_do: String,
    pub where_we_operate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyResponse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub pillars: Option<PillarsDto>,
    pub has_pillars: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// This week's check-in answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCheckInRequest {
    pub response_text: String,
    /// Defaults to `facebook`; unknown values fall back to it.
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub pillar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub check_in_id: String,
    pub week_start: String,
    /// `news` or `no_news`.
    pub classification: String,
    pub post: Option<PostResponse>,
}

/// One stored answer in an agency's check-in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInEntry {
    pub id: String,
    pub week_start: String,
    pub response_text: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub agency_id: String,
    pub pillar: String,
    pub platform: String,
    pub scheduled_date: String,
    pub copy_text: String,
    pub status: String,
    pub copied_at: Option<String>,
    pub wa_shared_at: Option<String>,
    pub social_shared_at: Option<String>,
    pub created_at: String,
    /// Deep link the client opens before reporting a WhatsApp share.
    pub whatsapp_url: String,
    /// Native composer link; absent for instagram and tiktok.
    pub native_share_url: Option<String>,
    /// Platforms still open on the post's date, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_platforms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailablePlatformsResponse {
    pub scheduled_date: String,
    pub platforms: Vec<String>,
}

/// Outcome of a clipboard or share action performed by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionReport {
    pub succeeded: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicateRequest {
    pub platform: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub days: i64,
    pub created: usize,
    pub acted_upon: usize,
}

/// Direct copy generation, as called by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub checkin_response: Option<String>,
    pub agency_name: String,
    pub agency_city: String,
    #[serde(default)]
    pub pillar: String,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub copy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_uses_front_end_names() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"checkinResponse": null, "agencyName": "Rossi", "agencyCity": "Milano", "pillar": "chi_siamo"}"#,
        )
        .unwrap();
        assert_eq!(req.agency_name, "Rossi");
        assert!(req.checkin_response.is_none());
        assert!(req.platform.is_none());
    }

    #[test]
    fn test_action_report_error_is_optional() {
        let report: ActionReport = serde_json::from_str(r#"{"succeeded": true}"#).unwrap();
        assert!(report.succeeded);
        assert!(report.error.is_none());
    }
}
