//! HTTP DTOs for numerology endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::numerology::NumerologyProfile;
use crate::ports::SavedNumerologyReport;

/// Request to calculate a numerology profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateProfileRequest {
    /// Full name used for the letter-based numbers.
    pub full_name: String,
    /// Birth date in ISO 8601 (YYYY-MM-DD).
    pub birth_date: NaiveDate,
}

/// Response carrying a derived profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub life_path_number: u32,
    pub destiny_number: u32,
    pub soul_urge_number: u32,
    pub personality_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound_number: Option<u32>,
}

impl From<NumerologyProfile> for ProfileResponse {
    fn from(profile: NumerologyProfile) -> Self {
        Self {
            life_path_number: profile.life_path_number,
            destiny_number: profile.destiny_number,
            soul_urge_number: profile.soul_urge_number,
            personality_number: profile.personality_number,
            compound_number: profile.compound_number,
        }
    }
}

/// Response for a saved report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub full_name: String,
    /// Birth date in ISO 8601.
    pub birth_date: NaiveDate,
    pub profile: ProfileResponse,
    /// When the report was saved (ISO 8601).
    pub created_at: String,
}

impl From<SavedNumerologyReport> for ReportResponse {
    fn from(report: SavedNumerologyReport) -> Self {
        Self {
            id: report.id.to_string(),
            full_name: report.full_name,
            birth_date: report.birth_date,
            profile: report.profile.into(),
            created_at: report.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response listing a user's saved reports.
#[derive(Debug, Clone, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportResponse>,
}
