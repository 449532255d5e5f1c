//! HTTP handlers for numerology endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::str::FromStr;

use crate::application::handlers::{
    CalculateProfileCommand, CalculateProfileHandler, GetReportHandler, GetReportQuery,
    ListReportsHandler, ListReportsQuery, SaveReportCommand, SaveReportHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId};

use super::super::{ApiError, AppState, AuthenticatedUser};
use super::dto::{
    CalculateProfileRequest, ProfileResponse, ReportListResponse, ReportResponse,
};

/// POST /api/numerology - Calculate a profile without persisting it.
pub async fn calculate_profile(
    Json(request): Json<CalculateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = CalculateProfileHandler::new();
    let profile = handler.handle(CalculateProfileCommand {
        full_name: request.full_name,
        birth_date: request.birth_date,
    })?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// POST /api/numerology/reports - Derive a profile and save the snapshot.
pub async fn save_report(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CalculateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = SaveReportHandler::new(state.report_repository.clone());
    let report = handler
        .handle(SaveReportCommand {
            user_id: user.user_id,
            full_name: request.full_name,
            birth_date: request.birth_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ReportResponse::from(report))))
}

/// GET /api/numerology/reports - List the caller's saved reports.
pub async fn list_reports(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = ListReportsHandler::new(state.report_repository.clone());
    let reports = handler
        .handle(ListReportsQuery {
            user_id: user.user_id,
        })
        .await?;

    let response = ReportListResponse {
        reports: reports.into_iter().map(ReportResponse::from).collect(),
    };
    Ok(Json(response))
}

/// GET /api/numerology/reports/:id - Fetch one saved report.
pub async fn get_report(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report_id = ReportId::from_str(&id).map_err(|_| {
        DomainError::new(ErrorCode::ReportNotFound, format!("Report {} not found", id))
    })?;

    let handler = GetReportHandler::new(state.report_repository.clone());
    let report = handler.handle(GetReportQuery { report_id }).await?;

    // Reports are private to their owner.
    if report.user_id != user.user_id {
        return Err(DomainError::new(
            ErrorCode::ReportNotFound,
            format!("Report {} not found", id),
        )
        .into());
    }

    Ok(Json(ReportResponse::from(report)))
}
