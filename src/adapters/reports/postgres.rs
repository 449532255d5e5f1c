//! PostgreSQL adapter for ReportRepository.
//!
//! Reports are stored one row per snapshot; the derived profile lives in a
//! JSONB column so the schema does not chase every numerology field.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::domain::numerology::NumerologyProfile;
use crate::ports::{ReportRepository, SavedNumerologyReport};

/// PostgreSQL implementation of ReportRepository.
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_db_row(row: &sqlx::postgres::PgRow) -> Result<SavedNumerologyReport, DomainError> {
        let id: Uuid = row.get("id");
        let user_id: String = row.get("user_id");
        let full_name: String = row.get("full_name");
        let birth_date: chrono::NaiveDate = row.get("birth_date");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

        let profile: NumerologyProfile =
            serde_json::from_value(row.get("profile")).map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to deserialize profile: {}", e),
                )
            })?;

        let user_id = UserId::new(user_id)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("Invalid user ID: {}", e)))?;

        Ok(SavedNumerologyReport {
            id: ReportId::from_uuid(id),
            user_id,
            full_name,
            birth_date,
            profile,
            created_at: Timestamp::from_datetime(created_at),
        })
    }

    fn db_error(e: sqlx::Error) -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn save(&self, report: &SavedNumerologyReport) -> Result<(), DomainError> {
        let profile = serde_json::to_value(&report.profile).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize profile: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO numerology_reports (
                id, user_id, full_name, birth_date, profile, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(report.id.as_uuid())
        .bind(report.user_id.as_str())
        .bind(&report.full_name)
        .bind(report.birth_date)
        .bind(profile)
        .bind(report.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(Self::db_error)?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SavedNumerologyReport>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM numerology_reports WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error)?;

        rows.iter().map(Self::from_db_row).collect()
    }

    async fn find_by_id(
        &self,
        id: &ReportId,
    ) -> Result<Option<SavedNumerologyReport>, DomainError> {
        let row = sqlx::query("SELECT * FROM numerology_reports WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::db_error)?;

        match row {
            Some(row) => Ok(Some(Self::from_db_row(&row)?)),
            None => Ok(None),
        }
    }
}
