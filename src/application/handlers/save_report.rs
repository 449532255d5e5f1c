//! SaveReportHandler - Persists a numerology profile snapshot for later review.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::numerology::NumerologyProfile;
use crate::ports::{ReportRepository, SavedNumerologyReport};

/// Command to derive and persist a numerology report.
#[derive(Debug, Clone)]
pub struct SaveReportCommand {
    pub user_id: UserId,
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// Handler that derives the profile and saves the snapshot.
pub struct SaveReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl SaveReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SaveReportCommand,
    ) -> Result<SavedNumerologyReport, DomainError> {
        let profile = NumerologyProfile::derive(&cmd.full_name, cmd.birth_date)?;

        let report =
            SavedNumerologyReport::new(cmd.user_id, cmd.full_name, cmd.birth_date, profile);

        self.repository.save(&report).await?;

        tracing::info!(
            report_id = %report.id,
            user_id = %report.user_id,
            "saved numerology report"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reports::InMemoryReportRepository;

    fn test_command() -> SaveReportCommand {
        SaveReportCommand {
            user_id: UserId::new("user-1").unwrap(),
            full_name: "JOHN SMITH".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn handler_saves_derived_report() {
        let repository = Arc::new(InMemoryReportRepository::new());
        let handler = SaveReportHandler::new(repository.clone());

        let report = handler.handle(test_command()).await.unwrap();

        assert_eq!(report.profile.life_path_number, 1);
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn handler_rejects_invalid_name() {
        let repository = Arc::new(InMemoryReportRepository::new());
        let handler = SaveReportHandler::new(repository.clone());

        let mut cmd = test_command();
        cmd.full_name = "1234".to_string();

        let result = handler.handle(cmd).await;
        assert!(result.is_err());
        assert!(repository.is_empty());
    }
}
