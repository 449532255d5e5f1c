//! ListReportsHandler / GetReportHandler - Query handlers for saved reports.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, UserId};
use crate::ports::{ReportRepository, SavedNumerologyReport};

/// Query for a user's saved reports.
#[derive(Debug, Clone)]
pub struct ListReportsQuery {
    pub user_id: UserId,
}

/// Handler that lists a user's reports, newest first.
pub struct ListReportsHandler {
    repository: Arc<dyn ReportRepository>,
}

impl ListReportsHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListReportsQuery,
    ) -> Result<Vec<SavedNumerologyReport>, DomainError> {
        self.repository.list_for_user(&query.user_id).await
    }
}

/// Query for a single saved report.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub report_id: ReportId,
}

/// Handler that fetches one report by id.
pub struct GetReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetReportQuery,
    ) -> Result<SavedNumerologyReport, DomainError> {
        self.repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ReportNotFound,
                    format!("Report {} not found", query.report_id),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reports::InMemoryReportRepository;
    use crate::domain::numerology::NumerologyProfile;
    use crate::ports::ReportRepository as _;
    use chrono::NaiveDate;

    fn sample_report(user: &str) -> SavedNumerologyReport {
        let birth_date = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
        let profile = NumerologyProfile::derive("JOHN SMITH", birth_date).unwrap();
        SavedNumerologyReport::new(UserId::new(user).unwrap(), "JOHN SMITH", birth_date, profile)
    }

    #[tokio::test]
    async fn list_returns_only_requested_users_reports() {
        let repository = Arc::new(InMemoryReportRepository::new());
        repository.save(&sample_report("user-1")).await.unwrap();
        repository.save(&sample_report("user-2")).await.unwrap();

        let handler = ListReportsHandler::new(repository);
        let reports = handler
            .handle(ListReportsQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].user_id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn get_returns_not_found_for_missing_report() {
        let repository = Arc::new(InMemoryReportRepository::new());
        let handler = GetReportHandler::new(repository);

        let result = handler
            .handle(GetReportQuery {
                report_id: ReportId::new(),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportNotFound);
    }
}
