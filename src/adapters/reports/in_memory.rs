//! In-memory ReportRepository for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{DomainError, ReportId, UserId};
use crate::ports::{ReportRepository, SavedNumerologyReport};

/// In-memory implementation of ReportRepository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<Mutex<Vec<SavedNumerologyReport>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored reports.
    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// Returns true if no reports are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &SavedNumerologyReport) -> Result<(), DomainError> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SavedNumerologyReport>, DomainError> {
        let mut reports: Vec<SavedNumerologyReport> = self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();

        // Newest first
        reports.sort_by(|a, b| b.created_at.as_datetime().cmp(a.created_at.as_datetime()));
        Ok(reports)
    }

    async fn find_by_id(
        &self,
        id: &ReportId,
    ) -> Result<Option<SavedNumerologyReport>, DomainError> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::numerology::NumerologyProfile;
    use chrono::NaiveDate;

    fn sample_report(user: &str) -> SavedNumerologyReport {
        let birth_date = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
        let profile = NumerologyProfile::derive("JOHN SMITH", birth_date).unwrap();
        SavedNumerologyReport::new(UserId::new(user).unwrap(), "JOHN SMITH", birth_date, profile)
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryReportRepository::new();
        let report = sample_report("user-1");

        repo.save(&report).await.unwrap();

        let found = repo.find_by_id(&report.id).await.unwrap().unwrap();
        assert_eq!(found, report);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing() {
        let repo = InMemoryReportRepository::new();
        let found = repo.find_by_id(&ReportId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn list_for_user_filters_and_orders_newest_first() {
        let repo = InMemoryReportRepository::new();

        let first = sample_report("user-1");
        let other = sample_report("user-2");
        let second = sample_report("user-1");

        repo.save(&first).await.unwrap();
        repo.save(&other).await.unwrap();
        repo.save(&second).await.unwrap();

        let reports = repo.list_for_user(&UserId::new("user-1").unwrap()).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.user_id.as_str() == "user-1"));
        assert!(
            !reports[0].created_at.is_before(&reports[1].created_at),
            "expected newest first"
        );
    }
}
