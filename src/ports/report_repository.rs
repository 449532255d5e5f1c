//! Report Repository Port - Persistence for saved numerology reports.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ReportId, Timestamp, UserId};
use crate::domain::numerology::NumerologyProfile;

/// A persisted snapshot of a derived numerology profile, keyed by user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedNumerologyReport {
    pub id: ReportId,
    pub user_id: UserId,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub profile: NumerologyProfile,
    pub created_at: Timestamp,
}

impl SavedNumerologyReport {
    /// Creates a new report snapshot with a fresh id and timestamp.
    pub fn new(
        user_id: UserId,
        full_name: impl Into<String>,
        birth_date: NaiveDate,
        profile: NumerologyProfile,
    ) -> Self {
        Self {
            id: ReportId::new(),
            user_id,
            full_name: full_name.into(),
            birth_date,
            profile,
            created_at: Timestamp::now(),
        }
    }
}

/// Persistence port for saved numerology reports.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persists a report snapshot.
    async fn save(&self, report: &SavedNumerologyReport) -> Result<(), DomainError>;

    /// Lists a user's reports, newest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SavedNumerologyReport>, DomainError>;

    /// Fetches a single report by id.
    async fn find_by_id(&self, id: &ReportId)
        -> Result<Option<SavedNumerologyReport>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_snapshot_carries_fresh_identity() {
        let profile = NumerologyProfile::derive(
            "JOHN",
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        )
        .unwrap();

        let a = SavedNumerologyReport::new(
            UserId::new("user-1").unwrap(),
            "JOHN",
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
            profile.clone(),
        );
        let b = SavedNumerologyReport::new(
            UserId::new("user-1").unwrap(),
            "JOHN",
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
            profile,
        );

        assert_ne!(a.id, b.id);
    }
}
