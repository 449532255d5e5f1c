//! CalculateProfileHandler - Derives a numerology profile from name and birth date.

use chrono::NaiveDate;

use crate::domain::foundation::DomainError;
use crate::domain::numerology::NumerologyProfile;

/// Command to calculate a numerology profile.
#[derive(Debug, Clone)]
pub struct CalculateProfileCommand {
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// Handler for profile calculation.
///
/// The calculation is pure; the handler exists so the HTTP layer talks to
/// every operation through the same shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateProfileHandler;

impl CalculateProfileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CalculateProfileCommand) -> Result<NumerologyProfile, DomainError> {
        let profile = NumerologyProfile::derive(&cmd.full_name, cmd.birth_date)?;

        tracing::debug!(
            life_path = profile.life_path_number,
            destiny = profile.destiny_number,
            "derived numerology profile"
        );

        Ok(profile)
    }
}
