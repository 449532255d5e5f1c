//! Foundation value objects and errors shared across the domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ReadingId, ReportId, UserId};
pub use timestamp::Timestamp;
