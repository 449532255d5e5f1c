//! Application command and query handlers.
//!
//! Each handler wires one operation to the ports it needs. The HTTP layer
//! constructs handlers on demand from shared state.

mod calculate_profile;
mod generate_reading;
mod list_cards;
mod list_reports;
mod save_report;

pub use calculate_profile::{CalculateProfileCommand, CalculateProfileHandler};
pub use generate_reading::{
    GenerateReadingCommand, GenerateReadingHandler, GeneratedReading, StreamedReading,
};
pub use list_cards::{GetCardHandler, GetCardQuery, ListCardsHandler};
pub use list_reports::{GetReportHandler, GetReportQuery, ListReportsHandler, ListReportsQuery};
pub use save_report::{SaveReportCommand, SaveReportHandler};
