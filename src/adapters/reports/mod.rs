//! Report Repository Adapters.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryReportRepository;
pub use postgres::PgReportRepository;
