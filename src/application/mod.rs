//! Application layer - orchestration between HTTP and the domain.

pub mod handlers;
