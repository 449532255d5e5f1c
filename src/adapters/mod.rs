//! Adapters layer - concrete implementations of the ports.

pub mod ai;
pub mod cards;
pub mod http;
pub mod reports;
