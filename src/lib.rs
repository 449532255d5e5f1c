//! NUMO Oracle - Numerology and oracle card reading engine.
//!
//! This crate derives numerology profiles from names and birth dates,
//! serves the fixed 50-card oracle deck, and assembles deterministic
//! reading prompts for interpretation by a configured AI provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
