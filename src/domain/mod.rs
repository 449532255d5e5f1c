//! Domain layer: pure, deterministic core logic.

pub mod cards;
pub mod foundation;
pub mod numerology;
pub mod reading;
