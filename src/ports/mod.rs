//! Ports: interfaces the application layer depends on, implemented by
//! adapters.

mod ai_provider;
mod card_catalog;
mod report_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, StreamChunk, TokenUsage,
};
pub use card_catalog::CardCatalog;
pub use report_repository::{ReportRepository, SavedNumerologyReport};
