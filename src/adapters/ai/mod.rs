//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the supported backends.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI models (streaming via SSE)
//! - `GeminiProvider` - Google Generative AI (emulated streaming)
//!
//! The concrete provider is selected once at startup by [`build_provider`]
//! and handed to the application layer as `Arc<dyn AIProvider>`.

use std::sync::Arc;

use crate::config::{AiConfig, AiProviderKind};
use crate::ports::{AIError, AIProvider};

mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

/// Builds the AI provider selected by configuration.
///
/// # Errors
///
/// Returns `AIError::InvalidRequest` if the required API key is missing or
/// the underlying HTTP client cannot be constructed.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.provider {
        AiProviderKind::OpenAI => {
            let api_key = config.openai_api_key.clone().ok_or_else(|| {
                AIError::InvalidRequest("OpenAI API key not configured".to_string())
            })?;

            let mut provider_config = OpenAIConfig::new(api_key)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                provider_config = provider_config.with_model(model.clone());
            }

            Ok(Arc::new(OpenAIProvider::new(provider_config)?))
        }
        AiProviderKind::Gemini => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                AIError::InvalidRequest("Gemini API key not configured".to_string())
            })?;

            let mut provider_config = GeminiConfig::new(api_key)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                provider_config = provider_config.with_model(model.clone());
            }

            Ok(Arc::new(GeminiProvider::new(provider_config)?))
        }
        AiProviderKind::Mock => Ok(Arc::new(MockAIProvider::new())),
    }
}
