//! AI provider configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Google Generative AI API key
    pub gemini_api_key: Option<Secret<String>>,

    /// Selected provider
    #[serde(default = "default_provider")]
    pub provider: AiProviderKind,

    /// Model identifier override (defaults to the provider's standard model)
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    OpenAI,
    Gemini,
    /// Canned responses, for development and tests
    Mock,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            AiProviderKind::OpenAI if !self.has_openai() => {
                Err(ValidationError::MissingRequired("NUMO__AI__OPENAI_API_KEY"))
            }
            AiProviderKind::Gemini if !self.has_gemini() => {
                Err(ValidationError::MissingRequired("NUMO__AI__GEMINI_API_KEY"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            gemini_api_key: None,
            provider: default_provider(),
            model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_provider() -> AiProviderKind {
    AiProviderKind::OpenAI
}

fn default_timeout() -> u64 {
    120
}

fn default_retries() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProviderKind::OpenAI);
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_selected_provider_requires_key() {
        let config = AiConfig::default();
        assert!(config.validate().is_err());

        let config = AiConfig {
            openai_api_key: Some(Secret::new("sk-xxx".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mock_provider_needs_no_key() {
        let config = AiConfig {
            provider: AiProviderKind::Mock,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gemini_requires_gemini_key() {
        let config = AiConfig {
            provider: AiProviderKind::Gemini,
            openai_api_key: Some(Secret::new("sk-xxx".to_string())),
            ..Default::default()
        };
        match config.validate() {
            Err(ValidationError::MissingRequired(var)) => {
                assert_eq!(var, "NUMO__AI__GEMINI_API_KEY");
            }
            other => panic!("expected MissingRequired, got {:?}", other),
        }
    }
}
