//! GenerateReadingHandler - Assembles the prompt and obtains the interpretation.
//!
//! The handler stitches the deterministic prompt assembler to the configured
//! AI provider. Unresolved card ids are logged and carried through to the
//! caller; they never abort the reading.

use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;

use crate::domain::cards::{CardId, SpreadType};
use crate::domain::foundation::{DomainError, ErrorCode, ReadingId, UserId};
use crate::domain::numerology::NumerologyProfile;
use crate::domain::reading::{
    assemble_reading_prompt, DrawnCard, PromptError, ReadingRequest,
};
use crate::ports::{
    AIError, AIProvider, CardCatalog, CompletionRequest, RequestMetadata, StreamChunk, TokenUsage,
};

/// Command to generate a card reading.
#[derive(Debug, Clone)]
pub struct GenerateReadingCommand {
    pub user_id: UserId,
    pub drawn: Vec<DrawnCard>,
    pub question: String,
    pub spread: SpreadType,
    pub profile: Option<NumerologyProfile>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// A completed reading.
#[derive(Debug, Clone)]
pub struct GeneratedReading {
    pub reading_id: ReadingId,
    pub content: String,
    pub model: String,
    pub usage: TokenUsage,
    /// Card ids that had no reference data; the reading still covers them.
    pub unresolved_cards: Vec<CardId>,
}

/// A reading delivered as a stream of chunks.
pub struct StreamedReading {
    pub reading_id: ReadingId,
    pub unresolved_cards: Vec<CardId>,
    pub chunks: Pin<Box<dyn Stream<Item = Result<StreamChunk, AIError>> + Send>>,
}

/// Handler for reading generation.
pub struct GenerateReadingHandler {
    provider: Arc<dyn AIProvider>,
    catalog: Arc<dyn CardCatalog>,
}

impl GenerateReadingHandler {
    pub fn new(provider: Arc<dyn AIProvider>, catalog: Arc<dyn CardCatalog>) -> Self {
        Self { provider, catalog }
    }

    pub async fn handle(
        &self,
        cmd: GenerateReadingCommand,
    ) -> Result<GeneratedReading, DomainError> {
        let reading_id = ReadingId::new();
        let (request, unresolved_cards) = self.build_request(&cmd, reading_id)?;

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(ai_error_to_domain)?;

        tracing::info!(
            reading_id = %reading_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "generated reading"
        );

        Ok(GeneratedReading {
            reading_id,
            content: response.content,
            model: response.model,
            usage: response.usage,
            unresolved_cards,
        })
    }

    pub async fn handle_stream(
        &self,
        cmd: GenerateReadingCommand,
    ) -> Result<StreamedReading, DomainError> {
        let reading_id = ReadingId::new();
        let (request, unresolved_cards) = self.build_request(&cmd, reading_id)?;

        let chunks = self
            .provider
            .stream_complete(request)
            .await
            .map_err(ai_error_to_domain)?;

        Ok(StreamedReading {
            reading_id,
            unresolved_cards,
            chunks,
        })
    }

    fn build_request(
        &self,
        cmd: &GenerateReadingCommand,
        reading_id: ReadingId,
    ) -> Result<(CompletionRequest, Vec<CardId>), DomainError> {
        let mut reading_request =
            ReadingRequest::new(cmd.drawn.clone(), cmd.question.clone(), cmd.spread);
        if let Some(profile) = &cmd.profile {
            reading_request = reading_request.with_profile(profile.clone());
        }

        let deck = self.catalog.all_cards();
        let assembled = assemble_reading_prompt(&reading_request, &deck).map_err(|e| match e {
            PromptError::EmptyCardDraw => DomainError::new(
                ErrorCode::EmptyCardDraw,
                "At least one drawn card is required",
            ),
        })?;

        if !assembled.is_complete() {
            tracing::warn!(
                reading_id = %reading_id,
                unresolved = ?assembled.unresolved_cards,
                "reference data missing for drawn cards"
            );
        }

        let mut request = CompletionRequest::new(
            assembled.text,
            RequestMetadata::new(cmd.user_id.clone(), reading_id),
        );
        if let Some(max_tokens) = cmd.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = cmd.temperature {
            request = request.with_temperature(temperature);
        }

        Ok((request, assembled.unresolved_cards))
    }
}

/// Maps provider failures into the domain error taxonomy.
fn ai_error_to_domain(err: AIError) -> DomainError {
    let code = match err {
        AIError::RateLimited { .. } => ErrorCode::RateLimited,
        _ => ErrorCode::AIProviderError,
    };
    DomainError::new(code, err.to_string())
}
