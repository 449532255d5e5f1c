//! OpenAI Provider - Implementation of AIProvider for OpenAI's API.
//!
//! Sends the assembled reading prompt as a single user message and supports
//! streaming completions via SSE: each chunk is parsed and yielded as a
//! `StreamChunk` until the `[DONE]` marker is received.

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, Stream, StreamExt};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    StreamChunk, TokenUsage,
};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest, stream: bool) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: Some(stream),
            stream_options: stream.then_some(StreamOptions {
                include_usage: true,
            }),
        }
    }

    /// Sends a request, optionally streaming.
    async fn send_request(
        &self,
        request: &CompletionRequest,
        stream: bool,
    ) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request, stream);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AIError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(AIError::rate_limited(retry_after))
            }
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI sometimes includes "try again in Xs" in the error message.
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    /// Parses a non-streaming response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        let usage = openai_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content,
            usage,
            model: openai_response.model,
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut last_error = AIError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(&request, false).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(completion) => return Ok(completion),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    async fn stream_complete(
        &self,
        request: CompletionRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamChunk, AIError>> + Send>>, AIError> {
        let response = self.send_request(&request, true).await?;
        let response = self.handle_response_status(response).await?;

        let bytes_stream = response.bytes_stream();

        let stream = bytes_stream
            .map(|chunk_result| {
                chunk_result.map_err(|e| AIError::network(format!("Stream error: {}", e)))
            })
            .scan(SseLineBuffer::default(), |buffer, chunk_result| {
                let results = match chunk_result {
                    Ok(bytes) => buffer.push(&String::from_utf8_lossy(&bytes)),
                    Err(e) => vec![Err(e)],
                };
                future::ready(Some(results))
            })
            .flat_map(stream::iter);

        Ok(Box::pin(stream))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", self.config.model.clone()).with_streaming(true)
    }
}

/// Accumulates streamed text and parses only complete lines.
///
/// Network chunks are not aligned to SSE event boundaries; a `data:` payload
/// may arrive split across chunks. Any trailing partial line is carried over
/// and parsed once the rest of it arrives.
#[derive(Debug, Default)]
struct SseLineBuffer {
    carry: String,
}

impl SseLineBuffer {
    fn push(&mut self, text: &str) -> Vec<Result<StreamChunk, AIError>> {
        self.carry.push_str(text);

        match self.carry.rfind('\n') {
            Some(idx) => {
                let rest = self.carry.split_off(idx + 1);
                let complete = std::mem::replace(&mut self.carry, rest);
                parse_sse_chunks(&complete)
            }
            None => Vec::new(),
        }
    }
}

/// Parses SSE data chunks into StreamChunks.
fn parse_sse_chunks(text: &str) -> Vec<Result<StreamChunk, AIError>> {
    let mut results = Vec::new();

    for line in text.lines() {
        if let Some(data) = line.strip_prefix("data: ") {
            if data == "[DONE]" {
                // Usage arrives in the last data chunk, not the marker
                continue;
            }

            match serde_json::from_str::<StreamResponseChunk>(data) {
                Ok(chunk) => {
                    if let Some(choice) = chunk.choices.first() {
                        if let Some(ref content) = choice.delta.content {
                            if !content.is_empty() {
                                results.push(Ok(StreamChunk::content(content.clone())));
                            }
                        }

                        if let Some(ref reason) = choice.finish_reason {
                            let finish = match reason.as_str() {
                                "length" => FinishReason::Length,
                                "content_filter" => FinishReason::ContentFilter,
                                _ => FinishReason::Stop,
                            };

                            let usage = chunk
                                .usage
                                .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
                                .unwrap_or_default();

                            results.push(Ok(StreamChunk::final_chunk(finish, usage)));
                        }
                    }
                }
                Err(e) => {
                    if !data.trim().is_empty() {
                        results.push(Err(AIError::parse(format!(
                            "Failed to parse SSE chunk: {}",
                            e
                        ))));
                    }
                }
            }
        }
    }

    results
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_options: Option<StreamOptions>,
}

#[derive(Debug, Serialize)]
struct StreamOptions {
    include_usage: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct StreamResponseChunk {
    choices: Vec<StreamChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> Secret<String> {
        Secret::new(s.to_string())
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new(secret("test-key"))
            .with_model("gpt-4o-mini")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30))
            .with_max_retries(5);

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn request_carries_prompt_as_single_user_message() {
        use crate::domain::foundation::{ReadingId, UserId};
        use crate::ports::RequestMetadata;

        let provider = OpenAIProvider::new(OpenAIConfig::new(secret("k"))).unwrap();
        let request = CompletionRequest::new(
            "You are the NUMO Oracle...",
            RequestMetadata::new(UserId::new("u").unwrap(), ReadingId::new()),
        );

        let openai_request = provider.to_openai_request(&request, false);
        assert_eq!(openai_request.messages.len(), 1);
        assert_eq!(openai_request.messages[0].role, "user");
        assert!(openai_request.stream_options.is_none());
    }

    #[test]
    fn provider_info_reports_streaming() {
        let provider = OpenAIProvider::new(OpenAIConfig::new(secret("k"))).unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "openai");
        assert!(info.supports_streaming);
    }

    #[test]
    fn parse_sse_content_chunk() {
        let data = r#"data: {"id":"chatcmpl-123","choices":[{"delta":{"content":"The cards"},"finish_reason":null}]}"#;
        let chunks = parse_sse_chunks(data);

        assert_eq!(chunks.len(), 1);
        let chunk = chunks[0].as_ref().unwrap();
        assert_eq!(chunk.delta, "The cards");
        assert!(!chunk.is_final());
    }

    #[test]
    fn parse_sse_final_chunk() {
        let data = r#"data: {"id":"chatcmpl-123","choices":[{"delta":{},"finish_reason":"stop"}],"usage":{"prompt_tokens":10,"completion_tokens":5}}"#;
        let chunks = parse_sse_chunks(data);

        assert_eq!(chunks.len(), 1);
        let chunk = chunks[0].as_ref().unwrap();
        assert!(chunk.is_final());
        assert_eq!(chunk.finish_reason, Some(FinishReason::Stop));
        assert_eq!(chunk.usage.as_ref().unwrap().total_tokens, 15);
    }

    #[test]
    fn parse_sse_done_marker() {
        let data = "data: [DONE]\n";
        let chunks = parse_sse_chunks(data);
        assert!(chunks.is_empty());
    }

    #[test]
    fn line_buffer_joins_payload_split_across_chunks() {
        let mut buffer = SseLineBuffer::default();

        // First network chunk ends mid-JSON; nothing parseable yet.
        let chunks = buffer.push(r#"data: {"id":"chatcmpl-123","choices":[{"delta":{"con"#);
        assert!(chunks.is_empty());

        // The rest of the line arrives and the chunk parses cleanly.
        let chunks = buffer.push("tent\":\"The cards\"},\"finish_reason\":null}]}\n");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].as_ref().unwrap().delta, "The cards");
    }

    #[test]
    fn line_buffer_parses_complete_lines_and_carries_the_tail() {
        let mut buffer = SseLineBuffer::default();

        let text = concat!(
            r#"data: {"id":"c","choices":[{"delta":{"content":"A"},"finish_reason":null}]}"#,
            "\n",
            "data: {\"id\":\"c\",\"choi",
        );
        let chunks = buffer.push(text);

        // Only the complete first line is parsed; the partial second waits.
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].as_ref().unwrap().delta, "A");
        assert!(!buffer.carry.is_empty());
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit exceeded. Please try again in 30 seconds."}}"#;
        let retry = OpenAIProvider::parse_retry_after(error);
        assert_eq!(retry, 30);
    }

    #[test]
    fn parse_retry_after_default() {
        let error = r#"{"error":{"message":"Something went wrong"}}"#;
        let retry = OpenAIProvider::parse_retry_after(error);
        assert_eq!(retry, 30);
    }
}
