//! HTTP client for the hosted summarization model.
//!
//! One POST per call, no retries. The response is classified by
//! [`classify_response`] into a summary or a [`SummarizeError`].

use reqwest::Client;
use std::future::Future;
use std::time::{Duration, Instant};

use crate::config::{resolve_key, Config, CredentialSource, SecureString};

use super::error::{ClientError, SummarizeError};
use super::response::classify_response;
use super::types::{GenerationParameters, SummarizeRequest};
use super::Summarize;

/// Client for the summarization endpoint.
pub struct SummarizerClient {
    http: Client,
    endpoint: String,
    parameters: GenerationParameters,
    max_input_chars: usize,
    api_key: SecureString,
}

impl SummarizerClient {
    /// Create a client with an already resolved API key.
    pub fn new(config: &Config, api_key: SecureString) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.endpoint.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ClientError::Http)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.url.trim().to_string(),
            parameters: GenerationParameters::from(&config.generation),
            max_input_chars: config.input.max_chars,
            api_key,
        })
    }

    /// Create a client, resolving the API key from `credentials`.
    pub fn from_source(
        config: &Config,
        credentials: &dyn CredentialSource,
    ) -> Result<Self, ClientError> {
        let api_key = resolve_key(credentials)?;
        Self::new(config, api_key)
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the input limit in characters.
    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Reject input that must not be sent.
    pub fn validate_input(&self, text: &str) -> Result<(), SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(SummarizeError::InputTooLong {
                len,
                max: self.max_input_chars,
            });
        }

        Ok(())
    }

    /// Summarize `text`.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.validate_input(text)?;

        let request = SummarizeRequest {
            inputs: text,
            parameters: self.parameters,
        };

        tracing::debug!(
            url = %self.endpoint,
            input_chars = text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = SummarizeError::from(e);
                tracing::error!(kind = err.kind(), error = %err, "Summarization request failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let err = match SummarizeError::from(e) {
                SummarizeError::Unexpected(details) => {
                    SummarizeError::Unexpected(format!("Failed to read response body: {}", details))
                }
                other => other,
            };
            tracing::error!(status = %status, kind = err.kind(), error = %err, "Summarization response unreadable");
            err
        })?;
        let latency_ms = start.elapsed().as_millis() as u64;

        match classify_response(status, &body) {
            Ok(summary) => {
                tracing::info!(
                    status = %status,
                    latency_ms,
                    summary_chars = summary.chars().count(),
                    "Summarization succeeded"
                );
                Ok(summary)
            }
            Err(err) => {
                tracing::warn!(
                    status = %status,
                    latency_ms,
                    kind = err.kind(),
                    error = %err,
                    "Summarization API error"
                );
                Err(err)
            }
        }
    }
}

impl Summarize for SummarizerClient {
    fn summarize(&self, text: &str) -> impl Future<Output = Result<String, SummarizeError>> {
        SummarizerClient::summarize(self, text)
    }
}
