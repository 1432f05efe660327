use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

use super::types::{SummarizeRequest, SummarizeResponse};
use super::Summarize;
use crate::chunker::DEFAULT_MAX_CHARS;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Every chunk of the chapter failed to summarize")]
    AllChunksFailed,
}

/// HTTP client for a summarization model server
pub struct SummarizerClient {
    http: Client,
    endpoint: String,
    max_input_chars: usize,
}

impl SummarizerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        // Model inference can take minutes on long chunks
        Self::with_timeout(endpoint, Duration::from_secs(180))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
            max_input_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Override the input bound the chunker must respect
    pub fn max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = chars;
        self
    }
}

impl Summarize for SummarizerClient {
    fn summarize(
        &self,
        text: &str,
        min_len: usize,
        max_len: usize,
    ) -> Result<String, AdapterError> {
        let req = SummarizeRequest {
            text: text.to_string(),
            min_length: min_len,
            max_length: max_len,
        };

        let response = self
            .http
            .post(format!("{}/summarize", self.endpoint))
            .json(&req)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AdapterError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let res: SummarizeResponse = response.json()?;
        Ok(res.summary)
    }

    fn max_input_len(&self) -> usize {
        self.max_input_chars
    }
}
