use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "qwen3:0.6b";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to the model server failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("the model returned an empty narration")]
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub top_k: u32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            frequency_penalty: 0.8,
            presence_penalty: 0.8,
            top_k: 30,
        }
    }
}

/// Everything the text-generation service needs for one narration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub options: SamplingOptions,
}

/// Synchronous text generation.
pub trait NarrativeService {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    options: &'a SamplingOptions,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<serde_json::Value>,
}

/// Blocking client for a local Ollama server.
///
/// Requests never time out: a slow narration blocks the turn until it arrives.
pub struct OllamaClient {
    client: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GenerationError> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    pub fn check_connection(&self) -> Result<String, GenerationError> {
        let resp: OllamaTagsResponse = self
            .client
            .get(self.url("/api/tags"))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(format!("Connected ({} models available)", resp.models.len()))
    }
}

impl NarrativeService for OllamaClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let url = self.url("/api/generate");
        debug!("POST {} model={}", url, request.model);

        let body = OllamaGenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            system: &request.system,
            options: &request.options,
            stream: false,
        };

        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()?
            .error_for_status()?
            .json::<OllamaGenerateResponse>()?;

        if resp.response.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(resp.response)
    }
}
