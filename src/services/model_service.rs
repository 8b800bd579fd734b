use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The contract the rest of the service relies on: text in, text or failure
/// out, no guaranteed structure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerationModel: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: i32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

pub struct GeminiModelService {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiModelService {
    /// Builds the client at startup. Upstream calls must be bounded, so a
    /// client without the configured timeout is unusable and construction
    /// fails instead.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("building the HTTP client with a timeout should succeed");

        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerationModel for GeminiModelService {
    async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        let api_key = self.api_key.expose_secret();
        if api_key.is_empty() {
            log::error!("Cannot call Gemini API: API key is not configured.");
            return Err(AppError::Upstream(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.9,
                max_output_tokens: 2048,
            },
        };

        // The key travels in the query string, so reqwest errors are stripped
        // of the URL before they reach logs or response bodies.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        log::info!("Sending request to Gemini model '{}'", self.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                let err = err.without_url();
                if err.is_timeout() {
                    AppError::Upstream(format!("Gemini API call timed out: {err}"))
                } else {
                    AppError::Upstream(format!("Gemini API call failed: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            log::error!("Gemini API returned {status}: {body}");
            return Err(AppError::Upstream(format!("Gemini API returned {status}")));
        }

        let reply: GeminiResponse = response.json().await.map_err(|err| {
            AppError::Upstream(format!(
                "failed to decode Gemini response: {}",
                err.without_url()
            ))
        })?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                log::warn!("Gemini response OK but contained no text.");
                AppError::Upstream("Gemini response contained no text".to_string())
            })?;

        log::info!("Received response from Gemini API.");
        Ok(text)
    }
}
