use crate::adapters::parse::parse_keyword_payload;
use crate::adapters::prompt::{build_prompt, response_schema};
use crate::domain::model::KeywordRecord;
use crate::domain::ports::{ConfigProvider, KeywordProvider};
use crate::utils::error::{KeywordError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_query};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_PREVIEW: usize = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Keyword provider backed by the Gemini `generateContent` endpoint.
///
/// One request per query: no retries, no streaming, no client-side timeout.
pub struct GeminiAdapter<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiAdapter<C> {
    /// Refuses to build without a credential.
    pub fn new(config: C) -> Result<Self> {
        if config.api_key().trim().is_empty() {
            return Err(KeywordError::MissingConfigError {
                field: "API_KEY".to_string(),
            });
        }
        validate_non_empty_string("provider.model", config.model())?;

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }

    async fn request_completion(&self, query: &str) -> Result<String> {
        let body = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": build_prompt(query) } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        let url = self.endpoint();
        tracing::debug!("Sending generateContent request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);

        let raw = response.text().await?;
        if !status.is_success() {
            return Err(KeywordError::provider(format!(
                "HTTP {}: {}",
                status,
                raw.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            )));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            KeywordError::provider(format!("undecodable response envelope: {}", e))
        })?;

        completion_text(envelope)
    }
}

fn completion_text(envelope: GenerateContentResponse) -> Result<String> {
    if let Some(reason) = envelope
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(KeywordError::provider(format!("prompt blocked: {}", reason)));
    }

    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| KeywordError::provider("response contains no candidates"))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(KeywordError::provider(format!(
            "candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

#[async_trait]
impl<C: ConfigProvider> KeywordProvider for GeminiAdapter<C> {
    async fn fetch_keywords(&self, query: &str) -> Result<Vec<KeywordRecord>> {
        let query = validate_query(query)?;

        let outcome = match self.request_completion(query).await {
            Ok(text) => parse_keyword_payload(&text),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(records) => {
                tracing::info!("Received {} keywords for '{}'", records.len(), query)
            }
            Err(e) => tracing::debug!(
                "Keyword fetch failed for '{}': {} (Category: {:?})",
                query,
                e,
                e.category()
            ),
        }
        outcome
    }
}
