// src/services/gemini.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;
use tracing::{debug, error, info};

use crate::recipes::models::StoreSource;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub premium_image_model: String,
    pub grounded_model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: "gemini-flash-lite-latest".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            premium_image_model: "imagen-4.0-generate-001".to_string(),
            grounded_model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            text_model: var("GEMINI_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: var("GEMINI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            premium_image_model: var("GEMINI_PREMIUM_IMAGE_MODEL")
                .unwrap_or(defaults.premium_image_model),
            grounded_model: var("GEMINI_GROUNDED_MODEL").unwrap_or(defaults.grounded_model),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTier {
    /// Imagen with an explicit aspect ratio
    Premium { aspect_ratio: String },
    /// Image-capable Gemini model
    Standard,
}

#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub tier: ImageTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundedAnswer {
    pub text: String,
    pub sources: Vec<StoreSource>,
}

/// The calls the gateway makes against a generative model
#[async_trait]
pub trait AiClient: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Raw JSON text constrained by `schema`
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, GeminiError>;

    /// A data URI, or None when the model returned no image
    async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, GeminiError>;

    async fn grounded_search(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<GroundedAnswer, GeminiError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    maps: Option<MapsChunk>,
}

#[derive(Debug, Deserialize)]
struct MapsChunk {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

impl GenerateContentResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let parts = &self.first_candidate()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn inline_image(&self) -> Option<String> {
        let parts = &self.first_candidate()?.content.as_ref()?.parts;
        parts.iter().find_map(|p| {
            p.inline_data.as_ref().map(|d| {
                let mime = d.mime_type.as_deref().unwrap_or("image/png");
                format!("data:{};base64,{}", mime, d.data)
            })
        })
    }

    /// Map sources with both a title and a uri
    fn map_sources(&self) -> Vec<StoreSource> {
        self.first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| {
                        let maps = chunk.maps.as_ref()?;
                        match (maps.title.as_deref(), maps.uri.as_deref()) {
                            (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => {
                                Some(StoreSource {
                                    title: title.to_string(),
                                    uri: uri.to_string(),
                                })
                            }
                            _ => None,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug)]
pub struct GeminiService {
    config: GeminiConfig,
    client: Client,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    fn api_key(&self) -> Result<&str, GeminiError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(GeminiError::NotConfigured)
    }

    /// POST `{base}/models/{model}:{method}` and decode the JSON body
    async fn call<B: Serialize, R: DeserializeOwned>(
        &self,
        model: &str,
        method: &str,
        body: &B,
    ) -> Result<R, GeminiError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            model,
            method
        );

        debug!(model = %model, method = %method, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, model = %model, error = %error_text, "Gemini API request failed");
            return Err(GeminiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AiClient for GeminiService {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, GeminiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });

        let response: GenerateContentResponse = self
            .call(&self.config.text_model, "generateContent", &body)
            .await?;

        let text = response
            .text()
            .ok_or_else(|| GeminiError::InvalidResponse("No text in response".to_string()))?;

        info!(model = %self.config.text_model, chars = text.len(), "Gemini JSON generation completed");
        Ok(text)
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, GeminiError> {
        match &request.tier {
            ImageTier::Premium { aspect_ratio } => {
                let body = json!({
                    "instances": [{ "prompt": request.prompt }],
                    "parameters": {
                        "sampleCount": 1,
                        "aspectRatio": aspect_ratio,
                        "outputOptions": { "mimeType": "image/jpeg" },
                    },
                });
                let response: PredictResponse = self
                    .call(&self.config.premium_image_model, "predict", &body)
                    .await?;

                let prediction = response.predictions.into_iter().next().ok_or_else(|| {
                    GeminiError::InvalidResponse("No predictions in response".to_string())
                })?;
                let bytes = prediction.bytes_base64_encoded.ok_or_else(|| {
                    GeminiError::InvalidResponse("No image bytes in prediction".to_string())
                })?;
                let mime = prediction.mime_type.unwrap_or_else(|| "image/jpeg".to_string());

                info!(model = %self.config.premium_image_model, aspect_ratio = %aspect_ratio, "Premium image generated");
                Ok(Some(format!("data:{};base64,{}", mime, bytes)))
            }
            ImageTier::Standard => {
                let body = json!({
                    "contents": [{ "parts": [{ "text": request.prompt }] }],
                    "generationConfig": { "responseModalities": ["IMAGE"] },
                });
                let response: GenerateContentResponse = self
                    .call(&self.config.image_model, "generateContent", &body)
                    .await?;

                let image = response.inline_image();
                info!(
                    model = %self.config.image_model,
                    has_image = image.is_some(),
                    "Standard image generation completed"
                );
                Ok(image)
            }
        }
    }

    async fn grounded_search(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<GroundedAnswer, GeminiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "tools": [{ "googleMaps": {} }],
            "toolConfig": {
                "retrievalConfig": {
                    "latLng": { "latitude": latitude, "longitude": longitude },
                },
            },
        });

        let response: GenerateContentResponse = self
            .call(&self.config.grounded_model, "generateContent", &body)
            .await?;

        let answer = GroundedAnswer {
            text: response.text().unwrap_or_default(),
            sources: response.map_sources(),
        };
        info!(
            model = %self.config.grounded_model,
            sources = answer.sources.len(),
            "Grounded search completed"
        );
        Ok(answer)
    }
}

/// Strips surrounding whitespace and a Markdown code fence, if any
pub fn clean_json_text(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn serialization_error(e: serde_json::Error) -> GeminiError {
    GeminiError::Serialization(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();
        assert_eq!(config.text_model, "gemini-flash-lite-latest");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.premium_image_model, "imagen-4.0-generate-001");
        assert_eq!(config.grounded_model, "gemini-2.5-flash");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "[{\"a\":" }, { "text": "1}]" }] } }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_inline_image_becomes_data_uri() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "here you go" },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
            ] } }]
        }))
        .unwrap();
        assert_eq!(
            response.inline_image().as_deref(),
            Some("data:image/png;base64,QUJD")
        );

        let empty = GenerateContentResponse::default();
        assert!(empty.inline_image().is_none());
        assert!(empty.text().is_none());
    }

    #[test]
    fn test_map_sources_drop_incomplete_chunks() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Try these." }] },
                "groundingMetadata": { "groundingChunks": [
                    { "maps": { "title": "Green Grocer", "uri": "https://maps.google.com/?cid=1" } },
                    { "maps": { "title": "No Link" } },
                    { "web": { "uri": "https://example.com" } }
                ] }
            }]
        }))
        .unwrap();

        assert_eq!(
            response.map_sources(),
            vec![StoreSource {
                title: "Green Grocer".to_string(),
                uri: "https://maps.google.com/?cid=1".to_string(),
            }]
        );
    }

    #[test]
    fn test_clean_json_text() {
        assert_eq!(clean_json_text("  [1]\n"), "[1]");
        assert_eq!(clean_json_text("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(clean_json_text("```\n[]\n```"), "[]");
    }

    #[tokio::test]
    async fn test_unconfigured_service_refuses_calls() {
        let service = GeminiService::new(GeminiConfig::default());
        let err = service.generate_json("hi", &json!({})).await.unwrap_err();
        assert!(matches!(err, GeminiError::NotConfigured));
    }
}
