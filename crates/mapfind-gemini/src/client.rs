//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Each call sends one user prompt and returns the reply's plain text.
//! Grounded calls attach the Google Maps tool and bias retrieval toward the
//! caller's coordinates.

use std::time::Duration;

use mapfind_core::{AppConfig, GeoCoordinate, DEFAULT_GEMINI_BASE_URL};
use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GoogleMaps, LatLng, Part,
    RetrievalConfig, Tool, ToolConfig,
};

/// Whether a request is grounded with map data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grounding {
    /// Plain text generation, no tools.
    None,
    /// Google Maps tool with retrieval biased to the given point.
    Maps(GeoCoordinate),
}

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidEndpoint`] if `model`
    /// does not form a valid URL.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_GEMINI_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidEndpoint`] if
    /// `base_url` and `model` do not form a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mapfind/0.1 (place-lookup)")
            .build()?;

        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| GeminiError::InvalidEndpoint {
            endpoint: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Builds a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::MissingApiKey`] if no key is configured, else
    /// see [`GeminiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;
        Self::with_base_url(
            api_key,
            &config.gemini_model,
            config.request_timeout_secs,
            &config.gemini_base_url,
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` and returns the reply text, trimmed.
    ///
    /// A candidate with no text yields an empty string; it is up to the
    /// caller's parser to decide what an empty reply means.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body does not match the expected shape.
    /// - [`GeminiError::EmptyResponse`] if the reply has no candidate.
    pub async fn generate(
        &self,
        operation: &str,
        prompt: &str,
        grounding: Grounding,
    ) -> Result<String, GeminiError> {
        let request = build_request(prompt, grounding);

        tracing::debug!(
            model = %self.model,
            operation,
            grounded = matches!(grounding, Grounding::Maps(_)),
            "Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent({operation})"),
                source: e,
            })?;

        tracing::debug!(
            operation,
            finish_reason = parsed.finish_reason().unwrap_or("unknown"),
            "Gemini generateContent response"
        );

        let text = parsed.text().ok_or_else(|| GeminiError::EmptyResponse {
            reason: parsed.block_reason(),
        })?;
        Ok(text.trim().to_owned())
    }
}

fn build_request(prompt: &str, grounding: Grounding) -> GenerateContentRequest<'_> {
    let contents = vec![Content {
        role: "user",
        parts: vec![Part { text: prompt }],
    }];

    match grounding {
        Grounding::None => GenerateContentRequest {
            contents,
            tools: Vec::new(),
            tool_config: None,
        },
        Grounding::Maps(location) => GenerateContentRequest {
            contents,
            tools: vec![Tool {
                google_maps: GoogleMaps {},
            }],
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: location.latitude,
                        longitude: location.longitude,
                    },
                },
            }),
        },
    }
}
