use thiserror::Error;

/// Errors returned by the Gemini client and the resolvers built on it.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API returned no candidate at all, e.g. because the prompt was blocked.
    #[error("Gemini returned no candidates ({reason})")]
    EmptyResponse { reason: String },

    /// The reply did not carry both a phone number and an address.
    #[error("phone number or address not found in response")]
    IncompletePlaceInfo,

    /// No API key was configured.
    #[error("GEMINI_API_KEY is not set; lookups need a Gemini API key")]
    MissingApiKey,

    /// The configured base URL or model name does not form a valid endpoint.
    #[error("invalid Gemini endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
