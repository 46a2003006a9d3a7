use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Failure kinds of a place lookup.
///
/// `Display` renders the message shown to the user in the error banner.
/// Callers branch on the variant, never on the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No location is available. Carries the provider's reason when known.
    #[error("{}", .0.as_deref().unwrap_or(LOCATION_FALLBACK_MESSAGE))]
    LocationUnavailable(Option<String>),

    /// The model's reply lacked a phone number or an address.
    #[error("Could not retrieve the place's phone number and address. Please try a more specific place name.")]
    IncompletePlaceInfo,

    #[error("Could not retrieve the place's phone number and address. Please try again.")]
    PlaceInfoFailed,

    #[error("Could not retrieve the Mapcode.")]
    CodeLookupFailed,

    #[error("Could not find alternative places. Please try again.")]
    AmbiguityLookupFailed,

    #[error("Could not find your place, and no alternatives were found. Please try a more specific name.")]
    NoCandidatesFound,

    #[error("A search is already in progress.")]
    SearchInProgress,

    #[error("Failed to copy: {0}")]
    ClipboardFailed(String),
}

const LOCATION_FALLBACK_MESSAGE: &str = "Could not get your location. Set MAPFIND_LATITUDE and MAPFIND_LONGITUDE or enable IP geolocation.";
