use thiserror::Error;

/// Why no location could be read.
///
/// Messages are shown to the user verbatim. The type is `Clone` so the
/// provider can hand out its cached outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No source is configured.
    #[error("Geolocation is not supported: no coordinates configured and IP geolocation is disabled.")]
    Unsupported,

    /// The geolocation service could not be reached or returned a non-2xx status.
    #[error("Geolocation error: {0}")]
    Http(String),

    /// The geolocation service answered but could not locate this host.
    #[error("Geolocation error: {0}")]
    Lookup(String),

    /// The service's answer was not usable as a coordinate.
    #[error("Geolocation error: invalid response: {0}")]
    InvalidResponse(String),
}
