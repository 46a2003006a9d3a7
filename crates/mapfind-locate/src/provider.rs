//! One-shot location reading with a cached outcome.

use std::time::Duration;

use mapfind_core::{AppConfig, GeoCoordinate};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::error::LocationError;

/// Where the session's location comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSource {
    /// Coordinates supplied up front; no network call is made.
    Fixed(GeoCoordinate),
    /// An `ip-api.com`-compatible JSON endpoint.
    IpLookup { url: String },
    /// No source; every read fails with [`LocationError::Unsupported`].
    Disabled,
}

impl LocationSource {
    /// Picks the source from configuration: fixed coordinates win over IP lookup.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        match config.fixed_location {
            Some(coordinate) => Self::Fixed(coordinate),
            None if config.ip_geolocation => Self::IpLookup {
                url: config.ip_geolocation_url.clone(),
            },
            None => Self::Disabled,
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Reads the current location at most once per instance.
pub struct LocationProvider {
    source: LocationSource,
    client: Client,
    outcome: OnceCell<Result<GeoCoordinate, LocationError>>,
}

impl LocationProvider {
    /// # Errors
    ///
    /// Returns [`LocationError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(source: LocationSource, timeout_secs: u64) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mapfind/0.1 (location)")
            .build()
            .map_err(|e| LocationError::Http(e.to_string()))?;
        Ok(Self {
            source,
            client,
            outcome: OnceCell::new(),
        })
    }

    /// # Errors
    ///
    /// See [`LocationProvider::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LocationError> {
        Self::new(
            LocationSource::from_config(config),
            config.request_timeout_secs,
        )
    }

    /// Returns the session's location, reading it on the first call only.
    ///
    /// Later calls return the cached outcome, including a cached failure.
    ///
    /// # Errors
    ///
    /// Returns the [`LocationError`] produced by the first read.
    pub async fn get_location(&self) -> Result<GeoCoordinate, LocationError> {
        self.outcome
            .get_or_init(|| async {
                let outcome = self.read().await;
                match &outcome {
                    Ok(c) => tracing::info!(
                        latitude = c.latitude,
                        longitude = c.longitude,
                        "location resolved"
                    ),
                    Err(e) => tracing::warn!(error = %e, "location unavailable"),
                }
                outcome
            })
            .await
            .clone()
    }

    /// The cached outcome, if a read has already completed.
    #[must_use]
    pub fn current(&self) -> Option<&Result<GeoCoordinate, LocationError>> {
        self.outcome.get()
    }

    async fn read(&self) -> Result<GeoCoordinate, LocationError> {
        match &self.source {
            LocationSource::Fixed(coordinate) => Ok(*coordinate),
            LocationSource::Disabled => Err(LocationError::Unsupported),
            LocationSource::IpLookup { url } => self.read_ip_lookup(url).await,
        }
    }

    async fn read_ip_lookup(&self, url: &str) -> Result<GeoCoordinate, LocationError> {
        tracing::debug!(url, "requesting IP geolocation");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| LocationError::Http(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| LocationError::Http(e.to_string()))?;
        parse_ip_api(&body)
    }
}

/// Interprets an `ip-api.com` JSON body.
fn parse_ip_api(body: &str) -> Result<GeoCoordinate, LocationError> {
    let payload: IpApiResponse = serde_json::from_str(body)
        .map_err(|e| LocationError::InvalidResponse(e.to_string()))?;

    if payload.status != "success" {
        return Err(LocationError::Lookup(
            payload
                .message
                .unwrap_or_else(|| format!("lookup status \"{}\"", payload.status)),
        ));
    }

    match (payload.lat, payload.lon) {
        (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon).ok_or_else(|| {
            LocationError::InvalidResponse(format!("({lat}, {lon}) is out of range"))
        }),
        _ => Err(LocationError::InvalidResponse(
            "missing lat/lon fields".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ip_api_success() {
        let c = parse_ip_api(r#"{"status":"success","lat":35.68,"lon":139.76}"#).unwrap();
        assert!((c.latitude - 35.68).abs() < f64::EPSILON);
        assert!((c.longitude - 139.76).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_ip_api_fail_status_surfaces_message() {
        let err = parse_ip_api(r#"{"status":"fail","message":"private range"}"#).unwrap_err();
        assert_eq!(err, LocationError::Lookup("private range".to_string()));
        assert_eq!(err.to_string(), "Geolocation error: private range");
    }

    #[test]
    fn parse_ip_api_missing_coordinates() {
        let err = parse_ip_api(r#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
    }

    #[test]
    fn parse_ip_api_rejects_garbage() {
        let err = parse_ip_api("<html>").unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
    }

    #[test]
    fn source_prefers_fixed_coordinates() {
        let config = AppConfig {
            gemini_api_key: None,
            gemini_model: "m".to_string(),
            gemini_base_url: "http://localhost".to_string(),
            request_timeout_secs: 5,
            results_path: "r.json".into(),
            fixed_location: GeoCoordinate::new(35.0, 139.0),
            ip_geolocation: true,
            ip_geolocation_url: "http://localhost/json".to_string(),
            log_level: "warn".to_string(),
        };
        assert!(matches!(
            LocationSource::from_config(&config),
            LocationSource::Fixed(_)
        ));

        let ip_only = AppConfig {
            fixed_location: None,
            ..config.clone()
        };
        assert_eq!(
            LocationSource::from_config(&ip_only),
            LocationSource::IpLookup {
                url: "http://localhost/json".to_string()
            }
        );

        let disabled = AppConfig {
            fixed_location: None,
            ip_geolocation: false,
            ..config
        };
        assert_eq!(
            LocationSource::from_config(&disabled),
            LocationSource::Disabled
        );
    }
}
