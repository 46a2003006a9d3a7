use std::path::PathBuf;

use crate::app_config::{
    AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_IP_GEOLOCATION_URL,
};
use crate::place::GeoCoordinate;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// A `location_override` becomes the fixed location, and `MAPFIND_LATITUDE` /
/// `MAPFIND_LONGITUDE` are then neither read nor validated.
///
/// # Errors
///
/// Returns `ConfigError` if env vars are inconsistent or values are invalid.
pub fn load_app_config(
    location_override: Option<GeoCoordinate>,
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env(location_override)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if env vars are inconsistent or values are invalid.
pub fn load_app_config_from_env(
    location_override: Option<GeoCoordinate>,
) -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), location_override)
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the real environment so tests can
/// drive them with a plain `HashMap`.
fn build_app_config<F>(
    lookup: F,
    location_override: Option<GeoCoordinate>,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(None),
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
        }
    };

    // GEMINI_API_KEY wins; API_KEY is accepted for parity with older setups.
    let gemini_api_key = lookup("GEMINI_API_KEY")
        .or_else(|_| lookup("API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty());

    let gemini_model = or_default("MAPFIND_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("MAPFIND_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let request_timeout_secs = parse_u64("MAPFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let results_path = PathBuf::from(or_default("MAPFIND_RESULTS_PATH", "./mapfind-results.json"));

    let fixed_location = match location_override {
        Some(location) => Some(location),
        None => env_fixed_location(&parse_f64)?,
    };

    let ip_geolocation = parse_bool(
        "MAPFIND_IP_GEOLOCATION",
        &or_default("MAPFIND_IP_GEOLOCATION", "true"),
    )?;
    let ip_geolocation_url =
        or_default("MAPFIND_IP_GEOLOCATION_URL", DEFAULT_IP_GEOLOCATION_URL);
    let log_level = or_default("MAPFIND_LOG_LEVEL", "warn");

    Ok(AppConfig {
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        request_timeout_secs,
        results_path,
        fixed_location,
        ip_geolocation,
        ip_geolocation_url,
        log_level,
    })
}

/// `MAPFIND_LATITUDE` and `MAPFIND_LONGITUDE`, which must be set together.
fn env_fixed_location<P>(parse_f64: &P) -> Result<Option<GeoCoordinate>, ConfigError>
where
    P: Fn(&str) -> Result<Option<f64>, ConfigError>,
{
    match (
        parse_f64("MAPFIND_LATITUDE")?,
        parse_f64("MAPFIND_LONGITUDE")?,
    ) {
        (Some(latitude), Some(longitude)) => GeoCoordinate::new(latitude, longitude)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                var: "MAPFIND_LATITUDE/MAPFIND_LONGITUDE".to_string(),
                reason: format!("({latitude}, {longitude}) is not a valid coordinate"),
            }),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::MissingEnvVar("MAPFIND_LONGITUDE".to_string())),
        (None, Some(_)) => Err(ConfigError::MissingEnvVar("MAPFIND_LATITUDE".to_string())),
    }
}

/// Parse a boolean flag. Accepts `true/false`, `1/0`, `yes/no`, `on/off`.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
