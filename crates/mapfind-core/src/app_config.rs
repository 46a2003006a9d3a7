use std::path::PathBuf;

use crate::place::GeoCoordinate;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IP_GEOLOCATION_URL: &str = "http://ip-api.com/json";

#[derive(Clone)]
pub struct AppConfig {
    /// Only lookups need it; listing and copying saved results do not.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
    pub results_path: PathBuf,
    /// Fixed coordinates; when set, no location lookup is made.
    pub fixed_location: Option<GeoCoordinate>,
    pub ip_geolocation: bool,
    pub ip_geolocation_url: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("results_path", &self.results_path)
            .field("fixed_location", &self.fixed_location)
            .field("ip_geolocation", &self.ip_geolocation)
            .field("ip_geolocation_url", &self.ip_geolocation_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
