//! Shared data model, error kinds, and configuration for mapfind.

pub mod app_config;
pub mod config;
pub mod error;
pub mod place;
pub mod sheet;

pub use app_config::{
    AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_IP_GEOLOCATION_URL,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, LookupError};
pub use place::{CandidatePlace, GeoCoordinate, ResolvedPlace, ResultList, MAP_CODE_NOT_FOUND};
pub use sheet::{address_search_url, embedded_map_url, results_to_tsv, row_to_tsv};
