//! Location provider for mapfind.
//!
//! Produces a single coordinate reading per session, either from configured
//! fixed coordinates or from an IP geolocation service. The outcome, success
//! or failure, is read once and cached; there is no retry.

pub mod error;
pub mod provider;

pub use error::LocationError;
pub use provider::{LocationProvider, LocationSource};
