//! Gemini-backed place resolvers.
//!
//! Wraps the `generateContent` endpoint and turns its free-text replies into
//! structured values: phone number and address for a named place, a Japan
//! Mapcode for an address, and a short list of candidate places when a name
//! is ambiguous. Place and candidate lookups are grounded with the Google
//! Maps tool at the user's coordinates.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompts;
pub mod resolve;

mod types;

pub use client::{GeminiClient, Grounding};
pub use error::GeminiError;
pub use parse::{parse_candidates, parse_map_code, parse_place_info, PlaceInfo};
