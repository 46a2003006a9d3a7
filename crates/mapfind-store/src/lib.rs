//! Persistent storage for the result list.
//!
//! The list lives in a single JSON file. Reads tolerate a missing or corrupt
//! file by starting empty; writes replace the file atomically so a crash
//! mid-write never leaves a truncated list behind.

pub mod error;
pub mod json_file;

pub use error::StoreError;
pub use json_file::JsonFileStore;
