//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON file output with daily rotation
//! - Compact stderr output, kept off the gameplay stdout
//! - `RUST_LOG`-style environment filtering

pub mod logger;

pub use logger::LogHandle;
