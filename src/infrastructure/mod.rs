//! Infrastructure layer module
//!
//! This module contains the process-level wiring that the domain stays
//! unaware of:
//! - Configuration management (figment, YAML + env overrides)
//! - Logging infrastructure (tracing, rotated JSON files)
//!
//! Gateway and storage adapters satisfying the domain port traits live in
//! the `adapters` module.

pub mod config;
pub mod logging;
