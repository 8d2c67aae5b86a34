//! Domain layer: models, ports, and typed errors.
//!
//! Nothing in this layer touches the network, the filesystem, or the
//! terminal; adapters implement the ports and services drive them.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
