//! Scan Dojo - AI-powered nmap training
//!
//! Scan Dojo turns nmap practice into a mission loop: an AI proctor
//! generates reconnaissance scenarios, judges submitted commands, simulates
//! realistic scan output, and tracks XP-based progression from fundamentals
//! to advanced red-team topics.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): missions, progress, topic rotation, and the
//!   port traits the rest of the system plugs into
//! - **Adapters** (`adapters`): the Gemini HTTP gateway, the JSON progress
//!   file store, and a scriptable mock gateway for tests
//! - **Service Layer** (`services`): prompt construction, retrying mission
//!   generation and validation, and the session controller
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use scandojo::adapters::{FileProgressStore, GeminiClient};
//! use scandojo::services::SessionService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(GeminiClient::with_defaults()?);
//!     let store = Arc::new(FileProgressStore::new(".scandojo/progress.json".into()));
//!     let mut session = SessionService::open(client, store).await;
//!     let mission = session.new_mission().await?;
//!     println!("{}", mission.title);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CommandHistory, Config, Difficulty, GatewayConfig, LevelUp, LoggingConfig, Mission, Progress,
    StorageConfig, Verdict,
};
pub use domain::ports::{ProgressStore, TextGenerator};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{HintOutcome, SessionService, SubmitOutcome};
