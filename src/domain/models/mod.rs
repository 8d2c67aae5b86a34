//! Domain models for the ScanDojo training system.

pub mod config;
pub mod history;
pub mod mission;
pub mod progress;
pub mod topic;
pub mod verdict;

pub use config::{Config, GatewayConfig, LoggingConfig, StorageConfig};
pub use history::{CommandHistory, MAX_COMMAND_HISTORY};
pub use mission::{Difficulty, Mission};
pub use progress::{LevelUp, Progress, MAX_LEVEL};
pub use topic::{ADVANCED_TOPICS, FUNDAMENTAL_TOPICS};
pub use verdict::Verdict;
