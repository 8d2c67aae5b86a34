//! Port trait definitions (hexagonal architecture).
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - `TextGenerator`: one-shot prompt-to-text generation
//! - `ProgressStore`: durable player progress
//!
//! Services depend on these contracts, never on concrete adapters.

pub mod progress_store;
pub mod text_generator;

pub use progress_store::ProgressStore;
pub use text_generator::TextGenerator;
