//! Infrastructure adapters implementing the domain ports.

pub mod gemini;
pub mod mock;
pub mod progress_file;

pub use gemini::GeminiClient;
pub use mock::{MockGenerator, MockResponse};
pub use progress_file::FileProgressStore;
