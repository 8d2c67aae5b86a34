pub mod generator;
pub mod prompts;
pub mod response;
pub mod retry;
pub mod session;
pub mod validator;

pub use generator::MissionGenerator;
pub use retry::RetryPolicy;
pub use session::{HintOutcome, SessionService, SubmitOutcome, MAX_HINTS};
pub use validator::CommandValidator;
