pub mod error;
pub mod prompt;
pub mod sanitize;
pub mod service;
pub mod simulated;

pub use error::{ExplainError, MalformedReason, MalformedResponse};
pub use service::{ExplanationService, Mode, retrieve_explanation};
