pub mod language;
pub mod types;

pub use language::{Language, SUPPORTED_LANGUAGES};
pub use types::{Definition, ExplainRequest, Example, Explanation, Pronunciation};
