pub mod candidate;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use candidate::{CandidateFunction, DefinitionCollector, TranslationContext};
pub use error::{CollectError, CollectResult};
pub use models::*;
