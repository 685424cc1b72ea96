//! Assistant engine: keyword-extraction IO and preference persistence.
mod engine;
mod extract;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use extract::{ClientSettings, HttpKeywordExtractor, KeywordExtractor};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, ExtractError, FailureKind, RequestId};
