//! Workshops engine: the remote fetch collaborator.
//!
//! Owns the HTTP client, strict wire decoding, and a background worker that
//! executes page fetches off the UI thread.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_page, DecodeError, WorkshopRecord};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestFetcher, WorkshopFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
