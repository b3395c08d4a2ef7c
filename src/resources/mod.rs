//! Resource records shared by every pipeline stage
//!
//! Discovery produces [`ResourceRecord`]s, fetching turns them into
//! [`FetchedResource`]s, and archiving consumes those.

pub mod types;

pub use types::{CaptureResult, FetchedResource, ResourceKind, ResourceRecord, ResourceSource};
