//! # planner-artifact
//!
//! Storage for the markdown report files a pipeline run produces.
//!
//! - [`FileArtifactService`] - one directory per run under a configurable root
//! - [`InMemoryArtifactService`] - process-local map, used by tests

pub mod file;
pub mod inmemory;
pub mod service;

pub use file::FileArtifactService;
pub use inmemory::InMemoryArtifactService;
pub use service::{ArtifactService, LoadRequest, LoadResponse, SaveRequest, validate_name};
