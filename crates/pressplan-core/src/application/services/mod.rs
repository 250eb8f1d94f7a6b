//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "plan a build" or "hand a build to the builder".

pub mod build_service;
pub mod manifest_service;

pub use build_service::BuildService;
pub use manifest_service::ManifestService;
