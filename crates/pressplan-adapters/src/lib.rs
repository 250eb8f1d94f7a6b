//! Infrastructure adapters for Pressplan.
//!
//! This crate implements the ports defined in `pressplan-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builder;
pub mod descriptor_loader;
pub mod page_source;

// Re-export commonly used adapters
pub use builder::{ManifestFileBuilder, RecordingBuilder};
pub use descriptor_loader::FileDescriptorLoader;
pub use page_source::{LocalPageSource, MemoryPageSource};
