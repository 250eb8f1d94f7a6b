//! Site builder adapters.
//!
//! The real builder is an external bundler; these adapters deliver the
//! manifest to it (`ManifestFileBuilder`) or keep it for inspection
//! (`RecordingBuilder`).

mod handoff;
mod memory;

pub use handoff::ManifestFileBuilder;
pub use memory::RecordingBuilder;
