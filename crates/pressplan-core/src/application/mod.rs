//! Use cases over the domain: discover pages, assemble a manifest, hand it
//! to a builder. The I/O behind each step is a port in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DescriptorLoader, PageSource, SiteBuilder};
pub use services::{BuildService, ManifestService};
