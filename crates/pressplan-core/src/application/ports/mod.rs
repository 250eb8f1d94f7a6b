//! Ports the application layer drives. `pressplan-adapters` implements
//! them for the filesystem and for tests.

pub mod output;

pub use output::{DescriptorLoader, PageSource, SiteBuilder};

#[cfg(test)]
pub use output::{MockPageSource, MockSiteBuilder};
