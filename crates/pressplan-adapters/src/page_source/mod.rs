//! Page discovery adapters.

mod local;
mod memory;

pub use local::LocalPageSource;
pub use memory::MemoryPageSource;
