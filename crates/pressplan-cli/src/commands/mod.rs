//! Command handlers. Each one turns parsed arguments into calls on the core
//! services and prints the result; no planning logic lives here.

pub mod build;
pub mod completions;
pub mod config;
pub mod init;
pub mod plan;
pub mod project;
pub mod theme_header;
pub mod watch;
