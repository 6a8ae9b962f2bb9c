//! CLI command implementations
//!
//! - `analyze` - Offline summary of an expense file
//! - `serve` - Web server command

pub mod analyze;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use serve::*;
