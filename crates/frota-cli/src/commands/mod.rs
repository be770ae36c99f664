//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Show the resolved configuration
//! - `core` - Shared utilities (config resolution, open_dashboard)
//! - `reports` - Terminal fuel and maintenance reports
//! - `serve` - Web server command

pub mod config;
pub mod core;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use config::*;
pub use self::core::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
