//! HTTP request handlers
//!
//! Each submodule contains handlers for one area of the dashboard.

pub mod data;
pub mod health;
pub mod pages;

// Re-export all handlers for use in router
pub use data::*;
pub use health::*;
pub use pages::*;
