// ABOUTME: Library root for sarono - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod notify;
pub mod report;
pub mod runtime;
pub mod types;
