// ABOUTME: Library root for envssh - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod inventory;
pub mod launch;
pub mod output;
pub mod types;
