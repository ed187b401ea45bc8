//! MONSTERDEX: look up a monster through interchangeable data sources
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod sources;
pub mod registry;
pub mod loader;
pub mod output;
