//! Integration tests for the lookup pipeline.
//!
//! `fake_source` provides in-memory sources for loader and registry tests;
//! `http_sources` drives the real sources against a local mock server.

mod fake_source;
