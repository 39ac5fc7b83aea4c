//! Population engine integration tests.
//!
//! These tests exercise the public surface end to end: generator
//! registration and priority, record/array/sequence traversal, the
//! recursion guard, error propagation, background fills and YAML
//! configuration.

mod async_fill;
mod config_file;
mod errors;
mod models;
mod population;
mod priority;
mod recursion;
mod reset;

/// Install a tracing subscriber once per test binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("fixture_fill=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
