//! Pickmote Testing Infrastructure
//!
//! Shared fixtures, proptest strategies and log setup for the pickmote
//! integration suites.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! pickmote-testkit = { path = "../pickmote-testkit" }
//! ```
//!
//! Then in an integration test:
//! ```rust,no_run
//! use pickmote_testkit::*;
//!
//! init_test_tracing();
//! let spec = color_builder().build().unwrap();
//! assert_eq!(spec.options().len(), 2);
//! ```

pub mod fixtures;
pub mod strategies;

pub use fixtures::*;

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber filtered by `RUST_LOG`
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
