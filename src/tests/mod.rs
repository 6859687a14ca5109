//! Test modules for the StringSearch library.
//!
//! Algorithm tests live next to the algorithms in `algorithms::tests`; this
//! module covers configuration loading and the application error layer.

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, log_level_strategy, string_strategy, TestFixture};
