//! StringSearch Library
//!
//! Exact and approximate substring search over bytes and characters.
//!
//! # Architecture
//!
//! - [`algorithms`]: the search algorithms and their shared preprocess/search
//!   contract. Pure, synchronous and free of global state.
//! - [`config`]: layered configuration (defaults, file, environment) used by
//!   the command line tool to select an algorithm.
//! - [`error`]: application-level errors wrapping the algorithm errors.

pub mod algorithms;
pub mod config;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the StringSearch library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
