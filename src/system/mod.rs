//! System utilities
//!
//! Logging initialization and other process-level plumbing.

pub mod logging;

pub use logging::init_logging;
