//! Configuration management
//!
//! Configuration is loaded from a TOML file with environment variable
//! fallback, and cached for the lifetime of the process.

mod r#impl;
mod structs;

pub use structs::*;
