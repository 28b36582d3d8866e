//! Formsample - a server-rendered form validation demo
//!
//! This library provides the building blocks for the Formsample demo app:
//! page handlers, the declarative validation schema, sample display data,
//! and the configuration/logging plumbing.
//!
//! # Architecture
//! - `pages`: HTTP page handlers and HTML rendering
//! - `validation`: declarative schema with field rules and cross-field checks
//! - `data`: static sample dataset used by the counter playground
//! - `config`: configuration management
//! - `system`: logging and system utilities

pub mod config;
pub mod data;
pub mod errors;
pub mod pages;
pub mod system;
pub mod validation;

pub use errors::{FormsampleError, Result};
