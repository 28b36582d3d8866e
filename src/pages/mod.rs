//! Page handlers
//!
//! Each routed page gets a service struct with async handler methods, the
//! shape actix handlers take throughout this crate. Rendering is
//! placeholder substitution over templates baked in at compile time.

mod form;
mod health;
mod home;
pub mod render;
pub mod templates;

pub use form::{ActionData, FormService};
pub use health::{AppStartTime, HealthService};
pub use home::HomeService;
