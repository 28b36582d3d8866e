//! Compile-time page templates
//!
//! The constants here are generated by build.rs, which runs the template
//! transform (comment stripping, indentation collapse) over everything in
//! `templates/` before embedding it.

include!(concat!(env!("OUT_DIR"), "/templates.rs"));
