//! CLI command implementations

pub mod completions;
pub mod components;
pub mod config;
pub mod flatten;
pub mod run;
pub mod takt;
pub mod unprovided;
