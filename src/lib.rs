//! Granular
//!
//! Process entry layer: loads configuration, initializes tracing and wires
//! the host's ports into the copy/paste use cases.

pub mod bootstrap;

pub use gr_app::{AppDeps, UseCases};
pub use gr_core::config::AppConfig;
