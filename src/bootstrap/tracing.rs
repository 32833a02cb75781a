//! Tracing configuration for Granular
//!
//! Initializes the tracing-subscriber registry used by every crate of the
//! workspace. Use cases open `usecase.*` spans; adapters log inside them.
//!
//! ## Filter precedence / 过滤优先级
//!
//! 1. `RUST_LOG`
//! 2. `[logging] filter` from the config file
//! 3. Built-in directives (debug in development, info in release)

use gr_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level; the in-memory host stays at info either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("gr_app={level}"),
        format!("gr_infra={level}"),
        "gr_infra::document=info".to_string(),
    ]
}

fn build_env_filter(config: &LoggingConfig, is_dev: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directives = match &config.filter {
        Some(filter) => filter.clone(),
        None => build_filter_directives(is_dev).join(","),
    };
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {directives:?}, using defaults: {e}");
        EnvFilter::new(build_filter_directives(is_dev).join(","))
    })
}

/// Initialize the tracing subscriber
///
/// Output format: `2025-01-15 10:30:45.123 INFO [file.rs:42] target: message`
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config, is_development());

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
