//! Environment variable helpers for per-service `*Config::from_env()` loaders.

use std::str::FromStr;

/// Read a required env var.
///
/// # Panics
///
/// Panics if the variable is missing. Configuration errors abort startup.
pub fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("missing required env var {name}"))
}

/// Read an env var and parse it, falling back to `default` when it is unset
/// or unparsable.
pub fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read an env var, falling back to `default` when unset.
pub fn string_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Strip trailing slashes so callers can join paths with `format!("{base}/...")`.
pub fn base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
