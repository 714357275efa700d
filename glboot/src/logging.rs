//! Logger setup and the GL debug-output bridge.
//!
//! Everything goes through the `log` facade; `env_logger` is the backend.

use glow::{
    DEBUG_SEVERITY_HIGH, DEBUG_SEVERITY_LOW, DEBUG_SEVERITY_MEDIUM, DEBUG_SEVERITY_NOTIFICATION,
};

const DEFAULT_FILTER: &str = "info";

/// Picks the `env_logger` filter: the one passed in, then `RUST_LOG`, then `info`.
fn resolve_filter(explicit: Option<&str>, from_env: Option<String>) -> String {
    explicit
        .map(str::to_owned)
        .or(from_env)
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Sends `log` records to stderr. Calls after the first one leave the
/// installed logger alone.
pub fn init_logging(filter: Option<&str>) {
    let filter = resolve_filter(filter, std::env::var("RUST_LOG").ok());
    let installed = env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init();
    if installed.is_ok() {
        log::debug!("logger installed with filter {filter:?}");
    }
}

pub fn debug_severity_level(severity: u32) -> log::Level {
    match severity {
        DEBUG_SEVERITY_HIGH => log::Level::Error,
        DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        DEBUG_SEVERITY_LOW => log::Level::Info,
        DEBUG_SEVERITY_NOTIFICATION => log::Level::Trace,
        _ => log::Level::Debug,
    }
}

/// Ready-made callback for [crate::StartBuilder::debug_message_callback].
pub fn log_debug_message(_source: u32, _type: u32, id: u32, severity: u32, message: String) {
    log::log!(target: "gl", debug_severity_level(severity), "[{id}] {message}");
}
