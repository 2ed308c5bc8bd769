// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics for the docsites crates
//!
//! Structured logging to stderr, shared by the configuration library and the CLI.
//!
//! Usage:
//! - Set DOCSITES_LOG=off (default) - no logs
//! - Set DOCSITES_LOG=warn - skipped sibling sites and other recoverable issues
//! - Set DOCSITES_LOG=info - registry loading and builds
//! - Set DOCSITES_LOG=debug - per-link resolution detail

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "DOCSITES_LOG";

static INIT: Once = Once::new();

/// A parsed `DOCSITES_LOG` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSetting {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogSetting {
    /// Minimum level to emit, `None` when logging is off.
    pub fn min_level(self) -> Option<emit::Level> {
        match self {
            LogSetting::Off => None,
            LogSetting::Error => Some(emit::Level::Error),
            LogSetting::Warn => Some(emit::Level::Warn),
            LogSetting::Info => Some(emit::Level::Info),
            LogSetting::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Parse a log level name. Returns `None` for unrecognized names.
pub fn parse_log_setting(raw: &str) -> Option<LogSetting> {
    match raw.trim() {
        "" | "off" => Some(LogSetting::Off),
        "debug" => Some(LogSetting::Debug),
        "info" => Some(LogSetting::Info),
        "warn" => Some(LogSetting::Warn),
        "error" => Some(LogSetting::Error),
        _ => None,
    }
}

/// Initialize diagnostics based on the DOCSITES_LOG environment variable
///
/// This should be called once at application startup. It's safe to call
/// multiple times - subsequent calls will be ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "off".to_string());

        let setting = parse_log_setting(&raw).unwrap_or_else(|| {
            // Bootstrap warning - the emitter is not running yet
            eprintln!("Warning: Unknown {} value '{}', using 'info'", LOG_ENV_VAR, raw);
            LogSetting::Info
        });
        let Some(level) = setting.min_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Log basic operations (registry loaded, site config built)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (individual link resolution, descriptor files read)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable problems.
///
/// Examples: "Skipping unknown sibling site", "Ignoring non-YAML file"
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop the current operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_parse_log_setting() {
        assert_eq!(parse_log_setting("off"), Some(LogSetting::Off));
        assert_eq!(parse_log_setting(""), Some(LogSetting::Off));
        assert_eq!(parse_log_setting("warn"), Some(LogSetting::Warn));
        assert_eq!(parse_log_setting(" debug "), Some(LogSetting::Debug));
        assert_eq!(parse_log_setting("verbose"), None);
        assert!(LogSetting::Off.min_level().is_none());
        assert!(LogSetting::Error.min_level().is_some());
    }

    #[test]
    fn test_macros_compile() {
        log_info!("Test message");
        log_debug!("Debug message with {value}", value: 42);
        log_warn!("Warning for {site}", site: "ISBDM");
        log_error!("Error message");
    }
}
