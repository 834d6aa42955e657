//! Console Logging
//!
//! Routes the `log` facade to the browser console.

use log::Level;

use crate::store::TodoState;

/// Verbose in debug builds, quieter in release
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init() {
    // Only fails if a logger is already installed
    if console_log::init_with_level(default_level()).is_err() {
        log::warn!("[LOG] console logger already initialised");
    }
}

/// Dump the state as JSON at debug level
pub fn log_snapshot(state: &TodoState) {
    if !log::log_enabled!(Level::Debug) {
        return;
    }
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("[STORE] {}", json),
        Err(err) => log::warn!("[STORE] failed to serialize state: {}", err),
    }
}
