//! Logging setup and single-line structured events on top of the `log` facade.

use ::log::Level;

use crate::common::config::EvalCfg;
use crate::common::error::EvalError;

/// Install `env_logger` at the configured level. Calling it again is a no-op.
pub fn init(cfg: &EvalCfg) {
    let _ = env_logger::Builder::new()
        .filter_level(cfg.log_level)
        .format_timestamp_millis()
        .try_init();
}

/// Emit one event line with a fixed key order.
pub fn event(level: Level, module: &str, ev: &str, code: u32, dur_ms: u128) {
    ::log::log!(
        target: module,
        level,
        "mod={module} ev={ev} code={code} dur_ms={dur_ms}"
    );
}

/// Warn-level event for an error raised by a built-in collaborator.
pub fn error(module: &str, ev: &str, err: &EvalError) {
    let code = err.code() as u32;
    ::log::warn!(target: module, "mod={module} ev={ev} code={code} err={err}");
}
