//! Browser console backend for the `log` facade.
//!
//! The core crate only emits `log` records. Call [`init_logging`] once from
//! JavaScript to route them to `console.*`; without it they are dropped.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Parse a level name, case-insensitively. Unknown names map to `Info`.
pub(crate) fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Route log records to the browser console at `level`
/// (`"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`).
///
/// Safe to call more than once; later calls only change the level.
///
/// ```typescript
/// init_logging('debug');
/// ```
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    // Only the first call installs the logger.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(parse_level(level));
}
