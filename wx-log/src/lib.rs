//! Timestamped console logger shared by the chart apps.
//!
//! Every line is `[rfc3339-utc] LEVEL - message`. Native targets print to
//! stdout; wasm targets forward to the browser console. Install once at
//! startup with [`init`].

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Metadata, Record};

pub struct ConsoleLogger;
pub static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now: DateTime<Utc> = Utc::now();
            emit(format!(
                "[{}] {} - {}",
                now.to_rfc3339(),
                record.level(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

#[cfg(target_family = "wasm")]
fn emit(line: String) {
    let js_line: js_sys::JsString = line.into();
    gloo_console::log!(js_line);
}

#[cfg(not(target_family = "wasm"))]
fn emit(line: String) {
    println!("{}", line);
}

/// Installs [`LOGGER`] as the global logger, capped at Info.
pub fn init() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);
}
