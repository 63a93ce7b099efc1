/*
 * Kernel Logging
 *
 * Backend for the `log` facade. Records are written to COM1 as
 * "[LEVEL] message" lines so they can be followed from the host while the
 * VGA console belongs to the shell.
 *
 * The namespace itself never logs; bring-up, the default layout and the
 * shell dispatcher do.
 */

use log::{Level, Metadata, Record};

use crate::config::LOG_LEVEL;
use crate::serial_println;

/// Serial-port logger.
struct EnixnelLogger;

impl log::Log for EnixnelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                Level::Error | Level::Warn => {
                    serial_println!("[{}] {}: {}", record.level(), record.target(), record.args())
                }
                _ => serial_println!("[{}] {}", record.level(), record.args()),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: EnixnelLogger = EnixnelLogger;

/// Installs the serial logger.
///
/// The serial port must already be initialized. Calling this twice leaves the
/// first installation in place and reports it on the serial port.
pub fn init() {
    let logger_init_result = log::set_logger(&LOGGER).map(|()| log::set_max_level(LOG_LEVEL));

    match logger_init_result {
        Ok(()) => serial_println!("Logger initialized at level {}", LOG_LEVEL),
        Err(err) => serial_println!("Logger already initialized: {}", err),
    }
}
