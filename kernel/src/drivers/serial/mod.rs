/*
 * Serial Communication Drivers
 *
 * The kernel log is written to COM1. Console output for the user goes to the
 * VGA text buffer instead; the two never mix.
 */

use spin::Mutex;

use crate::config::LOG_SERIAL_PORT;

pub mod uart_16550;

pub use uart_16550::SerialPort;

/// Mutex-protected static instance of the log serial port.
pub static COM1: Mutex<SerialPort> = Mutex::new(SerialPort::new(LOG_SERIAL_PORT));

/// Initializes the log port (COM1).
///
/// This function should be called early in the boot process before any logging occurs.
pub fn init_log_port() {
    COM1.lock().init();
}
