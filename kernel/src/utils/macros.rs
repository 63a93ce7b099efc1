/*
 * Serial Output Macros
 *
 * print!/println! style macros for the log serial port (COM1). User-facing
 * output never goes through these; it is written to the VGA console.
 */

/// Prints formatted text to the log serial port.
///
/// Output errors are ignored: there is nowhere else to report them.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => ({
        use core::fmt::Write;
        let _ = $crate::drivers::serial::COM1.lock().write_fmt(format_args!($($arg)*));
    });
}

/// Prints a formatted string followed by a new line to the log serial port.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(concat!($fmt, "\n"), $($arg)*));
}
