/*
 * Kernel Utilities
 *
 * Serial print macros and the `log` backend.
 */

#[macro_use]
pub mod macros;
pub mod logger;
