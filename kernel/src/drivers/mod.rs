/*
 * Hardware Drivers
 *
 * - Serial: COM1, carries the kernel log
 * - Display: VGA text mode console for the user
 * - Input: PS/2 keyboard
 *
 * Port I/O is x86_64-only; the scancode decoder and the console writer are
 * plain logic and build everywhere.
 */

#[cfg(target_arch = "x86_64")]
pub mod serial;
pub mod display;
pub mod input;
