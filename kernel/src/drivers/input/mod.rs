/*
 * Input Device Drivers
 *
 * Only the PS/2 keyboard, polled from the shell loop.
 */

pub mod keyboard;
