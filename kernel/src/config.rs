/*
 * Kernel Configuration
 *
 * Compile-time constants shared by the namespace engine, the console and the
 * shell. The namespace capacities are part of the observable behaviour of the
 * system (what fits, what gets truncated, when the table is full) and must not
 * be changed casually.
 */

use log::LevelFilter;

/// Maximum number of entries (files + directories) in the namespace table.
pub const MAX_ENTRIES: usize = 128;

/// Maximum length of a full entry path, in bytes.
pub const MAX_NAME_LEN: usize = 31;

/// Maximum content size of a single file, in bytes.
pub const MAX_FILE_SIZE: usize = 512;

/// VGA text mode geometry.
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Physical address of the VGA text buffer.
pub const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Input line buffer size, including room for the terminator the line editor
/// never fills.
pub const MAX_LINE_LENGTH: usize = 128;

/// Longest command word the dispatcher recognises.
pub const MAX_COMMAND_LEN: usize = 15;

/// Number of command lines kept in the shell history.
pub const MAX_HISTORY_ENTRIES: usize = 16;

/// Base I/O port of the serial port used for the kernel log (COM1).
pub const LOG_SERIAL_PORT: u16 = 0x3F8;

/// PS/2 controller ports.
pub const PS2_DATA_PORT: u16 = 0x60;
pub const PS2_STATUS_PORT: u16 = 0x64;

/// Most verbose level the kernel logger emits.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
