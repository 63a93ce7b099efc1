/*
 * Display Drivers
 *
 * The user-facing console is the VGA text buffer.
 */

use lazy_static::lazy_static;
use spin::Mutex;

use crate::config::VGA_BUFFER_ADDR;

pub mod vga;

pub use vga::{Color, Writer};
use vga::VgaMemory;

lazy_static! {
    /// Console writer over the hardware text buffer.
    ///
    /// Only touch this on hardware: the first access takes a reference to
    /// the text buffer at physical 0xB8000.
    pub static ref CONSOLE: Mutex<Writer<VgaMemory>> =
        Mutex::new(Writer::new(unsafe { VgaMemory::new(VGA_BUFFER_ADDR) }));
}

/// Initialize the console: blank screen, default colors.
pub fn init() {
    let mut console = CONSOLE.lock();
    console.set_color(Color::LightGray, Color::Black);
    console.clear();
    log::info!("VGA console ready");
}
