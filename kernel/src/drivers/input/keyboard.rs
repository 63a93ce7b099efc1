/*
 * PS/2 Keyboard Driver
 *
 * Polled PS/2 keyboard input. Scancodes (set 1) are read from the controller
 * and decoded with the pc_keyboard crate using the US 104-key layout, which
 * takes care of Shift state and key releases.
 *
 * The shell only wants characters, so raw keys (arrows, function keys, bare
 * modifiers) are dropped here.
 */

use pc_keyboard::{DecodedKey, HandleControl, Keyboard, ScancodeSet1, layouts};
#[cfg(target_arch = "x86_64")]
use spin::Mutex;

/// Scancode set 1 to character decoder.
pub struct ScancodeDecoder {
    keyboard: Keyboard<layouts::Us104Key, ScancodeSet1>,
}

impl ScancodeDecoder {
    pub const fn new() -> Self {
        Self {
            keyboard: Keyboard::new(
                ScancodeSet1::new(),
                layouts::Us104Key,
                HandleControl::Ignore,
            ),
        }
    }

    /// Feed one scancode byte.
    ///
    /// Returns the character it completes, if any. Enter decodes to '\n' and
    /// Backspace to '\x08'.
    pub fn feed(&mut self, scancode: u8) -> Option<char> {
        let event = match self.keyboard.add_byte(scancode) {
            Ok(Some(event)) => event,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("keyboard: bad scancode 0x{:02x}: {:?}", scancode, err);
                return None;
            }
        };

        match self.keyboard.process_keyevent(event)? {
            DecodedKey::Unicode(character) => Some(character),
            DecodedKey::RawKey(_) => None,
        }
    }
}

impl Default for ScancodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoder state for the system keyboard.
#[cfg(target_arch = "x86_64")]
static DECODER: Mutex<ScancodeDecoder> = Mutex::new(ScancodeDecoder::new());

/// Output buffer full: a scancode is waiting in the data port.
#[cfg(target_arch = "x86_64")]
const STATUS_OUTPUT_FULL: u8 = 0x01;

/// Read the next pending scancode from the controller, if there is one.
#[cfg(target_arch = "x86_64")]
pub fn poll_scancode() -> Option<u8> {
    use crate::config::{PS2_DATA_PORT, PS2_STATUS_PORT};
    use x86_64::instructions::port::{Port, PortReadOnly};

    let mut status_port: PortReadOnly<u8> = PortReadOnly::new(PS2_STATUS_PORT);
    let mut data_port: Port<u8> = Port::new(PS2_DATA_PORT);

    let status = unsafe { status_port.read() };
    if status & STATUS_OUTPUT_FULL == 0 {
        return None;
    }
    Some(unsafe { data_port.read() })
}

/// Read a character from the keyboard, spinning until one is typed.
#[cfg(target_arch = "x86_64")]
pub fn read_char_blocking() -> char {
    loop {
        if let Some(scancode) = poll_scancode() {
            if let Some(ch) = DECODER.lock().feed(scancode) {
                return ch;
            }
        } else {
            core::hint::spin_loop();
        }
    }
}
