/*
 * 16550 UART Driver
 *
 * Polled, transmit-only driver for a PC serial port. The kernel log goes out
 * through it so it can be captured from the host (e.g. QEMU -serial stdio).
 */

use bitflags::bitflags;
use core::fmt;
use x86_64::instructions::port::{Port, PortReadOnly};

bitflags! {
    /// Interrupt enable flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct IntEnFlags: u8 {
        const RECEIVED = 1;
        const SENT = 1 << 1;
        const ERRORED = 1 << 2;
        const STATUS_CHANGE = 1 << 3;
        // 4 to 7 are unused
    }
}

bitflags! {
    /// Line status flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct LineStsFlags: u8 {
        const INPUT_FULL = 1;
        // 1 to 4 unknown
        const OUTPUT_EMPTY = 1 << 5;
        // 6 and 7 unknown
    }
}

/// Serial port representation.
pub struct SerialPort {
    data: Port<u8>,               // Data register, read to receive, write to send
    int_en: Port<u8>,             // Interrupt enable
    fifo_ctrl: Port<u8>,          // FIFO control
    line_ctrl: Port<u8>,          // Line control
    modem_ctrl: Port<u8>,         // Modem control
    line_sts: PortReadOnly<u8>,   // Line status
}

impl SerialPort {
    /// Creates a serial port driver for the UART at `base`.
    ///
    /// Nothing is touched until `init` is called.
    pub const fn new(base: u16) -> SerialPort {
        SerialPort {
            data: Port::new(base),
            int_en: Port::new(base + 1),
            fifo_ctrl: Port::new(base + 2),
            line_ctrl: Port::new(base + 3),
            modem_ctrl: Port::new(base + 4),
            line_sts: PortReadOnly::new(base + 5),
        }
    }

    /// Initializes the port: 38400 baud, 8N1, FIFOs on, interrupts off.
    pub fn init(&mut self) {
        unsafe {
            self.int_en.write(IntEnFlags::empty().bits());
            self.line_ctrl.write(0x80); // DLAB on
            self.data.write(0x03); // divisor low byte (38400 baud)
            self.int_en.write(0x00); // divisor high byte
            self.line_ctrl.write(0x03); // DLAB off, 8 bits, no parity, one stop bit
            self.fifo_ctrl.write(0xC7);
            self.modem_ctrl.write(0x0B);
            // We only ever poll
            self.int_en.write(IntEnFlags::empty().bits());
        }
    }

    fn line_sts(&mut self) -> LineStsFlags {
        LineStsFlags::from_bits_truncate(unsafe { self.line_sts.read() })
    }

    /// Sends a byte, spinning until the transmitter is ready.
    pub fn send(&mut self, data: u8) {
        while !self.line_sts().contains(LineStsFlags::OUTPUT_EMPTY) {
            core::hint::spin_loop();
        }
        unsafe { self.data.write(data) }
    }

    /// Writes a byte, translating newline to CRLF and backspace to an erase.
    pub fn write(&mut self, b: u8) {
        match b {
            8 | 0x7F => {
                self.send(8);
                self.send(b' ');
                self.send(8);
            }
            b'\n' => {
                self.send(b'\r');
                self.send(b'\n');
            }
            _ => {
                self.send(b);
            }
        }
    }
}

impl fmt::Write for SerialPort {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write(byte);
        }
        Ok(())
    }
}
