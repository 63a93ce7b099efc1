/*
 * VGA Text Mode Console
 *
 * An 80x25 grid of (character, attribute) cells. Output is written cell by
 * cell at a cursor; a newline or a full row moves to the next row, and
 * running off the bottom scrolls everything up one row.
 *
 * The grid itself sits behind the TextBuffer trait so the same writer drives
 * the real buffer at 0xB8000 on hardware and a plain array in tests.
 */

use core::fmt;

use crate::config::{VGA_HEIGHT, VGA_WIDTH};
use crate::shell::Terminal;

/// The 16 VGA text mode colors.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Foreground/background attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// Light gray on black (0x07).
pub const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

/// Drawn in place of bytes that have no glyph we want to show.
const REPLACEMENT_GLYPH: u8 = 0xFE;

/// One cell of the text buffer, laid out as the hardware expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii: u8,
    pub color: ColorCode,
}

impl ScreenChar {
    pub const fn blank(color: ColorCode) -> ScreenChar {
        ScreenChar { ascii: b' ', color }
    }
}

/// The full cell grid.
pub type Grid = [[ScreenChar; VGA_WIDTH]; VGA_HEIGHT];

/// Storage for the cell grid.
pub trait TextBuffer {
    fn read_cell(&self, row: usize, col: usize) -> ScreenChar;
    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar);
}

/// The memory-mapped hardware text buffer.
pub struct VgaMemory {
    cells: &'static mut Grid,
}

impl VgaMemory {
    /// # Safety
    /// `addr` must be the identity-mapped VGA text buffer, and only one
    /// `VgaMemory` may exist for it.
    pub unsafe fn new(addr: usize) -> VgaMemory {
        VgaMemory {
            cells: unsafe { &mut *(addr as *mut Grid) },
        }
    }
}

impl TextBuffer for VgaMemory {
    fn read_cell(&self, row: usize, col: usize) -> ScreenChar {
        // Volatile: the compiler must not elide or reorder device accesses
        unsafe { core::ptr::read_volatile(&self.cells[row][col]) }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        unsafe { core::ptr::write_volatile(&mut self.cells[row][col], cell) }
    }
}

/// Cursor-based text writer.
pub struct Writer<B: TextBuffer> {
    row: usize,
    col: usize,
    color: ColorCode,
    buffer: B,
}

impl<B: TextBuffer> Writer<B> {
    /// Wraps a buffer; the cursor starts at the top left.
    /// The buffer is not cleared.
    pub fn new(buffer: B) -> Self {
        Self {
            row: 0,
            col: 0,
            color: DEFAULT_COLOR,
            buffer,
        }
    }

    /// (row, column) of the next cell to be written.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Blank the whole screen in the current color and home the cursor.
    pub fn clear(&mut self) {
        for row in 0..VGA_HEIGHT {
            self.clear_row(row);
        }
        self.row = 0;
        self.col = 0;
    }

    pub fn put_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.col = 0;
                self.row += 1;
            }
            byte => {
                let ascii = match byte {
                    0x20..=0x7E => byte,
                    _ => REPLACEMENT_GLYPH,
                };
                self.buffer.write_cell(
                    self.row,
                    self.col,
                    ScreenChar {
                        ascii,
                        color: self.color,
                    },
                );
                self.col += 1;
                if self.col >= VGA_WIDTH {
                    self.col = 0;
                    self.row += 1;
                }
            }
        }

        if self.row >= VGA_HEIGHT {
            self.scroll();
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_byte(byte);
        }
    }

    /// Step the cursor back one cell (onto the previous row if needed) and
    /// blank it. Does nothing at the top-left corner.
    pub fn backspace(&mut self) {
        if self.row == 0 && self.col == 0 {
            return;
        }

        if self.col > 0 {
            self.col -= 1;
        } else {
            self.row -= 1;
            self.col = VGA_WIDTH - 1;
        }
        self.buffer
            .write_cell(self.row, self.col, ScreenChar::blank(self.color));
    }

    fn scroll(&mut self) {
        for row in 1..VGA_HEIGHT {
            for col in 0..VGA_WIDTH {
                let cell = self.buffer.read_cell(row, col);
                self.buffer.write_cell(row - 1, col, cell);
            }
        }
        self.clear_row(VGA_HEIGHT - 1);
        self.row = VGA_HEIGHT - 1;
    }

    fn clear_row(&mut self, row: usize) {
        let blank = ScreenChar::blank(self.color);
        for col in 0..VGA_WIDTH {
            self.buffer.write_cell(row, col, blank);
        }
    }
}

impl<B: TextBuffer> fmt::Write for Writer<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

impl<B: TextBuffer> Terminal for Writer<B> {
    fn clear_screen(&mut self) {
        self.clear();
    }

    fn backspace(&mut self) {
        Writer::backspace(self);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        Writer::write_bytes(self, bytes);
    }
}
