//! VGA text mode console for x86_64.
//!
//! Colored text output to the buffer at 0xB8000, and the character sink the
//! keyboard driver echoes into. Output always goes to the bottom row; a
//! newline scrolls everything up by one.

use core::fmt::{self, Write};
use core::ptr;
use nappis_common::scancode::NO_CHAR;
use nappis_hal::CharacterSink;
use spin::Mutex;
use x86_64::instructions::interrupts::without_interrupts;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of rows in VGA text mode.
const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
const BUFFER_WIDTH: usize = 80;

/// Columns per tab stop.
const TAB_WIDTH: usize = 4;

/// Glyph shown for bytes outside printable ASCII.
const PLACEHOLDER: u8 = 0xfe;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[allow(missing_docs)]
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

/// Attribute byte: background in the high nibble, foreground in the low one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
struct ColorCode(u8);

impl ColorCode {
    const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }
}

/// A single character cell in the VGA buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct ScreenChar {
    ascii_character: u8,
    color_code: ColorCode,
}

type Buffer = [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT];

/// Global VGA writer instance.
///
/// Non-interrupt code takes the lock with interrupts masked, so the keyboard
/// handler can always acquire it.
pub static WRITER: spin::Once<Mutex<Writer>> = spin::Once::new();

/// Initializes the global VGA writer.
///
/// Idempotent - safe to call multiple times.
pub fn init() {
    WRITER.call_once(|| Mutex::new(Writer::new()));
}

fn get_writer() -> &'static Mutex<Writer> {
    init();
    WRITER.get().expect("VGA writer not initialized")
}

/// VGA text mode writer.
pub struct Writer {
    /// Next column on the bottom row, `0..=BUFFER_WIDTH`.
    column: usize,
    color_code: ColorCode,
    buffer: *mut Buffer,
}

// SAFETY: the buffer is memory-mapped hardware that lives as long as the
// kernel, and every access goes through the WRITER lock.
unsafe impl Send for Writer {}

impl Writer {
    fn new() -> Self {
        Writer {
            column: 0,
            color_code: ColorCode::new(Color::White, Color::Black),
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }

    fn blank(&self) -> ScreenChar {
        ScreenChar {
            ascii_character: b' ',
            color_code: self.color_code,
        }
    }

    fn put(&mut self, row: usize, col: usize, cell: ScreenChar) {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        // SAFETY: indices checked above; 0xB8000 is always mapped in text
        // mode. Volatile because the display hardware reads the buffer.
        unsafe { ptr::write_volatile(&mut (*self.buffer)[row][col], cell) }
    }

    fn get(&self, row: usize, col: usize) -> ScreenChar {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        // SAFETY: as in `put`.
        unsafe { ptr::read_volatile(&(*self.buffer)[row][col]) }
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Writes one byte, wrapping at the end of the line.
    pub fn write_byte(&mut self, byte: u8) {
        if byte == b'\n' {
            self.new_line();
            return;
        }
        if self.column >= BUFFER_WIDTH {
            self.new_line();
        }
        let cell = ScreenChar {
            ascii_character: byte,
            color_code: self.color_code,
        };
        self.put(BUFFER_HEIGHT - 1, self.column, cell);
        self.column += 1;
    }

    fn new_line(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let cell = self.get(row, col);
                self.put(row - 1, col, cell);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.column = 0;
    }

    fn clear_row(&mut self, row: usize) {
        let blank = self.blank();
        for col in 0..BUFFER_WIDTH {
            self.put(row, col, blank);
        }
    }

    /// Erases the character left of the cursor. Stops at the line start.
    pub fn backspace(&mut self) {
        if self.column > 0 {
            self.column -= 1;
            let blank = self.blank();
            self.put(BUFFER_HEIGHT - 1, self.column, blank);
        }
    }

    /// Clears the entire screen.
    pub fn clear_screen(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.column = 0;
    }
}

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                0x20..=0x7e | b'\n' => self.write_byte(byte),
                _ => self.write_byte(PLACEHOLDER),
            }
        }
        Ok(())
    }
}

impl CharacterSink for Writer {
    fn emit_character(&mut self, ch: u8) {
        match ch {
            NO_CHAR => {}
            0x08 => self.backspace(),
            b'\t' => {
                let stop = ((self.column / TAB_WIDTH + 1) * TAB_WIDTH).min(BUFFER_WIDTH);
                while self.column < stop {
                    self.write_byte(b' ');
                }
            }
            0x20..=0x7e | b'\n' => self.write_byte(ch),
            _ => self.write_byte(PLACEHOLDER),
        }
    }
}

/// Echoes keyboard characters to the global VGA writer.
///
/// Meant for the keyboard interrupt handler, which already runs with
/// interrupts masked.
#[derive(Debug, Default, Clone, Copy)]
pub struct VgaSink;

impl CharacterSink for VgaSink {
    fn emit_character(&mut self, ch: u8) {
        get_writer().lock().emit_character(ch);
    }
}

/// Prints to the VGA buffer without a newline.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::vga::_print(format_args!($($arg)*))
    };
}

/// Prints to the VGA buffer with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let writer = get_writer();
    without_interrupts(|| {
        // Writer::write_str never fails.
        let _ = writer.lock().write_fmt(args);
    });
}

/// Sets the VGA output color.
pub fn set_color(foreground: Color, background: Color) {
    without_interrupts(|| get_writer().lock().set_color(foreground, background));
}

/// Clears the VGA screen.
pub fn clear_screen() {
    without_interrupts(|| get_writer().lock().clear_screen());
}
