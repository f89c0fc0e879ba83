//! x86_64 architecture support.
//!
//! Binds the keyboard driver to the legacy PC hardware: 8259 PICs, the PS/2
//! data port, the VGA text buffer and the COM1 serial port.

pub mod interrupts;
pub mod keyboard;
pub mod serial;
pub mod vga;

pub use serial::SERIAL;
pub use vga::{Color, Writer, WRITER};

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used as the idle loop and after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
