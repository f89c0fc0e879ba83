//! PS/2 keyboard binding: port 0x60 in, VGA console out.

use crate::arch::x86_64::interrupts::PicInterrupts;
use crate::arch::x86_64::vga::VgaSink;
use crate::keyboard;
use nappis_common::DriverError;
use nappis_hal::ScancodeSource;
use x86_64::instructions::port::Port;

/// PS/2 controller data port.
pub const PS2_DATA_PORT: u16 = 0x60;

/// The PS/2 controller's output buffer.
pub struct Ps2Port {
    data: Port<u8>,
}

impl Ps2Port {
    /// Creates a handle to the data port.
    pub const fn new() -> Self {
        Self {
            data: Port::new(PS2_DATA_PORT),
        }
    }
}

impl Default for Ps2Port {
    fn default() -> Self {
        Self::new()
    }
}

impl ScancodeSource for Ps2Port {
    fn read_scancode(&mut self) -> u8 {
        // SAFETY: reading 0x60 only pops the controller's output buffer;
        // it is called once per keyboard interrupt.
        unsafe { self.data.read() }
    }
}

/// Handler bound to the keyboard IRQ line.
pub fn keyboard_irq() {
    let mut port = Ps2Port::new();
    keyboard::handle_interrupt(&mut port, &mut VgaSink);
}

/// Initializes the keyboard driver on the PICs with the default layout.
pub fn init() -> Result<(), DriverError> {
    keyboard::initialize_keyboard_driver(&mut PicInterrupts, keyboard_irq)
}
