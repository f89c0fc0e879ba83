//! Nappis Hardware Abstraction Layer (HAL) traits.
//!
//! The keyboard driver only ever talks to hardware through these traits, so the
//! scancode state machine can run against real ports or against test doubles.

#![no_std]

/// A handler bound to a hardware interrupt line.
///
/// Handlers run in interrupt context: they must not block or allocate.
pub type IrqHandler = fn();

/// Source of raw keyboard scancodes (e.g. the PS/2 data port).
pub trait ScancodeSource {
    /// Reads the next pending scancode byte.
    fn read_scancode(&mut self) -> u8;
}

/// Consumer of translated characters (console, display, line discipline).
pub trait CharacterSink {
    /// Hands one character to the sink.
    ///
    /// Fire-and-forget. The "no character" sentinel (0) may be passed through
    /// and must be accepted; sinks decide whether to discard it.
    fn emit_character(&mut self, ch: u8);
}

/// Trait for controlling interrupts.
pub trait InterruptController {
    /// Binds `handler` to the hardware interrupt `line`.
    ///
    /// A later registration for the same line replaces the earlier one.
    fn register_handler(&mut self, line: u8, handler: IrqHandler);
    /// Globally enables interrupts.
    fn enable(&mut self);
    /// Signals the end of an interrupt on `line` to the controller.
    fn end_of_interrupt(&mut self, line: u8);
}
