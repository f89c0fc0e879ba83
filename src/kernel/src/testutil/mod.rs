//! Test doubles for the HAL traits.
//!
//! Host-side only: these types back the unit tests of the keyboard module and
//! use the standard library freely.

use nappis_hal::{CharacterSink, InterruptController, IrqHandler, ScancodeSource};
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

/// Replays a fixed byte sequence, then reports 0 (no key) forever.
#[derive(Debug, Default)]
pub struct ScriptedPort {
    bytes: VecDeque<u8>,
    reads: usize,
}

impl ScriptedPort {
    /// Creates a port that will return `bytes` in order.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            reads: 0,
        }
    }

    /// Number of `read_scancode` calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Bytes not read yet.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ScancodeSource for ScriptedPort {
    fn read_scancode(&mut self) -> u8 {
        self.reads += 1;
        self.bytes.pop_front().unwrap_or(0)
    }
}

/// Collects every emitted character.
#[derive(Debug, Default)]
pub struct RecordingSink {
    emitted: Vec<u8>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, sentinels included.
    pub fn emitted(&self) -> &[u8] {
        &self.emitted
    }

    /// Emitted characters as text, with "no character" values dropped.
    pub fn as_str(&self) -> String {
        self.emitted
            .iter()
            .filter(|&&ch| ch != 0)
            .map(|&ch| ch as char)
            .collect()
    }
}

impl CharacterSink for RecordingSink {
    fn emit_character(&mut self, ch: u8) {
        self.emitted.push(ch);
    }
}

/// Records registrations and end-of-interrupt signals.
#[derive(Debug, Default)]
pub struct RecordingController {
    handlers: Vec<(u8, IrqHandler)>,
    eoi: Vec<u8>,
    enabled: bool,
}

impl RecordingController {
    /// Creates a controller with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that have a registered handler, in registration order.
    pub fn lines(&self) -> Vec<u8> {
        self.handlers.iter().map(|&(line, _)| line).collect()
    }

    /// Simulates an interrupt: runs the handler for `line`, then signals EOI.
    ///
    /// Returns `false` if nothing is registered on the line.
    pub fn fire(&mut self, line: u8) -> bool {
        let handler = self
            .handlers
            .iter()
            .rev()
            .find(|&&(registered, _)| registered == line)
            .map(|&(_, handler)| handler);
        match handler {
            Some(handler) => {
                handler();
                self.end_of_interrupt(line);
                true
            }
            None => false,
        }
    }

    /// Lines that received an end-of-interrupt signal.
    pub fn eoi(&self) -> &[u8] {
        &self.eoi
    }

    /// Whether `enable` was called.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl InterruptController for RecordingController {
    fn register_handler(&mut self, line: u8, handler: IrqHandler) {
        self.handlers.push((line, handler));
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn end_of_interrupt(&mut self, line: u8) {
        self.eoi.push(line);
    }
}
