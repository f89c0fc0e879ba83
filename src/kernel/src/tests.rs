//! Boot-time keyboard self-test.
//!
//! Replays known key sequences through a private registry, so the live
//! driver state is never touched. Any failure panics.

use crate::keyboard::{dispatch, layouts, Dispatch, LayoutRegistry};
use nappis_common::scancode::RELEASE_BIT;
use nappis_common::{ModifierSlot, Modifiers};
use nappis_hal::CharacterSink;

const A: u8 = 30;
const LEFT_CTRL: u8 = 29;
const LEFT_SHIFT: u8 = 42;
const CAPS_LOCK: u8 = 58;

/// Remembers the last character emitted.
#[derive(Default)]
struct LastChar {
    last: Option<u8>,
    count: usize,
}

impl CharacterSink for LastChar {
    fn emit_character(&mut self, ch: u8) {
        self.last = Some(ch);
        self.count += 1;
    }
}

/// Runs all keyboard self-tests.
pub fn run_all() {
    log::info!("Running keyboard self-tests...");

    test_shift_and_control();
    test_caps_lock_latch();
    test_out_of_range();
    test_layout_switch();

    log::info!("All keyboard self-tests passed!");
}

fn press(registry: &LayoutRegistry, sink: &mut LastChar, byte: u8) -> Option<u8> {
    match dispatch(registry, byte, sink) {
        Dispatch::Emitted(ch) => Some(ch),
        _ => None,
    }
}

fn test_shift_and_control() {
    log::info!("test_shift_and_control... ");
    let registry = LayoutRegistry::new(&layouts::US);
    let mut sink = LastChar::default();

    assert_eq!(press(&registry, &mut sink, A), Some(b'a'));
    press(&registry, &mut sink, LEFT_SHIFT);
    assert_eq!(press(&registry, &mut sink, A), Some(b'A'));
    press(&registry, &mut sink, LEFT_CTRL);
    assert_eq!(registry.modifiers().get().bits(), 0x09);
    assert_eq!(press(&registry, &mut sink, A), Some(b'a'));
    press(&registry, &mut sink, LEFT_CTRL | RELEASE_BIT);
    press(&registry, &mut sink, LEFT_SHIFT | RELEASE_BIT);
    assert_eq!(registry.modifiers().get(), Modifiers::empty());
    log::info!("[ok]");
}

fn test_caps_lock_latch() {
    log::info!("test_caps_lock_latch... ");
    let registry = LayoutRegistry::new(&layouts::US);
    let mut sink = LastChar::default();

    press(&registry, &mut sink, CAPS_LOCK);
    press(&registry, &mut sink, CAPS_LOCK | RELEASE_BIT);
    assert!(registry.modifiers().is_active(ModifierSlot::CapsLock));
    assert_eq!(press(&registry, &mut sink, A), Some(b'A'));
    press(&registry, &mut sink, CAPS_LOCK);
    assert_eq!(press(&registry, &mut sink, A), Some(b'a'));
    log::info!("[ok]");
}

fn test_out_of_range() {
    log::info!("test_out_of_range... ");
    let registry = LayoutRegistry::new(&layouts::US);
    let mut sink = LastChar::default();

    for code in 89..RELEASE_BIT {
        assert_eq!(dispatch(&registry, code, &mut sink), Dispatch::OutOfRange(code));
    }
    assert_eq!(sink.count, 0);
    assert!(sink.last.is_none());
    log::info!("[ok]");
}

fn test_layout_switch() {
    log::info!("test_layout_switch... ");
    let registry = LayoutRegistry::new(&layouts::US);
    let mut sink = LastChar::default();

    press(&registry, &mut sink, CAPS_LOCK);
    registry
        .switch_layout(&layouts::DVORAK)
        .expect("dvorak layout rejected");
    assert!(registry.modifiers().is_active(ModifierSlot::CapsLock));
    assert_eq!(press(&registry, &mut sink, 31), Some(b'O'));
    log::info!("[ok]");
}

#[cfg(test)]
mod unit {
    #[test]
    fn test_boot_self_test_passes() {
        super::run_all();
    }
}
