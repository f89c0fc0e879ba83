//! The per-interrupt scancode state machine.
//!
//! Every press of a modifier key flips its bit. Releases clear only the five
//! non-latching slots (ctrl, alt, reserved, both shifts), so lock keys change
//! state on press alone while the others stay active only while held.
//!
//! Typematic repeat resends the make code of a held key, which flips a held
//! modifier off again. This matches the established behavior and is kept.

use super::layout::Layout;
use super::registry::LayoutRegistry;
use super::translate::translate;
use nappis_common::{KeyCode, KeyEvent, ModifierSlot};
use nappis_hal::CharacterSink;

/// What a single dispatched byte did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A modifier key was pressed and its bit flipped to `active`.
    Toggled {
        /// The modifier that changed.
        slot: ModifierSlot,
        /// Its state after the press.
        active: bool,
    },
    /// A non-latching modifier was released and its bit cleared.
    Released(ModifierSlot),
    /// A character was handed to the sink (possibly the "no character" value).
    Emitted(u8),
    /// A release that touches no modifier.
    Ignored,
    /// A press whose code lies outside the character maps; dropped.
    OutOfRange(u8),
    /// The driver is not initialized; the byte was drained and dropped.
    NotReady,
}

/// Runs one raw byte through the state machine.
///
/// Reads the active layout once, so a concurrent layout switch takes effect
/// from the next byte on.
pub fn dispatch<S>(registry: &LayoutRegistry, byte: u8, sink: &mut S) -> Dispatch
where
    S: CharacterSink + ?Sized,
{
    let layout = registry.active();
    match KeyEvent::from_byte(byte) {
        KeyEvent::Release(code) => release(registry, layout, code),
        KeyEvent::Press(code) => press(registry, layout, code, sink),
    }
}

fn release(registry: &LayoutRegistry, layout: &Layout, code: u8) -> Dispatch {
    match layout.transient_slot_for(code) {
        Some(slot) => {
            registry.modifiers().clear(slot);
            Dispatch::Released(slot)
        }
        None => Dispatch::Ignored,
    }
}

fn press<S>(registry: &LayoutRegistry, layout: &Layout, code: u8, sink: &mut S) -> Dispatch
where
    S: CharacterSink + ?Sized,
{
    if let Some(slot) = layout.modifier_slot_for(code) {
        let active = registry.modifiers().toggle(slot);
        return Dispatch::Toggled { slot, active };
    }

    let Some(key) = KeyCode::new(code) else {
        log::trace!("dropping out-of-range scancode {:#04x}", code);
        return Dispatch::OutOfRange(code);
    };

    let ch = translate(key, registry.modifiers().get(), layout);
    sink.emit_character(ch);
    Dispatch::Emitted(ch)
}
