//! Per-layout lookup tables.

use nappis_common::scancode::{KeyCode, MAP_LEN, NO_CHAR, RELEASE_BIT, UNUSED_SLOT};
use nappis_common::{LayoutError, ModifierSlot};

/// One physical keyboard arrangement.
///
/// Two parallel character maps indexed by scancode, plus the scancodes that
/// drive each modifier slot. Layouts are immutable and normally `static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: &'static str,
    normal: [u8; MAP_LEN],
    shifted: [u8; MAP_LEN],
    modifier_scancodes: [u8; ModifierSlot::COUNT],
}

impl Layout {
    /// Builds a layout from its tables.
    ///
    /// Use [`UNUSED_SLOT`] for modifier slots without a key.
    pub const fn new(
        name: &'static str,
        normal: [u8; MAP_LEN],
        shifted: [u8; MAP_LEN],
        modifier_scancodes: [u8; ModifierSlot::COUNT],
    ) -> Self {
        Self {
            name,
            normal,
            shifted,
            modifier_scancodes,
        }
    }

    /// Layout name, e.g. `"us"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Character for `code` with no case modifier active.
    pub fn normal(&self, code: KeyCode) -> u8 {
        self.normal[code.as_usize()]
    }

    /// Character for `code` with shift or caps lock active.
    pub fn shifted(&self, code: KeyCode) -> u8 {
        self.shifted[code.as_usize()]
    }

    /// Scancode assigned to `slot`, or `None` for an unused slot.
    pub fn modifier_scancode(&self, slot: ModifierSlot) -> Option<u8> {
        match self.modifier_scancodes[slot.index()] {
            UNUSED_SLOT => None,
            code => Some(code),
        }
    }

    /// First modifier slot driven by `code`, searching all eight slots.
    pub fn modifier_slot_for(&self, code: u8) -> Option<ModifierSlot> {
        self.find_slot(code, ModifierSlot::COUNT)
    }

    /// Like [`modifier_slot_for`](Self::modifier_slot_for) but only over the
    /// non-latching slots, which are the only ones a release affects.
    pub fn transient_slot_for(&self, code: u8) -> Option<ModifierSlot> {
        self.find_slot(code, ModifierSlot::TRANSIENT_COUNT)
    }

    fn find_slot(&self, code: u8, limit: usize) -> Option<ModifierSlot> {
        if code == UNUSED_SLOT {
            return None;
        }
        self.modifier_scancodes[..limit]
            .iter()
            .position(|&candidate| candidate == code)
            .and_then(ModifierSlot::from_index)
    }

    /// Checks that the layout can safely become active.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let has_chars = self
            .normal
            .iter()
            .chain(self.shifted.iter())
            .any(|&ch| ch != NO_CHAR);
        if !has_chars {
            return Err(LayoutError::Empty);
        }

        for (slot, &scancode) in self.modifier_scancodes.iter().enumerate() {
            if scancode == UNUSED_SLOT {
                continue;
            }
            if scancode & RELEASE_BIT != 0 || KeyCode::new(scancode).is_none() {
                return Err(LayoutError::InvalidModifierScancode {
                    slot: slot as u8,
                    scancode,
                });
            }
            if self.modifier_scancodes[..slot].contains(&scancode) {
                return Err(LayoutError::DuplicateModifier { scancode });
            }
        }
        Ok(())
    }
}
