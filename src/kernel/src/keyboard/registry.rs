//! The active layout and the live modifier mask.

use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

use super::layout::Layout;
use nappis_common::{LayoutError, ModifierSlot, Modifiers};

/// Live modifier bitmask.
///
/// Written only by the dispatcher; each update is a single atomic
/// read-modify-write so a concurrent snapshot never sees a torn mask.
#[derive(Debug)]
pub struct ModifierState(AtomicU8);

impl ModifierState {
    /// All modifiers inactive.
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Snapshot of the current mask.
    pub fn get(&self) -> Modifiers {
        Modifiers::from_bits_retain(self.0.load(Ordering::Relaxed))
    }

    /// Whether `slot` is currently active.
    pub fn is_active(&self, slot: ModifierSlot) -> bool {
        self.get().contains(slot.flag())
    }

    /// Flips `slot` and returns its new state.
    pub fn toggle(&self, slot: ModifierSlot) -> bool {
        let bit = slot.flag().bits();
        self.0.fetch_xor(bit, Ordering::Relaxed) & bit == 0
    }

    /// Deactivates `slot`, leaving every other bit untouched.
    pub fn clear(&self, slot: ModifierSlot) {
        self.0.fetch_and(!slot.flag().bits(), Ordering::Relaxed);
    }

    /// Deactivates everything.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

impl Default for ModifierState {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the single active [`Layout`] and the modifier state it is read with.
///
/// The active layout is one pointer, replaced with a single atomic swap, so a
/// dispatch running concurrently with [`switch_layout`](Self::switch_layout)
/// sees either the old layout or the new one in full.
#[derive(Debug)]
pub struct LayoutRegistry {
    // Only ever holds pointers derived from `&'static Layout`.
    active: AtomicPtr<Layout>,
    modifiers: ModifierState,
}

impl LayoutRegistry {
    /// Creates a registry with `layout` active and no modifiers set.
    pub const fn new(layout: &'static Layout) -> Self {
        Self {
            active: AtomicPtr::new(layout as *const Layout as *mut Layout),
            modifiers: ModifierState::new(),
        }
    }

    /// The layout currently used for translation.
    pub fn active(&self) -> &'static Layout {
        // SAFETY: `active` is only written from `&'static Layout` references
        // (in `new` and `switch_layout`) and the pointee is never mutated.
        unsafe { &*self.active.load(Ordering::Acquire) }
    }

    /// The live modifier mask.
    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    /// Makes `layout` active and returns the layout it replaced.
    ///
    /// Modifier state carries over unchanged. A layout that fails
    /// [`Layout::validate`] is rejected and the current one stays active.
    pub fn switch_layout(
        &self,
        layout: &'static Layout,
    ) -> Result<&'static Layout, LayoutError> {
        layout.validate()?;
        let previous = self
            .active
            .swap(layout as *const Layout as *mut Layout, Ordering::AcqRel);
        // SAFETY: see `active`.
        Ok(unsafe { &*previous })
    }
}
