//! Modifier bitmask and the fixed meaning of each bit.

use bitflags::bitflags;

bitflags! {
    /// Live modifier state, one bit per [`ModifierSlot`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Modifiers: u8 {
        const LEFT_CTRL   = 1 << 0;
        const ALT         = 1 << 1;
        const RESERVED    = 1 << 2; // no key assigned
        const LEFT_SHIFT  = 1 << 3;
        const RIGHT_SHIFT = 1 << 4;
        const CAPS_LOCK   = 1 << 5;
        const SCROLL_LOCK = 1 << 6;
        const NUM_LOCK    = 1 << 7;
    }
}

impl Modifiers {
    /// Bits that switch translation to the shifted map (0x38).
    pub const CASE_SELECT: Modifiers = Modifiers::LEFT_SHIFT
        .union(Modifiers::RIGHT_SHIFT)
        .union(Modifiers::CAPS_LOCK);

    /// Returns true when a key should read from the shifted map.
    ///
    /// Control always wins: with control held the unshifted map is used even
    /// if shift or caps lock is also active.
    pub const fn selects_shifted(self) -> bool {
        self.intersects(Self::CASE_SELECT) && !self.contains(Self::LEFT_CTRL)
    }
}

/// Position of a modifier key in a layout's modifier list.
///
/// The slot index is the bit index in [`Modifiers`]. Assignments are fixed
/// for every layout; layouts only choose which scancode drives each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ModifierSlot {
    /// Left control.
    LeftCtrl = 0,
    /// Alt.
    Alt = 1,
    /// Unassigned slot.
    Reserved = 2,
    /// Left shift.
    LeftShift = 3,
    /// Right shift.
    RightShift = 4,
    /// Caps lock (latching).
    CapsLock = 5,
    /// Scroll lock (latching).
    ScrollLock = 6,
    /// Num lock (latching).
    NumLock = 7,
}

impl ModifierSlot {
    /// Number of modifier slots in a layout.
    pub const COUNT: usize = 8;

    /// Number of leading slots that are cleared again on key release.
    pub const TRANSIENT_COUNT: usize = 5;

    /// All slots in bit order.
    pub const ALL: [ModifierSlot; Self::COUNT] = [
        ModifierSlot::LeftCtrl,
        ModifierSlot::Alt,
        ModifierSlot::Reserved,
        ModifierSlot::LeftShift,
        ModifierSlot::RightShift,
        ModifierSlot::CapsLock,
        ModifierSlot::ScrollLock,
        ModifierSlot::NumLock,
    ];

    /// Returns the slot for a bit index, if it is in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the bit index of this slot.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-bit mask for this slot.
    pub const fn flag(self) -> Modifiers {
        Modifiers::from_bits_retain(1 << (self as u8))
    }

    /// Lock keys keep their state across release; only a new press flips them.
    pub const fn is_latching(self) -> bool {
        self.index() >= Self::TRANSIENT_COUNT
    }

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ModifierSlot::LeftCtrl => "left-ctrl",
            ModifierSlot::Alt => "alt",
            ModifierSlot::Reserved => "reserved",
            ModifierSlot::LeftShift => "left-shift",
            ModifierSlot::RightShift => "right-shift",
            ModifierSlot::CapsLock => "caps-lock",
            ModifierSlot::ScrollLock => "scroll-lock",
            ModifierSlot::NumLock => "num-lock",
        }
    }
}
