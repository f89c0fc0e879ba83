//! Raw scancode classification (scan code set 1, base make/break codes).

/// Number of entries in each character map (codes 0 to 88).
pub const MAP_LEN: usize = 89;

/// Bit set in a break (release) code.
pub const RELEASE_BIT: u8 = 0x80;

/// Character map value for keys that produce no character.
pub const NO_CHAR: u8 = 0;

/// Modifier list value for an unused slot. Hardware never sends it.
pub const UNUSED_SLOT: u8 = 0;

/// A raw byte split into press or release of a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Make code: the key went down (or auto-repeated).
    Press(u8),
    /// Break code with the release bit stripped.
    Release(u8),
}

impl KeyEvent {
    /// Classifies a byte read from the keyboard port.
    pub const fn from_byte(byte: u8) -> Self {
        if byte & RELEASE_BIT != 0 {
            KeyEvent::Release(byte & !RELEASE_BIT)
        } else {
            KeyEvent::Press(byte)
        }
    }

    /// The physical key code (low seven bits).
    pub const fn code(self) -> u8 {
        match self {
            KeyEvent::Press(code) | KeyEvent::Release(code) => code,
        }
    }
}

/// A key code known to lie inside the character maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(u8);

impl KeyCode {
    /// Returns `None` for codes at or beyond [`MAP_LEN`].
    pub const fn new(code: u8) -> Option<Self> {
        if (code as usize) < MAP_LEN {
            Some(KeyCode(code))
        } else {
            None
        }
    }

    /// The raw code.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// The code as a map index.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}
