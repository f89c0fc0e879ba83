//! Error types for the keyboard driver.

use core::fmt;

/// Reasons a layout is refused by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutError {
    /// Both character maps hold only the "no character" sentinel.
    Empty,
    /// A modifier slot names a code outside the character maps.
    InvalidModifierScancode {
        /// The offending slot index.
        slot: u8,
        /// The scancode stored in that slot.
        scancode: u8,
    },
    /// Two modifier slots name the same scancode.
    DuplicateModifier {
        /// The repeated scancode.
        scancode: u8,
    },
    /// No built-in layout has the requested name.
    Unknown,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no characters"),
            LayoutError::InvalidModifierScancode { slot, scancode } => write!(
                f,
                "modifier slot {} uses out-of-range scancode {:#04x}",
                slot, scancode
            ),
            LayoutError::DuplicateModifier { scancode } => {
                write!(f, "scancode {:#04x} assigned to more than one modifier", scancode)
            }
            LayoutError::Unknown => write!(f, "unknown keyboard layout"),
        }
    }
}

/// Driver lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DriverError {
    /// `initialize` was called more than once.
    AlreadyInitialized,
    /// The driver has not been initialized yet.
    NotInitialized,
    /// A layout was rejected.
    Layout(LayoutError),
}

impl From<LayoutError> for DriverError {
    fn from(err: LayoutError) -> Self {
        DriverError::Layout(err)
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::AlreadyInitialized => write!(f, "keyboard driver already initialized"),
            DriverError::NotInitialized => write!(f, "keyboard driver not initialized"),
            DriverError::Layout(err) => write!(f, "layout rejected: {}", err),
        }
    }
}
