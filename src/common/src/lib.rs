//! Types shared between the Nappis keyboard driver and the code that hosts it.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod modifier;
pub mod scancode;

pub use error::{DriverError, LayoutError};
pub use modifier::{ModifierSlot, Modifiers};
pub use scancode::{KeyCode, KeyEvent};
