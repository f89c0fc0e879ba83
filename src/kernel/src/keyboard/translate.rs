//! Scancode to character translation.

use super::layout::Layout;
use nappis_common::{KeyCode, Modifiers};

/// Selects the character for `code` under the given modifier state.
///
/// Shift, right shift or caps lock pick the shifted map unless left control
/// is also active, in which case the unshifted map is always used.
pub fn translate(code: KeyCode, modifiers: Modifiers, layout: &Layout) -> u8 {
    if modifiers.selects_shifted() {
        layout.shifted(code)
    } else {
        layout.normal(code)
    }
}
