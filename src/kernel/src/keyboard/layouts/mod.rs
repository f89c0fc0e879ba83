//! Built-in keyboard layouts.

mod dvorak;
mod us;

use super::layout::Layout;
use nappis_common::ModifierSlot;

/// Scancodes of the standard PC modifier keys, in slot order:
/// left ctrl, alt, (unused), left shift, right shift, caps, scroll, num lock.
pub const PC_MODIFIERS: [u8; ModifierSlot::COUNT] = [29, 56, 0, 42, 54, 58, 70, 69];

/// US QWERTY.
pub static US: Layout = us::LAYOUT;

/// US Dvorak.
pub static DVORAK: Layout = dvorak::LAYOUT;

/// Layout installed by driver initialization.
pub static DEFAULT: &Layout = &US;

/// Every compiled-in layout.
pub static BUILTIN: [&Layout; 2] = [&US, &DVORAK];

/// Looks up a built-in layout by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static Layout> {
    BUILTIN
        .iter()
        .copied()
        .find(|layout| layout.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nappis_common::KeyCode;

    fn key(code: u8) -> KeyCode {
        KeyCode::new(code).unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("us").map(Layout::name), Some("us"));
        assert_eq!(by_name("DVORAK").map(Layout::name), Some("dvorak"));
        assert!(by_name("azerty").is_none());
        assert!(core::ptr::eq(DEFAULT, &US));
    }

    #[test]
    fn test_us_rows_are_aligned() {
        let us = &US;
        assert_eq!(us.normal(key(1)), 27);
        assert_eq!(us.normal(key(2)), b'1');
        assert_eq!(us.normal(key(14)), 8);
        assert_eq!(us.normal(key(16)), b'q');
        assert_eq!(us.normal(key(28)), b'\n');
        assert_eq!(us.normal(key(30)), b'a');
        assert_eq!(us.normal(key(31)), b's');
        assert_eq!(us.normal(key(41)), b'`');
        assert_eq!(us.normal(key(43)), b'\\');
        assert_eq!(us.normal(key(50)), b'm');
        assert_eq!(us.normal(key(53)), b'/');
        assert_eq!(us.normal(key(55)), b'*');
        assert_eq!(us.normal(key(57)), b' ');
        assert_eq!(us.normal(key(74)), b'-');
        assert_eq!(us.normal(key(78)), b'+');
        assert_eq!(us.normal(key(88)), 0);

        assert_eq!(us.shifted(key(3)), b'@');
        assert_eq!(us.shifted(key(30)), b'A');
        assert_eq!(us.shifted(key(40)), b'"');
        assert_eq!(us.shifted(key(53)), b'?');
    }

    #[test]
    fn test_modifier_keys_produce_no_character() {
        for layout in BUILTIN.iter() {
            for &code in PC_MODIFIERS.iter().filter(|&&c| c != 0) {
                assert_eq!(layout.normal(key(code)), 0, "{} {}", layout.name(), code);
                assert_eq!(layout.shifted(key(code)), 0, "{} {}", layout.name(), code);
            }
        }
    }

    #[test]
    fn test_dvorak_differs_from_us() {
        assert_eq!(DVORAK.normal(key(16)), b'\'');
        assert_eq!(DVORAK.normal(key(31)), b'o');
        assert_eq!(DVORAK.shifted(key(44)), b':');
        assert_eq!(DVORAK.normal(key(30)), US.normal(key(30)));
    }
}
