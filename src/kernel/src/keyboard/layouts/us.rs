//! US QWERTY.

use super::PC_MODIFIERS;
use crate::keyboard::layout::Layout;
use nappis_common::scancode::MAP_LEN;

#[rustfmt::skip]
const NORMAL: [u8; MAP_LEN] = [
    // 0x00..=0x0E: escape, number row, backspace
    0,     27,    b'1',  b'2',  b'3',  b'4',  b'5',  b'6',  b'7',  b'8',  b'9',  b'0',  b'-',  b'=',  8,
    // 0x0F..=0x1C: tab, top row, enter
    b'\t', b'q',  b'w',  b'e',  b'r',  b't',  b'y',  b'u',  b'i',  b'o',  b'p',  b'[',  b']',  b'\n',
    // 0x1D..=0x29: left ctrl, home row
    0,     b'a',  b's',  b'd',  b'f',  b'g',  b'h',  b'j',  b'k',  b'l',  b';',  b'\'', b'`',
    // 0x2A..=0x36: left shift, bottom row, right shift
    0,     b'\\', b'z',  b'x',  b'c',  b'v',  b'b',  b'n',  b'm',  b',',  b'.',  b'/',  0,
    // 0x37..=0x3A: keypad *, alt, space, caps lock
    b'*',  0,     b' ',  0,
    // 0x3B..=0x44: F1 to F10
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    // 0x45..=0x53: num lock, scroll lock, keypad
    0,     0,     0,     0,     0,     b'-',  0,     0,     0,     b'+',  0,     0,     0,     0,     0,
    // 0x54..=0x58: unassigned, F11, F12
    0,     0,     0,     0,     0,
];

#[rustfmt::skip]
const SHIFTED: [u8; MAP_LEN] = [
    0,     27,    b'!',  b'@',  b'#',  b'$',  b'%',  b'^',  b'&',  b'*',  b'(',  b')',  b'_',  b'+',  8,
    b'\t', b'Q',  b'W',  b'E',  b'R',  b'T',  b'Y',  b'U',  b'I',  b'O',  b'P',  b'{',  b'}',  b'\n',
    0,     b'A',  b'S',  b'D',  b'F',  b'G',  b'H',  b'J',  b'K',  b'L',  b':',  b'"',  b'~',
    0,     b'|',  b'Z',  b'X',  b'C',  b'V',  b'B',  b'N',  b'M',  b'<',  b'>',  b'?',  0,
    b'*',  0,     b' ',  0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     b'-',  0,     0,     0,     b'+',  0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,
];

pub(super) const LAYOUT: Layout = Layout::new("us", NORMAL, SHIFTED, PC_MODIFIERS);
