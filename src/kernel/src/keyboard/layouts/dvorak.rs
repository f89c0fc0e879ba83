//! US Dvorak (simplified, ANSI positions).

use super::PC_MODIFIERS;
use crate::keyboard::layout::Layout;
use nappis_common::scancode::MAP_LEN;

#[rustfmt::skip]
const NORMAL: [u8; MAP_LEN] = [
    0,     27,    b'1',  b'2',  b'3',  b'4',  b'5',  b'6',  b'7',  b'8',  b'9',  b'0',  b'[',  b']',  8,
    b'\t', b'\'', b',',  b'.',  b'p',  b'y',  b'f',  b'g',  b'c',  b'r',  b'l',  b'/',  b'=',  b'\n',
    0,     b'a',  b'o',  b'e',  b'u',  b'i',  b'd',  b'h',  b't',  b'n',  b's',  b'-',  b'`',
    0,     b'\\', b';',  b'q',  b'j',  b'k',  b'x',  b'b',  b'm',  b'w',  b'v',  b'z',  0,
    b'*',  0,     b' ',  0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     b'-',  0,     0,     0,     b'+',  0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,
];

#[rustfmt::skip]
const SHIFTED: [u8; MAP_LEN] = [
    0,     27,    b'!',  b'@',  b'#',  b'$',  b'%',  b'^',  b'&',  b'*',  b'(',  b')',  b'{',  b'}',  8,
    b'\t', b'"',  b'<',  b'>',  b'P',  b'Y',  b'F',  b'G',  b'C',  b'R',  b'L',  b'?',  b'+',  b'\n',
    0,     b'A',  b'O',  b'E',  b'U',  b'I',  b'D',  b'H',  b'T',  b'N',  b'S',  b'_',  b'~',
    0,     b'|',  b':',  b'Q',  b'J',  b'K',  b'X',  b'B',  b'M',  b'W',  b'V',  b'Z',  0,
    b'*',  0,     b' ',  0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     b'-',  0,     0,     0,     b'+',  0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,
];

pub(super) const LAYOUT: Layout = Layout::new("dvorak", NORMAL, SHIFTED, PC_MODIFIERS);
