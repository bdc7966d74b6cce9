// ABOUTME: ESC/POS control sequences for styling, feeding, and cutting
// ABOUTME: Maps segment style attributes to raw device command bytes

use crate::catalog::Alignment;

const ESC: u8 = 0x1b;
const GS: u8 = 0x1d;

/// Reset the printer to its power-on state.
pub const INIT: [u8; 2] = [ESC, b'@'];

/// Partial cut with feed.
pub const CUT: [u8; 4] = [GS, b'V', 0x42, 0x00];

pub fn bold(on: bool) -> [u8; 3] {
    [ESC, b'E', on as u8]
}

pub fn italic(on: bool) -> [u8; 2] {
    [ESC, if on { b'4' } else { b'5' }]
}

pub fn align(alignment: Alignment) -> [u8; 3] {
    let n = match alignment {
        Alignment::Left => 0,
        Alignment::Center => 1,
        Alignment::Right => 2,
    };
    [ESC, b'a', n]
}

/// Character size: high nibble selects double width, low nibble double height.
pub fn char_size(double_width: bool, double_height: bool) -> [u8; 3] {
    let mut n = 0;
    if double_width {
        n |= 0x10;
    }
    if double_height {
        n |= 0x01;
    }
    [GS, b'!', n]
}

pub fn feed(lines: u8) -> [u8; 3] {
    [ESC, b'd', lines]
}
