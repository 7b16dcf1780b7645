//! Identifier and whitespace classification over the full Unicode range.
//!
//! ASCII is answered by bit-packed 32-bit lookup words; everything above
//! 0x7F goes to the committed Unicode identifier tables. ECMAScript's
//! ID_Start/ID_Continue differ from XID_Start/XID_Continue only in a
//! handful of code points, of which U+309B and U+309C are the two that are
//! valid in identifiers, so they are patched in explicitly.

use crate::chars::Chars;

/// ASCII ID_Start bitmap: `$`, `A`-`Z`, `_`, `a`-`z`.
/// Word layout: bit `cp & 31` of word `cp >> 5`.
const ASCII_ID_START: [u32; 4] = [0x0000_0000, 0x0000_0010, 0x87FF_FFFE, 0x07FF_FFFE];

/// ASCII ID_Continue bitmap: ID_Start plus `0`-`9`.
const ASCII_ID_CONTINUE: [u32; 4] = [0x0000_0000, 0x03FF_0010, 0x87FF_FFFE, 0x07FF_FFFE];

#[inline]
fn ascii_bit(table: &[u32; 4], cp: u32) -> bool {
    (table[(cp >> 5) as usize] >> (cp & 31)) & 1 != 0
}

/// Can `cp` begin an identifier?
#[inline]
pub fn is_id_start(cp: u32) -> bool {
    if cp < 0x80 {
        return ascii_bit(&ASCII_ID_START, cp);
    }
    cp == 0x309B
        || cp == 0x309C
        || char::from_u32(cp).is_some_and(unicode_ident::is_xid_start)
}

/// Can `cp` continue an identifier? ZWNJ and ZWJ are permitted.
#[inline]
pub fn is_id_continue(cp: u32) -> bool {
    if cp < 0x80 {
        return ascii_bit(&ASCII_ID_CONTINUE, cp);
    }
    cp == Chars::ZERO_WIDTH_NON_JOINER
        || cp == Chars::ZERO_WIDTH_JOINER
        || cp == 0x309B
        || cp == 0x309C
        || char::from_u32(cp).is_some_and(unicode_ident::is_xid_continue)
}

/// ASCII identifier-start fast check for the hot loop.
#[inline]
pub fn is_ascii_id_start(cp: u32) -> bool {
    cp < 0x80 && ascii_bit(&ASCII_ID_START, cp)
}

/// ASCII identifier-part fast check for the hot loop.
#[inline]
pub fn is_ascii_id_continue(cp: u32) -> bool {
    cp < 0x80 && ascii_bit(&ASCII_ID_CONTINUE, cp)
}

/// Horizontal whitespace above ASCII: NBSP, ZWNBSP, and the Zs category.
pub fn is_exotic_whitespace(cp: u32) -> bool {
    matches!(
        cp,
        Chars::NON_BREAKING_SPACE
            | 0x1680
            | 0x2000..=0x200A
            | 0x202F
            | 0x205F
            | 0x3000
            | Chars::BYTE_ORDER_MARK
    )
}

#[inline]
pub fn is_line_terminator(cp: u32) -> bool {
    matches!(
        cp,
        Chars::LINE_FEED
            | Chars::CARRIAGE_RETURN
            | Chars::LINE_SEPARATOR
            | Chars::PARAGRAPH_SEPARATOR
    )
}
