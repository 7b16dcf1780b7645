//! Code-unit constants used by the scanner.
//!
//! The scanner operates on UTF-16 code units widened to `u32`, so every
//! constant here is a `u32`. Only characters the dispatcher and the literal
//! scanners actually branch on are named; general identifier and whitespace
//! classification lives in `crate::unicode`.

#![allow(dead_code)] // the table is kept complete for all scanner branches

/// Named code points.
pub struct Chars;

impl Chars {
    // Line terminators
    pub const LINE_FEED: u32 = 0x0A;
    pub const CARRIAGE_RETURN: u32 = 0x0D;
    pub const LINE_SEPARATOR: u32 = 0x2028;
    pub const PARAGRAPH_SEPARATOR: u32 = 0x2029;

    // Horizontal whitespace
    pub const TAB: u32 = 0x09;
    pub const VERTICAL_TAB: u32 = 0x0B;
    pub const FORM_FEED: u32 = 0x0C;
    pub const SPACE: u32 = 0x20;
    pub const NON_BREAKING_SPACE: u32 = 0xA0;
    pub const BYTE_ORDER_MARK: u32 = 0xFEFF;

    // Joiners permitted in identifier parts
    pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;
    pub const ZERO_WIDTH_JOINER: u32 = 0x200D;

    // Digits
    pub const ZERO: u32 = 0x30;
    pub const ONE: u32 = 0x31;
    pub const SEVEN: u32 = 0x37;
    pub const EIGHT: u32 = 0x38;
    pub const NINE: u32 = 0x39;

    // Letters the literal scanners branch on
    pub const LOWER_B: u32 = 0x62;
    pub const LOWER_E: u32 = 0x65;
    pub const LOWER_F: u32 = 0x66;
    pub const LOWER_N: u32 = 0x6E;
    pub const LOWER_O: u32 = 0x6F;
    pub const LOWER_R: u32 = 0x72;
    pub const LOWER_T: u32 = 0x74;
    pub const LOWER_U: u32 = 0x75;
    pub const LOWER_V: u32 = 0x76;
    pub const LOWER_X: u32 = 0x78;
    pub const UPPER_B: u32 = 0x42;
    pub const UPPER_E: u32 = 0x45;
    pub const UPPER_O: u32 = 0x4F;
    pub const UPPER_X: u32 = 0x58;

    // Punctuation
    pub const EXCLAMATION: u32 = 0x21; // !
    pub const DOUBLE_QUOTE: u32 = 0x22; // "
    pub const HASH: u32 = 0x23; // #
    pub const DOLLAR: u32 = 0x24; // $
    pub const PERCENT: u32 = 0x25; // %
    pub const AMPERSAND: u32 = 0x26; // &
    pub const SINGLE_QUOTE: u32 = 0x27; // '
    pub const LEFT_PAREN: u32 = 0x28; // (
    pub const RIGHT_PAREN: u32 = 0x29; // )
    pub const ASTERISK: u32 = 0x2A; // *
    pub const PLUS: u32 = 0x2B; // +
    pub const COMMA: u32 = 0x2C; // ,
    pub const HYPHEN: u32 = 0x2D; // -
    pub const PERIOD: u32 = 0x2E; // .
    pub const SLASH: u32 = 0x2F; // /
    pub const COLON: u32 = 0x3A; // :
    pub const SEMICOLON: u32 = 0x3B; // ;
    pub const LESS_THAN: u32 = 0x3C; // <
    pub const EQUALS: u32 = 0x3D; // =
    pub const GREATER_THAN: u32 = 0x3E; // >
    pub const QUESTION: u32 = 0x3F; // ?
    pub const LEFT_BRACKET: u32 = 0x5B; // [
    pub const BACKSLASH: u32 = 0x5C; // \
    pub const RIGHT_BRACKET: u32 = 0x5D; // ]
    pub const CARET: u32 = 0x5E; // ^
    pub const UNDERSCORE: u32 = 0x5F; // _
    pub const BACKTICK: u32 = 0x60; // `
    pub const LEFT_BRACE: u32 = 0x7B; // {
    pub const BAR: u32 = 0x7C; // |
    pub const RIGHT_BRACE: u32 = 0x7D; // }
    pub const TILDE: u32 = 0x7E; // ~

    // Surrogate ranges
    pub const HIGH_SURROGATE_START: u32 = 0xD800;
    pub const HIGH_SURROGATE_END: u32 = 0xDBFF;
    pub const LOW_SURROGATE_START: u32 = 0xDC00;
    pub const LOW_SURROGATE_END: u32 = 0xDFFF;
}

#[inline]
pub fn is_decimal_digit(cp: u32) -> bool {
    (Chars::ZERO..=Chars::NINE).contains(&cp)
}

#[inline]
pub fn is_octal_digit(cp: u32) -> bool {
    (Chars::ZERO..=Chars::SEVEN).contains(&cp)
}

#[inline]
pub fn is_binary_digit(cp: u32) -> bool {
    cp == Chars::ZERO || cp == Chars::ONE
}

#[inline]
pub fn is_hex_digit(cp: u32) -> bool {
    hex_digit_value(cp).is_some()
}

/// Numeric value of a hex digit code point, or `None`.
#[inline]
pub fn hex_digit_value(cp: u32) -> Option<u32> {
    match cp {
        0x30..=0x39 => Some(cp - 0x30),
        0x41..=0x46 => Some(cp - 0x41 + 10),
        0x61..=0x66 => Some(cp - 0x61 + 10),
        _ => None,
    }
}

#[inline]
pub fn is_high_surrogate(cp: u32) -> bool {
    (Chars::HIGH_SURROGATE_START..=Chars::HIGH_SURROGATE_END).contains(&cp)
}

#[inline]
pub fn is_low_surrogate(cp: u32) -> bool {
    (Chars::LOW_SURROGATE_START..=Chars::LOW_SURROGATE_END).contains(&cp)
}

/// Combine a surrogate pair into its supplementary-plane scalar value.
#[inline]
pub fn combine_surrogates(high: u32, low: u32) -> u32 {
    0x10000 + ((high - Chars::HIGH_SURROGATE_START) << 10) + (low - Chars::LOW_SURROGATE_START)
}
