//! String literal scanning and escape decoding.
//!
//! The escape decoder is shared with the template scanner; templates
//! suppress diagnostics and defer the invalid-escape judgement to the
//! parser, so every reporting site is gated on `in_template`.

use crate::chars::{self, Chars};
use crate::context::{Context, context_has};
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, TokenFlags, TokenValue};
use crate::token::Token;

/// Outcome of decoding one escape sequence into the scratch buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EscapeResult {
    Ok,
    /// Malformed or contextually illegal escape. In strings a diagnostic
    /// has been recorded; in templates the caller flags the token.
    Invalid,
}

impl ParserState {
    /// The cursor is on the opening quote.
    pub(crate) fn scan_string_literal(&mut self, context: u32) -> Token {
        let quote = self.next_code_point;
        self.advance();
        self.scratch.clear();
        let mut segment_start = self.index;
        let mut has_escape = false;
        let mut invalid = false;

        loop {
            if self.at_end() {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedString, self.token_pos);
                return Token::Error;
            }
            let cp = self.next_code_point;
            if cp == quote {
                let cooked = if has_escape {
                    let run = self.slice(segment_start, self.index);
                    self.scratch.push_str(&run);
                    self.scratch.clone()
                } else {
                    self.slice(segment_start, self.index)
                };
                self.advance();
                if invalid {
                    self.token_value = TokenValue::None;
                    return Token::Error;
                }
                self.token_value = TokenValue::Str(cooked);
                return Token::StringLiteral;
            }
            if cp == Chars::BACKSLASH {
                let run = self.slice(segment_start, self.index);
                self.scratch.push_str(&run);
                has_escape = true;
                self.advance();
                if self.scan_escape_sequence(context, false) == EscapeResult::Invalid {
                    invalid = true;
                }
                segment_start = self.index;
                continue;
            }
            if cp == Chars::LINE_FEED || cp == Chars::CARRIAGE_RETURN {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedString, self.token_pos);
                return Token::Error;
            }
            // LS and PS are legal inside strings but still count as line
            // terminators for position bookkeeping
            if cp == Chars::LINE_SEPARATOR || cp == Chars::PARAGRAPH_SEPARATOR {
                self.consume_line_terminator();
                continue;
            }
            self.advance();
        }
    }

    /// Decode one escape sequence; the cursor is just past the backslash.
    /// Cooked output is appended to the scratch buffer.
    pub(crate) fn scan_escape_sequence(&mut self, context: u32, in_template: bool) -> EscapeResult {
        if self.at_end() {
            // the enclosing scanner reports the unterminated literal
            return EscapeResult::Invalid;
        }
        let cp = self.next_code_point;
        match cp {
            Chars::LOWER_N => {
                self.advance();
                self.scratch.push('\n');
                EscapeResult::Ok
            }
            Chars::LOWER_R => {
                self.advance();
                self.scratch.push('\r');
                EscapeResult::Ok
            }
            Chars::LOWER_T => {
                self.advance();
                self.scratch.push('\t');
                EscapeResult::Ok
            }
            Chars::LOWER_B => {
                self.advance();
                self.scratch.push('\u{8}');
                EscapeResult::Ok
            }
            Chars::LOWER_F => {
                self.advance();
                self.scratch.push('\u{C}');
                EscapeResult::Ok
            }
            Chars::LOWER_V => {
                self.advance();
                self.scratch.push('\u{B}');
                EscapeResult::Ok
            }
            Chars::LOWER_X => {
                let escape_pos = self.index - 1;
                self.advance();
                let high = chars::hex_digit_value(self.next_code_point);
                let low = chars::hex_digit_value(self.peek(1));
                match (high, low) {
                    (Some(h), Some(l)) => {
                        self.advance();
                        self.advance();
                        self.scratch
                            .push(char::from_u32(h * 16 + l).unwrap_or('\u{FFFD}'));
                        EscapeResult::Ok
                    }
                    _ => {
                        if !in_template {
                            self.diagnostics
                                .error(DiagnosticKind::InvalidHexEscape, escape_pos);
                        }
                        EscapeResult::Invalid
                    }
                }
            }
            Chars::LOWER_U => {
                self.advance();
                match self.scan_unicode_escape_value(!in_template) {
                    Some(value) => {
                        // a high surrogate escape pairs with an immediately
                        // following low surrogate escape
                        if chars::is_high_surrogate(value)
                            && self.next_code_point == Chars::BACKSLASH
                            && self.peek(1) == Chars::LOWER_U
                        {
                            let saved = self.index;
                            self.advance();
                            self.advance();
                            if let Some(low) = self.scan_unicode_escape_value(false)
                                && chars::is_low_surrogate(low)
                            {
                                let scalar = chars::combine_surrogates(value, low);
                                if let Some(c) = char::from_u32(scalar) {
                                    self.scratch.push(c);
                                    return EscapeResult::Ok;
                                }
                            }
                            self.rewind(saved);
                        }
                        self.scratch.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
                        EscapeResult::Ok
                    }
                    None => EscapeResult::Invalid,
                }
            }
            Chars::ZERO..=Chars::SEVEN => self.scan_octal_escape(context, in_template),
            Chars::EIGHT | Chars::NINE => {
                if in_template {
                    self.advance();
                    return EscapeResult::Invalid;
                }
                if context_has(context, Context::Strict)
                    || context_has(context, Context::DisableWebCompat)
                {
                    self.diagnostics
                        .error(DiagnosticKind::StrictOctalEscape, self.index);
                    self.advance();
                    return EscapeResult::Invalid;
                }
                // web compat tolerates `\8`/`\9` as the bare digit
                self.scratch.push(cp as u8 as char);
                self.advance();
                EscapeResult::Ok
            }
            Chars::CARRIAGE_RETURN
            | Chars::LINE_FEED
            | Chars::LINE_SEPARATOR
            | Chars::PARAGRAPH_SEPARATOR => {
                // line continuation contributes nothing to the cooked value
                self.consume_line_terminator();
                EscapeResult::Ok
            }
            _ => {
                if chars::is_high_surrogate(cp) && chars::is_low_surrogate(self.peek(1)) {
                    let scalar = chars::combine_surrogates(cp, self.peek(1));
                    if let Some(c) = char::from_u32(scalar) {
                        self.scratch.push(c);
                    }
                    self.advance();
                    self.advance();
                    return EscapeResult::Ok;
                }
                self.scratch.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
                self.advance();
                EscapeResult::Ok
            }
        }
    }

    /// Legacy octal escape (`\0` through `\377`). `\0` with no digit
    /// following is NUL everywhere; everything else is Annex B territory.
    fn scan_octal_escape(&mut self, context: u32, in_template: bool) -> EscapeResult {
        let first = self.next_code_point - Chars::ZERO;
        if first == 0 && !chars::is_decimal_digit(self.peek(1)) {
            self.advance();
            self.scratch.push('\0');
            return EscapeResult::Ok;
        }
        if in_template {
            // templates never allow legacy octal
            self.advance();
            while chars::is_octal_digit(self.next_code_point) {
                self.advance();
            }
            return EscapeResult::Invalid;
        }
        if context_has(context, Context::Strict) || context_has(context, Context::DisableWebCompat)
        {
            self.diagnostics
                .error(DiagnosticKind::StrictOctalEscape, self.index);
            self.advance();
            while chars::is_octal_digit(self.next_code_point) {
                self.advance();
            }
            return EscapeResult::Invalid;
        }
        let mut value = first;
        self.advance();
        if chars::is_octal_digit(self.next_code_point) {
            value = value * 8 + (self.next_code_point - Chars::ZERO);
            self.advance();
            if first <= 3 && chars::is_octal_digit(self.next_code_point) {
                value = value * 8 + (self.next_code_point - Chars::ZERO);
                self.advance();
            }
        }
        self.scratch.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
        EscapeResult::Ok
    }
}
