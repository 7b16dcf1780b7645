//! Identifier scanning: an ASCII fast path that slices the source
//! directly, and a slow path that cooks Unicode escapes and astral
//! characters into the scratch buffer.

use crate::chars::{self, Chars};
use crate::context::{Context, context_has};
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, TokenFlags, TokenValue};
use crate::token::{Token, keyword_from_str, token_is_reserved};
use crate::unicode;

/// Keywords that are reserved only in strict mode, for classifying
/// escape-written keywords.
fn is_strict_reserved(token: Token) -> bool {
    crate::token::token_is_future_reserved(token)
        || matches!(
            token,
            Token::LetKeyword | Token::StaticKeyword | Token::YieldKeyword
        )
}

impl ParserState {
    /// Fast path: the cursor is on an ASCII identifier start. Keywords all
    /// begin with a lowercase letter, so `maybe_keyword` skips the probe
    /// for `$`, `_`, and uppercase starts.
    pub(crate) fn scan_identifier(&mut self, context: u32, maybe_keyword: bool) -> Token {
        self.advance();
        while unicode::is_ascii_id_continue(self.next_code_point) {
            self.advance();
        }
        if self.identifier_continues_beyond_ascii() {
            return self.scan_identifier_slow(context);
        }
        let text = self.slice(self.token_pos, self.index);
        let token = if maybe_keyword {
            keyword_from_str(&text).unwrap_or(Token::Identifier)
        } else {
            Token::Identifier
        };
        self.token_value = TokenValue::Str(text);
        token
    }

    /// Does the unit at the cursor extend the identifier past the ASCII
    /// fast path (escape, Unicode continue, or astral continue)?
    fn identifier_continues_beyond_ascii(&self) -> bool {
        let cp = self.next_code_point;
        if cp == Chars::BACKSLASH {
            return true;
        }
        if cp <= 0x7E {
            return false;
        }
        if unicode::is_id_continue(cp) {
            return true;
        }
        chars::is_high_surrogate(cp)
            && chars::is_low_surrogate(self.peek(1))
            && unicode::is_id_continue(chars::combine_surrogates(cp, self.peek(1)))
    }

    /// Slow path: accumulates the cooked identifier in the scratch buffer.
    /// Entered from the dispatcher on a `\u` escape or non-ASCII start, or
    /// from the fast path when one appears mid-identifier; any ASCII prefix
    /// between `token_pos` and the cursor is carried over.
    pub(crate) fn scan_identifier_slow(&mut self, context: u32) -> Token {
        self.scratch.clear();
        if self.index > self.token_pos {
            let prefix = self.slice(self.token_pos, self.index);
            self.scratch.push_str(&prefix);
        }
        let mut escaped = false;

        loop {
            let cp = self.next_code_point;
            if cp == Chars::BACKSLASH {
                let escape_start = self.index;
                if self.peek(1) != Chars::LOWER_U {
                    self.diagnostics
                        .error(DiagnosticKind::InvalidUnicodeEscape, escape_start);
                    self.advance();
                    return Token::Error;
                }
                self.advance();
                self.advance();
                let Some(value) = self.scan_unicode_escape_value(true) else {
                    return Token::Error;
                };
                let valid = if self.scratch.is_empty() {
                    unicode::is_id_start(value)
                } else {
                    unicode::is_id_continue(value)
                };
                if !valid {
                    self.diagnostics
                        .error(DiagnosticKind::InvalidUnicodeEscape, escape_start);
                    return Token::Error;
                }
                escaped = true;
                match char::from_u32(value) {
                    Some(c) => self.scratch.push(c),
                    None => {
                        self.diagnostics
                            .error(DiagnosticKind::InvalidCodePoint, escape_start);
                        return Token::Error;
                    }
                }
                continue;
            }
            if self.at_end() {
                break;
            }
            if cp <= 0x7E {
                if unicode::is_ascii_id_continue(cp) {
                    self.scratch.push(cp as u8 as char);
                    self.advance();
                    continue;
                }
                break;
            }
            if chars::is_high_surrogate(cp) {
                let low = self.peek(1);
                if chars::is_low_surrogate(low) {
                    let scalar = chars::combine_surrogates(cp, low);
                    let valid = if self.scratch.is_empty() {
                        unicode::is_id_start(scalar)
                    } else {
                        unicode::is_id_continue(scalar)
                    };
                    if valid {
                        if let Some(c) = char::from_u32(scalar) {
                            self.scratch.push(c);
                        }
                        self.advance();
                        self.advance();
                        continue;
                    }
                }
                break;
            }
            let valid = if self.scratch.is_empty() {
                unicode::is_id_start(cp)
            } else {
                unicode::is_id_continue(cp)
            };
            if !valid {
                break;
            }
            if let Some(c) = char::from_u32(cp) {
                self.scratch.push(c);
            }
            self.advance();
        }

        if escaped {
            self.flag(TokenFlags::UnicodeEscape);
        }
        let token = match keyword_from_str(&self.scratch) {
            // An escape-written keyword is not the keyword token; its use
            // is syntactically restricted and judged by the parser.
            Some(keyword) if escaped => {
                if token_is_reserved(keyword) {
                    Token::EscapedReserved
                } else if is_strict_reserved(keyword) && context_has(context, Context::Strict) {
                    Token::EscapedFutureReserved
                } else {
                    Token::Identifier
                }
            }
            Some(keyword) => keyword,
            None => Token::Identifier,
        };
        self.token_value = TokenValue::Str(self.scratch.clone());
        token
    }

    /// `#name` private identifier. The cooked value keeps the `#`.
    pub(crate) fn scan_private_identifier(&mut self, context: u32) -> Token {
        let cp = self.peek(1);
        let starts_name = unicode::is_ascii_id_start(cp)
            || cp == Chars::BACKSLASH
            || (cp > 0x7E
                && (unicode::is_id_start(cp)
                    || (chars::is_high_surrogate(cp)
                        && chars::is_low_surrogate(self.peek(2))
                        && unicode::is_id_start(chars::combine_surrogates(cp, self.peek(2))))));
        if !starts_name {
            self.diagnostics
                .error(DiagnosticKind::InvalidCharacter, self.index);
            self.advance();
            return Token::Error;
        }
        self.advance();
        let token = if unicode::is_ascii_id_start(self.next_code_point) {
            self.scan_identifier(context, false)
        } else {
            self.scan_identifier_slow(context)
        };
        if token == Token::Error {
            return token;
        }
        Token::PrivateIdentifier
    }

    /// Decode the body of a `\uHHHH` or `\u{H…H}` escape. The cursor is
    /// just past the `u`. Records a diagnostic and returns `None` on
    /// malformed input when `report` is set (template scanning defers the
    /// judgement instead).
    pub(crate) fn scan_unicode_escape_value(&mut self, report: bool) -> Option<u32> {
        if self.next_code_point == Chars::LEFT_BRACE {
            self.advance();
            let digits_start = self.index;
            let mut value: u32 = 0;
            while let Some(digit) = chars::hex_digit_value(self.next_code_point) {
                value = value.saturating_mul(16).saturating_add(digit);
                self.advance();
            }
            if self.index == digits_start || self.next_code_point != Chars::RIGHT_BRACE {
                if report {
                    self.diagnostics
                        .error(DiagnosticKind::InvalidUnicodeEscape, self.index);
                }
                return None;
            }
            self.advance();
            if value > 0x10FFFF {
                if report {
                    self.diagnostics
                        .error(DiagnosticKind::InvalidCodePoint, digits_start);
                }
                return None;
            }
            Some(value)
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                match chars::hex_digit_value(self.next_code_point) {
                    Some(digit) => {
                        value = value * 16 + digit;
                        self.advance();
                    }
                    None => {
                        if report {
                            self.diagnostics
                                .error(DiagnosticKind::InvalidUnicodeEscape, self.index);
                        }
                        return None;
                    }
                }
            }
            Some(value)
        }
    }
}
