//! Regular-expression delimiting.
//!
//! The dispatcher has already resolved the `/`-ambiguity from context;
//! this scanner only finds the end of the body and collects the flag set.
//! Pattern validation is the parser's concern.

use crate::chars::Chars;
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, RegExpDescriptor, TokenFlags, TokenValue};
use crate::token::Token;
use crate::unicode;

const FLAG_GLOBAL: u32 = 1;
const FLAG_IGNORE_CASE: u32 = 1 << 1;
const FLAG_MULTILINE: u32 = 1 << 2;
const FLAG_UNICODE: u32 = 1 << 3;
const FLAG_STICKY: u32 = 1 << 4;
const FLAG_DOT_ALL: u32 = 1 << 5;
const FLAG_INDICES: u32 = 1 << 6;

impl ParserState {
    /// The dispatcher has consumed the opening `/`.
    pub(crate) fn scan_regular_expression(&mut self, _context: u32) -> Token {
        let body_start = self.index;
        let mut in_escape = false;
        let mut in_class = false;

        loop {
            if self.at_end() {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedRegExp, self.token_pos);
                return Token::Error;
            }
            let cp = self.next_code_point;
            if unicode::is_line_terminator(cp) {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedRegExp, self.token_pos);
                return Token::Error;
            }
            if in_escape {
                in_escape = false;
            } else if cp == Chars::SLASH && !in_class {
                break;
            } else if cp == Chars::BACKSLASH {
                in_escape = true;
            } else if cp == Chars::LEFT_BRACKET {
                in_class = true;
            } else if cp == Chars::RIGHT_BRACKET {
                in_class = false;
            }
            self.advance();
        }

        let body_end = self.index;
        self.advance();

        let flags_start = self.index;
        let mut seen: u32 = 0;
        while unicode::is_id_continue(self.next_code_point) {
            let cp = self.next_code_point;
            let bit = match cp {
                0x67 => FLAG_GLOBAL,      // g
                0x69 => FLAG_IGNORE_CASE, // i
                0x6D => FLAG_MULTILINE,   // m
                0x75 => FLAG_UNICODE,     // u
                0x79 => FLAG_STICKY,      // y
                0x73 => FLAG_DOT_ALL,     // s
                0x64 => FLAG_INDICES,     // d
                _ => {
                    self.diagnostics.error_with(
                        DiagnosticKind::UnexpectedTokenRegExpFlag,
                        self.index,
                        flag_text(cp),
                    );
                    self.advance();
                    continue;
                }
            };
            if seen & bit != 0 {
                self.diagnostics.error_with(
                    DiagnosticKind::DuplicateRegExpFlag,
                    self.index,
                    flag_text(cp),
                );
            }
            seen |= bit;
            self.advance();
        }

        let pattern = self.slice(body_start, body_end);
        let flags = self.slice(flags_start, self.index);
        tracing::trace!(%pattern, %flags, "regular expression delimited");
        self.token_value = TokenValue::Str(self.slice(self.token_pos, self.index));
        self.token_regexp = Some(RegExpDescriptor { pattern, flags });
        Token::RegularExpression
    }
}

fn flag_text(cp: u32) -> String {
    char::from_u32(cp).unwrap_or('\u{FFFD}').to_string()
}
