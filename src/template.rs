//! Template literal scanning.
//!
//! A backtick opens a template; `${` hands control back to the parser as
//! `TemplateHead` (or `TemplateContinuation` on re-entry) and the `}`
//! closing the substitution re-enters through [`ParserState::scan_template_tail`].
//! The template-depth counter on the state coordinates that hand-off.
//!
//! Invalid escapes do not fail the scan: the segment keeps its raw slice,
//! the cooked value becomes `TokenValue::None`, and the tagged/untagged
//! judgement is deferred to the parser.

use crate::chars::Chars;
use crate::context::{Context, context_has};
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, TokenFlags, TokenValue};
use crate::string::EscapeResult;
use crate::token::Token;

impl ParserState {
    /// The cursor is on the opening backtick.
    pub(crate) fn scan_template(&mut self, context: u32) -> Token {
        self.advance();
        self.scan_template_body(context, true)
    }

    /// Re-enter template-body mode at the `}` that closed a substitution.
    /// The caller has just scanned the `}` as [`Token::RightBrace`]; the
    /// scanner backs up to it and treats it as the segment opener.
    pub fn scan_template_tail(&mut self, context: u32) -> Token {
        tracing::trace!(depth = self.template_depth, "template tail re-entry");
        self.token_value = TokenValue::None;
        self.token_raw = None;
        self.token_regexp = None;
        self.rewind(self.token_pos);
        self.advance();
        let token = self.scan_template_body(context, false);
        if context_has(context, Context::OptionsRaw) {
            self.token_raw = Some(self.slice(self.token_pos, self.index));
        }
        self.token = token;
        token
    }

    fn scan_template_body(&mut self, context: u32, from_backtick: bool) -> Token {
        self.scratch.clear();
        let mut segment_start = self.index;
        let mut cooked_in_scratch = false;
        let mut invalid = false;

        loop {
            if self.at_end() {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedTemplate, self.token_pos);
                return Token::Error;
            }
            let cp = self.next_code_point;

            if cp == Chars::BACKTICK {
                let cooked = self.finish_segment(segment_start, cooked_in_scratch, invalid);
                self.advance();
                self.token_value = cooked;
                if !from_backtick {
                    self.template_depth = self.template_depth.saturating_sub(1);
                }
                return Token::TemplateTail;
            }

            if cp == Chars::DOLLAR && self.peek(1) == Chars::LEFT_BRACE {
                let cooked = self.finish_segment(segment_start, cooked_in_scratch, invalid);
                self.advance();
                self.advance();
                self.token_value = cooked;
                if from_backtick {
                    self.template_depth += 1;
                    return Token::TemplateHead;
                }
                return Token::TemplateContinuation;
            }

            if cp == Chars::BACKSLASH {
                let run = self.slice(segment_start, self.index);
                self.scratch.push_str(&run);
                cooked_in_scratch = true;
                self.advance();
                if self.scan_escape_sequence(context, true) == EscapeResult::Invalid {
                    self.flag(TokenFlags::ContainsInvalidEscape);
                    invalid = true;
                }
                segment_start = self.index;
                continue;
            }

            // CR and CRLF normalize to LF in the cooked value
            if cp == Chars::CARRIAGE_RETURN {
                let run = self.slice(segment_start, self.index);
                self.scratch.push_str(&run);
                cooked_in_scratch = true;
                self.consume_line_terminator();
                self.scratch.push('\n');
                segment_start = self.index;
                continue;
            }
            if cp == Chars::LINE_FEED
                || cp == Chars::LINE_SEPARATOR
                || cp == Chars::PARAGRAPH_SEPARATOR
            {
                self.consume_line_terminator();
                continue;
            }

            self.advance();
        }
    }

    fn finish_segment(
        &mut self,
        segment_start: usize,
        cooked_in_scratch: bool,
        invalid: bool,
    ) -> TokenValue {
        if invalid {
            return TokenValue::None;
        }
        if cooked_in_scratch {
            let run = self.slice(segment_start, self.index);
            self.scratch.push_str(&run);
            TokenValue::Str(self.scratch.clone())
        } else {
            TokenValue::Str(self.slice(segment_start, self.index))
        }
    }
}
