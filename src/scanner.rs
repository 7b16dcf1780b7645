//! The dispatcher: skips insignificant input, classifies one token per
//! call, and hands multi-character punctuators to short decision trees.
//!
//! The first code unit of a token is classified through a 128-entry table
//! so the hot path is a single indexed load before any branching. Units
//! above 0x7E take the slow path: line separators, exotic whitespace, and
//! Unicode identifier starts (including surrogate pairs).

use crate::chars::{self, Chars};
use crate::context::{Context, context_has};
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, TokenFlags, TokenValue};
use crate::token::Token;
use crate::unicode;

/// Dispatch tag for the first code unit of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharKind {
    Error,
    Whitespace,
    LineFeed,
    CarriageReturn,
    /// ASCII identifier start that can never begin a keyword.
    Ident,
    /// Lowercase letter: identifier or keyword.
    Keyword,
    /// `\` starting a Unicode-escaped identifier.
    Backslash,
    StringLiteral,
    Template,
    Hash,
    Digit,
    LeadingZero,
    Period,
    Negate,
    Modulo,
    Ampersand,
    LeftParen,
    RightParen,
    Multiply,
    Add,
    Comma,
    Subtract,
    Divide,
    Colon,
    Semicolon,
    LessThan,
    Assign,
    GreaterThan,
    Question,
    LeftBracket,
    RightBracket,
    Caret,
    LeftBrace,
    Bar,
    RightBrace,
    Tilde,
}

#[rustfmt::skip]
static FIRST_CHAR_KINDS: [CharKind; 128] = {
    use CharKind::*;
    [
        // 0x00-0x0F: control characters; TAB/VT/FF are whitespace
        Error, Error, Error, Error, Error, Error, Error, Error,
        Error, Whitespace, LineFeed, Whitespace, Whitespace, CarriageReturn, Error, Error,
        // 0x10-0x1F
        Error, Error, Error, Error, Error, Error, Error, Error,
        Error, Error, Error, Error, Error, Error, Error, Error,
        // 0x20-0x2F: ` ! " # $ % & ' ( ) * + , - . /`
        Whitespace, Negate, StringLiteral, Hash, Ident, Modulo, Ampersand, StringLiteral,
        LeftParen, RightParen, Multiply, Add, Comma, Subtract, Period, Divide,
        // 0x30-0x3F: `0-9 : ; < = > ?`
        LeadingZero, Digit, Digit, Digit, Digit, Digit, Digit, Digit,
        Digit, Digit, Colon, Semicolon, LessThan, Assign, GreaterThan, Question,
        // 0x40-0x4F: `@ A-O`
        Error, Ident, Ident, Ident, Ident, Ident, Ident, Ident,
        Ident, Ident, Ident, Ident, Ident, Ident, Ident, Ident,
        // 0x50-0x5F: `P-Z [ \ ] ^ _`
        Ident, Ident, Ident, Ident, Ident, Ident, Ident, Ident,
        Ident, Ident, Ident, LeftBracket, Backslash, RightBracket, Caret, Ident,
        // 0x60-0x6F: `` ` a-o``
        Template, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword,
        Keyword, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword,
        // 0x70-0x7F: `p-z { | } ~`
        Keyword, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword, Keyword,
        Keyword, Keyword, Keyword, LeftBrace, Bar, RightBrace, Tilde, Error,
    ]
};

impl ParserState {
    /// Scan the next token, skipping whitespace, line terminators, and
    /// comments. Lexical errors are recorded in the diagnostics bag and
    /// reported as [`Token::Error`]; the dispatcher never unwinds.
    pub fn next_token(&mut self, context: u32) -> Token {
        self.token_flags = 0;
        self.start_pos = self.index;
        self.token_value = TokenValue::None;
        self.token_raw = None;
        self.token_regexp = None;
        let token = self.scan_single_token(context);
        if context_has(context, Context::OptionsRaw) {
            self.token_raw = Some(self.slice(self.token_pos, self.index));
        }
        self.token = token;
        token
    }

    fn scan_single_token(&mut self, context: u32) -> Token {
        loop {
            self.token_pos = self.index;
            self.token_line = self.line;
            self.token_column = self.index - self.line_start;

            if self.at_end() {
                return Token::EndOfSource;
            }

            let cp = self.next_code_point;
            if cp > 0x7E {
                match self.scan_non_ascii(context, cp) {
                    Some(token) => return token,
                    None => continue,
                }
            }

            match FIRST_CHAR_KINDS[cp as usize] {
                CharKind::Whitespace => {
                    self.advance();
                }
                CharKind::LineFeed | CharKind::CarriageReturn => {
                    self.flag(TokenFlags::PrecedingLineBreak);
                    self.consume_line_terminator();
                }
                CharKind::Error => {
                    self.diagnostics
                        .error(DiagnosticKind::InvalidCharacter, self.index);
                    self.advance();
                    return Token::Error;
                }

                // Single-unit punctuators
                CharKind::LeftParen => return self.emit(Token::LeftParen),
                CharKind::RightParen => return self.emit(Token::RightParen),
                CharKind::LeftBracket => return self.emit(Token::LeftBracket),
                CharKind::RightBracket => return self.emit(Token::RightBracket),
                CharKind::LeftBrace => return self.emit(Token::LeftBrace),
                CharKind::RightBrace => return self.emit(Token::RightBrace),
                CharKind::Comma => return self.emit(Token::Comma),
                CharKind::Semicolon => return self.emit(Token::Semicolon),
                CharKind::Colon => return self.emit(Token::Colon),
                CharKind::Tilde => return self.emit(Token::Complement),

                // Punctuator decision trees
                CharKind::Negate => {
                    self.advance();
                    if self.next_code_point == Chars::EQUALS {
                        self.advance();
                        if self.next_code_point == Chars::EQUALS {
                            self.advance();
                            return Token::StrictNotEqual;
                        }
                        return Token::LooseNotEqual;
                    }
                    return Token::Negate;
                }
                CharKind::Assign => {
                    self.advance();
                    match self.next_code_point {
                        Chars::EQUALS => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::StrictEqual;
                            }
                            return Token::LooseEqual;
                        }
                        Chars::GREATER_THAN => {
                            self.advance();
                            return Token::Arrow;
                        }
                        _ => return Token::Assign,
                    }
                }
                CharKind::Add => {
                    self.advance();
                    match self.next_code_point {
                        Chars::PLUS => return self.emit(Token::Increment),
                        Chars::EQUALS => return self.emit(Token::AddAssign),
                        _ => return Token::Add,
                    }
                }
                CharKind::Subtract => {
                    self.advance();
                    match self.next_code_point {
                        Chars::HYPHEN => {
                            self.advance();
                            if self.next_code_point == Chars::GREATER_THAN
                                && !context_has(context, Context::Module)
                                && (self.has_preceding_line_break() || self.token_pos == 0)
                            {
                                // `-->` closes an HTML comment in web-compat
                                // script code
                                if context_has(context, Context::DisableWebCompat) {
                                    self.diagnostics.error(
                                        DiagnosticKind::HtmlCommentInWebCompat,
                                        self.token_pos,
                                    );
                                }
                                self.advance();
                                self.skip_single_line_comment();
                                continue;
                            }
                            return Token::Decrement;
                        }
                        Chars::EQUALS => return self.emit(Token::SubtractAssign),
                        _ => return Token::Subtract,
                    }
                }
                CharKind::Multiply => {
                    self.advance();
                    match self.next_code_point {
                        Chars::ASTERISK => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::ExponentAssign;
                            }
                            return Token::Exponent;
                        }
                        Chars::EQUALS => return self.emit(Token::MultiplyAssign),
                        _ => return Token::Multiply,
                    }
                }
                CharKind::Modulo => {
                    self.advance();
                    if self.next_code_point == Chars::EQUALS {
                        return self.emit(Token::ModuloAssign);
                    }
                    return Token::Modulo;
                }
                CharKind::Caret => {
                    self.advance();
                    if self.next_code_point == Chars::EQUALS {
                        return self.emit(Token::BitwiseXorAssign);
                    }
                    return Token::BitwiseXor;
                }
                CharKind::Ampersand => {
                    self.advance();
                    match self.next_code_point {
                        Chars::AMPERSAND => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::LogicalAndAssign;
                            }
                            return Token::LogicalAnd;
                        }
                        Chars::EQUALS => return self.emit(Token::BitwiseAndAssign),
                        _ => return Token::BitwiseAnd,
                    }
                }
                CharKind::Bar => {
                    self.advance();
                    match self.next_code_point {
                        Chars::BAR => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::LogicalOrAssign;
                            }
                            return Token::LogicalOr;
                        }
                        Chars::EQUALS => return self.emit(Token::BitwiseOrAssign),
                        _ => return Token::BitwiseOr,
                    }
                }
                CharKind::Question => {
                    self.advance();
                    match self.next_code_point {
                        Chars::QUESTION => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::CoalesceAssign;
                            }
                            return Token::Coalesce;
                        }
                        // `?.3` backs off to `?` so the dot can begin a
                        // fractional numeric literal
                        Chars::PERIOD if !chars::is_decimal_digit(self.peek(1)) => {
                            self.advance();
                            return Token::QuestionMarkPeriod;
                        }
                        _ => return Token::QuestionMark,
                    }
                }
                CharKind::LessThan => {
                    self.advance();
                    match self.next_code_point {
                        Chars::LESS_THAN => {
                            self.advance();
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::ShiftLeftAssign;
                            }
                            return Token::ShiftLeft;
                        }
                        Chars::EQUALS => return self.emit(Token::LessThanOrEqual),
                        Chars::EXCLAMATION
                            if self.peek(1) == Chars::HYPHEN
                                && self.peek(2) == Chars::HYPHEN
                                && !context_has(context, Context::Module) =>
                        {
                            if context_has(context, Context::DisableWebCompat) {
                                self.diagnostics.error(
                                    DiagnosticKind::HtmlCommentInWebCompat,
                                    self.token_pos,
                                );
                            }
                            self.advance();
                            self.advance();
                            self.advance();
                            self.skip_single_line_comment();
                            continue;
                        }
                        _ => return Token::LessThan,
                    }
                }
                CharKind::GreaterThan => {
                    self.advance();
                    match self.next_code_point {
                        Chars::EQUALS => return self.emit(Token::GreaterThanOrEqual),
                        Chars::GREATER_THAN => {
                            self.advance();
                            match self.next_code_point {
                                Chars::GREATER_THAN => {
                                    self.advance();
                                    if self.next_code_point == Chars::EQUALS {
                                        self.advance();
                                        return Token::LogicalShiftRightAssign;
                                    }
                                    return Token::LogicalShiftRight;
                                }
                                Chars::EQUALS => return self.emit(Token::ShiftRightAssign),
                                _ => return Token::ShiftRight,
                            }
                        }
                        _ => return Token::GreaterThan,
                    }
                }
                CharKind::Period => {
                    if chars::is_decimal_digit(self.peek(1)) {
                        return self.scan_numeric_literal(context);
                    }
                    if self.peek(1) == Chars::PERIOD && self.peek(2) == Chars::PERIOD {
                        self.advance();
                        self.advance();
                        self.advance();
                        return Token::Ellipsis;
                    }
                    return self.emit(Token::Period);
                }
                CharKind::Divide => {
                    self.advance();
                    match self.next_code_point {
                        Chars::SLASH => {
                            self.advance();
                            self.skip_single_line_comment();
                            continue;
                        }
                        Chars::ASTERISK => {
                            self.advance();
                            if !self.skip_multi_line_comment() {
                                return Token::Error;
                            }
                            continue;
                        }
                        _ => {
                            if context_has(context, Context::AllowRegExp) {
                                return self.scan_regular_expression(context);
                            }
                            if self.next_code_point == Chars::EQUALS {
                                self.advance();
                                return Token::DivideAssign;
                            }
                            return Token::Divide;
                        }
                    }
                }

                // Literals and names
                CharKind::StringLiteral => return self.scan_string_literal(context),
                CharKind::Template => return self.scan_template(context),
                CharKind::Digit | CharKind::LeadingZero => {
                    return self.scan_numeric_literal(context);
                }
                CharKind::Ident => return self.scan_identifier(context, false),
                CharKind::Keyword => return self.scan_identifier(context, true),
                CharKind::Backslash => return self.scan_identifier_slow(context),
                CharKind::Hash => {
                    // `#!` at offset 0 is a hashbang comment
                    if self.token_pos == 0 && self.peek(1) == Chars::EXCLAMATION {
                        self.advance();
                        self.advance();
                        self.skip_single_line_comment();
                        continue;
                    }
                    return self.scan_private_identifier(context);
                }
            }
        }
    }

    /// Consume the unit at the cursor and finish the token.
    #[inline]
    fn emit(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn scan_non_ascii(&mut self, context: u32, cp: u32) -> Option<Token> {
        if cp == Chars::LINE_SEPARATOR || cp == Chars::PARAGRAPH_SEPARATOR {
            self.flag(TokenFlags::PrecedingLineBreak);
            self.consume_line_terminator();
            return None;
        }
        if unicode::is_id_start(cp) {
            return Some(self.scan_identifier_slow(context));
        }
        if chars::is_high_surrogate(cp) {
            let low = self.peek(1);
            if chars::is_low_surrogate(low)
                && unicode::is_id_start(chars::combine_surrogates(cp, low))
            {
                return Some(self.scan_identifier_slow(context));
            }
            self.diagnostics
                .error(DiagnosticKind::InvalidSmpCharacter, self.index);
            self.advance();
            if chars::is_low_surrogate(self.next_code_point) {
                self.advance();
            }
            return Some(Token::Error);
        }
        if unicode::is_exotic_whitespace(cp) {
            self.advance();
            return None;
        }
        self.diagnostics
            .error(DiagnosticKind::InvalidCharacter, self.index);
        self.advance();
        Some(Token::Error)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Consume until a line terminator or end of source. The terminator is
    /// left for the dispatcher so line bookkeeping stays in one place.
    pub(crate) fn skip_single_line_comment(&mut self) {
        while !self.at_end() && !unicode::is_line_terminator(self.next_code_point) {
            self.advance();
        }
    }

    /// Consume a `/* ... */` comment, tracking crossed line terminators.
    /// Returns false when the comment never closes.
    fn skip_multi_line_comment(&mut self) -> bool {
        loop {
            if self.at_end() {
                self.flag(TokenFlags::Unterminated);
                self.diagnostics
                    .error(DiagnosticKind::UnterminatedComment, self.token_pos);
                return false;
            }
            let cp = self.next_code_point;
            if cp == Chars::ASTERISK && self.peek(1) == Chars::SLASH {
                self.advance();
                self.advance();
                return true;
            }
            if unicode::is_line_terminator(cp) {
                self.flag(TokenFlags::PrecedingLineBreak);
                self.consume_line_terminator();
            } else {
                self.advance();
            }
        }
    }
}
