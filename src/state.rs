//! Mutable scanner state: the cursor and the per-token output slots.

use crate::chars::Chars;
use crate::diagnostics::DiagnosticBag;
use crate::source_file::SourceFile;
use crate::token::Token;
use serde::Serialize;

// =============================================================================
// Token flags
// =============================================================================

/// Flags describing properties of the last scanned token.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TokenFlags {
    #[default]
    None = 0,
    /// A line terminator appeared between the previous token and this one.
    PrecedingLineBreak = 1,
    Unterminated = 1 << 1,
    /// Numeric literal with an exponent part.
    Scientific = 1 << 2,
    /// Legacy `0`-prefixed octal literal.
    Octal = 1 << 3,
    HexSpecifier = 1 << 4,
    BinarySpecifier = 1 << 5,
    OctalSpecifier = 1 << 6,
    ContainsSeparator = 1 << 7,
    /// Identifier written with at least one Unicode escape.
    UnicodeEscape = 1 << 8,
    /// Template segment whose cooked value is invalid (tagged-template rule).
    ContainsInvalidEscape = 1 << 9,
    /// Leading-zero decimal containing `8` or `9`.
    NonOctalDecimal = 1 << 10,
}

// =============================================================================
// Cooked token values
// =============================================================================

/// Cooked value of the last token.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    #[default]
    None,
    Str(String),
    Number(f64),
    /// BigInt literals keep their digit string; value typing is the
    /// parser's concern.
    BigInt(String),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&str> {
        match self {
            TokenValue::BigInt(s) => Some(s),
            _ => None,
        }
    }
}

/// Body and flag set of a regular-expression token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegExpDescriptor {
    pub pattern: String,
    pub flags: String,
}

// =============================================================================
// Parser state
// =============================================================================

/// A snapshot of the cursor and token slots for parser look-ahead.
/// Diagnostics are deliberately not captured; look-ahead that errors has
/// really errored.
#[derive(Clone)]
pub struct ParserSnapshot {
    index: usize,
    next_code_point: u32,
    line: u32,
    line_start: usize,
    token_pos: usize,
    start_pos: usize,
    token_line: u32,
    token_column: usize,
    token: Token,
    token_value: TokenValue,
    token_raw: Option<String>,
    token_regexp: Option<RegExpDescriptor>,
    token_flags: u32,
    template_depth: u32,
}

/// The scanner's mutable state, owned by the caller and passed by mutable
/// borrow to every scanning operation.
pub struct ParserState {
    source: SourceFile,
    /// Offset of the next unread code unit.
    pub index: usize,
    /// Code unit at `index`, or 0 at end of source.
    pub next_code_point: u32,
    /// 1-based line of `index`.
    pub line: u32,
    /// Offset of the first code unit of the current line.
    pub line_start: usize,
    /// Offset where the current token begins (after insignificant input).
    pub token_pos: usize,
    /// Offset where the current `next_token` call began.
    pub start_pos: usize,
    /// Line and column captured when `token_pos` was fixed.
    pub token_line: u32,
    pub token_column: usize,
    /// Last token kind produced.
    pub token: Token,
    pub token_value: TokenValue,
    /// Raw source slice of the token; only populated under `OptionsRaw`.
    pub token_raw: Option<String>,
    pub token_regexp: Option<RegExpDescriptor>,
    pub token_flags: u32,
    pub diagnostics: DiagnosticBag,
    /// Open `${` substitutions; coordinates template tail re-entry.
    pub template_depth: u32,
    /// Scratch buffer for escape accumulation, reused across tokens.
    pub(crate) scratch: String,
}

impl ParserState {
    pub fn new(source: SourceFile) -> Self {
        let next_code_point = source.unit_at(0);
        ParserState {
            source,
            index: 0,
            next_code_point,
            line: 1,
            line_start: 0,
            token_pos: 0,
            start_pos: 0,
            token_line: 1,
            token_column: 0,
            token: Token::EndOfSource,
            token_value: TokenValue::None,
            token_raw: None,
            token_regexp: None,
            token_flags: 0,
            diagnostics: DiagnosticBag::new(),
            template_depth: 0,
            scratch: String::new(),
        }
    }

    /// Convenience constructor from text.
    pub fn from_source(file_name: &str, text: &str) -> Self {
        ParserState::new(SourceFile::new(file_name, text))
    }

    #[inline]
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// 0-based column of `index`.
    #[inline]
    pub fn column(&self) -> usize {
        self.index - self.line_start
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.index >= self.source.len()
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags & TokenFlags::PrecedingLineBreak as u32 != 0
    }

    #[inline]
    pub(crate) fn flag(&mut self, flag: TokenFlags) {
        self.token_flags |= flag as u32;
    }

    /// Advance one code unit and refresh the cached unit.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.index += 1;
        self.next_code_point = self.source.unit_at(self.index);
    }

    /// Code unit `offset` units ahead of the cursor; 0 past the end.
    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> u32 {
        self.source.unit_at(self.index + offset)
    }

    /// Move the cursor to an absolute offset and refresh the cached unit.
    #[inline]
    pub(crate) fn rewind(&mut self, index: usize) {
        self.index = index;
        self.next_code_point = self.source.unit_at(index);
    }

    /// Consume the line terminator at the cursor, folding CRLF into one
    /// terminator, and update the line bookkeeping.
    pub(crate) fn consume_line_terminator(&mut self) {
        let cp = self.next_code_point;
        self.advance();
        if cp == Chars::CARRIAGE_RETURN && self.next_code_point == Chars::LINE_FEED {
            self.advance();
        }
        self.line += 1;
        self.line_start = self.index;
    }

    /// Decode the code units in `[start, end)`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.source.slice(start, end)
    }

    /// Raw text of the last token.
    pub fn token_text(&self) -> String {
        self.source.slice(self.token_pos, self.index)
    }

    // =========================================================================
    // Look-ahead support
    // =========================================================================

    pub fn save_state(&self) -> ParserSnapshot {
        ParserSnapshot {
            index: self.index,
            next_code_point: self.next_code_point,
            line: self.line,
            line_start: self.line_start,
            token_pos: self.token_pos,
            start_pos: self.start_pos,
            token_line: self.token_line,
            token_column: self.token_column,
            token: self.token,
            token_value: self.token_value.clone(),
            token_raw: self.token_raw.clone(),
            token_regexp: self.token_regexp.clone(),
            token_flags: self.token_flags,
            template_depth: self.template_depth,
        }
    }

    pub fn restore_state(&mut self, snapshot: ParserSnapshot) {
        self.index = snapshot.index;
        self.next_code_point = snapshot.next_code_point;
        self.line = snapshot.line;
        self.line_start = snapshot.line_start;
        self.token_pos = snapshot.token_pos;
        self.start_pos = snapshot.start_pos;
        self.token_line = snapshot.token_line;
        self.token_column = snapshot.token_column;
        self.token = snapshot.token;
        self.token_value = snapshot.token_value;
        self.token_raw = snapshot.token_raw;
        self.token_regexp = snapshot.token_regexp;
        self.token_flags = snapshot.token_flags;
        self.template_depth = snapshot.template_depth;
    }
}
