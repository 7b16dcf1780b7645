//! A convenience driver that pulls a whole token stream out of a source.
//!
//! The syntactic parser normally owns the `AllowRegExp` decision and the
//! template `}` re-entry; standing in for it here, the driver uses the
//! usual previous-token heuristic for regex position and a per-template
//! brace counter for re-entry.

use crate::context::{Context, Options};
use crate::diagnostics::Diagnostic;
use crate::state::{ParserState, RegExpDescriptor, TokenValue};
use crate::token::{Token, token_is_identifier};
use serde::Serialize;

/// One scanned token with its positions and cooked payload.
#[derive(Clone, Debug, Serialize)]
pub struct TokenRecord {
    pub kind: Token,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: usize,
    pub value: TokenValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegExpDescriptor>,
}

/// Scan `source` to completion. Returns every token (terminated by
/// `EndOfSource`) together with the collected diagnostics.
pub fn tokenize(file_name: &str, source: &str, options: &Options) -> (Vec<TokenRecord>, Vec<Diagnostic>) {
    let mut state = ParserState::from_source(file_name, source);
    let base = options.to_context();
    let mut records = Vec::new();
    let mut allow_regexp = true;
    // one frame per open template substitution: braces opened inside it
    let mut brace_stack: Vec<u32> = Vec::new();

    loop {
        let context = if allow_regexp {
            base | Context::AllowRegExp as u32
        } else {
            base
        };
        let mut token = state.next_token(context);

        match token {
            Token::TemplateHead => brace_stack.push(0),
            Token::LeftBrace => {
                if let Some(depth) = brace_stack.last_mut() {
                    *depth += 1;
                }
            }
            Token::RightBrace => {
                if let Some(depth) = brace_stack.last_mut() {
                    if *depth == 0 {
                        token = state.scan_template_tail(context);
                        if token != Token::TemplateContinuation {
                            brace_stack.pop();
                        }
                    } else {
                        *depth -= 1;
                    }
                }
            }
            _ => {}
        }

        allow_regexp = regexp_may_follow(token);
        let done = token == Token::EndOfSource;
        records.push(TokenRecord {
            kind: token,
            start: state.token_pos,
            end: state.index,
            line: state.token_line,
            column: state.token_column,
            value: state.token_value.clone(),
            raw: state.token_raw.clone(),
            regex: state.token_regexp.clone(),
        });
        if done {
            break;
        }
    }

    let diagnostics = std::mem::take(&mut state.diagnostics).into_vec();
    (records, diagnostics)
}

/// May a `/` after `token` begin a regular expression? This is the
/// standard lexer heuristic: after anything that can end an expression,
/// `/` is division.
fn regexp_may_follow(token: Token) -> bool {
    if token_is_identifier(token) {
        return false;
    }
    !matches!(
        token,
        Token::NumericLiteral
            | Token::BigIntLiteral
            | Token::StringLiteral
            | Token::RegularExpression
            | Token::TemplateTail
            | Token::PrivateIdentifier
            | Token::EscapedReserved
            | Token::EscapedFutureReserved
            | Token::RightParen
            | Token::RightBracket
            | Token::Increment
            | Token::Decrement
            | Token::ThisKeyword
            | Token::SuperKeyword
            | Token::TrueKeyword
            | Token::FalseKeyword
            | Token::NullKeyword
    )
}
