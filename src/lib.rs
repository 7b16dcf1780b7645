//! ECMAScript (ES2022+) lexical scanner.
//!
//! A synchronous pull-mode tokenizer: the caller owns a [`ParserState`]
//! and repeatedly calls [`ParserState::next_token`], which skips
//! insignificant input, classifies exactly one token, and records any
//! lexical errors in the state's diagnostics bag. Context-sensitive
//! decisions the grammar forces on a lexer — regular expression versus
//! division, template `${ … }` re-entry, HTML-comment web compatibility,
//! strict-mode octal rules — are driven by the [`Context`] bits supplied
//! with each call.
//!
//! ```
//! use eslex::{Options, Token, tokenize};
//!
//! let (tokens, diagnostics) = tokenize("demo.js", "let x = 1 + 2;", &Options::default());
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens[0].kind, Token::LetKeyword);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(Token::EndOfSource));
//! ```

pub mod chars;
pub mod context;
pub mod diagnostics;
pub mod source_file;
pub mod state;
pub mod token;
pub mod token_stream;
pub mod unicode;

mod identifier;
mod numeric;
mod regexp;
mod scanner;
mod string;
mod template;

pub use context::{Context, Options, context_has};
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticKind, DiagnosticSeverity};
pub use source_file::SourceFile;
pub use state::{ParserSnapshot, ParserState, RegExpDescriptor, TokenFlags, TokenValue};
pub use token::Token;
pub use token_stream::{TokenRecord, tokenize};
