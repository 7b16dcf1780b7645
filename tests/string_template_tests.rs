use eslex::{Context, DiagnosticKind, Options, ParserState, Token, TokenValue, tokenize};

fn cook(source: &str) -> (Token, TokenValue) {
    let mut state = ParserState::from_source("test.js", source);
    let token = state.next_token(Context::None as u32);
    (token, state.token_value.clone())
}

fn first_diagnostic(source: &str, context: u32) -> Option<DiagnosticKind> {
    let mut state = ParserState::from_source("test.js", source);
    let _ = state.next_token(context);
    state.diagnostics.iter().next().map(|d| d.kind)
}

// =============================================================================
// String literals
// =============================================================================

#[test]
fn plain_strings_slice_without_copying_escapes() {
    assert_eq!(cook("'hello'").1, TokenValue::Str("hello".into()));
    assert_eq!(cook("\"hello\"").1, TokenValue::Str("hello".into()));
    assert_eq!(cook("''").1, TokenValue::Str(String::new()));
}

#[test]
fn single_character_escapes() {
    assert_eq!(cook("'a\\nb'").1, TokenValue::Str("a\nb".into()));
    assert_eq!(cook("'\\r\\t\\b\\f\\v'").1, TokenValue::Str("\r\t\u{8}\u{C}\u{B}".into()));
    assert_eq!(cook("'\\''").1, TokenValue::Str("'".into()));
    assert_eq!(cook("'\\\"'").1, TokenValue::Str("\"".into()));
    assert_eq!(cook("'\\\\'").1, TokenValue::Str("\\".into()));
    // identity escape
    assert_eq!(cook("'\\a'").1, TokenValue::Str("a".into()));
}

#[test]
fn hex_and_unicode_escapes() {
    assert_eq!(cook("'\\x41'").1, TokenValue::Str("A".into()));
    assert_eq!(cook("'\\u0041'").1, TokenValue::Str("A".into()));
    assert_eq!(cook("'\\u{41}'").1, TokenValue::Str("A".into()));
    assert_eq!(cook("'\\u{1F600}'").1, TokenValue::Str("\u{1F600}".into()));
}

#[test]
fn surrogate_pair_escapes_combine() {
    assert_eq!(cook("'\\uD83D\\uDE00'").1, TokenValue::Str("\u{1F600}".into()));
}

#[test]
fn nul_escape_is_legal_everywhere() {
    assert_eq!(cook("'\\0'").1, TokenValue::Str("\0".into()));
    let mut state = ParserState::from_source("test.js", "'\\0'");
    assert_eq!(state.next_token(Context::Strict as u32), Token::StringLiteral);
    assert!(state.diagnostics.is_empty());
}

#[test]
fn legacy_octal_escape_in_sloppy_mode() {
    assert_eq!(cook("'\\101'").1, TokenValue::Str("A".into()));
    assert_eq!(cook("'\\08'").1, TokenValue::Str("\08".into()));
}

#[test]
fn octal_escape_is_rejected_under_strict_mode() {
    assert_eq!(
        first_diagnostic("'\\101'", Context::Strict as u32),
        Some(DiagnosticKind::StrictOctalEscape)
    );
    assert_eq!(
        first_diagnostic("'\\01'", Context::Strict as u32),
        Some(DiagnosticKind::StrictOctalEscape)
    );
}

#[test]
fn eight_and_nine_escapes_follow_web_compat() {
    assert_eq!(cook("'\\8'").1, TokenValue::Str("8".into()));
    assert_eq!(cook("'\\9'").1, TokenValue::Str("9".into()));
    assert_eq!(
        first_diagnostic("'\\8'", Context::Strict as u32),
        Some(DiagnosticKind::StrictOctalEscape)
    );
    assert_eq!(
        first_diagnostic("'\\8'", Context::DisableWebCompat as u32),
        Some(DiagnosticKind::StrictOctalEscape)
    );
}

#[test]
fn line_continuations_cook_to_nothing() {
    assert_eq!(cook("'a\\\nb'").1, TokenValue::Str("ab".into()));
    assert_eq!(cook("'a\\\r\nb'").1, TokenValue::Str("ab".into()));
    assert_eq!(cook("'a\\\u{2028}b'").1, TokenValue::Str("ab".into()));
}

#[test]
fn line_separator_is_legal_raw_in_strings() {
    let mut state = ParserState::from_source("test.js", "'a\u{2028}b'");
    assert_eq!(state.next_token(0), Token::StringLiteral);
    assert_eq!(state.token_value.as_str(), Some("a\u{2028}b"));
    assert_eq!(state.line, 2);
}

#[test]
fn bare_newline_terminates_the_string() {
    let mut state = ParserState::from_source("test.js", "'abc\ndef'");
    assert_eq!(state.next_token(0), Token::Error);
    assert_eq!(
        state.diagnostics.iter().next().map(|d| d.kind),
        Some(DiagnosticKind::UnterminatedString)
    );
}

#[test]
fn eof_inside_a_string_or_escape_reports_once() {
    let mut state = ParserState::from_source("test.js", "'abc");
    assert_eq!(state.next_token(0), Token::Error);
    assert_eq!(state.diagnostics.len(), 1);

    let mut state = ParserState::from_source("test.js", "'abc\\");
    assert_eq!(state.next_token(0), Token::Error);
    assert_eq!(state.diagnostics.len(), 1);
}

#[test]
fn invalid_hex_escape_reports() {
    assert_eq!(
        first_diagnostic("'\\xZZ'", 0),
        Some(DiagnosticKind::InvalidHexEscape)
    );
}

// =============================================================================
// Templates
// =============================================================================

#[test]
fn no_substitution_template_is_a_single_tail() {
    let (token, value) = cook("`hello`");
    assert_eq!(token, Token::TemplateTail);
    assert_eq!(value.as_str(), Some("hello"));
}

#[test]
fn template_with_substitution_round_trips_through_the_driver() {
    let (tokens, diagnostics) = tokenize("test.js", "`hi ${name}!`", &Options::default());
    assert!(diagnostics.is_empty());
    let kinds: Vec<Token> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Token::TemplateHead,
            Token::Identifier,
            Token::TemplateTail,
            Token::EndOfSource
        ]
    );
    assert_eq!(tokens[0].value.as_str(), Some("hi "));
    assert_eq!(tokens[1].value.as_str(), Some("name"));
    assert_eq!(tokens[2].value.as_str(), Some("!"));
}

#[test]
fn template_middle_segments_are_continuations() {
    let (tokens, _) = tokenize("test.js", "`a${x}b${y}c`", &Options::default());
    let kinds: Vec<Token> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Token::TemplateHead,
            Token::Identifier,
            Token::TemplateContinuation,
            Token::Identifier,
            Token::TemplateTail,
            Token::EndOfSource
        ]
    );
    assert_eq!(tokens[2].value.as_str(), Some("b"));
}

#[test]
fn braces_inside_substitutions_do_not_end_the_template() {
    let (tokens, diagnostics) = tokenize(
        "test.js",
        "`v: ${ {a: 1}.a }!`",
        &Options::default(),
    );
    assert!(diagnostics.is_empty());
    let kinds: Vec<Token> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], Token::TemplateHead);
    assert_eq!(kinds[kinds.len() - 2], Token::TemplateTail);
}

#[test]
fn nested_templates_track_their_own_depth() {
    let (tokens, diagnostics) = tokenize("test.js", "`a${`b${x}c`}d`", &Options::default());
    assert!(diagnostics.is_empty());
    let kinds: Vec<Token> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Token::TemplateHead,
            Token::TemplateHead,
            Token::Identifier,
            Token::TemplateTail,
            Token::TemplateTail,
            Token::EndOfSource
        ]
    );
}

#[test]
fn template_escapes_cook_like_string_escapes() {
    assert_eq!(cook("`a\\nb`").1, TokenValue::Str("a\nb".into()));
    assert_eq!(cook("`\\u{41}`").1, TokenValue::Str("A".into()));
    assert_eq!(cook("`\\${x}`").1, TokenValue::Str("${x}".into()));
    assert_eq!(cook("`\\`fenced\\``").1, TokenValue::Str("`fenced`".into()));
}

#[test]
fn carriage_returns_normalize_to_line_feed_in_cooked_values() {
    assert_eq!(cook("`a\r\nb`").1, TokenValue::Str("a\nb".into()));
    assert_eq!(cook("`a\rb`").1, TokenValue::Str("a\nb".into()));
    assert_eq!(cook("`a\nb`").1, TokenValue::Str("a\nb".into()));
}

#[test]
fn invalid_template_escape_defers_with_a_null_cooked_value() {
    let mut state = ParserState::from_source("test.js", "`bad \\unicode`");
    let token = state.next_token(0);
    assert_eq!(token, Token::TemplateTail);
    assert_eq!(state.token_value, TokenValue::None);
    assert!(state.token_flags & eslex::TokenFlags::ContainsInvalidEscape as u32 != 0);
    // nothing is reported; the tagged/untagged judgement belongs to the parser
    assert!(state.diagnostics.is_empty());
}

#[test]
fn template_octal_escape_is_always_invalid() {
    let mut state = ParserState::from_source("test.js", "`\\07`");
    assert_eq!(state.next_token(0), Token::TemplateTail);
    assert_eq!(state.token_value, TokenValue::None);
    assert!(state.diagnostics.is_empty());
}

#[test]
fn template_raw_slice_survives_invalid_escapes() {
    let mut state = ParserState::from_source("test.js", "`\\unicode`");
    let token = state.next_token(Context::OptionsRaw as u32);
    assert_eq!(token, Token::TemplateTail);
    assert_eq!(state.token_raw.as_deref(), Some("`\\unicode`"));
}

#[test]
fn unterminated_template_reports() {
    let mut state = ParserState::from_source("test.js", "`abc");
    assert_eq!(state.next_token(0), Token::Error);
    assert_eq!(
        state.diagnostics.iter().next().map(|d| d.kind),
        Some(DiagnosticKind::UnterminatedTemplate)
    );
}

#[test]
fn template_tail_re_entry_via_the_scanner_api() {
    let mut state = ParserState::from_source("test.js", "`a${x}b`");
    assert_eq!(state.next_token(0), Token::TemplateHead);
    assert_eq!(state.template_depth, 1);
    assert_eq!(state.next_token(0), Token::Identifier);
    assert_eq!(state.next_token(0), Token::RightBrace);
    let token = state.scan_template_tail(0);
    assert_eq!(token, Token::TemplateTail);
    assert_eq!(state.token_value.as_str(), Some("b"));
    assert_eq!(state.template_depth, 0);
    assert_eq!(state.next_token(0), Token::EndOfSource);
}
