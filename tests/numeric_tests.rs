use eslex::{Context, DiagnosticKind, ParserState, Token, TokenValue};

fn scan_number(source: &str) -> (Token, TokenValue) {
    let mut state = ParserState::from_source("test.js", source);
    let token = state.next_token(Context::None as u32);
    (token, state.token_value.clone())
}

fn first_diagnostic(source: &str, context: u32) -> Option<DiagnosticKind> {
    let mut state = ParserState::from_source("test.js", source);
    let _ = state.next_token(context);
    state.diagnostics.iter().next().map(|d| d.kind)
}

#[test]
fn decimal_integers_and_fractions() {
    assert_eq!(scan_number("0").1, TokenValue::Number(0.0));
    assert_eq!(scan_number("42").1, TokenValue::Number(42.0));
    assert_eq!(scan_number("3.25").1, TokenValue::Number(3.25));
    assert_eq!(scan_number("5.").1, TokenValue::Number(5.0));
    assert_eq!(scan_number(".5").1, TokenValue::Number(0.5));
}

#[test]
fn exponent_forms() {
    assert_eq!(scan_number("1e3").1, TokenValue::Number(1000.0));
    assert_eq!(scan_number("1E3").1, TokenValue::Number(1000.0));
    assert_eq!(scan_number("1e-2").1, TokenValue::Number(0.01));
    assert_eq!(scan_number("2.5e+1").1, TokenValue::Number(25.0));
    assert_eq!(scan_number(".5e2").1, TokenValue::Number(50.0));
}

#[test]
fn numeric_separators_are_stripped_from_the_cooked_value() {
    assert_eq!(
        scan_number("1_000_000.5e+2").1,
        TokenValue::Number(100_000_050.0)
    );
    assert_eq!(scan_number("0x1_0").1, TokenValue::Number(16.0));
    assert_eq!(scan_number("0b1_01").1, TokenValue::Number(5.0));
}

#[test]
fn radix_literals() {
    assert_eq!(scan_number("0xFF").1, TokenValue::Number(255.0));
    assert_eq!(scan_number("0Xff").1, TokenValue::Number(255.0));
    assert_eq!(scan_number("0o17").1, TokenValue::Number(15.0));
    assert_eq!(scan_number("0b101").1, TokenValue::Number(5.0));
}

#[test]
fn bigint_literals_keep_the_digit_string() {
    let (token, value) = scan_number("123n");
    assert_eq!(token, Token::BigIntLiteral);
    assert_eq!(value.as_bigint(), Some("123"));

    let (token, value) = scan_number("0o17n");
    assert_eq!(token, Token::BigIntLiteral);
    assert_eq!(value.as_bigint(), Some("0o17"));

    let (token, value) = scan_number("0xFFn");
    assert_eq!(token, Token::BigIntLiteral);
    assert_eq!(value.as_bigint(), Some("0xFF"));
}

#[test]
fn bigint_suffix_is_illegal_on_fractions_and_exponents() {
    assert_eq!(first_diagnostic("1.5n", 0), Some(DiagnosticKind::InvalidBigInt));
    assert_eq!(first_diagnostic("1e3n", 0), Some(DiagnosticKind::InvalidBigInt));
    assert_eq!(first_diagnostic("017n", 0), Some(DiagnosticKind::InvalidBigInt));
}

#[test]
fn legacy_octal_in_sloppy_mode() {
    let (token, value) = scan_number("017");
    assert_eq!(token, Token::NumericLiteral);
    assert_eq!(value, TokenValue::Number(15.0));
}

#[test]
fn leading_zero_with_eight_or_nine_is_decimal() {
    assert_eq!(scan_number("089").1, TokenValue::Number(89.0));
    assert_eq!(scan_number("08").1, TokenValue::Number(8.0));
}

#[test]
fn legacy_octal_is_rejected_under_strict_mode() {
    assert_eq!(
        first_diagnostic("017", Context::Strict as u32),
        Some(DiagnosticKind::StrictOctalLiteral)
    );
    assert_eq!(
        first_diagnostic("089", Context::Strict as u32),
        Some(DiagnosticKind::StrictOctalLiteral)
    );
    // plain zero is not an octal literal
    assert_eq!(first_diagnostic("0", Context::Strict as u32), None);
}

#[test]
fn separator_placement_errors() {
    assert_eq!(
        first_diagnostic("1__2", 0),
        Some(DiagnosticKind::ContinuousNumericSeparator)
    );
    assert_eq!(
        first_diagnostic("1_", 0),
        Some(DiagnosticKind::TrailingNumericSeparator)
    );
    assert_eq!(
        first_diagnostic("0x_1", 0),
        Some(DiagnosticKind::ContinuousNumericSeparator)
    );
    assert_eq!(
        first_diagnostic("0_1", 0),
        Some(DiagnosticKind::ContinuousNumericSeparator)
    );
}

#[test]
fn radix_prefix_without_digits_reports() {
    let mut state = ParserState::from_source("test.js", "0x");
    assert_eq!(state.next_token(0), Token::Error);
    assert_eq!(
        state.diagnostics.iter().next().map(|d| d.kind),
        Some(DiagnosticKind::ExpectedHexDigits)
    );
    assert_eq!(first_diagnostic("0b", 0), Some(DiagnosticKind::ExpectedHexDigits));
    assert_eq!(first_diagnostic("0o", 0), Some(DiagnosticKind::ExpectedHexDigits));
}

#[test]
fn identifier_directly_after_a_literal_reports() {
    assert_eq!(
        first_diagnostic("3in", 0),
        Some(DiagnosticKind::IdentifierAfterNumericLiteral)
    );
    assert_eq!(
        first_diagnostic("0b102", 0),
        Some(DiagnosticKind::IdentifierAfterNumericLiteral)
    );
    assert_eq!(
        first_diagnostic("1\u{3C0}", 0),
        Some(DiagnosticKind::IdentifierAfterNumericLiteral)
    );
}

#[test]
fn missing_exponent_digits_reports() {
    let mut state = ParserState::from_source("test.js", "1e");
    assert_eq!(state.next_token(0), Token::Error);
    assert!(state.diagnostics.has_errors());
}

#[test]
fn dot_prefixed_literal_from_the_dispatcher() {
    let mut state = ParserState::from_source("test.js", "x = .25;");
    assert_eq!(state.next_token(0), Token::Identifier);
    assert_eq!(state.next_token(0), Token::Assign);
    assert_eq!(state.next_token(0), Token::NumericLiteral);
    assert_eq!(state.token_value, TokenValue::Number(0.25));
    assert_eq!(state.next_token(0), Token::Semicolon);
}

#[test]
fn scientific_flag_is_set() {
    let mut state = ParserState::from_source("test.js", "1e3");
    let _ = state.next_token(0);
    assert!(state.token_flags & eslex::TokenFlags::Scientific as u32 != 0);
}
