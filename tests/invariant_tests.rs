use eslex::{Context, ParserState, Token};

const SAMPLES: &[&str] = &[
    "let x = 1 + 2;",
    "function f(a, b) { return a ** b; }\nf(2, 10);",
    "const s = 'it\\'s';\nconst t = `ab`;",
    "// comment\n/* multi\nline */ x\r\ny",
    "obj?.prop ?? [1_000, 0xFF, .5e2, 123n]",
    "\u{3C0} = \\u03C0; a\u{2028}b",
];

fn scan_with_spans(source: &str) -> Vec<(Token, usize, usize, usize, u32, usize)> {
    let mut state = ParserState::from_source("test.js", source);
    let mut out = Vec::new();
    loop {
        let token = state.next_token(Context::None as u32);
        out.push((
            token,
            state.start_pos,
            state.token_pos,
            state.index,
            state.token_line,
            state.token_column,
        ));
        if token == Token::EndOfSource {
            return out;
        }
    }
}

fn unit_len(source: &str) -> usize {
    source.encode_utf16().count()
}

#[test]
fn consumed_spans_cover_the_source_exactly() {
    for source in SAMPLES {
        let spans = scan_with_spans(source);
        let mut expected_start = 0usize;
        for &(_, start_pos, token_pos, end, _, _) in &spans {
            assert_eq!(start_pos, expected_start, "gap or overlap in {source:?}");
            assert!(token_pos >= start_pos && token_pos <= end);
            expected_start = end;
        }
        assert_eq!(expected_start, unit_len(source), "tail uncovered in {source:?}");
    }
}

#[test]
fn cursor_is_strictly_monotonic() {
    for source in SAMPLES {
        let spans = scan_with_spans(source);
        let mut previous_end = 0usize;
        for (i, &(token, _, _, end, _, _)) in spans.iter().enumerate() {
            if token == Token::EndOfSource {
                break;
            }
            assert!(
                end > previous_end || i == 0 && end > 0,
                "cursor stalled in {source:?}"
            );
            previous_end = end;
        }
    }
}

#[test]
fn line_and_column_match_a_reference_count() {
    for source in SAMPLES {
        let units: Vec<u16> = source.encode_utf16().collect();
        let spans = scan_with_spans(source);
        for &(token, _, token_pos, _, line, column) in &spans {
            if token == Token::EndOfSource {
                continue;
            }
            // reference: count terminators in units[0..token_pos], folding CRLF
            let mut expected_line = 1u32;
            let mut last_line_start = 0usize;
            let mut i = 0usize;
            while i < token_pos {
                let u = units[i];
                if u == 0x0D {
                    if i + 1 < units.len() && units[i + 1] == 0x0A && i + 1 < token_pos {
                        i += 1;
                    }
                    expected_line += 1;
                    last_line_start = i + 1;
                } else if u == 0x0A || u == 0x2028 || u == 0x2029 {
                    expected_line += 1;
                    last_line_start = i + 1;
                }
                i += 1;
            }
            assert_eq!(line, expected_line, "line mismatch in {source:?} at {token_pos}");
            assert_eq!(
                column,
                token_pos - last_line_start,
                "column mismatch in {source:?} at {token_pos}"
            );
        }
    }
}

#[test]
fn preceding_line_break_reflects_the_gap_between_tokens() {
    let mut state = ParserState::from_source("test.js", "a b\nc /* x\n */ d e");
    let expectations = [
        ("a", false),
        ("b", false),
        ("c", true),
        ("d", true),
        ("e", false),
    ];
    for (text, expect_break) in expectations {
        assert_eq!(state.next_token(0), Token::Identifier);
        assert_eq!(state.token_value.as_str(), Some(text));
        assert_eq!(
            state.has_preceding_line_break(),
            expect_break,
            "token {text:?}"
        );
    }
}

#[test]
fn token_text_matches_the_source_slice() {
    let source = "let total = items.length ?? 0;";
    let mut state = ParserState::from_source("test.js", source);
    loop {
        let token = state.next_token(0);
        if token == Token::EndOfSource {
            break;
        }
        let raw = state.token_text();
        let expected: String = source
            .encode_utf16()
            .skip(state.token_pos)
            .take(state.index - state.token_pos)
            .map(|u| char::from_u32(u as u32).unwrap_or('\u{FFFD}'))
            .collect();
        assert_eq!(raw, expected);
    }
}
