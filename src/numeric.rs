//! Numeric literal scanning: decimal, radix-prefixed, legacy octal,
//! BigInt, exponents, numeric separators, and the dot-prefixed form.
//!
//! Decimal forms are cooked by collecting a separator-stripped image in
//! the scratch buffer and handing it to the platform float parser, which
//! rounds to nearest even. Radix forms accumulate positionally.

use crate::chars::{self, Chars};
use crate::context::{Context, context_has};
use crate::diagnostics::DiagnosticKind;
use crate::state::{ParserState, TokenFlags, TokenValue};
use crate::token::Token;
use crate::unicode;

impl ParserState {
    /// The cursor is on a decimal digit, or on `.` with a digit following.
    pub(crate) fn scan_numeric_literal(&mut self, context: u32) -> Token {
        if self.next_code_point == Chars::ZERO {
            match self.peek(1) {
                Chars::LOWER_X | Chars::UPPER_X => {
                    return self.scan_radix_literal(16, TokenFlags::HexSpecifier);
                }
                Chars::LOWER_O | Chars::UPPER_O => {
                    return self.scan_radix_literal(8, TokenFlags::OctalSpecifier);
                }
                Chars::LOWER_B | Chars::UPPER_B => {
                    return self.scan_radix_literal(2, TokenFlags::BinarySpecifier);
                }
                cp if chars::is_decimal_digit(cp) => {
                    return self.scan_leading_zero_literal(context);
                }
                Chars::UNDERSCORE => {
                    // separators may not touch a leading zero
                    self.diagnostics
                        .error(DiagnosticKind::ContinuousNumericSeparator, self.index + 1);
                }
                _ => {}
            }
        }

        self.scratch.clear();
        let mut is_integer = true;

        let int_digits = self.scan_digit_run(10, true);
        if self.next_code_point == Chars::PERIOD {
            is_integer = false;
            self.scratch.push('.');
            self.advance();
            self.scan_digit_run(10, true);
        }
        debug_assert!(int_digits > 0 || !is_integer);

        if self.next_code_point == Chars::LOWER_E || self.next_code_point == Chars::UPPER_E {
            is_integer = false;
            self.flag(TokenFlags::Scientific);
            let exponent_pos = self.index;
            self.scratch.push('e');
            self.advance();
            if self.next_code_point == Chars::PLUS || self.next_code_point == Chars::HYPHEN {
                self.scratch
                    .push(if self.next_code_point == Chars::PLUS { '+' } else { '-' });
                self.advance();
            }
            if self.scan_digit_run(10, true) == 0 {
                // `1e` reads as a trailing identifier; one diagnostic covers it
                self.diagnostics
                    .error(DiagnosticKind::IdentifierAfterNumericLiteral, exponent_pos);
                return Token::Error;
            }
        }

        if self.next_code_point == Chars::LOWER_N {
            if !is_integer {
                self.diagnostics
                    .error(DiagnosticKind::InvalidBigInt, self.token_pos);
                self.advance();
                return Token::Error;
            }
            let digits_end = self.index;
            self.advance();
            self.check_numeric_tail();
            self.token_value = TokenValue::BigInt(self.slice(self.token_pos, digits_end));
            return Token::BigIntLiteral;
        }

        self.check_numeric_tail();
        let value = self.scratch.parse::<f64>().unwrap_or(f64::NAN);
        self.token_value = TokenValue::Number(value);
        Token::NumericLiteral
    }

    /// `0x`, `0o`, `0b` literals. The cursor is on the `0`.
    fn scan_radix_literal(&mut self, radix: u32, specifier: TokenFlags) -> Token {
        self.advance();
        self.advance();
        self.flag(specifier);
        let (count, value) = self.scan_radix_digit_run(radix);
        if count == 0 {
            self.diagnostics
                .error(DiagnosticKind::ExpectedHexDigits, self.index);
            return Token::Error;
        }
        if self.next_code_point == Chars::LOWER_N {
            let digits_end = self.index;
            self.advance();
            self.check_numeric_tail();
            self.token_value = TokenValue::BigInt(self.slice(self.token_pos, digits_end));
            return Token::BigIntLiteral;
        }
        self.check_numeric_tail();
        self.token_value = TokenValue::Number(value);
        Token::NumericLiteral
    }

    /// Legacy octal (`017`) or non-octal decimal (`089`); both are
    /// rejected under strict mode and never take separators or a BigInt
    /// suffix. The cursor is on the leading `0`.
    fn scan_leading_zero_literal(&mut self, context: u32) -> Token {
        self.advance();
        let digits_start = self.index;
        let mut non_octal = false;
        while chars::is_decimal_digit(self.next_code_point) {
            if !chars::is_octal_digit(self.next_code_point) {
                non_octal = true;
            }
            self.advance();
        }
        if context_has(context, Context::Strict) {
            self.diagnostics
                .error(DiagnosticKind::StrictOctalLiteral, self.token_pos);
        }
        self.flag(if non_octal {
            TokenFlags::NonOctalDecimal
        } else {
            TokenFlags::Octal
        });

        let radix: u32 = if non_octal { 10 } else { 8 };
        let mut value = 0f64;
        let mut index = digits_start;
        while index < self.index {
            let digit = self.source().unit_at(index) - Chars::ZERO;
            value = value * radix as f64 + digit as f64;
            index += 1;
        }

        if self.next_code_point == Chars::LOWER_N {
            self.diagnostics
                .error(DiagnosticKind::InvalidBigInt, self.index);
            self.advance();
            return Token::Error;
        }
        self.check_numeric_tail();
        self.token_value = TokenValue::Number(value);
        Token::NumericLiteral
    }

    /// Scan a run of decimal digits and numeric separators, collecting the
    /// digits into the scratch buffer when `collect` is set. Separator
    /// placement errors are reported here. Returns the digit count.
    fn scan_digit_run(&mut self, radix: u32, collect: bool) -> u32 {
        let mut count = 0u32;
        let mut prev_separator = false;
        let mut seen_any = false;
        loop {
            let cp = self.next_code_point;
            if cp == Chars::UNDERSCORE {
                self.flag(TokenFlags::ContainsSeparator);
                if !seen_any || prev_separator {
                    self.diagnostics
                        .error(DiagnosticKind::ContinuousNumericSeparator, self.index);
                }
                prev_separator = true;
                seen_any = true;
                self.advance();
                continue;
            }
            match chars::hex_digit_value(cp) {
                Some(digit) if digit < radix => {
                    if collect {
                        self.scratch.push(cp as u8 as char);
                    }
                    count += 1;
                    prev_separator = false;
                    seen_any = true;
                    self.advance();
                }
                _ => break,
            }
        }
        if prev_separator {
            self.diagnostics
                .error(DiagnosticKind::TrailingNumericSeparator, self.index - 1);
        }
        count
    }

    /// Like [`scan_digit_run`] but accumulates the positional value for
    /// radix-prefixed literals.
    fn scan_radix_digit_run(&mut self, radix: u32) -> (u32, f64) {
        let mut count = 0u32;
        let mut value = 0f64;
        let mut prev_separator = false;
        let mut seen_any = false;
        loop {
            let cp = self.next_code_point;
            if cp == Chars::UNDERSCORE {
                self.flag(TokenFlags::ContainsSeparator);
                if !seen_any || prev_separator {
                    self.diagnostics
                        .error(DiagnosticKind::ContinuousNumericSeparator, self.index);
                }
                prev_separator = true;
                seen_any = true;
                self.advance();
                continue;
            }
            match chars::hex_digit_value(cp) {
                Some(digit) if digit < radix => {
                    value = value * radix as f64 + digit as f64;
                    count += 1;
                    prev_separator = false;
                    seen_any = true;
                    self.advance();
                }
                _ => break,
            }
        }
        if prev_separator {
            self.diagnostics
                .error(DiagnosticKind::TrailingNumericSeparator, self.index - 1);
        }
        (count, value)
    }

    /// A numeric literal may not be immediately followed by an identifier
    /// start or another decimal digit.
    fn check_numeric_tail(&mut self) {
        if self.at_end() {
            return;
        }
        let cp = self.next_code_point;
        let follows = chars::is_decimal_digit(cp)
            || cp == Chars::BACKSLASH
            || unicode::is_ascii_id_start(cp)
            || (cp > 0x7E
                && (unicode::is_id_start(cp)
                    || (chars::is_high_surrogate(cp)
                        && chars::is_low_surrogate(self.peek(1))
                        && unicode::is_id_start(chars::combine_surrogates(cp, self.peek(1))))));
        if follows {
            self.diagnostics
                .error(DiagnosticKind::IdentifierAfterNumericLiteral, self.index);
        }
    }
}
