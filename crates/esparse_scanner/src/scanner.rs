//! The ECMAScript scanner.
//!
//! Converts source text into tokens one at a time. The parser pulls tokens
//! with `next_token` and asks for the two context-dependent re-scans itself:
//! `/` as a regular expression and `}` as a template continuation.
//!
//! Malformed input never panics and never records a side diagnostic: it is
//! returned as an error token whose kind names the problem.

use crate::char_codes::*;
use crate::token::{Token, TokenLocation, TokenValue};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::intern::StringInterner;
use esparse_core::text::TextPos;

/// Saved scanner cursor, used for save points and cache fast-forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState {
    pub pos: usize,
    pub line: u32,
    pub line_start: usize,
}

/// The scanner converts ECMAScript source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Current 1-based line number.
    line: u32,
    /// Offset of the first character of the current line.
    line_start: usize,
    /// Start of the token being scanned (after leading trivia).
    token_start: usize,
    /// Flags collected for the token being scanned.
    token_flags: TokenFlags,
    /// Payload of the token being scanned.
    token_value: TokenValue,
    /// Strict code reserves more words and rejects legacy octal.
    strict_mode: bool,
    interner: StringInterner,
    /// Scratch buffer for cooked values.
    buffer: String,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str, interner: StringInterner) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            line: 1,
            line_start: 0,
            token_start: 0,
            token_flags: TokenFlags::NONE,
            token_value: TokenValue::None,
            strict_mode: false,
            interner,
            buffer: String::new(),
        }
    }

    /// Number the first line of the source `line` instead of 1.
    pub fn set_first_line(&mut self, line: u32) {
        self.line = line.max(1);
    }

    pub fn set_strict_mode(&mut self, strict_mode: bool) {
        self.strict_mode = strict_mode;
    }

    #[inline]
    pub fn is_strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Get the full source text length.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Save the scanner cursor.
    pub fn state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            line: self.line,
            line_start: self.line_start,
        }
    }

    /// Move the scanner cursor; the next `next_token` starts scanning there.
    pub fn restore(&mut self, state: ScannerState) {
        self.pos = state.pos.min(self.text.len());
        self.line = state.line;
        self.line_start = state.line_start;
    }

    /// Get a substring of the source text.
    pub fn text_slice(&self, start: usize, end: usize) -> String {
        let s = start.min(self.text.len());
        let e = end.min(self.text.len()).max(s);
        self.text[s..e].iter().collect()
    }

    /// The source text a token was scanned from.
    pub fn token_text(&self, token: &Token) -> String {
        self.text_slice(token.location.start as usize, token.location.end as usize)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume one line terminator at the cursor, treating CR LF as one.
    fn consume_line_break(&mut self) {
        if self.current_char() == Some(CARRIAGE_RETURN) && self.char_at(1) == Some(LINE_FEED) {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Skip whitespace and comments. Returns the start of an unterminated
    /// multi-line comment as the error.
    fn skip_trivia(&mut self) -> Result<(), usize> {
        while let Some(ch) = self.current_char() {
            match ch {
                _ if is_line_break(ch) => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.consume_line_break();
                }
                _ if is_white_space_single_line(ch) => {
                    self.pos += 1;
                }
                '/' if self.char_at(1) == Some('/') => {
                    self.pos += 2;
                    while let Some(c) = self.current_char() {
                        if is_line_break(c) {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                '/' if self.char_at(1) == Some('*') => {
                    let comment_start = self.pos;
                    self.pos += 2;
                    loop {
                        match self.current_char() {
                            None => return Err(comment_start),
                            Some('*') if self.char_at(1) == Some('/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(c) if is_line_break(c) => {
                                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                                self.consume_line_break();
                            }
                            Some(_) => self.pos += 1,
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
        Ok(())
    }

    fn make_token(&mut self, kind: SyntaxKind, line: u32, line_start: usize) -> Token {
        Token {
            kind,
            location: TokenLocation {
                line,
                start: self.token_start as TextPos,
                end: self.pos as TextPos,
                line_start: line_start as TextPos,
            },
            flags: self.token_flags,
            value: std::mem::replace(&mut self.token_value, TokenValue::None),
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.token_flags = TokenFlags::NONE;
        self.token_value = TokenValue::None;

        if let Err(comment_start) = self.skip_trivia() {
            self.token_start = comment_start;
            let (line, line_start) = (self.line, self.line_start);
            return self.make_token(SyntaxKind::UnterminatedMultilineComment, line, line_start);
        }
        self.token_start = self.pos;
        let line = self.line;
        let line_start = self.line_start;

        let Some(ch) = self.current_char() else {
            return self.make_token(SyntaxKind::EndOfFileToken, line, line_start);
        };

        let kind = match ch {
            '(' => { self.pos += 1; SyntaxKind::OpenParenToken }
            ')' => { self.pos += 1; SyntaxKind::CloseParenToken }
            '{' => { self.pos += 1; SyntaxKind::OpenBraceToken }
            '}' => { self.pos += 1; SyntaxKind::CloseBraceToken }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ',' => { self.pos += 1; SyntaxKind::CommaToken }
            '~' => { self.pos += 1; SyntaxKind::TildeToken }
            '?' => { self.pos += 1; SyntaxKind::QuestionToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }

            '.' => self.scan_dot(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_with_double_or_equals('+', SyntaxKind::PlusToken, SyntaxKind::PlusPlusToken, SyntaxKind::PlusEqualsToken),
            '-' => self.scan_with_double_or_equals('-', SyntaxKind::MinusToken, SyntaxKind::MinusMinusToken, SyntaxKind::MinusEqualsToken),
            '&' => self.scan_with_double_or_equals('&', SyntaxKind::AmpersandToken, SyntaxKind::AmpersandAmpersandToken, SyntaxKind::AmpersandEqualsToken),
            '|' => self.scan_with_double_or_equals('|', SyntaxKind::BarToken, SyntaxKind::BarBarToken, SyntaxKind::BarEqualsToken),
            '*' => self.scan_with_equals(SyntaxKind::AsteriskToken, SyntaxKind::AsteriskEqualsToken),
            '/' => self.scan_with_equals(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken),
            '%' => self.scan_with_equals(SyntaxKind::PercentToken, SyntaxKind::PercentEqualsToken),
            '^' => self.scan_with_equals(SyntaxKind::CaretToken, SyntaxKind::CaretEqualsToken),

            '\'' | '"' => self.scan_string_literal(ch),
            '`' => {
                self.pos += 1;
                match self.scan_template_characters() {
                    Ok(true) => SyntaxKind::NoSubstitutionTemplate,
                    Ok(false) => SyntaxKind::TemplateHead,
                    Err(kind) => kind,
                }
            }

            '0'..='9' => self.scan_number(),

            '\\' => self.scan_identifier_or_keyword(),
            _ if is_identifier_start(ch) => self.scan_identifier_or_keyword(),

            _ => {
                self.pos += 1;
                SyntaxKind::UnrecognizedToken
            }
        };

        self.make_token(kind, line, line_start)
    }

    // ========================================================================
    // Punctuation
    // ========================================================================

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            self.pos += 3;
            SyntaxKind::DotDotDotToken
        } else if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            self.pos += 1;
            SyntaxKind::DotToken
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('<'), Some('=')) => { self.pos += 3; SyntaxKind::LessThanLessThanEqualsToken }
            (Some('<'), _) => { self.pos += 2; SyntaxKind::LessThanLessThanToken }
            (Some('='), _) => { self.pos += 2; SyntaxKind::LessThanEqualsToken }
            _ => { self.pos += 1; SyntaxKind::LessThanToken }
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2), self.char_at(3)) {
            (Some('>'), Some('>'), Some('=')) => {
                self.pos += 4;
                SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
            }
            (Some('>'), Some('>'), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken
            }
            (Some('>'), Some('='), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanEqualsToken
            }
            (Some('>'), _, _) => { self.pos += 2; SyntaxKind::GreaterThanGreaterThanToken }
            (Some('='), _, _) => { self.pos += 2; SyntaxKind::GreaterThanEqualsToken }
            _ => { self.pos += 1; SyntaxKind::GreaterThanToken }
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('='), Some('=')) => { self.pos += 3; SyntaxKind::EqualsEqualsEqualsToken }
            (Some('='), _) => { self.pos += 2; SyntaxKind::EqualsEqualsToken }
            (Some('>'), _) => { self.pos += 2; SyntaxKind::EqualsGreaterThanToken }
            _ => { self.pos += 1; SyntaxKind::EqualsToken }
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('='), Some('=')) => { self.pos += 3; SyntaxKind::ExclamationEqualsEqualsToken }
            (Some('='), _) => { self.pos += 2; SyntaxKind::ExclamationEqualsToken }
            _ => { self.pos += 1; SyntaxKind::ExclamationToken }
        }
    }

    /// `x`, `xx` or `x=`.
    fn scan_with_double_or_equals(
        &mut self,
        ch: char,
        single: SyntaxKind,
        double: SyntaxKind,
        equals: SyntaxKind,
    ) -> SyntaxKind {
        match self.char_at(1) {
            Some(c) if c == ch => { self.pos += 2; double }
            Some('=') => { self.pos += 2; equals }
            _ => { self.pos += 1; single }
        }
    }

    /// `x` or `x=`.
    fn scan_with_equals(&mut self, single: SyntaxKind, equals: SyntaxKind) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            equals
        } else {
            self.pos += 1;
            single
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier_or_keyword(&mut self) -> SyntaxKind {
        self.buffer.clear();
        let mut has_escape = false;
        let mut first = true;
        loop {
            match self.current_char() {
                Some('\\') => {
                    has_escape = true;
                    let ch = match self.scan_identifier_escape() {
                        Ok(ch) => ch,
                        Err(kind) => return kind,
                    };
                    let valid = if first { is_identifier_start(ch) } else { is_identifier_part(ch) };
                    if !valid {
                        return SyntaxKind::InvalidIdentifierUnicodeEscape;
                    }
                    self.buffer.push(ch);
                }
                Some(ch) if is_identifier_part(ch) => {
                    self.buffer.push(ch);
                    self.pos += 1;
                }
                _ => break,
            }
            first = false;
        }

        let name = self.interner.intern(&self.buffer);
        self.token_value = TokenValue::Identifier(name);

        if has_escape {
            self.token_flags |= TokenFlags::CONTAINS_ESCAPE;
            return match SyntaxKind::from_keyword(&self.buffer) {
                Some(kind) if kind.is_reserved_word() => SyntaxKind::InvalidIdentifierEscape,
                Some(kind) if kind.is_strict_reserved_word() && self.strict_mode => {
                    SyntaxKind::InvalidIdentifierEscape
                }
                _ => SyntaxKind::Identifier,
            };
        }

        match SyntaxKind::from_keyword(&self.buffer) {
            Some(kind) if kind.is_strict_reserved_word() && !self.strict_mode => SyntaxKind::Identifier,
            Some(kind) => kind,
            None => SyntaxKind::Identifier,
        }
    }

    /// Scan `\uXXXX` or `\u{X...}` inside an identifier.
    fn scan_identifier_escape(&mut self) -> Result<char, SyntaxKind> {
        self.pos += 1;
        match self.current_char() {
            Some('u') => self.pos += 1,
            None => return Err(SyntaxKind::IncompleteUnicodeEscape),
            Some(_) => return Err(SyntaxKind::InvalidIdentifierEscape),
        }
        match self.scan_unicode_escape_value() {
            UnicodeEscape::Value(code) => {
                char::from_u32(code).ok_or(SyntaxKind::InvalidIdentifierUnicodeEscape)
            }
            UnicodeEscape::Incomplete => Err(SyntaxKind::IncompleteUnicodeEscape),
            UnicodeEscape::Invalid => Err(SyntaxKind::InvalidIdentifierUnicodeEscape),
        }
    }

    /// Scan the part of a unicode escape after `\u`.
    fn scan_unicode_escape_value(&mut self) -> UnicodeEscape {
        if self.current_char() == Some('{') {
            self.pos += 1;
            let mut value: u32 = 0;
            let mut digits = 0;
            loop {
                match self.current_char() {
                    None => return UnicodeEscape::Incomplete,
                    Some('}') => {
                        self.pos += 1;
                        break;
                    }
                    Some(c) => match c.to_digit(16) {
                        Some(d) => {
                            value = value.saturating_mul(16).saturating_add(d);
                            digits += 1;
                            self.pos += 1;
                        }
                        None => return UnicodeEscape::Invalid,
                    },
                }
            }
            if digits == 0 || value > 0x10FFFF {
                return UnicodeEscape::Invalid;
            }
            return UnicodeEscape::Value(value);
        }

        let mut value: u32 = 0;
        for _ in 0..4 {
            match self.current_char() {
                None => return UnicodeEscape::Incomplete,
                Some(c) => match c.to_digit(16) {
                    Some(d) => {
                        value = value * 16 + d;
                        self.pos += 1;
                    }
                    None => return UnicodeEscape::Invalid,
                },
            }
        }
        UnicodeEscape::Value(value)
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;

        if self.current_char() == Some('0') {
            let radix = match self.char_at(1) {
                Some('x') | Some('X') => Some((16, TokenFlags::HEX_SPECIFIER)),
                Some('b') | Some('B') => Some((2, TokenFlags::BINARY_SPECIFIER)),
                Some('o') | Some('O') => Some((8, TokenFlags::OCTAL_SPECIFIER)),
                _ => None,
            };
            if let Some((radix, flag)) = radix {
                self.pos += 2;
                self.token_flags |= flag;
                let Some(value) = self.scan_radix_digits(radix) else {
                    return SyntaxKind::InvalidNumericLiteral;
                };
                return self.finish_number(value);
            }
            if self.char_at(1).map_or(false, is_digit) {
                return self.scan_legacy_octal(start);
            }
        }

        self.scan_decimal(start)
    }

    fn scan_radix_digits(&mut self, radix: u32) -> Option<f64> {
        let mut value = 0f64;
        let mut any = false;
        while let Some(d) = self.current_char().and_then(|c| c.to_digit(radix)) {
            value = value * radix as f64 + d as f64;
            any = true;
            self.pos += 1;
        }
        any.then_some(value)
    }

    /// `017` is octal, `019` is decimal; both are rejected in strict code.
    fn scan_legacy_octal(&mut self, start: usize) -> SyntaxKind {
        let mut end = self.pos + 1;
        while self.text.get(end).map_or(false, |c| is_digit(*c)) {
            end += 1;
        }
        let all_octal = self.text[start..end].iter().all(|c| is_octal_digit(*c));
        if self.strict_mode {
            self.pos = end;
            return SyntaxKind::UnterminatedOctalNumber;
        }
        if !all_octal {
            return self.scan_decimal(start);
        }
        self.pos += 1;
        self.token_flags |= TokenFlags::OCTAL;
        let value = self.scan_radix_digits(8).unwrap_or(0.0);
        self.finish_number(value)
    }

    fn scan_decimal(&mut self, start: usize) -> SyntaxKind {
        self.scan_digits();
        if self.current_char() == Some('.') {
            self.pos += 1;
            self.scan_digits();
        }
        if let Some('e') | Some('E') = self.current_char() {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if let Some('+') | Some('-') = self.current_char() {
                self.pos += 1;
            }
            if !self.current_char().map_or(false, is_digit) {
                return SyntaxKind::UnterminatedNumericLiteral;
            }
            self.scan_digits();
        }

        self.buffer.clear();
        self.buffer.extend(&self.text[start..self.pos]);
        match self.buffer.parse::<f64>() {
            Ok(value) => self.finish_number(value),
            Err(_) => SyntaxKind::InvalidNumericLiteral,
        }
    }

    fn scan_digits(&mut self) {
        while self.current_char().map_or(false, is_digit) {
            self.pos += 1;
        }
    }

    /// A number may not run straight into an identifier or another digit.
    fn finish_number(&mut self, value: f64) -> SyntaxKind {
        match self.current_char() {
            Some(c) if is_identifier_start(c) || is_digit(c) || c == '\\' => {
                while self.current_char().map_or(false, |c| is_identifier_part(c) || c == '\\') {
                    self.pos += 1;
                }
                SyntaxKind::InvalidNumericLiteral
            }
            _ => {
                self.token_value = TokenValue::Number(value);
                SyntaxKind::NumericLiteral
            }
        }
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        self.buffer.clear();
        loop {
            match self.current_char() {
                None => return SyntaxKind::UnterminatedStringLiteral,
                Some(c) if c == quote => {
                    self.pos += 1;
                    break;
                }
                Some('\\') => {
                    self.token_flags |= TokenFlags::CONTAINS_ESCAPE;
                    self.pos += 1;
                    if let Err(kind) = self.scan_escape(false) {
                        return kind;
                    }
                }
                Some(c) if is_line_break(c) => return SyntaxKind::UnterminatedStringLiteral,
                Some(c) => {
                    self.buffer.push(c);
                    self.pos += 1;
                }
            }
        }
        let cooked = self.interner.intern(&self.buffer);
        self.token_value = TokenValue::String {
            cooked,
            raw_len: (self.pos - start) as u32,
        };
        SyntaxKind::StringLiteral
    }

    /// Scan one escape sequence after the backslash, appending the cooked
    /// character(s) to the buffer.
    fn scan_escape(&mut self, in_template: bool) -> Result<(), SyntaxKind> {
        let unterminated = if in_template {
            SyntaxKind::UnterminatedTemplateLiteral
        } else {
            SyntaxKind::UnterminatedStringLiteral
        };
        let Some(ch) = self.current_char() else {
            return Err(unterminated);
        };
        match ch {
            _ if is_line_break(ch) => {
                self.token_flags |= TokenFlags::LINE_CONTINUATION;
                self.consume_line_break();
            }
            'n' => { self.buffer.push('\n'); self.pos += 1; }
            't' => { self.buffer.push('\t'); self.pos += 1; }
            'r' => { self.buffer.push('\r'); self.pos += 1; }
            'b' => { self.buffer.push('\u{0008}'); self.pos += 1; }
            'f' => { self.buffer.push('\u{000C}'); self.pos += 1; }
            'v' => { self.buffer.push('\u{000B}'); self.pos += 1; }
            '0' if !self.char_at(1).map_or(false, is_digit) => {
                self.buffer.push('\0');
                self.pos += 1;
            }
            '0'..='7' => {
                if in_template || self.strict_mode {
                    return Err(SyntaxKind::InvalidStringLiteral);
                }
                self.token_flags |= TokenFlags::OCTAL;
                // Up to three digits, value at most 0o377.
                let max_digits = if ch <= '3' { 3 } else { 2 };
                let mut value = 0u32;
                let mut count = 0;
                while count < max_digits {
                    match self.current_char().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.pos += 1;
                            count += 1;
                        }
                        None => break,
                    }
                }
                self.buffer.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            }
            '8' | '9' if in_template => return Err(SyntaxKind::InvalidStringLiteral),
            'x' => {
                self.pos += 1;
                let hi = self.current_char().and_then(|c| c.to_digit(16));
                let lo = self.char_at(1).and_then(|c| c.to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        self.pos += 2;
                        self.buffer.push(char::from_u32(hi * 16 + lo).unwrap_or('\u{FFFD}'));
                    }
                    _ => return Err(SyntaxKind::InvalidStringLiteral),
                }
            }
            'u' => {
                self.pos += 1;
                let code = match self.scan_unicode_escape_value() {
                    UnicodeEscape::Value(code) => code,
                    UnicodeEscape::Incomplete if self.is_eof() => return Err(unterminated),
                    _ => return Err(SyntaxKind::InvalidStringLiteral),
                };
                self.push_code_unit(code);
            }
            _ => {
                self.buffer.push(ch);
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// Push a scanned code point, pairing `😀`-style surrogates.
    fn push_code_unit(&mut self, code: u32) {
        if (0xD800..0xDC00).contains(&code)
            && self.current_char() == Some('\\')
            && self.char_at(1) == Some('u')
        {
            let saved = self.pos;
            self.pos += 2;
            if let UnicodeEscape::Value(low) = self.scan_unicode_escape_value() {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    self.buffer.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                    return;
                }
            }
            self.pos = saved;
        }
        self.buffer.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
    }

    /// Scan template characters up to `` ` `` (returns `true`) or `${`
    /// (returns `false`). The cursor starts right after the opening
    /// backtick or the closing `}` of a substitution.
    fn scan_template_characters(&mut self) -> Result<bool, SyntaxKind> {
        let content_start = self.pos;
        self.buffer.clear();
        let is_tail = loop {
            match self.current_char() {
                None => return Err(SyntaxKind::UnterminatedTemplateLiteral),
                Some('`') => break true,
                Some('$') if self.char_at(1) == Some('{') => break false,
                Some('\\') => {
                    self.token_flags |= TokenFlags::CONTAINS_ESCAPE;
                    self.pos += 1;
                    self.scan_escape(true)?;
                }
                Some(c) if is_line_break(c) => {
                    // CR and CR LF are both cooked as LF.
                    self.buffer.push('\n');
                    self.consume_line_break();
                }
                Some(c) => {
                    self.buffer.push(c);
                    self.pos += 1;
                }
            }
        };
        let content_end = self.pos;
        self.pos += if is_tail { 1 } else { 2 };

        let cooked = self.interner.intern(&self.buffer);
        let mut raw = String::with_capacity(content_end - content_start);
        let mut i = content_start;
        while i < content_end {
            let c = self.text[i];
            if c == CARRIAGE_RETURN {
                raw.push('\n');
                if self.text.get(i + 1) == Some(&LINE_FEED) {
                    i += 1;
                }
            } else {
                raw.push(c);
            }
            i += 1;
        }
        let raw = self.interner.intern(&raw);
        self.token_value = TokenValue::Template { cooked, raw, is_tail };
        Ok(is_tail)
    }

    /// Re-scan the `}` token `close_brace` as the continuation of a
    /// template literal: a `TemplateMiddle` or a `TemplateTail`.
    pub fn rescan_template_continuation(&mut self, close_brace: &Token) -> Token {
        self.token_flags = close_brace.flags & TokenFlags::PRECEDING_LINE_BREAK;
        self.token_value = TokenValue::None;
        self.token_start = close_brace.location.start as usize;
        self.pos = self.token_start + 1;
        self.line = close_brace.location.line;
        self.line_start = close_brace.location.line_start as usize;
        let line = self.line;
        let line_start = self.line_start;
        let kind = match self.scan_template_characters() {
            Ok(true) => SyntaxKind::TemplateTail,
            Ok(false) => SyntaxKind::TemplateMiddle,
            Err(kind) => kind,
        };
        self.make_token(kind, line, line_start)
    }

    // ========================================================================
    // Regular expressions
    // ========================================================================

    /// Re-scan the `/` or `/=` token `slash` as a regular expression
    /// literal. Returns `None` for an unterminated body or for flags other
    /// than a set of distinct `g`, `i`, `m`, `u`, `y`.
    pub fn rescan_regexp(&mut self, slash: &Token) -> Option<Token> {
        self.token_flags = slash.flags;
        self.token_value = TokenValue::None;
        self.token_start = slash.location.start as usize;
        self.pos = self.token_start + 1;
        self.line = slash.location.line;
        self.line_start = slash.location.line_start as usize;

        self.buffer.clear();
        let mut in_class = false;
        loop {
            let ch = self.current_char()?;
            if is_line_break(ch) {
                return None;
            }
            match ch {
                '\\' => {
                    self.buffer.push(ch);
                    self.pos += 1;
                    let escaped = self.current_char()?;
                    if is_line_break(escaped) {
                        return None;
                    }
                    self.buffer.push(escaped);
                    self.pos += 1;
                    continue;
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    self.pos += 1;
                    break;
                }
                _ => {}
            }
            self.buffer.push(ch);
            self.pos += 1;
        }
        let pattern = self.interner.intern(&self.buffer);

        self.buffer.clear();
        while let Some(ch) = self.current_char() {
            if ch == '\\' {
                return None;
            }
            if !is_identifier_part(ch) {
                break;
            }
            if !matches!(ch, 'g' | 'i' | 'm' | 'u' | 'y') || self.buffer.contains(ch) {
                return None;
            }
            self.buffer.push(ch);
            self.pos += 1;
        }
        let flags = self.interner.intern(&self.buffer);

        self.token_value = TokenValue::RegExp { pattern, flags };
        let (line, line_start) = (self.line, self.line_start);
        Some(self.make_token(SyntaxKind::RegularExpressionLiteral, line, line_start))
    }
}

enum UnicodeEscape {
    Value(u32),
    /// Input ended inside the escape.
    Incomplete,
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(source: &str) -> Scanner {
        Scanner::new(source, StringInterner::new())
    }

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = scanner("( ) { } [ ] ; , : ?");
        assert_eq!(scanner.next_token().kind, SyntaxKind::OpenParenToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::CloseParenToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::OpenBracketToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::CloseBracketToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::SemicolonToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::CommaToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::ColonToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::QuestionToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_shift_operators() {
        let mut scanner = scanner("> >= >> >>= >>> >>>= << <<=");
        assert_eq!(scanner.next_token().kind, SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::GreaterThanEqualsToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::GreaterThanGreaterThanToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::GreaterThanGreaterThanEqualsToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::GreaterThanGreaterThanGreaterThanToken);
        assert_eq!(
            scanner.next_token().kind,
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scanner.next_token().kind, SyntaxKind::LessThanLessThanToken);
        assert_eq!(scanner.next_token().kind, SyntaxKind::LessThanLessThanEqualsToken);
    }

    #[test]
    fn test_token_location_tracks_lines() {
        let mut scanner = scanner("a\n  b\r\nc");
        let a = scanner.next_token();
        assert_eq!(a.location.position().line, 1);
        let b = scanner.next_token();
        assert!(b.has_preceding_line_break());
        assert_eq!((b.location.line, b.location.start, b.location.line_start), (2, 4, 2));
        assert_eq!(b.location.position().column, 3);
        let c = scanner.next_token();
        assert_eq!((c.location.line, c.location.line_start), (3, 7));
    }

    #[test]
    fn test_state_restore() {
        let mut scanner = scanner("a b c");
        scanner.next_token();
        let state = scanner.state();
        let b = scanner.next_token();
        scanner.next_token();
        scanner.restore(state);
        assert_eq!(scanner.next_token(), b);
    }

    #[test]
    fn test_unterminated_comment() {
        let mut scanner = scanner("a /* never closed");
        scanner.next_token();
        let token = scanner.next_token();
        assert_eq!(token.kind, SyntaxKind::UnterminatedMultilineComment);
        assert_eq!(token.location.start, 2);
    }
}
