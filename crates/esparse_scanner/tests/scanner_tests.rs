//! Scanner integration tests.
//!
//! Verifies tokenization of literals, strict-mode classification, error
//! tokens and the parser-driven re-scans.

use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::intern::StringInterner;
use esparse_scanner::{Scanner, Token, TokenValue};

/// Helper: scan all tokens up to (not including) end of file.
fn scan_all_with(source: &str, strict: bool) -> (Vec<Token>, Scanner) {
    let mut scanner = Scanner::new(source, StringInterner::new());
    scanner.set_strict_mode(strict);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind == SyntaxKind::EndOfFileToken {
            break;
        }
        let is_error = token.kind.is_error();
        tokens.push(token);
        if is_error {
            break;
        }
    }
    (tokens, scanner)
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all_with(source, false).0.into_iter().map(|t| t.kind).collect()
}

fn scan_one(source: &str, strict: bool) -> (Token, Scanner) {
    let (tokens, scanner) = scan_all_with(source, strict);
    assert_eq!(tokens.len(), 1, "expected a single token for {:?}", source);
    (tokens[0], scanner)
}

// ============================================================================
// Empty input and trivia
// ============================================================================

#[test]
fn test_empty_source() {
    assert!(scan_kinds("").is_empty());
    assert!(scan_kinds("   \n\t // comment\n /* block */ ").is_empty());
}

#[test]
fn test_comment_line_break_sets_flag() {
    let (tokens, _) = scan_all_with("a /*\n*/ b /* */ c", false);
    assert!(!tokens[0].has_preceding_line_break());
    assert!(tokens[1].has_preceding_line_break());
    assert!(!tokens[2].has_preceding_line_break());
    assert_eq!(tokens[1].location.line, 2);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numeric_literals() {
    let cases: &[(&str, f64)] = &[
        ("42", 42.0),
        ("3.14", 3.14),
        (".5", 0.5),
        ("1e3", 1000.0),
        ("2E-2", 0.02),
        ("0xFF", 255.0),
        ("0b1010", 10.0),
        ("0o17", 15.0),
        ("017", 15.0),
        ("019", 19.0),
    ];
    for (source, value) in cases {
        let (token, _) = scan_one(source, false);
        assert_eq!(token.kind, SyntaxKind::NumericLiteral, "{}", source);
        assert_eq!(token.number(), Some(*value), "{}", source);
    }
}

#[test]
fn test_legacy_octal_flagged() {
    let (token, _) = scan_one("017", false);
    assert!(token.flags.contains(TokenFlags::OCTAL));
}

#[test]
fn test_legacy_octal_in_strict_mode() {
    let (token, scanner) = scan_one("017", true);
    assert_eq!(token.kind, SyntaxKind::UnterminatedOctalNumber);
    assert_eq!(scanner.token_text(&token), "017");
}

#[test]
fn test_number_followed_by_identifier() {
    let (token, scanner) = scan_one("3in", false);
    assert_eq!(token.kind, SyntaxKind::InvalidNumericLiteral);
    assert_eq!(scanner.token_text(&token), "3in");
}

#[test]
fn test_missing_exponent_digits() {
    let (token, _) = scan_one("1e+", false);
    assert_eq!(token.kind, SyntaxKind::UnterminatedNumericLiteral);
}

#[test]
fn test_empty_hex_literal() {
    let (token, _) = scan_one("0x", false);
    assert_eq!(token.kind, SyntaxKind::InvalidNumericLiteral);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_cooked_value() {
    let (token, scanner) = scan_one(r#""a\n\x41B\u{43}\'""#, false);
    assert_eq!(token.kind, SyntaxKind::StringLiteral);
    let cooked = token.string().expect("string value");
    assert_eq!(scanner.interner().resolve(cooked), "a\nABC'");
    assert!(token.flags.contains(TokenFlags::CONTAINS_ESCAPE));
}

#[test]
fn test_use_strict_raw_length() {
    let (token, _) = scan_one("'use strict'", false);
    match token.value {
        TokenValue::String { raw_len, .. } => assert_eq!(raw_len, 12),
        other => panic!("unexpected value {:?}", other),
    }
    assert!(!token.flags.contains(TokenFlags::CONTAINS_ESCAPE));

    let (escaped, _) = scan_one(r"'use\x20strict'", false);
    assert!(escaped.flags.contains(TokenFlags::CONTAINS_ESCAPE));
}

#[test]
fn test_line_continuation() {
    let (token, scanner) = scan_one("'a\\\nb'", false);
    assert!(token.flags.contains(TokenFlags::LINE_CONTINUATION));
    assert_eq!(scanner.interner().resolve(token.string().expect("string")), "ab");
}

#[test]
fn test_unterminated_string() {
    let (token, scanner) = scan_one("'abc\n'", false);
    assert_eq!(token.kind, SyntaxKind::UnterminatedStringLiteral);
    assert_eq!(scanner.token_text(&token), "'abc");
}

#[test]
fn test_octal_escape_strictness() {
    let (sloppy, scanner) = scan_one(r"'\101'", false);
    assert_eq!(sloppy.kind, SyntaxKind::StringLiteral);
    assert!(sloppy.flags.contains(TokenFlags::OCTAL));
    assert_eq!(scanner.interner().resolve(sloppy.string().expect("string")), "A");

    let (strict, _) = scan_one(r"'\101'", true);
    assert_eq!(strict.kind, SyntaxKind::InvalidStringLiteral);

    let (nul, _) = scan_one(r"'\0'", true);
    assert_eq!(nul.kind, SyntaxKind::StringLiteral);
}

#[test]
fn test_bad_hex_escape() {
    let (token, _) = scan_one(r"'\xZZ'", false);
    assert_eq!(token.kind, SyntaxKind::InvalidStringLiteral);
}

// ============================================================================
// Identifiers and keywords
// ============================================================================

#[test]
fn test_strict_reserved_words_depend_on_mode() {
    let (sloppy, _) = scan_one("implements", false);
    assert_eq!(sloppy.kind, SyntaxKind::Identifier);
    let (strict, _) = scan_one("implements", true);
    assert_eq!(strict.kind, SyntaxKind::ImplementsKeyword);
}

#[test]
fn test_contextual_words_are_identifiers() {
    assert_eq!(
        scan_kinds("of as from get set target let yield"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::LetKeyword,
            SyntaxKind::YieldKeyword,
        ]
    );
}

#[test]
fn test_keywords_carry_their_name() {
    let (token, scanner) = scan_one("typeof", false);
    assert_eq!(token.kind, SyntaxKind::TypeOfKeyword);
    let name = token.identifier().expect("keyword name");
    assert_eq!(scanner.interner().resolve(name), "typeof");
}

#[test]
fn test_identifier_escapes() {
    let (token, scanner) = scan_one(r"a\u0062c", false);
    assert_eq!(token.kind, SyntaxKind::Identifier);
    assert_eq!(scanner.interner().resolve(token.identifier().expect("name")), "abc");

    let (bad, _) = scan_one(r"a\x62", false);
    assert_eq!(bad.kind, SyntaxKind::InvalidIdentifierEscape);

    let (not_part, _) = scan_one(r"a\u002D", false);
    assert_eq!(not_part.kind, SyntaxKind::InvalidIdentifierUnicodeEscape);

    let (incomplete, _) = scan_one(r"a\u00", false);
    assert_eq!(incomplete.kind, SyntaxKind::IncompleteUnicodeEscape);

    let (keyword, _) = scan_one(r"v\u0061r", false);
    assert_eq!(keyword.kind, SyntaxKind::InvalidIdentifierEscape);
}

#[test]
fn test_unicode_identifier() {
    let (token, scanner) = scan_one("café", false);
    assert_eq!(token.kind, SyntaxKind::Identifier);
    assert_eq!(scanner.interner().resolve(token.identifier().expect("name")), "café");
    assert_eq!(token.location.end, 4);
}

#[test]
fn test_unrecognized_character() {
    let (token, _) = scan_one("#", false);
    assert_eq!(token.kind, SyntaxKind::UnrecognizedToken);
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn test_template_pieces() {
    let mut scanner = Scanner::new("`a${x}b${y}c`", StringInterner::new());
    let head = scanner.next_token();
    assert_eq!(head.kind, SyntaxKind::TemplateHead);
    assert_eq!(scanner.next_token().kind, SyntaxKind::Identifier);
    let brace = scanner.next_token();
    assert_eq!(brace.kind, SyntaxKind::CloseBraceToken);
    let middle = scanner.rescan_template_continuation(&brace);
    assert_eq!(middle.kind, SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.next_token().kind, SyntaxKind::Identifier);
    let brace = scanner.next_token();
    let tail = scanner.rescan_template_continuation(&brace);
    assert_eq!(tail.kind, SyntaxKind::TemplateTail);
    match tail.value {
        TokenValue::Template { cooked, is_tail, .. } => {
            assert!(is_tail);
            assert_eq!(scanner.interner().resolve(cooked), "c");
        }
        other => panic!("unexpected value {:?}", other),
    }
    assert_eq!(scanner.next_token().kind, SyntaxKind::EndOfFileToken);
}

#[test]
fn test_template_raw_normalizes_carriage_returns() {
    let (token, scanner) = scan_one("`a\r\nb\\n`", false);
    assert_eq!(token.kind, SyntaxKind::NoSubstitutionTemplate);
    match token.value {
        TokenValue::Template { cooked, raw, .. } => {
            assert_eq!(scanner.interner().resolve(cooked), "a\nb\n");
            assert_eq!(scanner.interner().resolve(raw), "a\nb\\n");
        }
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn test_unterminated_template() {
    let (token, _) = scan_one("`abc", false);
    assert_eq!(token.kind, SyntaxKind::UnterminatedTemplateLiteral);
}

// ============================================================================
// Regular expressions
// ============================================================================

#[test]
fn test_rescan_regexp() {
    let mut scanner = Scanner::new("/a[/]b\\//gi;", StringInterner::new());
    let slash = scanner.next_token();
    assert_eq!(slash.kind, SyntaxKind::SlashToken);
    let regexp = scanner.rescan_regexp(&slash).expect("valid regexp");
    assert_eq!(regexp.kind, SyntaxKind::RegularExpressionLiteral);
    match regexp.value {
        TokenValue::RegExp { pattern, flags } => {
            assert_eq!(scanner.interner().resolve(pattern), "a[/]b\\/");
            assert_eq!(scanner.interner().resolve(flags), "gi");
        }
        other => panic!("unexpected value {:?}", other),
    }
    assert_eq!(scanner.next_token().kind, SyntaxKind::SemicolonToken);
}

#[test]
fn test_rescan_regexp_from_slash_equals() {
    let mut scanner = Scanner::new("/=x/", StringInterner::new());
    let slash = scanner.next_token();
    assert_eq!(slash.kind, SyntaxKind::SlashEqualsToken);
    let regexp = scanner.rescan_regexp(&slash).expect("valid regexp");
    match regexp.value {
        TokenValue::RegExp { pattern, .. } => assert_eq!(scanner.interner().resolve(pattern), "=x"),
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn test_regexp_flag_errors() {
    for source in ["/a/gg", "/a/x", "/a", "/a\n/"] {
        let mut scanner = Scanner::new(source, StringInterner::new());
        let slash = scanner.next_token();
        assert!(scanner.rescan_regexp(&slash).is_none(), "{}", source);
    }
}
