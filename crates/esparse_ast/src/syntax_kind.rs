//! SyntaxKind: every token kind the scanner can produce.
//!
//! Kinds are grouped in contiguous discriminant ranges (punctuation,
//! assignment operators, keywords, strict-mode reserved words, error
//! tokens) so that classification is a pair of integer comparisons.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    EndOfFileToken = 0,
    Identifier = 1,

    // Literals
    NumericLiteral = 2,
    StringLiteral = 3,
    RegularExpressionLiteral = 4,

    // Template pieces: `...` is NoSubstitutionTemplate, `...${ is TemplateHead,
    // }...${ is TemplateMiddle and }...` is TemplateTail.
    NoSubstitutionTemplate = 5,
    TemplateHead = 6,
    TemplateMiddle = 7,
    TemplateTail = 8,

    // Punctuation
    OpenBraceToken = 10,
    CloseBraceToken = 11,
    OpenParenToken = 12,
    CloseParenToken = 13,
    OpenBracketToken = 14,
    CloseBracketToken = 15,
    DotToken = 16,
    DotDotDotToken = 17,
    SemicolonToken = 18,
    CommaToken = 19,
    LessThanToken = 20,
    GreaterThanToken = 21,
    LessThanEqualsToken = 22,
    GreaterThanEqualsToken = 23,
    EqualsEqualsToken = 24,
    ExclamationEqualsToken = 25,
    EqualsEqualsEqualsToken = 26,
    ExclamationEqualsEqualsToken = 27,
    EqualsGreaterThanToken = 28,
    PlusToken = 29,
    MinusToken = 30,
    AsteriskToken = 31,
    SlashToken = 32,
    PercentToken = 33,
    PlusPlusToken = 34,
    MinusMinusToken = 35,
    LessThanLessThanToken = 36,
    GreaterThanGreaterThanToken = 37,
    GreaterThanGreaterThanGreaterThanToken = 38,
    AmpersandToken = 39,
    BarToken = 40,
    CaretToken = 41,
    ExclamationToken = 42,
    TildeToken = 43,
    AmpersandAmpersandToken = 44,
    BarBarToken = 45,
    QuestionToken = 46,
    ColonToken = 47,

    // Assignment operators
    EqualsToken = 50,
    PlusEqualsToken = 51,
    MinusEqualsToken = 52,
    AsteriskEqualsToken = 53,
    SlashEqualsToken = 54,
    PercentEqualsToken = 55,
    LessThanLessThanEqualsToken = 56,
    GreaterThanGreaterThanEqualsToken = 57,
    GreaterThanGreaterThanGreaterThanEqualsToken = 58,
    AmpersandEqualsToken = 59,
    BarEqualsToken = 60,
    CaretEqualsToken = 61,

    // Keywords
    BreakKeyword = 70,
    CaseKeyword = 71,
    CatchKeyword = 72,
    ClassKeyword = 73,
    ConstKeyword = 74,
    ContinueKeyword = 75,
    DebuggerKeyword = 76,
    DefaultKeyword = 77,
    DeleteKeyword = 78,
    DoKeyword = 79,
    ElseKeyword = 80,
    EnumKeyword = 81,
    ExportKeyword = 82,
    ExtendsKeyword = 83,
    FalseKeyword = 84,
    FinallyKeyword = 85,
    ForKeyword = 86,
    FunctionKeyword = 87,
    IfKeyword = 88,
    ImportKeyword = 89,
    InKeyword = 90,
    InstanceOfKeyword = 91,
    NewKeyword = 92,
    NullKeyword = 93,
    ReturnKeyword = 94,
    SuperKeyword = 95,
    SwitchKeyword = 96,
    ThisKeyword = 97,
    ThrowKeyword = 98,
    TrueKeyword = 99,
    TryKeyword = 100,
    TypeOfKeyword = 101,
    VarKeyword = 102,
    VoidKeyword = 103,
    WhileKeyword = 104,
    WithKeyword = 105,
    // Identifiers in sloppy code outside generators; the parser decides.
    LetKeyword = 106,
    YieldKeyword = 107,

    // Reserved only in strict code. The scanner reports these as
    // `Identifier` while strict mode is off.
    ImplementsKeyword = 110,
    InterfaceKeyword = 111,
    PackageKeyword = 112,
    PrivateKeyword = 113,
    ProtectedKeyword = 114,
    PublicKeyword = 115,
    StaticKeyword = 116,

    // ========================================================================
    // Error tokens
    // ========================================================================
    UnterminatedStringLiteral = 120,
    UnterminatedMultilineComment = 121,
    UnterminatedNumericLiteral = 122,
    UnterminatedTemplateLiteral = 123,
    InvalidNumericLiteral = 124,
    UnterminatedOctalNumber = 125,
    InvalidStringLiteral = 126,
    InvalidIdentifierEscape = 127,
    InvalidIdentifierUnicodeEscape = 128,
    IncompleteUnicodeEscape = 129,
    UnrecognizedToken = 130,
}

impl SyntaxKind {
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_STRICT_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_STRICT_RESERVED_WORD: SyntaxKind = SyntaxKind::StaticKeyword;
    pub const FIRST_ERROR_TOKEN: SyntaxKind = SyntaxKind::UnterminatedStringLiteral;
    pub const LAST_ERROR_TOKEN: SyntaxKind = SyntaxKind::UnrecognizedToken;

    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    /// `=` and every compound assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Keywords, including `let` and `yield`.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Words that are reserved in strict code only.
    #[inline]
    pub fn is_strict_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_STRICT_RESERVED_WORD, Self::LAST_STRICT_RESERVED_WORD)
    }

    /// Reserved in every mode. `let` and `yield` are excluded because
    /// sloppy code may use them as identifiers.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self.is_keyword() && !matches!(self, SyntaxKind::LetKeyword | SyntaxKind::YieldKeyword)
    }

    /// Tokens that can be used as a property name after `.` or in an
    /// object literal key position.
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword() || self.is_strict_reserved_word()
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self.in_range(Self::FIRST_ERROR_TOKEN, Self::LAST_ERROR_TOKEN)
    }

    #[inline]
    pub fn is_template(self) -> bool {
        self.in_range(SyntaxKind::NoSubstitutionTemplate, SyntaxKind::TemplateTail)
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::YieldKeyword => Some("yield"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            _ => None,
        }
    }

    /// Look up a keyword or strict-mode reserved word from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "case" => Some(SyntaxKind::CaseKeyword),
            "catch" => Some(SyntaxKind::CatchKeyword),
            "class" => Some(SyntaxKind::ClassKeyword),
            "const" => Some(SyntaxKind::ConstKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "debugger" => Some(SyntaxKind::DebuggerKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "enum" => Some(SyntaxKind::EnumKeyword),
            "export" => Some(SyntaxKind::ExportKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "finally" => Some(SyntaxKind::FinallyKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "import" => Some(SyntaxKind::ImportKeyword),
            "in" => Some(SyntaxKind::InKeyword),
            "instanceof" => Some(SyntaxKind::InstanceOfKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "switch" => Some(SyntaxKind::SwitchKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "throw" => Some(SyntaxKind::ThrowKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "try" => Some(SyntaxKind::TryKeyword),
            "typeof" => Some(SyntaxKind::TypeOfKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "void" => Some(SyntaxKind::VoidKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "with" => Some(SyntaxKind::WithKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "yield" => Some(SyntaxKind::YieldKeyword),
            "implements" => Some(SyntaxKind::ImplementsKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "package" => Some(SyntaxKind::PackageKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "protected" => Some(SyntaxKind::ProtectedKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            _ => None,
        }
    }

    /// Fixed source text of this kind, if it has one.
    pub fn text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => f.write_str(text),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for word in ["break", "let", "yield", "static", "instanceof"] {
            let kind = SyntaxKind::from_keyword(word).expect("keyword");
            assert_eq!(kind.keyword_text(), Some(word));
        }
        assert_eq!(SyntaxKind::from_keyword("of"), None);
    }

    #[test]
    fn test_classification() {
        assert!(SyntaxKind::PlusEqualsToken.is_assignment_operator());
        assert!(!SyntaxKind::EqualsEqualsToken.is_assignment_operator());
        assert!(SyntaxKind::LetKeyword.is_keyword());
        assert!(!SyntaxKind::LetKeyword.is_reserved_word());
        assert!(SyntaxKind::StaticKeyword.is_strict_reserved_word());
        assert!(SyntaxKind::UnrecognizedToken.is_error());
        assert!(SyntaxKind::TemplateMiddle.is_template());
    }

    #[test]
    fn test_display_uses_source_text() {
        assert_eq!(SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken.to_string(), ">>>=");
        assert_eq!(SyntaxKind::TypeOfKeyword.to_string(), "typeof");
        assert_eq!(SyntaxKind::Identifier.to_string(), "Identifier");
    }
}
