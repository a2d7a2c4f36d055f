//! Operator precedence for binary operators.

use esparse_ast::syntax_kind::SyntaxKind;

/// Binary operator precedence levels, lowest first. `None` marks a token
/// that does not continue a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    None = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
}

/// Get the binary operator precedence for a given token kind. `in` only
/// counts as an operator when `allows_in` is set.
pub fn get_binary_operator_precedence(kind: SyntaxKind, allows_in: bool) -> OperatorPrecedence {
    match kind {
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword => OperatorPrecedence::Relational,
        SyntaxKind::InKeyword if allows_in => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        _ => OperatorPrecedence::None,
    }
}

/// Unary operators that are collected before the operand.
pub fn is_unary_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::DeleteKeyword
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_is_masked_without_allows_in() {
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::InKeyword, true),
            OperatorPrecedence::Relational
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::InKeyword, false),
            OperatorPrecedence::None
        );
    }

    #[test]
    fn test_multiplicative_binds_tighter_than_additive() {
        assert!(
            get_binary_operator_precedence(SyntaxKind::AsteriskToken, true)
                > get_binary_operator_precedence(SyntaxKind::PlusToken, true)
        );
        assert!(
            get_binary_operator_precedence(SyntaxKind::AmpersandAmpersandToken, true)
                > get_binary_operator_precedence(SyntaxKind::BarBarToken, true)
        );
    }
}
