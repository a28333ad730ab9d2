pub mod token;

use crate::lexer::Lexer;
use cas_error::Error;
use logos::Logos;
pub use token::{Token, TokenKind, TokenType};

/// Returns an iterator over the raw token kinds produced by the tokenizer. Whitespace is skipped,
/// and unrecognized characters are yielded as `Err(())`.
pub fn tokenize(input: &str) -> logos::Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, or the first
/// error encountered.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token<'_>]>, Error> {
    let mut lexer = Lexer::new();
    lexer.input(input);

    let mut tokens = Vec::new();
    for token in lexer {
        tokens.push(token?);
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use crate::error::{DanglingDecimal, UnexpectedCharacter};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Plus, "+"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "3.25*theta2 ^(x1 - 10)\t=\r\ny/4",
            [
                (TokenKind::Number, "3.25"),
                (TokenKind::Multiply, "*"),
                (TokenKind::Identifier, "theta2"),
                (TokenKind::Power, "^"),
                (TokenKind::LParen, "("),
                (TokenKind::Identifier, "x1"),
                (TokenKind::Minus, "-"),
                (TokenKind::Number, "10"),
                (TokenKind::RParen, ")"),
                (TokenKind::Equals, "="),
                (TokenKind::Identifier, "y"),
                (TokenKind::Divide, "/"),
                (TokenKind::Number, "4"),
            ],
        );
    }

    #[test]
    fn identifier_stops_at_symbol() {
        compare_tokens(
            "ab12c+d",
            [
                (TokenKind::Identifier, "ab12c"),
                (TokenKind::Plus, "+"),
                (TokenKind::Identifier, "d"),
            ],
        );
    }

    #[test]
    fn dangling_decimal_kind() {
        compare_tokens(
            "12. 5",
            [
                (TokenKind::DanglingDecimal, "12."),
                (TokenKind::Number, "5"),
            ],
        );
    }

    #[test]
    fn complete() {
        let tokens = tokenize_complete("(a + 2)").unwrap();
        let values = tokens.iter().map(|t| (t.ty(), t.value(), t.position())).collect::<Vec<_>>();
        assert_eq!(values, vec![
            (TokenType::Paren, "L_PAREN", 0),
            (TokenType::Identifier, "a", 1),
            (TokenType::Operator, "PLUS", 3),
            (TokenType::Number, "2", 5),
            (TokenType::Paren, "R_PAREN", 6),
        ]);
    }

    #[test]
    fn complete_empty() {
        assert!(tokenize_complete("  \n").unwrap().is_empty());
    }

    #[test]
    fn complete_stops_at_first_error() {
        let err = tokenize_complete("1 + 2. + $").unwrap_err();
        assert!(err.is::<DanglingDecimal>());
        assert_eq!(err.position(), 6);

        let err = tokenize_complete("x $ 2.").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { character: '$' }));
        assert_eq!(err.position(), 2);
    }
}
