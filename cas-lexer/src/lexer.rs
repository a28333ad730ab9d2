//! A stateful, single-pass cursor over one input string at a time.

use crate::error::{DanglingDecimal, Exhausted, NoInput, UnexpectedCharacter};
use crate::tokenizer::{tokenize, Token, TokenKind};
use cas_error::Error;
use tracing::trace;

/// A tokenizer that hands out one [`Token`] per call to [`Lexer::token`].
///
/// The lexer holds a cursor into the text most recently passed to [`Lexer::input`]. Loading new
/// text discards any progress made on the previous text. Because [`Lexer::input`] and
/// [`Lexer::token`] both move the cursor, a lexer must not be shared between two consumers
/// without external synchronization.
///
/// The lexer is also an [`Iterator`] of `Result<Token, Error>` that ends when the input is
/// exhausted (or when no input was loaded).
#[derive(Clone, Default)]
pub struct Lexer<'source> {
    /// The inner tokenizer over the current input, or [`None`] if no input has been loaded.
    inner: Option<logos::Lexer<'source, TokenKind>>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer with no input loaded.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Loads the given text and resets the cursor to position 0.
    pub fn input(&mut self, content: &'source str) {
        trace!(len = content.len(), "loading lexer input");
        self.inner = Some(tokenize(content));
    }

    /// Returns the text that is currently loaded, if any.
    pub fn content(&self) -> Option<&'source str> {
        self.inner.as_ref().map(|lexer| lexer.source())
    }

    /// Returns the byte offset of the cursor, which is the end of the last token returned.
    pub fn position(&self) -> usize {
        self.inner.as_ref().map_or(0, |lexer| lexer.span().end)
    }

    /// Skips whitespace and returns the next token, advancing the cursor past it.
    ///
    /// Fails with [`NoInput`] if no text was loaded, [`Exhausted`] if the cursor reached the end
    /// of the input, [`UnexpectedCharacter`] if the next character does not start a token, and
    /// [`DanglingDecimal`] if a number ends with a decimal point.
    pub fn token(&mut self) -> Result<Token<'source>, Error> {
        let Some(lexer) = self.inner.as_mut() else {
            return Err(Error::new(vec![0..0], NoInput));
        };

        match lexer.next() {
            Some(Ok(TokenKind::DanglingDecimal)) => {
                // point just past the `.`, where the decimal digits should be
                let end = lexer.span().end;
                Err(Error::new(vec![end..end], DanglingDecimal))
            },
            Some(Ok(kind)) => {
                let token = Token {
                    span: lexer.span(),
                    kind,
                    lexeme: lexer.slice(),
                };
                trace!(?token, "lexed token");
                Ok(token)
            },
            Some(Err(())) => {
                let span = lexer.span();
                let character = lexer.slice().chars().next().unwrap_or_default();
                Err(Error::new(vec![span], UnexpectedCharacter { character }))
            },
            None => {
                let end = lexer.source().len();
                Err(Error::new(vec![end..end], Exhausted))
            },
        }
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("content", &self.content())
            .field("position", &self.position())
            .finish()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token<'source>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.token() {
            Err(err) if err.is::<Exhausted>() || err.is::<NoInput>() => None,
            result => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::TokenType;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Drains the lexer into `(type, value, position)` triples, panicking on any error.
    fn drain(input: &str) -> Vec<(TokenType, &str, usize)> {
        let mut lexer = Lexer::new();
        lexer.input(input);
        lexer.map(|token| {
            let token = token.unwrap();
            (token.ty(), token.value(), token.position())
        })
            .collect()
    }

    #[test]
    fn round_trip() {
        assert_eq!(drain("3*x^2 + 1"), vec![
            (TokenType::Number, "3", 0),
            (TokenType::Operator, "MULTIPLY", 1),
            (TokenType::Identifier, "x", 2),
            (TokenType::Operator, "POWER", 3),
            (TokenType::Number, "2", 4),
            (TokenType::Operator, "PLUS", 6),
            (TokenType::Number, "1", 8),
        ]);
    }

    #[test]
    fn decimal_and_equation() {
        assert_eq!(drain("  y = 0.5 / (x - 12)\n"), vec![
            (TokenType::Identifier, "y", 2),
            (TokenType::Operator, "EQUALS", 4),
            (TokenType::Number, "0.5", 6),
            (TokenType::Operator, "DIVIDE", 10),
            (TokenType::Paren, "L_PAREN", 12),
            (TokenType::Identifier, "x", 13),
            (TokenType::Operator, "MINUS", 15),
            (TokenType::Number, "12", 17),
            (TokenType::Paren, "R_PAREN", 19),
        ]);
    }

    #[test]
    fn malformed_number() {
        let mut lexer = Lexer::new();
        lexer.input("3.");
        let err = lexer.token().unwrap_err();
        assert!(err.is::<DanglingDecimal>());
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn leading_decimal_is_not_a_number() {
        let mut lexer = Lexer::new();
        lexer.input(".5");
        let err = lexer.token().unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { character: '.' }));
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn unexpected_character() {
        let mut lexer = Lexer::new();
        lexer.input("x % 2");
        assert_eq!(lexer.token().unwrap().value(), "x");

        let err = lexer.token().unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { character: '%' }));
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn no_input() {
        let mut lexer = Lexer::new();
        assert!(lexer.token().unwrap_err().is::<NoInput>());
        assert_eq!(lexer.next().map(|t| t.is_ok()), None);
    }

    #[test]
    fn exhausted() {
        let mut lexer = Lexer::new();
        lexer.input("ab ");
        assert_eq!(lexer.token().unwrap().value(), "ab");
        assert_eq!(lexer.position(), 2);

        let err = lexer.token().unwrap_err();
        assert!(err.is::<Exhausted>());
        assert_eq!(err.position(), 3);

        // stays exhausted
        assert!(lexer.token().unwrap_err().is::<Exhausted>());
    }

    #[test]
    fn input_resets_cursor() {
        let mut lexer = Lexer::new();
        lexer.input("1 + 2");
        lexer.token().unwrap();
        lexer.token().unwrap();

        lexer.input("y");
        assert_eq!(lexer.content(), Some("y"));
        let token = lexer.token().unwrap();
        assert_eq!((token.value(), token.position()), ("y", 0));
        assert!(lexer.token().unwrap_err().is::<Exhausted>());
    }

    #[test]
    fn report_points_past_decimal_point() {
        let input = "10.";
        let err = crate::tokenize_complete(input).unwrap_err();
        let report = err.report_to_string("input", input);
        let report = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(report.contains("decimal point without decimal digits"));
        assert_eq!(err.spans, vec![3..3]);
    }
}
