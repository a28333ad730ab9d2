use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Multiply,

    #[token("/")]
    Divide,

    #[token("^")]
    Power,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("=")]
    Equals,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// A digit run followed by a decimal point with no digits after it, such as `3.`. The
    /// [`Lexer`](crate::Lexer) never returns this kind; it is reported as
    /// [`DanglingDecimal`](crate::error::DanglingDecimal) instead.
    #[regex(r"[0-9]+\.")]
    DanglingDecimal,
}

impl TokenKind {
    /// Returns the coarse classification of this token kind.
    pub fn ty(self) -> TokenType {
        match self {
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Power
                | TokenKind::Equals => TokenType::Operator,
            TokenKind::LParen | TokenKind::RParen => TokenType::Paren,
            TokenKind::Identifier => TokenType::Identifier,
            TokenKind::Number | TokenKind::DanglingDecimal => TokenType::Number,
        }
    }

    /// Returns the name of the operator or parenthesis this token kind represents, such as
    /// `PLUS` or `L_PAREN`. Returns [`None`] for numbers and identifiers.
    pub fn op_name(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Power => "POWER",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Identifier | TokenKind::Number | TokenKind::DanglingDecimal => return None,
        })
    }
}

/// The coarse classification of a token, as seen by a consumer of the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenType {
    /// One of `+ - * / ^ =`.
    Operator,

    /// `(` or `)`.
    Paren,

    /// An integer or decimal literal, such as `3` or `3.25`.
    Number,

    /// A name, such as `x` or `theta2`.
    Identifier,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Operator => write!(f, "OPERATOR"),
            TokenType::Paren => write!(f, "PAREN"),
            TokenType::Number => write!(f, "NUMBER"),
            TokenType::Identifier => write!(f, "IDENTIFIER"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Returns the coarse classification of the token.
    pub fn ty(&self) -> TokenType {
        self.kind.ty()
    }

    /// Returns the value of the token: the operator name for operators and parentheses (such as
    /// `MULTIPLY`), or the raw lexeme for numbers and identifiers.
    pub fn value(&self) -> &'source str {
        self.kind.op_name().unwrap_or(self.lexeme)
    }

    /// Returns the byte offset of the start of the token in the source code.
    pub fn position(&self) -> usize {
        self.span.start
    }
}
