//! A character-level tokenizer for algebraic expressions.
//!
//! The tokenizer splits an input string into operator, parenthesis, number and identifier
//! tokens, skipping whitespace. It does not know anything about the structure of expressions;
//! building expression trees out of the token stream is left to the caller.
//!
//! There are two ways to consume tokens:
//!
//! - [`tokenize_complete`] tokenizes the whole input at once and returns the first error found,
//! if any.
//! - [`Lexer`] is a stateful cursor over one input at a time. Load text with [`Lexer::input`],
//! then call [`Lexer::token`] repeatedly until it fails with [`error::Exhausted`].
//!
//! ```
//! use cas_lexer::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new();
//! lexer.input("2*x");
//!
//! let token = lexer.token().unwrap();
//! assert_eq!(token.ty(), TokenType::Number);
//! assert_eq!(token.value(), "2");
//!
//! let token = lexer.token().unwrap();
//! assert_eq!(token.ty(), TokenType::Operator);
//! assert_eq!(token.value(), "MULTIPLY");
//! assert_eq!(token.position(), 1);
//! ```

pub mod error;
pub mod lexer;
pub mod tokenizer;

pub use cas_error::Error;
pub use lexer::Lexer;
pub use tokenizer::{tokenize, tokenize_complete, Token, TokenKind, TokenType};
