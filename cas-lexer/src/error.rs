//! The kinds of errors the [`Lexer`](crate::Lexer) can report.
//!
//! Every error is returned as a [`cas_error::Error`] whose first span points at the offending
//! region of the input.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// A token was requested before any input was loaded.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "there is no input to tokenize",
    labels = [""],
    help = format!("load some text with {} first", "Lexer::input".fg(EXPR)),
)]
pub struct NoInput;

/// A token was requested after the cursor reached the end of the input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no more tokens",
    labels = ["the input ends here"],
)]
pub struct Exhausted;

/// A character that does not start any token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, names, whitespace and {}",
        "+ - * / ^ ( ) =".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub character: char,
}

/// A number ended with a decimal point that has no digits after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "decimal point without decimal digits",
    labels = ["expected decimal digits here"],
    help = format!("add digits after the decimal point, or remove it: {}", "3.0".fg(EXPR)),
)]
pub struct DanglingDecimal;
