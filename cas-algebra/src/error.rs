use std::fmt::{self, Display, Formatter};

/// Errors that can occur while doing arithmetic on algebraic values.
///
/// Every error is terminal for the operation that produced it: no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fraction was constructed with a zero denominator, or something was divided by a value
    /// equal to zero.
    DivideByZero,

    /// The exact result of an operation does not fit in a 64-bit integer.
    Overflow,

    /// An operation received an operand it cannot work with, such as a non-integer exponent.
    InvalidOperand {
        /// A description of what the operation accepts.
        expected: &'static str,

        /// The operand that was received.
        found: String,
    },

    /// Two terms that are not like terms were added or subtracted.
    IncompatibleTerms {
        /// The left-hand term.
        left: String,

        /// The right-hand term.
        right: String,
    },

    /// An expression was divided by an expression, but one of them does not reduce to a single
    /// term or constant.
    NonMonomialDivision {
        /// The simplified numerator.
        numerator: String,

        /// The simplified denominator.
        denominator: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "cannot divide by zero"),
            Self::Overflow => write!(f, "the result does not fit in a 64-bit integer"),
            Self::InvalidOperand { expected, found } => {
                write!(f, "invalid operand `{}`: expected {}", found, expected)
            },
            Self::IncompatibleTerms { left, right } => {
                write!(f, "`{}` and `{}` are not like terms", left, right)
            },
            Self::NonMonomialDivision { numerator, denominator } => write!(f,
                "cannot divide `({})` by `({})`: only monomial expressions can be divided",
                numerator, denominator
            ),
        }
    }
}

impl std::error::Error for Error {}
