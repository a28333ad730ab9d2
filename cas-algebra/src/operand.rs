//! Polymorphic arguments accepted by the arithmetic operations.

use crate::{expr::Expression, fraction::Fraction, term::Term, variable::Variable};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any value that can be combined with an [`Expression`]: added to it, multiplied into it,
/// substituted into it, and so on.
///
/// Every operand can be normalized to an [`Expression`] with [`Operand::into_expression`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// An integer `k`, treated as `k/1`.
    Integer(i64),

    /// A rational number.
    Fraction(Fraction),

    /// A variable with degree 1, named by the given symbol.
    Symbol(String),

    /// A single term.
    Term(Term),

    /// A whole expression.
    Expression(Expression),
}

impl Operand {
    /// Converts the operand into an expression containing at most one term or one constant. An
    /// [`Operand::Expression`] is returned as-is.
    pub fn into_expression(self) -> Expression {
        match self {
            Self::Integer(n) => Expression::constant(Fraction::integer(n)),
            Self::Fraction(f) => Expression::constant(f),
            Self::Symbol(s) => Expression::symbol(s),
            Self::Term(t) => Expression::from(t),
            Self::Expression(e) => e,
        }
    }

    /// Returns the value of the operand as a [`Fraction`], if it is a plain number.
    pub fn as_scalar(&self) -> Option<Fraction> {
        match self {
            Self::Integer(n) => Some(Fraction::integer(*n)),
            Self::Fraction(f) => Some(*f),
            _ => None,
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Fraction(frac) => write!(f, "{}", frac),
            Self::Symbol(s) => write!(f, "{}", s),
            Self::Term(t) => write!(f, "{}", t),
            Self::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Self::Fraction(f)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Self::Symbol(s)
    }
}

impl From<Variable> for Operand {
    fn from(v: Variable) -> Self {
        Self::Term(Term::new(v))
    }
}

impl From<Term> for Operand {
    fn from(t: Term) -> Self {
        Self::Term(t)
    }
}

impl From<Expression> for Operand {
    fn from(e: Expression) -> Self {
        Self::Expression(e)
    }
}

impl From<&Expression> for Operand {
    fn from(e: &Expression) -> Self {
        Self::Expression(e.clone())
    }
}

/// A value that a [`Term`] can be multiplied by.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// An integer `k`, treated as `k/1`.
    Integer(i64),

    /// A rational number.
    Fraction(Fraction),

    /// Another term.
    Term(Term),
}

impl From<i64> for Factor {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Factor {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<Fraction> for Factor {
    fn from(f: Fraction) -> Self {
        Self::Fraction(f)
    }
}

impl From<Term> for Factor {
    fn from(t: Term) -> Self {
        Self::Term(t)
    }
}

impl From<&Term> for Factor {
    fn from(t: &Term) -> Self {
        Self::Term(t.clone())
    }
}
