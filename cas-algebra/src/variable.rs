use crate::fmt::greek::is_greek;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named symbol raised to an integer power, such as `x^2`.
///
/// The degree can be zero (the variable is an identity factor and renders as nothing), or
/// negative (an inverse power, which is produced by dividing by a monomial).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    symbol: String,
    degree: i64,
}

impl Variable {
    /// Creates a new variable with the given symbol and degree.
    pub fn new(symbol: impl Into<String>, degree: i64) -> Self {
        Self { symbol: symbol.into(), degree }
    }

    /// Returns the symbol of the variable.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the degree of the variable.
    pub fn degree(&self) -> i64 {
        self.degree
    }

    /// Returns a copy of this variable with its degree replaced.
    pub fn with_degree(&self, degree: i64) -> Self {
        Self { symbol: self.symbol.clone(), degree }
    }

    /// Returns true if both variables share the same symbol, regardless of degree.
    pub fn same_atom(&self, other: &Variable) -> bool {
        self.symbol == other.symbol
    }

    /// Returns the LaTeX representation of this variable. Symbols naming a Greek letter are
    /// rendered with the corresponding command.
    pub fn to_tex(&self) -> String {
        if self.degree == 0 {
            return String::new();
        }

        let symbol = if is_greek(&self.symbol) {
            format!("\\{}", self.symbol)
        } else {
            self.symbol.clone()
        };

        if self.degree == 1 {
            symbol
        } else {
            format!("{}^{{{}}}", symbol, self.degree)
        }
    }
}

/// A degree of `1` is the implied degree of a variable, so the `^1` is omitted. A degree of `0`
/// produces an empty string.
impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.degree {
            0 => Ok(()),
            1 => write!(f, "{}", self.symbol),
            degree => write!(f, "{}^{}", self.symbol, degree),
        }
    }
}

impl From<&str> for Variable {
    fn from(symbol: &str) -> Self {
        Self::new(symbol, 1)
    }
}

impl From<String> for Variable {
    fn from(symbol: String) -> Self {
        Self::new(symbol, 1)
    }
}
