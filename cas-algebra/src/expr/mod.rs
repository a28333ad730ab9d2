//! Sums of terms and constants.
//!
//! An [`Expression`] is a list of [`Term`]s plus a list of constant [`Fraction`]s, representing
//! their sum. Every operation returns a new expression and leaves the receiver untouched.
//! Operations that accept a `simplify` flag finish with [`Expression::simplify`] unless it is
//! `false`, which lets callers chain several operations and canonicalize once at the end.
//!
//! Coefficients are exact [`i64`] fractions, so any operation that combines them returns
//! [`Error::Overflow`] when a result leaves that range.
//!
//! ```
//! use cas_algebra::{Expression, Substitutions};
//!
//! // (x + 1)^2
//! let expr = Expression::symbol("x").add(1)?.pow(2)?;
//! assert_eq!(expr.to_string(), "x^2 + 2*x + 1");
//!
//! let mut subs = Substitutions::new();
//! subs.insert("x".to_string(), 3.into());
//! assert_eq!(expr.eval(&subs)?.to_string(), "16");
//! # Ok::<(), cas_algebra::Error>(())
//! ```

pub mod simplify;

use crate::{
    error::Error,
    fmt::{ExprFormatter, FormatOptions, Notation},
    fraction::Fraction,
    operand::Operand,
    step_collector::StepCollector,
    term::Term,
    variable::Variable,
    Substitutions,
};
use simplify::{sort_terms, step::Step};
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum of terms and constants, such as `3*x^2 - y + 1/2`.
///
/// See the [module-level documentation](self) for more information.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    terms: Vec<Term>,
    constants: Vec<Fraction>,
}

impl Expression {
    /// Creates an empty expression, which is equal to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expression holding a single variable with degree 1.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::from(Term::new(Variable::new(symbol, 1)))
    }

    /// Creates an expression holding a single constant.
    pub fn constant(value: impl Into<Fraction>) -> Self {
        Self {
            terms: Vec::new(),
            constants: vec![value.into()],
        }
    }

    /// Returns the terms of the expression.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the constants of the expression. A simplified expression has exactly one.
    pub fn constants(&self) -> &[Fraction] {
        &self.constants
    }

    /// Returns the sum of the constants of the expression.
    pub fn constant_value(&self) -> Result<Fraction, Error> {
        self.constants.iter().try_fold(Fraction::zero(), |sum, &c| sum.add(c))
    }

    /// Adds the given value to this expression, and simplifies the result.
    pub fn add(&self, value: impl Into<Operand>) -> Result<Self, Error> {
        self.add_with(value, true)
    }

    /// Adds the given value to this expression.
    pub fn add_with(&self, value: impl Into<Operand>, simplify: bool) -> Result<Self, Error> {
        let rhs = value.into().into_expression();
        let mut sum = self.clone();
        sum.terms.extend(rhs.terms);
        sum.constants.extend(rhs.constants);
        sort_terms(&mut sum.terms);

        sum.finish(simplify)
    }

    /// Subtracts the given value from this expression, and simplifies the result.
    pub fn subtract(&self, value: impl Into<Operand>) -> Result<Self, Error> {
        self.subtract_with(value, true)
    }

    /// Subtracts the given value from this expression, by adding the value multiplied by `-1`.
    pub fn subtract_with(&self, value: impl Into<Operand>, simplify: bool) -> Result<Self, Error> {
        let negated = value.into().into_expression().multiply_with(-1, simplify)?;
        self.add_with(negated, simplify)
    }

    /// Multiplies this expression by the given value, and simplifies the result.
    pub fn multiply(&self, value: impl Into<Operand>) -> Result<Self, Error> {
        self.multiply_with(value, true)
    }

    /// Multiplies this expression by the given value.
    ///
    /// Multiplication fully distributes over both sums: every term and constant on the left is
    /// multiplied with every term and constant on the right.
    pub fn multiply_with(&self, value: impl Into<Operand>, simplify: bool) -> Result<Self, Error> {
        let rhs = value.into().into_expression();
        let mut terms = Vec::with_capacity(
            (self.terms.len() + self.constants.len()) * (rhs.terms.len() + rhs.constants.len()),
        );

        for term in &self.terms {
            for other in &rhs.terms {
                terms.push(term.multiply_with(other, simplify)?);
            }
            for &c in &rhs.constants {
                terms.push(term.multiply_with(c, simplify)?);
            }
        }

        for term in &rhs.terms {
            for &c in &self.constants {
                terms.push(term.multiply_with(c, simplify)?);
            }
        }

        for &lhs in &self.constants {
            for &c in &rhs.constants {
                terms.push(Term::constant(c).multiply_with(lhs, false)?);
            }
        }

        sort_terms(&mut terms);
        Self {
            terms,
            constants: Vec::new(),
        }.finish(simplify)
    }

    /// Divides this expression by the given value, and simplifies the result.
    ///
    /// See [`Expression::divide_with`] for the accepted divisors.
    pub fn divide(&self, value: impl Into<Operand>) -> Result<Self, Error> {
        self.divide_with(value, true)
    }

    /// Divides this expression by the given value.
    ///
    /// If the divisor is a number, every term and constant is divided by it.
    ///
    /// Otherwise, the divisor is converted to an expression, and both sides are simplified. Each
    /// side must then consist of exactly one term or one constant, or
    /// [`Error::NonMonomialDivision`] is returned. Shared variables have their degrees
    /// subtracted, and variables found only in the divisor are moved into the quotient with
    /// negated degrees. Dividing zero by a monomial is zero.
    ///
    /// Returns [`Error::DivideByZero`] if the divisor is equal to zero.
    pub fn divide_with(&self, value: impl Into<Operand>, simplify: bool) -> Result<Self, Error> {
        let value = value.into();
        if let Some(divisor) = value.as_scalar() {
            return self.divide_scalar(divisor, simplify);
        }

        let numerator = self.simplify()?;
        let denominator = value.into_expression().simplify()?;
        if denominator.is_zero() {
            return Err(Error::DivideByZero);
        }

        let non_monomial = || Error::NonMonomialDivision {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        };
        let den_term = denominator.single_item().ok_or_else(non_monomial)?;
        if numerator.is_zero() {
            return Self::constant(Fraction::zero()).finish(simplify);
        }
        let num_term = numerator.single_item().ok_or_else(non_monomial)?;

        debug!(%num_term, %den_term, "dividing monomials");
        let coefficient = num_term.coefficient()?.divide_with(den_term.coefficient()?, simplify)?;
        let mut variables = num_term
            .variables()
            .iter()
            .map(|var| {
                let degree = den_term
                    .variables()
                    .iter()
                    .filter(|other| var.same_atom(other))
                    .try_fold(var.degree(), |degree, other| degree.checked_sub(other.degree()))
                    .ok_or(Error::Overflow)?;
                Ok(var.with_degree(degree))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        for var in den_term.variables() {
            if !num_term.variables().iter().any(|other| var.same_atom(other)) {
                let degree = var.degree().checked_neg().ok_or(Error::Overflow)?;
                variables.push(var.with_degree(degree));
            }
        }

        Self::from(Term::from_parts(coefficient, variables)).finish(simplify)
    }

    /// Divides every term and constant by a number.
    fn divide_scalar(&self, divisor: Fraction, simplify: bool) -> Result<Self, Error> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }

        let terms = self.terms
            .iter()
            .map(|term| {
                let coefficient = term.coefficient()?.divide_with(divisor, simplify)?;
                Ok(term.with_coefficient(coefficient))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let constants = self.constants
            .iter()
            .map(|c| c.divide_with(divisor, simplify))
            .collect::<Result<Vec<_>, Error>>()?;

        Self { terms, constants }.finish(simplify)
    }

    /// Raises this expression to an integer power, and simplifies the result.
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        self.pow_with(exponent, true)
    }

    /// Raises this expression to an integer power.
    ///
    /// A zero exponent gives the constant `1`, and a positive exponent multiplies the expression
    /// by itself repeatedly. A negative exponent computes `1 / self^|n|`, which goes through
    /// [`Expression::divide_with`] and so requires the expression to be a monomial.
    pub fn pow_with(&self, exponent: i64, simplify: bool) -> Result<Self, Error> {
        if exponent < 0 {
            let magnitude = exponent.checked_neg().ok_or_else(|| Error::InvalidOperand {
                expected: "an exponent that can be negated",
                found: exponent.to_string(),
            })?;
            let denominator = self.pow_with(magnitude, simplify)?;
            return Self::constant(Fraction::one()).divide_with(denominator, simplify);
        }

        if exponent == 0 {
            return Ok(Self::constant(Fraction::one()));
        }

        let mut product = self.clone();
        for _ in 1..exponent {
            product = product.multiply_with(self, simplify)?;
        }
        product.finish(simplify)
    }

    /// Raises this expression to a power given as an [`Operand`], and simplifies the result.
    ///
    /// The exponent must denote an integer: an integer, a [`Fraction`] with an integral value,
    /// or an expression that simplifies to such a constant. Anything else returns
    /// [`Error::InvalidOperand`].
    pub fn pow_operand(&self, exponent: impl Into<Operand>) -> Result<Self, Error> {
        let exponent = exponent.into();
        let integer = match &exponent {
            Operand::Integer(n) => Some(*n),
            Operand::Fraction(f) => f.to_integer(),
            Operand::Expression(e) => {
                let e = e.simplify()?;
                if e.terms.is_empty() {
                    e.constant_value()?.to_integer()
                } else {
                    None
                }
            },
            Operand::Symbol(_) | Operand::Term(_) => None,
        };

        match integer {
            Some(n) => self.pow(n),
            None => Err(Error::InvalidOperand {
                expected: "an integer exponent",
                found: exponent.to_string(),
            }),
        }
    }

    /// Substitutes values for variables, and simplifies the result.
    pub fn eval(&self, substitutions: &Substitutions) -> Result<Self, Error> {
        self.eval_with(substitutions, true)
    }

    /// Substitutes values for variables. Variables without a substitution are kept.
    pub fn eval_with(&self, substitutions: &Substitutions, simplify: bool) -> Result<Self, Error> {
        let seed = Self {
            terms: Vec::new(),
            constants: if simplify {
                vec![self.constant_value()?]
            } else {
                self.constants.clone()
            },
        };

        self.terms.iter().try_fold(seed, |sum, term| {
            sum.add_with(term.eval(substitutions, simplify)?, simplify)
        })
    }

    /// Sums this expression for every integer value of `variable` in `lower..=upper`, and
    /// simplifies the result.
    pub fn summation(&self, variable: &str, lower: i64, upper: i64) -> Result<Self, Error> {
        self.summation_with(variable, lower, upper, true)
    }

    /// Sums this expression for every integer value of `variable` in `lower..=upper`.
    ///
    /// The sum is fully unrolled: the expression is evaluated once per value. An empty range
    /// results in zero.
    pub fn summation_with(
        &self,
        variable: &str,
        lower: i64,
        upper: i64,
        simplify: bool,
    ) -> Result<Self, Error> {
        debug!(variable, lower, upper, "unrolling summation");
        let mut substitutions = HashMap::with_capacity(1);

        (lower..=upper).try_fold(Self::constant(Fraction::zero()), |sum, value| {
            substitutions.insert(variable.to_owned(), Operand::Integer(value));
            sum.add_with(self.eval_with(&substitutions, simplify)?, simplify)
        })
    }

    /// Returns the canonical form of this expression. See the [`mod@simplify`] module for the steps
    /// involved.
    pub fn simplify(&self) -> Result<Self, Error> {
        simplify::simplify(self, &mut ())
    }

    /// Returns the canonical form of this expression, reporting every step that changed it to
    /// the given collector.
    pub fn simplify_with(&self, steps: &mut dyn StepCollector<Step>) -> Result<Self, Error> {
        simplify::simplify(self, steps)
    }

    /// Returns the canonical form of this expression, along with the steps that changed it.
    pub fn simplify_with_steps(&self) -> Result<(Self, Vec<Step>), Error> {
        let mut steps = Vec::new();
        let expr = simplify::simplify(self, &mut steps)?;
        Ok((expr, steps))
    }

    fn finish(self, simplify: bool) -> Result<Self, Error> {
        if simplify {
            self.simplify()
        } else {
            Ok(self)
        }
    }

    /// Returns the only item of a simplified expression as a term, or [`None`] if it has zero or
    /// several items. A nonzero constant counts as an item.
    fn single_item(&self) -> Option<Term> {
        let mut constants = self.constants.iter().filter(|c| !c.is_zero());
        match (self.terms.as_slice(), constants.next(), constants.next()) {
            ([term], None, None) => Some(term.clone()),
            ([], Some(&constant), None) => Some(Term::constant(constant)),
            _ => None,
        }
    }

    /// Returns true if any term has a variable with the given symbol.
    pub fn has_variable(&self, symbol: &str) -> bool {
        self.terms.iter().any(|term| term.has_variable(symbol))
    }

    /// Returns true if every term only has variables with the given symbol.
    pub fn only_has_variable(&self, symbol: &str) -> bool {
        self.terms.iter().all(|term| term.only_has_variable(symbol))
    }

    /// Returns true if no term mixes a variable with the given symbol with any other variable.
    pub fn no_cross_product_with_variable(&self, symbol: &str) -> bool {
        self.terms
            .iter()
            .all(|term| !term.has_variable(symbol) || term.only_has_variable(symbol))
    }

    /// Returns true if no term has more than one variable.
    pub fn no_cross_products(&self) -> bool {
        self.terms.iter().all(|term| term.variables().len() <= 1)
    }

    /// Returns true if the expression has no terms and its constants sum to zero.
    ///
    /// Constants whose sum overflows are far from zero, so they report false.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant_value().is_ok_and(|c| c.is_zero())
    }

    /// Returns true if the expression simplifies to exactly one term or one nonzero constant.
    /// An expression that cannot be simplified without overflowing is not a monomial.
    pub fn is_monomial(&self) -> bool {
        self.simplify().is_ok_and(|e| e.single_item().is_some())
    }

    /// Returns a wrapper that formats the expression with the given options.
    pub fn fmt(&self, options: FormatOptions) -> ExprFormatter<'_> {
        ExprFormatter {
            expr: self,
            options,
            notation: Notation::Plain,
        }
    }

    /// Returns the LaTeX representation of this expression.
    pub fn to_tex(&self, options: FormatOptions) -> String {
        ExprFormatter {
            expr: self,
            options,
            notation: Notation::Latex,
        }.to_string()
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Self {
            terms: vec![term],
            constants: Vec::new(),
        }
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Self::from(Term::new(variable))
    }
}

impl From<Fraction> for Expression {
    fn from(value: Fraction) -> Self {
        Self::constant(value)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Self::constant(value)
    }
}

impl From<&str> for Expression {
    fn from(symbol: &str) -> Self {
        Self::symbol(symbol)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.fmt(FormatOptions::default()), f)
    }
}
