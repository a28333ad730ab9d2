//! A rational coefficient multiplied by a product of variables.

use crate::{
    error::Error,
    expr::Expression,
    fmt::{self as cas_fmt, FormatOptions, Notation},
    fraction::Fraction,
    operand::Factor,
    variable::Variable,
    Substitutions,
};
use std::{
    cmp::Reverse,
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coefficient multiplied by a monomial, such as `3/2*x^2*y`.
///
/// A [`Term`] can hold several coefficient factors and several variables sharing the same
/// symbol, which is what happens when terms are multiplied without simplification. The
/// effective coefficient is the product of every entry in [`Term::coefficients`], and the
/// effective monomial is found by summing the degrees of variables sharing a symbol. After
/// [`Term::simplify`], the term holds exactly one coefficient and at most one variable per
/// symbol.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    coefficients: Vec<Fraction>,
    variables: Vec<Variable>,
}

impl Term {
    /// Creates a term with a coefficient of `1` and the given variable.
    pub fn new(variable: impl Into<Variable>) -> Self {
        Self {
            coefficients: vec![Fraction::one()],
            variables: vec![variable.into()],
        }
    }

    /// Creates a term with no variables.
    pub fn constant(coefficient: impl Into<Fraction>) -> Self {
        Self {
            coefficients: vec![coefficient.into()],
            variables: Vec::new(),
        }
    }

    /// Creates a term from a coefficient and a list of variables, exactly as given.
    pub fn from_parts(coefficient: impl Into<Fraction>, variables: Vec<Variable>) -> Self {
        Self {
            coefficients: vec![coefficient.into()],
            variables,
        }
    }

    /// Returns every coefficient factor of the term.
    pub fn coefficients(&self) -> &[Fraction] {
        &self.coefficients
    }

    /// Returns every variable of the term, in the order they are stored.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns true if the term has no variables.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the effective coefficient of the term, which is the product of every coefficient
    /// factor.
    ///
    /// Returns [`Error::Overflow`] if the product does not fit in a [`Fraction`].
    pub fn coefficient(&self) -> Result<Fraction, Error> {
        self.coefficients
            .iter()
            .try_fold(Fraction::one(), |product, &c| product.multiply(c))
    }

    /// Merges variables that share a symbol by summing their degrees.
    ///
    /// Variables whose degrees sum to zero are dropped, since they are identity factors. The
    /// resulting variables are ordered by symbol. Returns [`Error::Overflow`] if a sum of
    /// degrees does not fit in an [`i64`].
    pub fn combine_vars(&self) -> Result<Self, Error> {
        let mut degrees = BTreeMap::<&str, i64>::new();
        for variable in &self.variables {
            let degree = degrees.entry(variable.symbol()).or_default();
            *degree = degree.checked_add(variable.degree()).ok_or(Error::Overflow)?;
        }

        Ok(Self {
            coefficients: self.coefficients.clone(),
            variables: degrees
                .into_iter()
                .filter(|(_, degree)| *degree != 0)
                .map(|(symbol, degree)| Variable::new(symbol, degree))
                .collect(),
        })
    }

    /// Returns the canonical form of this term: a single coefficient and merged variables,
    /// sorted by descending degree. Variables of equal degree stay ordered by symbol.
    pub fn simplify(&self) -> Result<Self, Error> {
        let mut variables = self.combine_vars()?.variables;
        variables.sort_by_key(|v| Reverse(v.degree()));

        Ok(Self {
            coefficients: vec![self.coefficient()?],
            variables,
        })
    }

    /// Multiplies this term by the given factor, and simplifies the result.
    pub fn multiply(&self, factor: impl Into<Factor>) -> Result<Self, Error> {
        self.multiply_with(factor, true)
    }

    /// Multiplies this term by the given factor.
    ///
    /// Multiplying by another term concatenates both the variable lists and the coefficient
    /// lists; multiplying by a number adds it to the coefficient list. Nothing is collapsed
    /// unless `simplify` is true, so only a simplifying multiplication can fail.
    pub fn multiply_with(&self, factor: impl Into<Factor>, simplify: bool) -> Result<Self, Error> {
        let mut product = self.clone();
        match factor.into() {
            Factor::Integer(n) => product.coefficients.push(Fraction::integer(n)),
            Factor::Fraction(f) => product.coefficients.push(f),
            Factor::Term(term) => {
                product.variables.extend(term.variables);
                product.coefficients.extend(term.coefficients);
            },
        }

        if simplify {
            product.simplify()
        } else {
            Ok(product)
        }
    }

    /// Adds a like term to this term.
    ///
    /// Returns [`Error::IncompatibleTerms`] if the terms cannot be combined.
    pub fn add(&self, other: &Term) -> Result<Self, Error> {
        self.check_like(other)?;
        Ok(self.with_coefficient(self.coefficient()?.add(other.coefficient()?)?))
    }

    /// Subtracts a like term from this term.
    ///
    /// Returns [`Error::IncompatibleTerms`] if the terms cannot be combined.
    pub fn subtract(&self, other: &Term) -> Result<Self, Error> {
        self.check_like(other)?;
        Ok(self.with_coefficient(self.coefficient()?.subtract(other.coefficient()?)?))
    }

    fn check_like(&self, other: &Term) -> Result<(), Error> {
        if self.can_be_combined_with(other) {
            Ok(())
        } else {
            Err(Error::IncompatibleTerms {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    /// Returns a copy of this term with its coefficients replaced by the given one.
    pub(crate) fn with_coefficient(&self, coefficient: Fraction) -> Self {
        Self {
            coefficients: vec![coefficient],
            variables: self.variables.clone(),
        }
    }

    /// Substitutes values for the variables of this term.
    ///
    /// Every variable with an entry in `substitutions` is replaced by the value raised to the
    /// variable's degree. Variables without an entry are kept as they are. Since a substituted
    /// value can be a whole expression, the result is an [`Expression`].
    pub fn eval(&self, substitutions: &Substitutions, simplify: bool) -> Result<Expression, Error> {
        let mut result = Expression::constant(self.coefficient()?);

        for variable in &self.variables {
            let base = match substitutions.get(variable.symbol()) {
                Some(value) => value.clone().into_expression(),
                None => Expression::symbol(variable.symbol()),
            };
            let value = base.pow_with(variable.degree(), simplify)?;
            result = result.multiply_with(value, simplify)?;
        }

        Ok(result)
    }

    /// Returns true if both terms are like terms: their variables are equal as multisets of
    /// `(symbol, degree)` pairs.
    pub fn can_be_combined_with(&self, other: &Term) -> bool {
        if self.variables.len() != other.variables.len() {
            return false;
        }

        monomial_key(&self.variables) == monomial_key(&other.variables)
    }

    /// Returns true if any variable of the term has the given symbol.
    pub fn has_variable(&self, symbol: &str) -> bool {
        self.variables.iter().any(|v| v.symbol() == symbol)
    }

    /// Returns true if every variable of the term has the given symbol. A term with no variables
    /// trivially satisfies this.
    pub fn only_has_variable(&self, symbol: &str) -> bool {
        self.variables.iter().all(|v| v.symbol() == symbol)
    }

    /// Returns the highest degree among the variables of the term, or `1` if every degree is
    /// smaller than `1`.
    ///
    /// The floor of `1` means a term with no variables sorts alongside linear terms. This value
    /// is meant for ordering terms, not as the mathematical degree of the term.
    pub fn max_degree(&self) -> i64 {
        self.variables.iter().fold(1, |max, v| max.max(v.degree()))
    }

    /// Returns the highest degree of the variables with the given symbol, with the same floor of
    /// `1` as [`Term::max_degree`].
    pub fn max_degree_of_variable(&self, symbol: &str) -> i64 {
        self.variables
            .iter()
            .filter(|v| v.symbol() == symbol)
            .fold(1, |max, v| max.max(v.degree()))
    }

    /// Returns the LaTeX representation of this term.
    pub fn to_tex(&self, options: FormatOptions) -> String {
        cas_fmt::signed_term(self, options, Notation::Latex)
    }
}

/// Returns the `(symbol, degree)` pairs of the variables, sorted by symbol and then by
/// descending degree.
pub(crate) fn monomial_key(variables: &[Variable]) -> Vec<(&str, Reverse<i64>)> {
    let mut key = variables
        .iter()
        .map(|v| (v.symbol(), Reverse(v.degree())))
        .collect::<Vec<_>>();
    key.sort();
    key
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Self::new(variable)
    }
}

impl From<Fraction> for Term {
    fn from(coefficient: Fraction) -> Self {
        Self::constant(coefficient)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", cas_fmt::signed_term(self, FormatOptions::default(), Notation::Plain))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::operand::Operand;
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn coefficient_is_product() -> Result<(), Error> {
        let term = Term::new("x")
            .multiply_with(frac(1, 2), false)?
            .multiply_with(4, false)?
            .multiply_with(frac(-3, 5), false)?;
        assert_eq!(term.coefficients().len(), 4);
        assert_eq!(term.coefficient()?, frac(-6, 5));
        Ok(())
    }

    #[test]
    fn combine_vars_sums_and_drops_identity() {
        let term = Term::from_parts(1, vec![
            Variable::new("y", 1),
            Variable::new("x", 2),
            Variable::new("y", 2),
            Variable::new("z", 1),
            Variable::new("z", -1),
        ]);
        assert_eq!(
            term.combine_vars().unwrap().variables(),
            [Variable::new("x", 2), Variable::new("y", 3)],
        );
    }

    #[test]
    fn degree_overflow() {
        let term = Term::from_parts(1, vec![Variable::new("x", i64::MAX), Variable::new("x", 1)]);
        assert_eq!(term.combine_vars(), Err(Error::Overflow));
        assert_eq!(term.simplify(), Err(Error::Overflow));

        let cancelled = Term::from_parts(1, vec![Variable::new("x", i64::MAX), Variable::new("x", -i64::MAX)]);
        assert_eq!(cancelled.simplify(), Ok(Term::constant(1)));
    }

    #[test]
    fn simplify_sorts_by_degree() -> Result<(), Error> {
        let term = Term::from_parts(2, vec![
            Variable::new("b", 1),
            Variable::new("a", 1),
            Variable::new("c", 4),
            Variable::new("b", 1),
        ])
            .multiply_with(frac(1, 4), false)?;
        let simplified = term.simplify()?;

        assert_eq!(simplified.coefficients(), [frac(1, 2)]);
        assert_eq!(simplified.variables(), [
            Variable::new("c", 4),
            Variable::new("b", 2),
            Variable::new("a", 1),
        ]);
        assert_eq!(simplified.simplify()?, simplified);
        Ok(())
    }

    #[test]
    fn multiply_terms() -> Result<(), Error> {
        let lhs = Term::new("x").multiply(3)?;
        let rhs = Term::new(Variable::new("x", 2)).multiply(Term::new("y"))?;
        let raw = lhs.multiply_with(&rhs, false)?;
        assert_eq!(raw.variables().len(), 3);

        let product = lhs.multiply(rhs)?;
        assert_eq!(product.coefficient()?, Fraction::integer(3));
        assert_eq!(product.variables(), [Variable::new("x", 3), Variable::new("y", 1)]);
        Ok(())
    }

    #[test]
    fn like_terms() {
        let xy = Term::from_parts(1, vec![Variable::new("x", 1), Variable::new("y", 2)]);
        let yx = Term::from_parts(5, vec![Variable::new("y", 2), Variable::new("x", 1)]);
        let xy_wrong = Term::from_parts(1, vec![Variable::new("x", 2), Variable::new("y", 1)]);

        assert!(xy.can_be_combined_with(&yx));
        assert!(yx.can_be_combined_with(&xy));
        assert!(!xy.can_be_combined_with(&xy_wrong));

        // same length, but not a bijection
        let xx = Term::from_parts(1, vec![Variable::new("x", 1), Variable::new("x", 1)]);
        assert!(!xx.can_be_combined_with(&Term::from_parts(1, vec![
            Variable::new("x", 1),
            Variable::new("y", 1),
        ])));
        assert!(Term::constant(3).can_be_combined_with(&Term::constant(4)));
    }

    #[test]
    fn add_and_subtract() -> Result<(), Error> {
        let a = Term::new("x").multiply(2)?;
        let b = Term::new("x").multiply(frac(1, 3))?;
        assert_eq!(a.add(&b)?.coefficient()?, frac(7, 3));
        assert_eq!(a.subtract(&b)?.coefficient()?, frac(5, 3));
        assert_eq!(a.add(&b)?.variables(), [Variable::new("x", 1)]);

        assert_eq!(
            a.add(&Term::new("y")),
            Err(Error::IncompatibleTerms { left: "2*x".to_string(), right: "y".to_string() }),
        );

        let max = Term::new("x").multiply(i64::MAX)?;
        assert_eq!(max.add(&Term::new("x")), Err(Error::Overflow));
        Ok(())
    }

    #[test]
    fn eval_substitutes_known_variables() {
        // 2 * x^2 * y
        let term = Term::from_parts(2, vec![Variable::new("x", 2), Variable::new("y", 1)]);
        let mut subs = Substitutions::new();
        subs.insert("x".to_string(), Operand::Integer(3));

        assert_eq!(term.eval(&subs, true).unwrap().to_string(), "18*y");

        subs.insert("y".to_string(), Operand::Fraction(frac(1, 2)));
        let value = term.eval(&subs, true).unwrap();
        assert_eq!(value.constant_value(), Ok(Fraction::integer(9)));
        assert!(value.terms().is_empty());
    }

    #[test]
    fn eval_expands_expressions() {
        // x^2 with x = y + 1
        let term = Term::new(Variable::new("x", 2));
        let mut subs = Substitutions::new();
        subs.insert("x".to_string(), Expression::symbol("y").add(1).unwrap().into());

        assert_eq!(term.eval(&subs, true).unwrap().to_string(), "y^2 + 2*y + 1");
    }

    #[test]
    fn eval_negative_degree_at_zero() {
        let term = Term::new(Variable::new("x", -1));
        let mut subs = Substitutions::new();
        subs.insert("x".to_string(), Operand::Integer(0));

        assert_eq!(term.eval(&subs, true), Err(Error::DivideByZero));
    }

    #[test]
    fn degree_queries() {
        let term = Term::from_parts(1, vec![Variable::new("x", 3), Variable::new("y", -2)]);
        assert_eq!(term.max_degree(), 3);
        assert_eq!(term.max_degree_of_variable("y"), 1);
        assert_eq!(Term::constant(5).max_degree(), 1);
        assert!(term.has_variable("y"));
        assert!(!term.only_has_variable("x"));
        assert!(Term::new(Variable::new("x", 2)).only_has_variable("x"));
    }

    #[test]
    fn render() {
        let term = Term::from_parts(frac(-3, 2), vec![Variable::new("x", 2), Variable::new("y", 1)]);
        assert_eq!(term.to_string(), "-3/2*x^2*y");
        assert_eq!(term.to_tex(FormatOptions::default()), "-\\frac{3}{2} \\cdot x^{2}y");
        assert_eq!(Term::new("x").to_string(), "x");
        assert_eq!(Term::constant(-1).to_string(), "-1");
    }
}
