//! Exact rational arithmetic over polynomial-like expressions.
//!
//! This crate models four kinds of values, each built out of the previous:
//!
//! - [`Fraction`]: a rational number with [`i64`] parts, reduced to lowest terms on demand.
//! - [`Variable`]: a symbol raised to an integer power.
//! - [`Term`]: a coefficient multiplied by a product of variables.
//! - [`Expression`]: a sum of terms and constants.
//!
//! All values are plain owned data. Every operation takes its receiver by reference and returns
//! a new value, so values can be cloned and shared freely.
//!
//! # Canonical form
//!
//! Expressions are kept in a canonical form by [`Expression::simplify`]: like terms are
//! combined, terms are sorted in a fixed order, and constants are collapsed into one value. Two
//! expressions that are mathematically equal simplify to the same representation, and therefore
//! render to the same string.
//!
//! ```
//! use cas_algebra::Expression;
//!
//! let a = Expression::symbol("x").add(Expression::symbol("x").multiply(2)?)?;
//! let b = Expression::symbol("x").multiply(2)?.add("x")?;
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "3*x");
//! # Ok::<(), cas_algebra::Error>(())
//! ```
//!
//! Most operations come in two flavors: a shorthand that simplifies its result (such as
//! [`Expression::add`]), and a `*_with` variant that takes a `simplify` flag (such as
//! [`Expression::add_with`]). Skipping simplification is useful when chaining several
//! operations, since the expression only needs to be canonicalized once at the end.
//!
//! # Errors
//!
//! Fallible operations return [`Error`], such as [`Error::DivideByZero`] when dividing by a value
//! equal to zero, or [`Error::NonMonomialDivision`] when dividing by a sum. Coefficients and
//! degrees are exact [`i64`] values, and any operation whose exact result leaves that range
//! returns [`Error::Overflow`] instead of wrapping or panicking. Rendering never fails: an
//! unsimplified term prints each of its coefficient factors instead of their product.

pub mod error;
pub mod expr;
pub mod fmt;
pub mod fraction;
pub mod operand;
pub mod primitive;
pub mod step_collector;
pub mod term;
pub mod variable;

use std::collections::HashMap;

pub use error::Error;
pub use expr::{simplify::step::Step, Expression};
pub use fmt::{ExprFormatter, FormatOptions, FormatOptionsBuilder, Multiplication, TexOperator};
pub use fraction::{Fraction, Root};
pub use operand::{Factor, Operand};
pub use step_collector::StepCollector;
pub use term::Term;
pub use variable::Variable;

/// Values to substitute for variables, keyed by symbol.
pub type Substitutions = HashMap<String, Operand>;
