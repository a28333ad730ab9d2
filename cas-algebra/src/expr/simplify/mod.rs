//! Canonicalization of [`Expression`]s.
//!
//! Two expressions that are mathematically equal (within what this crate can represent) simplify
//! to the same list of terms and the same constant. The pipeline runs these stages in order:
//!
//! 1. Every term is simplified on its own (see [`Term::simplify`]).
//! 2. The terms are sorted by descending [`Term::max_degree`], then by descending number of
//!    variables, then by their monomial (symbol ascending, degree descending) to break any
//!    remaining tie.
//! 3. Like terms are combined in a single left-to-right pass. A term that can be combined with a
//!    term that was already kept is dropped; otherwise, it absorbs every later like term and is
//!    kept.
//! 4. Terms without variables are folded into the constant.
//! 5. Terms with a zero coefficient are removed.
//! 6. The constants are collapsed into exactly one [`Fraction`], which may be zero.
//!
//! Folding coefficients and constants can overflow, in which case the pipeline stops with
//! [`Error::Overflow`](crate::Error::Overflow).
//!
//! The third stage never revisits a kept term. Since like terms share the exact same monomial,
//! merging two of them cannot change whether the result is like any other term, so one pass is
//! enough to leave no combinable pair behind.

pub mod step;

use crate::{
    error::Error,
    fraction::Fraction,
    step_collector::StepCollector,
    term::{monomial_key, Term},
};
use step::Step;
use super::Expression;
use tracing::trace;

/// Sorts terms into canonical order. The sort is stable.
pub(crate) fn sort_terms(terms: &mut [Term]) {
    terms.sort_by(|a, b| {
        b.max_degree()
            .cmp(&a.max_degree())
            .then_with(|| b.variables().len().cmp(&a.variables().len()))
            .then_with(|| monomial_key(a.variables()).cmp(&monomial_key(b.variables())))
    });
}

/// Combines like terms in a single greedy pass, keeping the first occurrence of each monomial.
fn combine_like_terms(terms: &[Term]) -> Result<Vec<Term>, Error> {
    let mut kept: Vec<Term> = Vec::with_capacity(terms.len());

    for (i, term) in terms.iter().enumerate() {
        if kept.iter().any(|k| term.can_be_combined_with(k)) {
            continue;
        }

        let merged = terms[i + 1..]
            .iter()
            .filter(|other| term.can_be_combined_with(other))
            .try_fold(term.clone(), |acc, other| {
                Ok::<_, Error>(acc.with_coefficient(acc.coefficient()?.add(other.coefficient()?)?))
            })?;
        kept.push(merged);
    }

    Ok(kept)
}

/// Runs the canonicalization pipeline on the expression, reporting each stage that changed it.
pub(super) fn simplify(
    expr: &Expression,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Expression, Error> {
    trace!(terms = expr.terms.len(), constants = expr.constants.len(), "simplifying");
    let mut constants = expr.constants.clone();

    // 1
    let mut terms = expr.terms.iter().map(Term::simplify).collect::<Result<Vec<_>, _>>()?;
    if terms != expr.terms {
        steps.push(Step::SimplifyTerms);
    }

    // 2
    let unsorted = terms.clone();
    sort_terms(&mut terms);
    if terms != unsorted {
        steps.push(Step::SortTerms);
    }

    // 3
    let combined = combine_like_terms(&terms)?;
    if combined.len() != terms.len() {
        steps.push(Step::CombineLikeTerms);
    }

    // 4
    let (constant_terms, terms): (Vec<_>, Vec<_>) = combined
        .into_iter()
        .partition(Term::is_constant);
    if !constant_terms.is_empty() {
        steps.push(Step::FoldConstantTerms);
    }
    constants.push(
        constant_terms
            .iter()
            .try_fold(Fraction::zero(), |sum, term| sum.add(term.coefficient()?))?,
    );

    // 5
    let before = terms.len();
    let terms = terms
        .into_iter()
        .filter(|term| !term.coefficients().iter().any(Fraction::is_zero))
        .collect::<Vec<_>>();
    if terms.len() != before {
        steps.push(Step::RemoveZeroTerms);
    }

    // 6
    let constant = constants.iter().try_fold(Fraction::zero(), |sum, &c| sum.add(c))?;
    let already_collapsed = match expr.constants.as_slice() {
        [only] => only.numerator() == constant.numerator()
            && only.denominator() == constant.denominator(),
        [] => constant.is_zero(),
        _ => false,
    };
    if !already_collapsed {
        steps.push(Step::CollapseConstants);
    }

    trace!(terms = terms.len(), %constant, "simplified");
    Ok(Expression {
        terms,
        constants: vec![constant],
    })
}
