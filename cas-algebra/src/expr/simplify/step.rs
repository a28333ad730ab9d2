/// The stages of the canonicalization pipeline, in the order they run.
///
/// A step is only reported when it changed the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Each term is reduced to a single coefficient with merged variables.
    ///
    /// `2*x*3*x = 6*x^2`
    SimplifyTerms,

    /// Terms are sorted into canonical order.
    ///
    /// `x + y^2 = y^2 + x`
    SortTerms,

    /// Like terms are added together.
    ///
    /// `x + 2*x = 3*x`
    CombineLikeTerms,

    /// Terms without variables are moved into the constant.
    ///
    /// `x + x^0 = x + 1`
    FoldConstantTerms,

    /// Terms whose coefficient is zero are removed.
    ///
    /// `0*x + y = y`
    RemoveZeroTerms,

    /// The constants are summed into a single value.
    ///
    /// `x + 1 + 2 = x + 3`
    CollapseConstants,
}
