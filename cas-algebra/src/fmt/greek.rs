use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Symbol names that have a dedicated LaTeX command, such as `alpha` (`\alpha`) or `Omega`
/// (`\Omega`).
static GREEK_LETTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta", "eta", "theta",
        "vartheta", "iota", "kappa", "lambda", "mu", "nu", "xi", "pi", "varpi", "rho", "varrho",
        "sigma", "varsigma", "tau", "upsilon", "phi", "varphi", "chi", "psi", "omega",
        "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega",
    ]
    .into_iter()
    .collect()
});

/// Returns true if the symbol should be rendered as a LaTeX command.
pub fn is_greek(symbol: &str) -> bool {
    GREEK_LETTERS.contains(symbol)
}
