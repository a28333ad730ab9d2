//! Rendering of terms and expressions as plain text or LaTeX.

pub(crate) mod greek;

use crate::{expr::Expression, fraction::Fraction, term::Term};
use std::fmt::{self, Display, Formatter, Write};

/// Formatting options for terms and expressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// How to write the multiplication between the factors of a term.
    pub multiplication: Multiplication,

    /// Which LaTeX command to use for multiplication.
    ///
    /// This option is only used when rendering LaTeX with [`Multiplication::Explicit`].
    pub tex_operator: TexOperator,
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// The different ways to write the multiplication between the factors of a term.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Multiplication {
    /// Write an operator between each factor, such as `3*x*y`.
    ///
    /// In LaTeX, the operator is only written between the coefficient and the variables
    /// (`3 \cdot xy`), since adjacent variables are unambiguous there.
    ///
    /// This is the default option.
    #[default]
    Explicit,

    /// Write the factors next to each other, such as `3xy`.
    Implicit,
}

impl Multiplication {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the multiplication style set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            multiplication: self,
            ..options
        }
    }
}

/// The LaTeX command used for explicit multiplication.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TexOperator {
    /// `\cdot`, rendered as a centered dot.
    ///
    /// This is the default option.
    #[default]
    Cdot,

    /// `\times`, rendered as a cross.
    Times,

    /// `\ast`, rendered as an asterisk.
    Ast,
}

impl TexOperator {
    /// Returns the LaTeX command for this operator.
    pub fn command(self) -> &'static str {
        match self {
            Self::Cdot => "\\cdot",
            Self::Times => "\\times",
            Self::Ast => "\\ast",
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the multiplication style. See [`Multiplication`] for more information.
    pub fn multiplication(mut self, multiplication: Multiplication) -> Self {
        self.0.multiplication = multiplication;
        self
    }

    /// Sets the LaTeX multiplication operator. See [`TexOperator`] for more information.
    pub fn tex_operator(mut self, tex_operator: TexOperator) -> Self {
        self.0.tex_operator = tex_operator;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// The output language of a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Infix text, such as `3*x^2 + 1`.
    Plain,

    /// A LaTeX fragment, such as `3 \cdot x^{2} + 1`.
    Latex,
}

/// Formatter for an [`Expression`].
#[derive(Debug, Clone, Copy)]
pub struct ExprFormatter<'a> {
    /// The expression to format.
    pub expr: &'a Expression,

    /// The options to use when formatting.
    pub options: FormatOptions,

    /// The output language.
    pub notation: Notation,
}

/// Writes the operator that joins a component to the output so far. The first component only
/// keeps its sign.
fn write_sign(f: &mut impl Write, negative: bool, first: bool) -> fmt::Result {
    match (first, negative) {
        (true, true) => f.write_char('-'),
        (true, false) => Ok(()),
        (false, true) => f.write_str(" - "),
        (false, false) => f.write_str(" + "),
    }
}

/// Writes the absolute value of a fraction, in lowest terms.
fn write_magnitude(f: &mut impl Write, value: Fraction, notation: Notation) -> fmt::Result {
    match (value.reduced_wide(), notation) {
        ((n, 1), _) => write!(f, "{}", n.abs()),
        ((n, d), Notation::Plain) => write!(f, "{}/{}", n.abs(), d),
        ((n, d), Notation::Latex) => write!(f, "\\frac{{{}}}{{{}}}", n.abs(), d),
    }
}

/// Writes the operator between two factors of a term.
fn write_operator(f: &mut impl Write, options: FormatOptions, notation: Notation) -> fmt::Result {
    match notation {
        Notation::Plain => f.write_char('*'),
        Notation::Latex => write!(f, " {} ", options.tex_operator.command()),
    }
}

fn is_unit(value: &Fraction) -> bool {
    let (n, d) = value.reduced_wide();
    n.abs() == d
}

/// Returns true if the product of the coefficient factors of a term is negative.
///
/// Only signs are inspected, so this works on unsimplified terms whose product would not fit in
/// a [`Fraction`].
fn is_negative(term: &Term) -> bool {
    let coefficients = term.coefficients();
    !coefficients.iter().any(Fraction::is_zero)
        && coefficients.iter().filter(|c| c.is_negative()).count() % 2 == 1
}

/// Writes a term without its sign.
///
/// Every coefficient factor other than `1` is written, so an unsimplified term shows each of its
/// factors (`3*2*x`).
fn write_unsigned_term(
    f: &mut impl Write,
    term: &Term,
    options: FormatOptions,
    notation: Notation,
) -> fmt::Result {
    let factors = term.coefficients()
        .iter()
        .filter(|c| !is_unit(c))
        .collect::<Vec<_>>();
    let variables = term.variables()
        .iter()
        .map(|v| match notation {
            Notation::Plain => v.to_string(),
            Notation::Latex => v.to_tex(),
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    if factors.is_empty() && variables.is_empty() {
        return f.write_char('1');
    }

    for (i, &&factor) in factors.iter().enumerate() {
        if i != 0 {
            write_operator(f, options, notation)?;
        }
        write_magnitude(f, factor, notation)?;
    }

    if variables.is_empty() {
        return Ok(());
    }

    let explicit = options.multiplication == Multiplication::Explicit;
    if !factors.is_empty() && explicit {
        write_operator(f, options, notation)?;
    }

    let separator = match notation {
        Notation::Plain if explicit => "*",
        _ => "",
    };
    for (i, variable) in variables.iter().enumerate() {
        if i != 0 {
            f.write_str(separator)?;

            // `\alpha x` must not become `\alphax`
            let previous = &variables[i - 1];
            if separator.is_empty()
                && previous.starts_with('\\')
                && previous.ends_with(|c: char| c.is_ascii_alphabetic())
            {
                f.write_char(' ')?;
            }
        }
        f.write_str(variable)?;
    }

    Ok(())
}

/// Renders a term, including a leading `-` if its coefficient is negative.
pub(crate) fn signed_term(term: &Term, options: FormatOptions, notation: Notation) -> String {
    let mut out = String::new();

    // writing into a `String` does not fail
    let _ = write_sign(&mut out, is_negative(term), true)
        .and_then(|_| write_unsigned_term(&mut out, term, options, notation));
    out
}

impl Display for ExprFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for term in self.expr.terms() {
            write_sign(f, is_negative(term), first)?;
            write_unsigned_term(f, term, self.options, self.notation)?;
            first = false;
        }

        for &constant in self.expr.constants().iter().filter(|c| !c.is_zero()) {
            write_sign(f, constant.is_negative(), first)?;
            write_magnitude(f, constant, self.notation)?;
            first = false;
        }

        if first {
            f.write_char('0')?;
        }

        Ok(())
    }
}
