/*! Provides an interface and the implementation for term substitution and variable renaming.*/
use crate::syntax::{Atom, Clause, ClauseSet, Literal, Term, V};
use std::collections::HashMap;

/// Is the trait of types that map variables to terms.
pub trait TermMap {
    /// Maps `v` to a [`Term`].
    ///
    /// [`Term`]: crate::syntax::Term
    fn apply(&self, v: &V) -> Term;
}

/// Any function from [`V`] to [`Term`] is a term map.
///
/// [`V`]: crate::syntax::V
/// [`Term`]: crate::syntax::Term
impl<F> TermMap for F
where
    F: Fn(&V) -> Term,
{
    fn apply(&self, v: &V) -> Term {
        self(v)
    }
}

/// Any map from [`V`] to [`Term`] is a term map; variables missing from the map are
/// left unchanged.
///
/// [`V`]: crate::syntax::V
/// [`Term`]: crate::syntax::Term
impl TermMap for HashMap<V, Term> {
    fn apply(&self, v: &V) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.into())
    }
}

/// Is the trait of types that map variables to variables.
///
/// **Note**: A variable renaming may be regarded as a special case of [`TermMap`].
pub trait VariableRenaming {
    /// Maps `v` to another [`V`].
    ///
    /// [`V`]: crate::syntax::V
    fn apply(&self, v: &V) -> V;
}

impl<F> VariableRenaming for F
where
    F: Fn(&V) -> V,
{
    fn apply(&self, v: &V) -> V {
        self(v)
    }
}

impl VariableRenaming for HashMap<V, V> {
    fn apply(&self, v: &V) -> V {
        self.get(v).cloned().unwrap_or_else(|| v.clone())
    }
}

/// Is the trait of objects constructed atop [`Term`]s.
///
/// [`Term`]: crate::syntax::Term
pub trait TermBased: Sized {
    /// Applies a transformation function `f` on the [`Term`]s of the receiver.
    ///
    /// [`Term`]: crate::syntax::Term
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self;

    /// Applies a [`VariableRenaming`] on the variable sub-terms of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{term, v};
    /// use razor_clause::transform::TermBased;
    /// use std::collections::HashMap;
    ///
    /// // A variable renaming map that renames variable `x` to `a` and variable `y` to `b`
    /// let mut renaming = HashMap::new();
    /// renaming.insert(v!(x), v!(a));
    /// renaming.insert(v!(y), v!(b));
    ///
    /// let t = term!(f(x, z, g(x, y, x)));
    /// assert_eq!("f(a, z, g(a, b, a))", t.rename_vars(&renaming).to_string())
    /// ```
    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self {
        self.transform(&|t: &Term| t.rename_vars(renaming))
    }

    /// Applies a [`TermMap`] on the variable sub-terms of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{term, syntax::{V, Term}};
    /// use razor_clause::transform::TermBased;
    ///
    /// // Maps `x` to the constant `c` and leaves every other variable unchanged.
    /// fn x_to_c(v: &V) -> Term {
    ///     if v.name() == "x" {
    ///         term!(@c)
    ///     } else {
    ///         v.into()
    ///     }
    /// }
    ///
    /// let t = term!(f(x, g(x, y, x)));
    /// assert_eq!("f(c, g(c, y, c))", t.substitute(&x_to_c).to_string())
    /// ```
    fn substitute(&self, sub: &impl TermMap) -> Self {
        self.transform(&|t: &Term| t.substitute(sub))
    }
}

impl TermBased for Term {
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self {
        f(self)
    }

    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self {
        match self {
            Term::Var { variable } => renaming.apply(variable).into(),
            Term::App { function, terms } => {
                let terms = terms.iter().map(|t| t.rename_vars(renaming)).collect();
                function.clone().app(terms)
            }
        }
    }

    fn substitute(&self, sub: &impl TermMap) -> Self {
        match self {
            Term::Var { variable } => sub.apply(variable),
            Term::App { function, terms } => {
                let terms = terms.iter().map(|t| t.substitute(sub)).collect();
                function.clone().app(terms)
            }
        }
    }
}

impl TermBased for Atom {
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Atom::new(
            self.predicate().clone(),
            self.terms().iter().map(f).collect(),
        )
    }
}

impl TermBased for Literal {
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.map_atom(|atom| atom.transform(f))
    }
}

impl TermBased for Clause {
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.iter().map(|lit| lit.transform(f)).collect()
    }
}

impl TermBased for ClauseSet {
    fn transform(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.iter().map(|clause| clause.transform(f)).collect()
    }
}
