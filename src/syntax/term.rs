/*! Defines the syntax for first-order terms. */
use super::{F, V};
use itertools::Itertools;
use std::fmt;

/// Represents a first-order term and consists of variables and function applications.
///
/// **Note**: a function applied on no terms is a constant.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a variable symbol.
    Var { variable: V },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Term> },
}

impl Term {
    /// Returns `true` if the receiver is a variable term.
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var { .. })
    }

    /// Returns `true` if the receiver is a function applied on no arguments.
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::App { terms, .. } if terms.is_empty())
    }

    /// Returns a list of all variable symbols in the term.
    ///
    /// **Note**: each variable symbol appears only once, in the order of its first
    /// occurrence, even if it is present at multiple positions of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{term, v};
    /// let t = term!(f(x, g(y, @c, x)));
    /// assert_eq!(vec![&v!(x), &v!(y)], t.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Term::Var { variable } => vec![variable],
            Term::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }

    /// Returns `true` if `variable` occurs anywhere in the receiver.
    pub fn contains(&self, variable: &V) -> bool {
        match self {
            Term::Var { variable: v } => v == variable,
            Term::App { terms, .. } => terms.iter().any(|t| t.contains(variable)),
        }
    }

    /// Returns the function symbols applied in the receiver, including constants.
    pub fn functions(&self) -> Vec<&F> {
        match self {
            Term::Var { .. } => Vec::new(),
            Term::App { function, terms } => std::iter::once(function)
                .chain(terms.iter().flat_map(|t| t.functions()))
                .unique()
                .collect(),
        }
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var { variable }
    }
}

impl From<&V> for Term {
    fn from(variable: &V) -> Self {
        variable.clone().into()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::App { function, terms } if terms.is_empty() => write!(f, "{}", function),
            Self::App { function, terms } => {
                write!(f, "{}({})", function, terms.iter().join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq_sorted_vecs, f, term, v};

    #[test]
    fn test_term_to_string() {
        assert_eq!("x", term!(x).to_string());
        assert_eq!("c", term!(@c).to_string());
        assert_eq!("f(x, y)", term!(f(x, y)).to_string());
        assert_eq!("f(g(x), c)", term!(f(g(x), @c)).to_string());
        assert_eq!(
            "f(f(f(f(x))))",
            f!(f).app(vec![term!(f(f(f(x))))]).to_string()
        );
    }

    #[test]
    fn test_term_equality() {
        assert_eq!(term!(f(x, g(y))), term!(f(x, g(y))));
        assert_ne!(term!(f(x)), term!(f(y)));
        assert_ne!(term!(f(x)), term!(g(x)));
        assert_ne!(term!(f(x)), term!(f(x, x)));
        // a variable is never equal to a function application of the same name:
        assert_ne!(term!(a), term!(@a));
    }

    #[test]
    fn test_term_free_vars() {
        assert_eq!(Vec::<&V>::new(), term!(@c).free_vars());
        assert_eq!(vec![&v!(x)], term!(x).free_vars());
        assert_eq!(vec![&v!(x)], term!(f(x, x)).free_vars());
        assert_eq_sorted_vecs!(
            vec![&v!(x), &v!(y), &v!(z)],
            term!(f(g(x), h(y, f(g(z))))).free_vars()
        );
    }

    #[test]
    fn test_term_contains() {
        assert!(term!(x).contains(&v!(x)));
        assert!(term!(f(y, g(x))).contains(&v!(x)));
        assert!(!term!(f(y, g(@x))).contains(&v!(x)));
    }

    #[test]
    fn test_term_functions() {
        assert_eq!(Vec::<&F>::new(), term!(x).functions());
        assert_eq!(
            vec![&f!(f), &f!(g), &f!(c)],
            term!(f(g(x), g(@c))).functions()
        );
    }
}
