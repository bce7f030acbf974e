/*! Implements syntactic unification with occurs-check over terms, atoms and literals.

A successful unification returns the most general unifier as a [`Substitution`]. A
[`Failure`] is an ordinary outcome of unification and carries the pieces that could not be
unified.
*/
use crate::{
    syntax::{Atom, Literal, Term, V},
    transform::{TermBased, TermMap},
};
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// Is the reason two expressions do not unify.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Failure {
    /// Is returned when two function or predicate applications have different symbols.
    #[error("symbol `{left}` does not match symbol `{right}`")]
    SymbolClash { left: String, right: String },

    /// Is returned when a symbol is applied on different numbers of arguments.
    #[error("symbol `{symbol}` is applied on {left} and {right} arguments")]
    ArityMismatch {
        symbol: String,
        left: usize,
        right: usize,
    },

    /// Is returned when a positive literal is unified with a negative literal.
    #[error("literal `{}` has a different polarity than `{}`", .left.to_string(), .right.to_string())]
    PolarityMismatch { left: Literal, right: Literal },

    /// Is returned when binding a variable would make it occur in its own replacement.
    #[error("variable `{}` occurs in `{}`", .variable.to_string(), .term.to_string())]
    Occurs { variable: V, term: Term },
}

/// Is a substitution as an ordered list of bindings from variables to terms.
///
/// **Note**: the replacement of a binding never mentions a variable that is bound by the
/// substitution, hence applying a substitution once is enough.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Substitution(Vec<(V, Term)>);

impl Substitution {
    /// Returns the bindings of the receiver in the order they were added.
    pub fn bindings(&self) -> &[(V, Term)] {
        &self.0
    }

    /// Returns the replacement of `variable`, if bound.
    pub fn get(&self, variable: &V) -> Option<&Term> {
        self.0.iter().find(|(v, _)| v == variable).map(|(_, t)| t)
    }

    /// Returns the number of bindings in the receiver.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the receiver binds no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies the receiver on `value`.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, term};
    /// use razor_clause::unify::unify;
    ///
    /// let sub = unify(&term!(f(x, g(@a))), &term!(f(@b, y))).unwrap();
    /// assert_eq!("{b/x, g(a)/y}", sub.to_string());
    /// assert_eq!("P(b, g(a))", sub.apply(&atom!(P(x, y))).to_string());
    /// ```
    pub fn apply<T: TermBased>(&self, value: &T) -> T {
        value.substitute(self)
    }

    // Adds `variable ↦ term` and substitutes `term` for `variable` in existing replacements.
    fn bind(mut self, variable: V, term: Term) -> Self {
        trace!(event = crate::trace::BIND, variable = %variable, term = %term);
        let binding = |v: &V| {
            if v == &variable {
                term.clone()
            } else {
                v.into()
            }
        };
        for (_, replacement) in self.0.iter_mut() {
            *replacement = replacement.substitute(&binding);
        }
        self.0.push((variable, term));
        self
    }
}

impl TermMap for Substitution {
    fn apply(&self, v: &V) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.into())
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bindings = self
            .0
            .iter()
            .map(|(v, t)| format!("{}/{}", t, v))
            .join(", ");
        write!(f, "{{{}}}", bindings)
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Is the trait of expressions that can be unified.
pub trait Unify {
    /// Extends `sub` to a most general unifier of `self` and `other`, or fails if no such
    /// extension exists. A failure never returns a partial substitution.
    fn unify_with(&self, other: &Self, sub: Substitution) -> Result<Substitution, Failure>;
}

/// Returns the most general unifier of `left` and `right`.
///
/// **Example**:
/// ```rust
/// # use razor_clause::term;
/// use razor_clause::unify::{unify, Failure};
///
/// assert_eq!("{a/x}", unify(&term!(f(x)), &term!(f(@a))).unwrap().to_string());
/// assert!(matches!(
///     unify(&term!(f(x)), &term!(g(@a))),
///     Err(Failure::SymbolClash { .. })
/// ));
/// ```
pub fn unify<T: Unify>(left: &T, right: &T) -> Result<Substitution, Failure> {
    unify_with(left, right, Substitution::default())
}

/// Is similar to [`unify`] but extends an existing substitution.
pub fn unify_with<T: Unify>(left: &T, right: &T, sub: Substitution) -> Result<Substitution, Failure> {
    left.unify_with(right, sub).map_err(|failure| {
        trace!(event = crate::trace::FAIL, failure = %failure);
        failure
    })
}

impl Unify for Term {
    fn unify_with(&self, other: &Self, sub: Substitution) -> Result<Substitution, Failure> {
        if self == other {
            return Ok(sub);
        }

        match (self, other) {
            (Term::Var { variable }, _) => unify_var(variable, other, sub),
            (_, Term::Var { variable }) => unify_var(variable, self, sub),
            (
                Term::App { function, terms },
                Term::App {
                    function: other_function,
                    terms: other_terms,
                },
            ) => {
                if function != other_function {
                    return Err(Failure::SymbolClash {
                        left: function.name().to_string(),
                        right: other_function.name().to_string(),
                    });
                }
                unify_args(function.name(), terms, other_terms, sub)
            }
        }
    }
}

impl Unify for Atom {
    fn unify_with(&self, other: &Self, sub: Substitution) -> Result<Substitution, Failure> {
        if self == other {
            return Ok(sub);
        }

        if self.predicate() != other.predicate() {
            return Err(Failure::SymbolClash {
                left: self.predicate().name().to_string(),
                right: other.predicate().name().to_string(),
            });
        }
        unify_args(self.predicate().name(), self.terms(), other.terms(), sub)
    }
}

impl Unify for Literal {
    fn unify_with(&self, other: &Self, sub: Substitution) -> Result<Substitution, Failure> {
        if self.is_negative() != other.is_negative() {
            return Err(Failure::PolarityMismatch {
                left: self.clone(),
                right: other.clone(),
            });
        }
        self.atom().unify_with(other.atom(), sub)
    }
}

fn unify_args(
    symbol: &str,
    left: &[Term],
    right: &[Term],
    sub: Substitution,
) -> Result<Substitution, Failure> {
    if left.len() != right.len() {
        return Err(Failure::ArityMismatch {
            symbol: symbol.to_string(),
            left: left.len(),
            right: right.len(),
        });
    }
    left.iter()
        .zip(right.iter())
        .try_fold(sub, |sub, (l, r)| l.unify_with(r, sub))
}

fn unify_var(variable: &V, term: &Term, sub: Substitution) -> Result<Substitution, Failure> {
    if let Some(bound) = sub.get(variable).cloned() {
        return bound.unify_with(term, sub);
    }

    let term = sub.apply(term);
    // the term is already equal to the variable under `sub`
    if term == Term::from(variable) {
        return Ok(sub);
    }
    if term.contains(variable) {
        return Err(Failure::Occurs {
            variable: variable.clone(),
            term,
        });
    }
    Ok(sub.bind(variable.clone(), term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_unifies, atom, term, v};

    fn assert_sound<T: Unify + TermBased + PartialEq + fmt::Debug>(left: &T, right: &T) {
        let sub = unify(left, right).unwrap();
        assert_eq!(sub.apply(left), sub.apply(right));
    }

    #[test]
    fn test_unify_terms() {
        assert_unifies!("{}", unify(&term!(x), &term!(x)));
        assert_unifies!("{}", unify(&term!(f(x, @a)), &term!(f(x, @a))));
        assert_unifies!("{y/x}", unify(&term!(x), &term!(y)));
        assert_unifies!("{a/x}", unify(&term!(f(x)), &term!(f(@a))));
        assert_unifies!("{a/x}", unify(&term!(@a), &term!(x)));
        assert_unifies!("{b/x, a/y}", unify(&term!(f(x, @a)), &term!(f(@b, y))));
        assert_unifies!(
            "{g(z)/x, g(z)/y}",
            unify(&term!(f(x, x)), &term!(f(y, g(z))))
        );
    }

    #[test]
    fn test_unify_composes_bindings() {
        assert_unifies!("{b/x, b/a}", unify(&term!(f(x, x)), &term!(f(a, b))));
        assert_unifies!(
            "{f(a)/x, g(f(a))/v, a/u}",
            unify(
                &atom!(P(f(u), v, v)),
                &atom!(P(x, g(x), g(f(@a))))
            )
        );
        assert_unifies!(
            "{z/a, z/y, f(z)/u}",
            unify(&atom!(P(a, y, f(y))), &atom!(P(z, z, u)))
        );
    }

    #[test]
    fn test_unify_bound_variables() {
        assert_unifies!("{x/y}", unify(&term!(f(y, x)), &term!(f(x, y))));
        assert_unifies!(
            "{g(z)/x, z/u}",
            unify(&term!(f(x, g(x))), &term!(f(g(u), g(g(z)))))
        );
    }

    #[test]
    fn test_unify_failure() {
        assert_eq!(
            Err(Failure::SymbolClash {
                left: "f".into(),
                right: "g".into(),
            }),
            unify(&term!(f(x)), &term!(g(@a)))
        );
        assert_eq!(
            Err(Failure::SymbolClash {
                left: "a".into(),
                right: "b".into(),
            }),
            unify(&term!(f(x, x)), &term!(f(@a, @b)))
        );
        assert_eq!(
            Err(Failure::ArityMismatch {
                symbol: "f".into(),
                left: 1,
                right: 2,
            }),
            unify(&term!(f(x)), &term!(f(x, y)))
        );
        assert_eq!(
            Err(Failure::Occurs {
                variable: v!(x),
                term: term!(f(x)),
            }),
            unify(&term!(x), &term!(f(x)))
        );
        assert_eq!(
            Err(Failure::Occurs {
                variable: v!(z),
                term: term!(g(z)),
            }),
            unify(&term!(f(x, g(x), x)), &term!(f(g(u), g(g(z)), z)))
        );
    }

    #[test]
    fn test_unify_atoms() {
        assert_unifies!("{b/x, a/y}", unify(&atom!(P(x, @a)), &atom!(P(@b, y))));
        assert_unifies!("{}", unify(&atom!(P()), &atom!(P())));
        assert_eq!(
            Err(Failure::SymbolClash {
                left: "P".into(),
                right: "Q".into(),
            }),
            unify(&atom!(P(x)), &atom!(Q(x)))
        );
        assert_eq!(
            Err(Failure::ArityMismatch {
                symbol: "P".into(),
                left: 1,
                right: 0,
            }),
            unify(&atom!(P(x)), &atom!(P()))
        );
    }

    #[test]
    fn test_unify_literals() {
        assert_unifies!(
            "{a/x}",
            unify(&Literal::Neg(atom!(P(x))), &Literal::Neg(atom!(P(@a))))
        );
        assert!(matches!(
            unify(&Literal::Pos(atom!(P(x))), &Literal::Neg(atom!(P(x)))),
            Err(Failure::PolarityMismatch { .. })
        ));
    }

    #[test]
    fn test_unify_with() {
        let sub = unify(&term!(x), &term!(@a)).unwrap();
        assert_unifies!(
            "{a/x, a/y}",
            unify_with(&term!(f(x)), &term!(f(y)), sub.clone())
        );
        assert_eq!(
            Err(Failure::SymbolClash {
                left: "a".into(),
                right: "b".into(),
            }),
            unify_with(&term!(x), &term!(@b), sub)
        );
    }

    #[test]
    fn test_substitution() {
        let sub = unify(&term!(f(x, y)), &term!(f(g(y), @c))).unwrap();
        assert_eq!(2, sub.len());
        assert!(!sub.is_empty());
        assert_eq!(Some(&term!(g(@c))), sub.get(&v!(x)));
        assert_eq!(Some(&term!(@c)), sub.get(&v!(y)));
        assert_eq!(None, sub.get(&v!(z)));
        assert_eq!(
            vec![(v!(x), term!(g(@c))), (v!(y), term!(@c))],
            sub.bindings().to_vec()
        );
        assert!(Substitution::default().is_empty());
    }

    #[test]
    fn test_unify_soundness() {
        assert_sound(&term!(f(x, g(y))), &term!(f(h(z), z)));
        assert_sound(&term!(f(x, y, z)), &term!(f(y, z, @a)));
        assert_sound(&term!(f(g(x), x)), &term!(f(y, h(y1))));
        assert_sound(&atom!(P(f(u), v, v)), &atom!(P(x, g(x), g(f(@a)))));
        assert_sound(&atom!(R(x, f(x), w)), &atom!(R(g(w1), y, g(w1))));
        assert_sound(
            &Literal::Pos(atom!(P(x, y))),
            &Literal::Pos(atom!(P(y, f(z)))),
        );
    }
}
