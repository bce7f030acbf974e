/*! Implements standardizing apart the bound variables of a [`Formula`], so that every
quantifier binds a distinct variable.

[`Formula`]: crate::syntax::Formula
*/
use super::{Error, FreshNames, NameGenerator};
use crate::syntax::{Atom, Exists, Forall, Formula, Term, V};
use std::collections::{BTreeSet, HashMap};

/// Renames the bound variables of `formula` such that no two quantifiers bind the same
/// variable. A quantifier keeps its variable if no quantifier visited earlier (in pre-order)
/// binds the same name; otherwise it is given a fresh name from a [`NameGenerator`].
///
/// The input is expected to be closed: a variable that is not bound by an enclosing
/// quantifier results in [`Error::UnboundVariable`].
///
/// **Example**:
/// ```rust
/// # use razor_clause::{atom, syntax::{Formula, forall, exists}};
/// use razor_clause::transform::standardize_apart;
///
/// // (∀ x. P(x)) ∧ (∃ x. Q(x))
/// let formula = forall("x", atom!(P(x)).into()).and(exists("x", atom!(Q(x)).into()));
/// let result = standardize_apart(&formula).unwrap();
/// assert_eq!("(∀ x. P(x)) ∧ (∃ v1. Q(v1))", result.to_string());
/// ```
///
/// [`NameGenerator`]: crate::transform::NameGenerator
/// [`Error::UnboundVariable`]: crate::transform::Error::UnboundVariable
pub fn standardize_apart(formula: &Formula) -> Result<Formula, Error> {
    standardize_apart_with(formula, &mut NameGenerator::default())
}

/// Is similar to [`standardize_apart`] but uses a custom source of fresh variable names.
pub fn standardize_apart_with<N: FreshNames>(
    formula: &Formula,
    names: &mut N,
) -> Result<Formula, Error> {
    let used = formula
        .variables()
        .into_iter()
        .map(|v| v.name().to_string())
        .collect();
    let mut standardizer = Standardizer {
        names,
        assigned: BTreeSet::new(),
        used,
    };
    standardizer.formula(formula, &HashMap::new())
}

struct Standardizer<'n, N: FreshNames> {
    names: &'n mut N,
    // names bound by the quantifiers visited so far
    assigned: BTreeSet<String>,
    // every name that a fresh variable must avoid
    used: BTreeSet<String>,
}

impl<'n, N: FreshNames> Standardizer<'n, N> {
    fn formula(&mut self, formula: &Formula, scope: &HashMap<V, V>) -> Result<Formula, Error> {
        match formula {
            Formula::Literal(this) => {
                let terms = this
                    .atom()
                    .terms()
                    .iter()
                    .map(|t| Self::term(t, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(this
                    .map_atom(|atom| Atom::new(atom.predicate().clone(), terms))
                    .into())
            }
            Formula::Forall(this) => {
                let (variable, scope) = self.bind(&this.variable, scope)?;
                Ok(Forall {
                    variable,
                    formula: self.formula(&this.formula, &scope)?,
                    negated: this.negated,
                }
                .into())
            }
            Formula::Exists(this) => {
                let (variable, scope) = self.bind(&this.variable, scope)?;
                Ok(Exists {
                    variable,
                    formula: self.formula(&this.formula, &scope)?,
                    negated: this.negated,
                }
                .into())
            }
            _ => formula.try_map_children(|f| self.formula(f, scope)),
        }
    }

    // Chooses the name of a quantifier's variable and returns the scope of its body.
    fn bind(&mut self, variable: &V, scope: &HashMap<V, V>) -> Result<(V, HashMap<V, V>), Error> {
        let assigned = if self.assigned.contains(variable.name()) {
            self.names.fresh_variable(&self.used)?
        } else {
            variable.clone()
        };
        self.assigned.insert(assigned.name().to_string());
        self.used.insert(assigned.name().to_string());

        let mut scope = scope.clone();
        scope.insert(variable.clone(), assigned.clone());
        Ok((assigned, scope))
    }

    fn term(term: &Term, scope: &HashMap<V, V>) -> Result<Term, Error> {
        match term {
            Term::Var { variable } => scope
                .get(variable)
                .map(Term::from)
                .ok_or_else(|| Error::UnboundVariable {
                    variable: variable.clone(),
                }),
            Term::App { function, terms } => {
                let terms = terms
                    .iter()
                    .map(|t| Self::term(t, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(function.clone().app(terms))
            }
        }
    }
}
