/*! Implements the transformations that take a first-order formula to clause form.

The stages are exposed individually and are chained, in order, by [`ToClauseForm`]:
bi-implication and implication elimination, negation normal form, standardizing apart,
Skolemization, discarding universal quantifiers, conjunctive normal form and clause
extraction followed by standardizing the clauses apart.
*/
mod clause_set;
mod cnf;
mod names;
mod nnf;
mod skolem;
mod standardize;
mod strip;
mod substitution;

pub use clause_set::{standardize_clauses, standardize_clauses_with, to_clauses};
pub use cnf::ToCnf;
pub use names::{FreshNames, NameGenerator};
pub use nnf::{eliminate_iff, eliminate_implies, push_negation, ToNnf};
pub use skolem::ToSkolem;
pub use standardize::{standardize_apart, standardize_apart_with};
pub use strip::discard_universals;
pub use substitution::{TermBased, TermMap, VariableRenaming};

use crate::syntax::{ClauseSet, Formula, V};
use thiserror::Error;

/// Is the type of errors arising from the transformations on formulae.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a variable of a formula is not bound by any enclosing quantifier.
    #[error("variable `{}` is not bound by a quantifier", .variable.to_string())]
    UnboundVariable { variable: V },

    /// Is returned when no fresh name with the given prefix can be generated.
    #[error("no fresh names left with prefix `{prefix}`")]
    NameExhaustion { prefix: String },

    /// Is returned when a stage of the transformation is applied on a formula that does not
    /// satisfy its input requirements.
    #[error("{stage}: {reason}, found `{}`", .formula.to_string())]
    Precondition {
        stage: &'static str,
        reason: &'static str,
        formula: Formula,
    },
}

/// Is the trait of types that can be converted to a set of clauses.
pub trait ToClauseForm {
    /// Is similar to [`ToClauseForm::clause_form`] but uses `names` for every fresh variable
    /// and Skolem function that the conversion introduces.
    fn clause_form_with<N: FreshNames>(&self, names: &mut N) -> Result<ClauseSet, Error>;

    /// Converts `self` to a set of clauses, no two of which share a variable.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::{Formula, forall, exists}};
    /// use razor_clause::transform::ToClauseForm;
    ///
    /// // ∀ x. (P(x) → ∃ y. Q(x, y))
    /// let formula = forall(
    ///     "x",
    ///     Formula::from(atom!(P(x))).implies(exists("y", atom!(Q(x, y)).into())),
    /// );
    /// let clauses = formula.clause_form().unwrap();
    /// assert_eq!("{{¬P(x), Q(x, sk1(x))}}", clauses.to_string());
    /// ```
    fn clause_form(&self) -> Result<ClauseSet, Error> {
        self.clause_form_with(&mut NameGenerator::default())
    }
}

impl ToClauseForm for Formula {
    fn clause_form_with<N: FreshNames>(&self, names: &mut N) -> Result<ClauseSet, Error> {
        let span = span!(tracing::Level::DEBUG, crate::trace::CLAUSE_FORM, formula = %self);
        let _enter = span.enter();

        let formula = eliminate_iff(self);
        debug!(event = crate::trace::ELIMINATE_IFF, formula = %formula);

        let formula = eliminate_implies(&formula);
        debug!(event = crate::trace::ELIMINATE_IMPLIES, formula = %formula);

        let formula = push_negation(&formula);
        debug!(event = crate::trace::PUSH_NEGATION, formula = %formula);

        let formula = standardize_apart_with(&formula, names)?;
        debug!(event = crate::trace::STANDARDIZE, formula = %formula);

        let formula = formula.skolemize_with(names)?;
        debug!(event = crate::trace::SKOLEMIZE, formula = %formula);

        let formula = discard_universals(&formula)?;
        debug!(event = crate::trace::DISCARD_UNIVERSALS, formula = %formula);

        let formula = formula.cnf()?;
        debug!(event = crate::trace::CNF, formula = %formula);

        let clauses = to_clauses(&formula)?;
        debug!(event = crate::trace::CLAUSES, clauses = %clauses);

        let clauses = standardize_clauses_with(&clauses, names)?;
        debug!(event = crate::trace::STANDARDIZE_CLAUSES, clauses = %clauses);

        Ok(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, lit,
        syntax::{exists, forall, not},
    };

    fn clause_form(formula: &Formula) -> ClauseSet {
        formula.clause_form().unwrap()
    }

    #[test]
    fn test_clause_form() {
        assert_debug_string!("{{P(x)}}", clause_form(&forall("x", lit!(P(x)))));
        assert_debug_string!(
            "{{¬P(x), Q(x, sk1(x))}}",
            clause_form(&forall("x", lit!(P(x)).implies(exists("y", lit!(Q(x, y))))))
        );
        assert_debug_string!(
            "{{P(x)}, {Q(v1)}}",
            clause_form(&forall("x", lit!(P(x))).and(forall("x", lit!(Q(x)))))
        );
    }

    #[test]
    fn test_clause_form_iff() {
        // ∀ x. (P(x) ⇔ Q(x))
        assert_debug_string!(
            "{{¬P(x), Q(x)}, {P(v1), ¬Q(v1)}}",
            clause_form(&forall("x", lit!(P(x)).iff(lit!(Q(x)))))
        );
    }

    #[test]
    fn test_clause_form_distribution() {
        // ∀ x. (P(x) ∨ (Q(x) ∧ R(x)))
        assert_debug_string!(
            "{{P(x), Q(x)}, {P(v1), R(v1)}}",
            clause_form(&forall("x", lit!(P(x)).or(lit!(Q(x)).and(lit!(R(x))))))
        );
    }

    #[test]
    fn test_clause_form_negated_quantifiers() {
        // ¬∃ x. (P(x) ∧ ¬∀ y. Q(x, y))
        assert_debug_string!(
            "{{¬P(x), Q(x, y)}}",
            clause_form(&not(exists(
                "x",
                lit!(P(x)).and(not(forall("y", lit!(Q(x, y)))))
            )))
        );
        // ¬∀ x. P(x)
        assert_debug_string!("{{¬P(sk1)}}", clause_form(&not(forall("x", lit!(P(x))))));
    }

    #[test]
    fn test_clause_form_end_to_end() {
        // ∀ x. (P(x) ⇔ (Q(x) ∧ ∃ y. (Q(y) ∧ R(y, x))))
        let formula = forall(
            "x",
            lit!(P(x)).iff(lit!(Q(x)).and(exists("y", lit!(Q(y)).and(lit!(R(y, x)))))),
        );
        assert_debug_string!(
            "{{¬P(x), Q(x)}, {¬P(v2), Q(sk1(v2))}, {¬P(v3), R(sk1(v3), v3)}, {P(v4), ¬Q(v1), ¬Q(v4), ¬R(v1, v4)}}",
            clause_form(&formula)
        );

        // ∃ x. (P(x) ∧ ∀ x. (Q(x) → ¬P(x)))
        let formula = exists(
            "x",
            lit!(P(x)).and(forall("x", lit!(Q(x)).implies(lit!(~P(x))))),
        );
        assert_debug_string!("{{P(sk1)}, {¬P(v1), ¬Q(v1)}}", clause_form(&formula));
    }

    #[test]
    fn test_clause_form_variable_disjoint() {
        let formula = forall(
            "x",
            forall(
                "y",
                lit!(P(x, y)).implies(lit!(Q(x)).and(exists("z", lit!(R(y, z))))),
            ),
        );
        let clauses = clause_form(&formula);
        assert_eq!(2, clauses.len());
        for (i, left) in clauses.iter().enumerate() {
            for right in clauses.iter().skip(i + 1) {
                let right_vars = right.free_vars();
                assert!(left.free_vars().iter().all(|v| !right_vars.contains(v)));
            }
        }
    }

    #[test]
    fn test_clause_form_independent_calls() {
        let formula = exists("x", lit!(P(x))).and(exists("y", lit!(Q(y))));
        assert_debug_string!("{{P(sk1)}, {Q(sk2)}}", clause_form(&formula));
        assert_debug_string!("{{P(sk1)}, {Q(sk2)}}", clause_form(&formula));
    }

    #[test]
    fn test_clause_form_shared_generator() {
        let mut generator = NameGenerator::default();
        let formula = exists("x", lit!(P(x)));
        assert_debug_string!(
            "{{P(sk1)}}",
            formula.clause_form_with(&mut generator).unwrap()
        );
        assert_debug_string!(
            "{{P(sk2)}}",
            formula.clause_form_with(&mut generator).unwrap()
        );
    }

    #[test]
    fn test_clause_form_unbound_variable() {
        let result = lit!(P(x)).and(forall("y", lit!(Q(y)))).clause_form();
        assert!(matches!(result, Err(Error::UnboundVariable { .. })));
    }

    #[test]
    fn test_error_message() {
        let error = Error::Precondition {
            stage: "cnf",
            reason: "expecting a quantifier-free formula",
            formula: exists("x", lit!(P(x))),
        };
        assert_eq!(
            "cnf: expecting a quantifier-free formula, found `∃ x. P(x)`",
            error.to_string()
        );
    }
}
