use super::Error;
use crate::syntax::Formula;

/// Discards the universal quantifiers of `formula`, replacing each with its body. The
/// variables of the result are implicitly universally quantified.
///
/// The input is expected to be Skolemized (in negation normal form); an existential or a
/// negated universal quantifier results in [`Error::Precondition`].
///
/// **Example**:
/// ```rust
/// # use razor_clause::{atom, syntax::{forall, exists}};
/// use razor_clause::transform::{discard_universals, ToSkolem};
///
/// let formula = forall("x", exists("y", atom!(R(x, y)).into()));
/// let formula = discard_universals(&formula.skolemize().unwrap()).unwrap();
/// assert_eq!("R(x, sk1(x))", formula.to_string());
/// ```
///
/// [`Error::Precondition`]: crate::transform::Error::Precondition
pub fn discard_universals(formula: &Formula) -> Result<Formula, Error> {
    match formula {
        Formula::Forall(this) if !this.negated => discard_universals(&this.formula),
        Formula::Forall(_) | Formula::Exists(_) => Err(Error::Precondition {
            stage: "discarding universal quantifiers",
            reason: "expecting a Skolemized formula",
            formula: formula.clone(),
        }),
        _ => formula.try_map_children(discard_universals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, lit,
        syntax::{exists, forall},
    };

    #[test]
    fn test_discard_universals() {
        assert_debug_string!("P(x)", discard_universals(&lit!(P(x))).unwrap());
        assert_debug_string!(
            "R(x, y)",
            discard_universals(&forall("x", forall("y", lit!(R(x, y))))).unwrap()
        );
        assert_debug_string!(
            "P(x) ∧ (Q(y) ∨ ¬R(x, y))",
            discard_universals(
                &forall("x", lit!(P(x))).and(forall("y", lit!(Q(y)).or(lit!(~R(x, y)))))
            )
            .unwrap()
        );
    }

    #[test]
    fn test_discard_universals_precondition() {
        assert!(discard_universals(&forall("x", exists("y", lit!(R(x, y))))).is_err());
        assert!(discard_universals(&forall("x", lit!(P(x))).negate()).is_err());
    }
}
