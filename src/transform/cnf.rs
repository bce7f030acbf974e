/*! Implements the transformation of a quantifier-free formula in negation normal form to
Conjunctive Normal Form (CNF) by distributing disjunction over conjunction.
*/
use super::Error;
use crate::syntax::{And, Formula, Or};

/// Is the trait of types that can be transformed to Conjunctive Normal Form (CNF).
///
/// **Hint**: A CNF is a conjunction of clauses, where every clause is a disjunction of
/// literals.
pub trait ToCnf {
    /// Transforms `self` to a CNF. The root of the result is always a conjunction whose
    /// children are literals or disjunctions of literals.
    ///
    /// The receiver must be quantifier-free and in negation normal form; otherwise
    /// [`Error::Precondition`] is returned.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::Formula};
    /// use razor_clause::transform::ToCnf;
    ///
    /// // P(x) ∨ (Q(x) ∧ R(x))
    /// let formula = Formula::from(atom!(P(x)))
    ///     .or(Formula::from(atom!(Q(x))).and(atom!(R(x)).into()));
    /// assert_eq!("(Q(x) ∨ P(x)) ∧ (R(x) ∨ P(x))", formula.cnf().unwrap().to_string());
    /// ```
    ///
    /// [`Error::Precondition`]: crate::transform::Error::Precondition
    fn cnf(&self) -> Result<Formula, Error>;
}

impl ToCnf for Formula {
    fn cnf(&self) -> Result<Formula, Error> {
        check_input(self)?;

        let mut formula = merge(self);
        loop {
            let next = merge(&distribute(&formula));
            if next == formula {
                break;
            }
            formula = next;
        }

        Ok(match formula {
            Formula::And(_) => formula,
            _ => And::new(vec![formula]).into(),
        })
    }
}

fn check_input(formula: &Formula) -> Result<(), Error> {
    let reason = match formula {
        Formula::Literal(_) => return Ok(()),
        Formula::And(this) if !this.negated => None,
        Formula::Or(this) if !this.negated => None,
        Formula::And(_) | Formula::Or(_) => Some("expecting a formula in negation normal form"),
        Formula::Implies(_) | Formula::Iff(_) => {
            Some("expecting a formula without implications")
        }
        Formula::Forall(_) | Formula::Exists(_) => Some("expecting a quantifier-free formula"),
    };
    match reason {
        Some(reason) => Err(Error::Precondition {
            stage: "cnf",
            reason,
            formula: formula.clone(),
        }),
        None => formula.children().into_iter().try_for_each(check_input),
    }
}

// Flattens nested conjunctions into their parent conjunction and nested disjunctions into
// their parent disjunction.
fn merge(formula: &Formula) -> Formula {
    match formula {
        Formula::And(this) => {
            let mut formulae = Vec::new();
            for child in this.formulae.iter().map(merge) {
                match child {
                    Formula::And(and) => formulae.extend(and.formulae),
                    _ => formulae.push(child),
                }
            }
            And::new(formulae).into()
        }
        Formula::Or(this) => {
            let mut formulae = Vec::new();
            for child in this.formulae.iter().map(merge) {
                match child {
                    Formula::Or(or) => formulae.extend(or.formulae),
                    _ => formulae.push(child),
                }
            }
            Or::new(formulae).into()
        }
        _ => formula.clone(),
    }
}

// Distributes every disjunction over its first conjunctive child:
// `A ∨ (B ∧ C) ∨ D` becomes `(B ∨ A ∨ D) ∧ (C ∨ A ∨ D)`.
fn distribute(formula: &Formula) -> Formula {
    match formula {
        Formula::Or(this) => {
            let mut rest: Vec<Formula> = this.formulae.iter().map(distribute).collect();
            let position = rest.iter().position(|f| matches!(f, Formula::And(_)));
            match position.map(|i| rest.remove(i)) {
                Some(Formula::And(and)) => And::new(
                    and.formulae
                        .into_iter()
                        .map(|conjunct| {
                            let mut formulae = vec![conjunct];
                            formulae.extend(rest.iter().cloned());
                            distribute(&Or::new(formulae).into())
                        })
                        .collect(),
                )
                .into(),
                Some(_) | None => Or::new(rest).into(),
            }
        }
        _ => formula.map_children(distribute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, lit,
        syntax::{exists, forall},
    };

    fn cnf(formula: &Formula) -> Formula {
        formula.cnf().unwrap()
    }

    fn is_literal(formula: &Formula) -> bool {
        matches!(formula, Formula::Literal(_))
    }

    fn assert_cnf_shape(formula: &Formula) {
        if let Formula::And(this) = formula {
            for conjunct in &this.formulae {
                match conjunct {
                    Formula::Literal(_) => {}
                    Formula::Or(or) => assert!(or.formulae.iter().all(is_literal)),
                    _ => panic!("unexpected conjunct: {}", conjunct),
                }
            }
        } else {
            panic!("expecting a conjunction: {}", formula)
        }
    }

    #[test]
    fn test_cnf() {
        assert_debug_string!("P(x)", cnf(&lit!(P(x))));
        assert_debug_string!("P(x) ∧ ¬Q(y)", cnf(&lit!(P(x)).and(lit!(~Q(y)))));
        assert_debug_string!("(P(x) ∨ Q(y))", cnf(&lit!(P(x)).or(lit!(Q(y)))));
        assert_debug_string!(
            "(Q(x) ∨ P(x)) ∧ (R(x) ∨ P(x))",
            cnf(&lit!(P(x)).or(lit!(Q(x)).and(lit!(R(x)))))
        );
        assert_debug_string!(
            "P(x) ∧ Q(x) ∧ R(x)",
            cnf(&lit!(P(x)).and(lit!(Q(x)).and(lit!(R(x)))))
        );
        assert_debug_string!(
            "(P(x) ∨ Q(x) ∨ R(x))",
            cnf(&lit!(P(x)).or(lit!(Q(x))).or(lit!(R(x))))
        );
    }

    #[test]
    fn test_cnf_root_is_conjunction() {
        assert!(matches!(cnf(&lit!(P(x))), Formula::And(_)));
        assert!(matches!(cnf(&lit!(P(x)).or(lit!(Q(x)))), Formula::And(_)));
    }

    #[test]
    fn test_cnf_multiple_conjunctions() {
        // (P ∧ Q) ∨ (R ∧ S)
        let formula = lit!(P()).and(lit!(Q())).or(lit!(R()).and(lit!(S())));
        let result = cnf(&formula);
        assert_debug_string!("(R ∨ P) ∧ (S ∨ P) ∧ (R ∨ Q) ∧ (S ∨ Q)", result);
        assert_cnf_shape(&result);
    }

    #[test]
    fn test_cnf_nested() {
        // P ∨ (Q ∧ (R ∨ (S ∧ T)))
        let formula = lit!(P())
            .or(lit!(Q()).and(lit!(R()).or(lit!(S()).and(lit!(T())))));
        let result = cnf(&formula);
        assert_debug_string!("(Q ∨ P) ∧ (S ∨ R ∨ P) ∧ (T ∨ R ∨ P)", result);
        assert_cnf_shape(&result);

        let formula = lit!(P()).and(lit!(Q())).or(lit!(R()).and(lit!(S())))
            .or(lit!(T()).and(lit!(U())));
        assert_cnf_shape(&cnf(&formula));
    }

    #[test]
    fn test_cnf_precondition() {
        assert!(forall("x", lit!(P(x))).cnf().is_err());
        assert!(lit!(P(x)).and(exists("x", lit!(Q(x)))).cnf().is_err());
        assert!(lit!(P(x)).implies(lit!(Q(x))).cnf().is_err());
        assert!(lit!(P(x)).and(lit!(Q(x))).negate().cnf().is_err());
    }
}
