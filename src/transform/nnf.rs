/*! Implements the transformation of a [`Formula`] to Negation Normal Form (NNF).

The transformation runs in three passes, in a fixed order: bi-implications are eliminated
first, then implications, and finally negation is pushed down to the atoms. Each pass assumes
the node kinds removed by the earlier passes are already gone.

[`Formula`]: crate::syntax::Formula
*/
use crate::syntax::{And, Formula, Iff, Or};

/// Is the trait of types that can be transformed to Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a formula where negation is applied only to its atomic sub-formulae
/// and that contains no implications or bi-implications.
pub trait ToNnf {
    /// Transforms `self` to a Negation Normal Form (NNF).
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::{Formula, not}};
    /// use razor_clause::transform::ToNnf;
    ///
    /// let formula = not(Formula::from(atom!(P(x))).iff(atom!(Q(y)).into()));
    /// assert_eq!("(P(x) ∧ ¬Q(y)) ∨ (Q(y) ∧ ¬P(x))", formula.nnf().to_string());
    /// ```
    fn nnf(&self) -> Formula;
}

impl ToNnf for Formula {
    fn nnf(&self) -> Formula {
        push_negation(&eliminate_implies(&eliminate_iff(self)))
    }
}

/// Replaces every bi-implication `A ⇔ B` in `formula` with `(A → B) ∧ (B → A)`, preserving
/// the polarity of the bi-implication on the resulting conjunction.
pub fn eliminate_iff(formula: &Formula) -> Formula {
    match formula {
        Formula::Iff(this) => {
            let (forward, backward) =
                Iff::new(eliminate_iff(&this.left), eliminate_iff(&this.right)).implications();
            And {
                formulae: vec![forward.into(), backward.into()],
                negated: this.negated,
            }
            .into()
        }
        _ => formula.map_children(eliminate_iff),
    }
}

/// Replaces every implication `A → B` in `formula` with `¬A ∨ B`, preserving the polarity of
/// the implication on the resulting disjunction.
///
/// **Note**: `formula` is expected to contain no bi-implications.
pub fn eliminate_implies(formula: &Formula) -> Formula {
    match formula {
        Formula::Implies(this) => Or {
            formulae: vec![
                eliminate_implies(&this.premise).negate(),
                eliminate_implies(&this.consequence),
            ],
            negated: this.negated,
        }
        .into(),
        _ => formula.map_children(eliminate_implies),
    }
}

/// Pushes negation in `formula` down to its atoms by replacing every negated connective and
/// quantifier with its dual (see [`Formula::flip`]).
///
/// **Note**: `formula` is expected to contain no implications or bi-implications.
///
/// [`Formula::flip`]: crate::syntax::Formula::flip
pub fn push_negation(formula: &Formula) -> Formula {
    match formula {
        Formula::Literal(_) => formula.clone(),
        _ if formula.is_negated() => formula.clone().flip().map_children(push_negation),
        _ => formula.map_children(push_negation),
    }
}
