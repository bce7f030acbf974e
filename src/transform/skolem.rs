/*! Implements Skolemization: existential quantifiers are eliminated by replacing their
variables with Skolem terms over the universally quantified variables in scope.
*/
use super::{Error, FreshNames, NameGenerator, TermBased};
use crate::syntax::{Forall, Formula, Term, V};
use std::collections::{BTreeSet, HashMap};

/// Is the trait of types that can be Skolemized.
pub trait ToSkolem {
    /// Is similar to [`ToSkolem::skolemize`] but uses a custom source of fresh names for
    /// Skolem functions and constants.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::{forall, exists}};
    /// use razor_clause::transform::{NameGenerator, ToSkolem};
    ///
    /// let mut generator = NameGenerator::new("v", "f#");
    /// let formula = forall("x", exists("y", atom!(R(x, y)).into()));
    /// let snf = formula.skolemize_with(&mut generator).unwrap();
    ///
    /// assert_eq!("∀ x. R(x, f#1(x))", snf.to_string());
    /// ```
    fn skolemize_with<N: FreshNames>(&self, names: &mut N) -> Result<Formula, Error>;

    /// Replaces every existentially quantified variable of `self` with a term that applies a
    /// fresh Skolem function on the universally quantified variables enclosing the existential
    /// quantifier, in the order of their quantification. If no universal quantifier encloses
    /// the existential quantifier, the Skolem term is a constant.
    ///
    /// Universal quantifiers are retained. The receiver is expected to be in negation normal
    /// form with its bound variables standardized apart.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::{forall, exists}};
    /// use razor_clause::transform::ToSkolem;
    ///
    /// let formula = exists("z", forall("x", exists("y", atom!(R(x, y, z)).into())));
    /// assert_eq!("∀ x. R(x, sk2(x), sk1)", formula.skolemize().unwrap().to_string());
    /// ```
    fn skolemize(&self) -> Result<Formula, Error> {
        self.skolemize_with(&mut NameGenerator::default())
    }
}

impl ToSkolem for Formula {
    fn skolemize_with<N: FreshNames>(&self, names: &mut N) -> Result<Formula, Error> {
        let used = self
            .functions()
            .into_iter()
            .map(|f| f.name().to_string())
            .chain(self.predicates().into_iter().map(|p| p.name().to_string()))
            .collect();
        let mut skolemizer = Skolemizer { names, used };
        skolemizer.formula(self, &HashMap::new(), &[])
    }
}

struct Skolemizer<'n, N: FreshNames> {
    names: &'n mut N,
    // function and predicate names, including the Skolem functions introduced so far
    used: BTreeSet<String>,
}

impl<'n, N: FreshNames> Skolemizer<'n, N> {
    // `skolems` maps existential variables to their Skolem terms and `universals` lists the
    // universal variables on the path from the root; both belong to the current branch only.
    fn formula(
        &mut self,
        formula: &Formula,
        skolems: &HashMap<V, Term>,
        universals: &[V],
    ) -> Result<Formula, Error> {
        match formula {
            Formula::Literal(this) => Ok(this.substitute(skolems).into()),
            Formula::And(this) if !this.negated => {
                formula.try_map_children(|f| self.formula(f, skolems, universals))
            }
            Formula::Or(this) if !this.negated => {
                formula.try_map_children(|f| self.formula(f, skolems, universals))
            }
            Formula::Forall(this) if !this.negated => {
                let mut universals = universals.to_vec();
                universals.push(this.variable.clone());

                let mut skolems = skolems.clone();
                skolems.remove(&this.variable);

                Ok(Forall {
                    variable: this.variable.clone(),
                    formula: self.formula(&this.formula, &skolems, &universals)?,
                    negated: false,
                }
                .into())
            }
            Formula::Exists(this) if !this.negated => {
                let function = self.names.fresh_function(&self.used)?;
                self.used.insert(function.name().to_string());

                let term = function.app(universals.iter().map(Term::from).collect());
                let mut skolems = skolems.clone();
                skolems.insert(this.variable.clone(), term);

                self.formula(&this.formula, &skolems, universals)
            }
            _ => Err(Error::Precondition {
                stage: "skolemization",
                reason: "expecting a formula in negation normal form",
                formula: formula.clone(),
            }),
        }
    }
}
