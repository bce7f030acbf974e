/*! Defines first-order formulae as a closed sum type over atoms, connectives, implications,
bi-implications and quantifiers.

Negation is not a node of its own: every connective and quantifier carries a `negated` flag and
an atomic formula is wrapped in a positive or negative [`Literal`]. This lets negation be pushed
through a node by flipping it to its dual (De Morgan), see [`Formula::flip`].

[`Literal`]: crate::syntax::Literal
[`Formula::flip`]: crate::syntax::Formula::flip
*/
use super::{Literal, Pred, Term, F, V};
use itertools::Itertools;
use std::fmt;

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    pub(crate) predicate: Pred,
    pub(crate) terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the variables of the receiver, each once, in order of first occurrence.
    pub fn free_vars(&self) -> Vec<&V> {
        self.terms
            .iter()
            .flat_map(|t| t.free_vars())
            .unique()
            .collect()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "{}({})", self.predicate, self.terms.iter().join(", "))
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents the conjunction of a list of formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct And {
    pub(crate) formulae: Vec<Formula>,
    pub(crate) negated: bool,
}

impl And {
    /// Returns the (positive) conjunction of `formulae`.
    pub fn new(formulae: Vec<Formula>) -> Self {
        Self {
            formulae,
            negated: false,
        }
    }

    /// Returns the conjuncts of the receiver.
    #[inline(always)]
    pub fn formulae(&self) -> &[Formula] {
        &self.formulae
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Represents the disjunction of a list of formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Or {
    pub(crate) formulae: Vec<Formula>,
    pub(crate) negated: bool,
}

impl Or {
    /// Returns the (positive) disjunction of `formulae`.
    pub fn new(formulae: Vec<Formula>) -> Self {
        Self {
            formulae,
            negated: false,
        }
    }

    /// Returns the disjuncts of the receiver.
    #[inline(always)]
    pub fn formulae(&self) -> &[Formula] {
        &self.formulae
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Implies {
    pub(crate) premise: Formula,
    pub(crate) consequence: Formula,
    pub(crate) negated: bool,
}

impl Implies {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: Formula, consequence: Formula) -> Self {
        Self {
            premise,
            consequence,
            negated: false,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &Formula {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &Formula {
        &self.consequence
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Iff {
    pub(crate) left: Formula,
    pub(crate) right: Formula,
    pub(crate) negated: bool,
}

impl Iff {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: Formula, right: Formula) -> Self {
        Self {
            left,
            right,
            negated: false,
        }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Formula {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Formula {
        &self.right
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns the pair of implications `left → right` and `right → left` that the receiver
    /// is equivalent to.
    pub fn implications(&self) -> (Implies, Implies) {
        (
            Implies::new(self.left.clone(), self.right.clone()),
            Implies::new(self.right.clone(), self.left.clone()),
        )
    }
}

/// Represents a universally quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Forall {
    pub(crate) variable: V,
    pub(crate) formula: Formula,
    pub(crate) negated: bool,
}

impl Forall {
    /// Returns a universally quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: Formula) -> Self {
        Self {
            variable,
            formula,
            negated: false,
        }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Represents an existentially quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Exists {
    pub(crate) variable: V,
    pub(crate) formula: Formula,
    pub(crate) negated: bool,
}

impl Exists {
    /// Returns an existentially quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: Formula) -> Self {
        Self {
            variable,
            formula,
            negated: false,
        }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Returns `true` if the receiver is negated.
    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Is an abstract syntax tree (AST) for first-order formulae.
///
/// **Note**: [`Implies`] and [`Iff`] are intermediate forms; they are eliminated when the
/// formula is transformed to negation normal form.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// Is an atomic formula with a fixed polarity.
    Literal(Literal),

    /// Is a conjunction of formulae, wrapping an [`And`].
    And(And),

    /// Is a disjunction of formulae, wrapping an [`Or`].
    Or(Or),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies>),

    /// Is a bi-implication between two formulae, wrapping an [`Iff`].
    Iff(Box<Iff>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall>),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists>),
}

impl From<Atom> for Formula {
    fn from(value: Atom) -> Self {
        Self::Literal(Literal::Pos(value))
    }
}

impl From<Literal> for Formula {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<And> for Formula {
    fn from(value: And) -> Self {
        Self::And(value)
    }
}

impl From<Or> for Formula {
    fn from(value: Or) -> Self {
        Self::Or(value)
    }
}

impl From<Implies> for Formula {
    fn from(value: Implies) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff> for Formula {
    fn from(value: Iff) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Forall> for Formula {
    fn from(value: Forall) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl From<Exists> for Formula {
    fn from(value: Exists) -> Self {
        Self::Exists(Box::new(value))
    }
}

/// Returns a universally quantified formula with the given bound variable and body.
pub fn forall<S: Into<V>>(variable: S, formula: Formula) -> Formula {
    Forall::new(variable.into(), formula).into()
}

/// Returns an existentially quantified formula with the given bound variable and body.
pub fn exists<S: Into<V>>(variable: S, formula: Formula) -> Formula {
    Exists::new(variable.into(), formula).into()
}

/// Returns the negation of `formula`.
pub fn not(formula: Formula) -> Formula {
    formula.negate()
}

impl Formula {
    /// Returns the conjunction of the receiver and `formula`.
    pub fn and(self, formula: Self) -> Self {
        And::new(vec![self, formula]).into()
    }

    /// Returns the disjunction of the receiver and `formula`.
    pub fn or(self, formula: Self) -> Self {
        Or::new(vec![self, formula]).into()
    }

    /// Returns an implication with the receiver as premise and `formula` as consequence.
    pub fn implies(self, formula: Self) -> Self {
        Implies::new(self, formula).into()
    }

    /// Returns a bi-implication between the receiver and `formula`.
    pub fn iff(self, formula: Self) -> Self {
        Iff::new(self, formula).into()
    }

    /// Returns `true` if the root of the receiver is negated.
    pub fn is_negated(&self) -> bool {
        match self {
            Self::Literal(this) => this.is_negative(),
            Self::And(this) => this.negated,
            Self::Or(this) => this.negated,
            Self::Implies(this) => this.negated,
            Self::Iff(this) => this.negated,
            Self::Forall(this) => this.negated,
            Self::Exists(this) => this.negated,
        }
    }

    /// Toggles the polarity of the root of the receiver, leaving its children untouched.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::Formula};
    /// let formula = Formula::from(atom!(P(x))).and(atom!(Q(y)).into());
    /// assert_eq!("¬(P(x) ∧ Q(y))", formula.clone().negate().to_string());
    /// assert_eq!(formula, formula.clone().negate().negate());
    /// ```
    pub fn negate(self) -> Self {
        match self {
            Self::Literal(this) => Self::Literal(this.complement()),
            Self::And(mut this) => {
                this.negated = !this.negated;
                Self::And(this)
            }
            Self::Or(mut this) => {
                this.negated = !this.negated;
                Self::Or(this)
            }
            Self::Implies(mut this) => {
                this.negated = !this.negated;
                Self::Implies(this)
            }
            Self::Iff(mut this) => {
                this.negated = !this.negated;
                Self::Iff(this)
            }
            Self::Forall(mut this) => {
                this.negated = !this.negated;
                Self::Forall(this)
            }
            Self::Exists(mut this) => {
                this.negated = !this.negated;
                Self::Exists(this)
            }
        }
    }

    /// Replaces a connective or quantifier with its dual (De Morgan), toggling the polarity of
    /// the node and of every immediate child. The result is equivalent to the receiver; in
    /// particular, a negated node becomes a positive node with negated children.
    ///
    /// Literals, implications and bi-implications have no dual and are returned unchanged.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, syntax::{Formula, forall}};
    /// let formula = Formula::from(atom!(P(x))).and(atom!(Q(y)).into()).negate();
    /// assert_eq!("¬P(x) ∨ ¬Q(y)", formula.flip().to_string());
    ///
    /// let formula = forall("x", atom!(P(x)).into()).negate();
    /// assert_eq!("∃ x. ¬P(x)", formula.flip().to_string());
    /// ```
    pub fn flip(self) -> Self {
        match self {
            Self::And(this) => Self::Or(Or {
                formulae: this.formulae.into_iter().map(Self::negate).collect(),
                negated: !this.negated,
            }),
            Self::Or(this) => Self::And(And {
                formulae: this.formulae.into_iter().map(Self::negate).collect(),
                negated: !this.negated,
            }),
            Self::Forall(this) => {
                let this = *this;
                Exists {
                    variable: this.variable,
                    formula: this.formula.negate(),
                    negated: !this.negated,
                }
                .into()
            }
            Self::Exists(this) => {
                let this = *this;
                Forall {
                    variable: this.variable,
                    formula: this.formula.negate(),
                    negated: !this.negated,
                }
                .into()
            }
            Self::Literal(_) | Self::Implies(_) | Self::Iff(_) => self,
        }
    }

    /// Returns the immediate sub-formulae of the receiver, from left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Self::Literal(_) => Vec::new(),
            Self::And(this) => this.formulae.iter().collect(),
            Self::Or(this) => this.formulae.iter().collect(),
            Self::Implies(this) => vec![&this.premise, &this.consequence],
            Self::Iff(this) => vec![&this.left, &this.right],
            Self::Forall(this) => vec![&this.formula],
            Self::Exists(this) => vec![&this.formula],
        }
    }

    /// Returns a new formula of the same kind and polarity as the receiver, with `f` applied
    /// on its immediate sub-formulae. Bound variables and atoms are kept as they are.
    pub fn map_children(&self, mut f: impl FnMut(&Formula) -> Formula) -> Self {
        let result: Result<_, std::convert::Infallible> = self.try_map_children(|c| Ok(f(c)));
        match result {
            Ok(formula) => formula,
            Err(never) => match never {},
        }
    }

    /// Is similar to [`Formula::map_children`] but `f` may fail, in which case the first
    /// error is returned.
    pub fn try_map_children<E>(
        &self,
        mut f: impl FnMut(&Formula) -> Result<Formula, E>,
    ) -> Result<Self, E> {
        let formula = match self {
            Self::Literal(_) => self.clone(),
            Self::And(this) => Self::And(And {
                formulae: this.formulae.iter().map(&mut f).collect::<Result<_, _>>()?,
                negated: this.negated,
            }),
            Self::Or(this) => Self::Or(Or {
                formulae: this.formulae.iter().map(&mut f).collect::<Result<_, _>>()?,
                negated: this.negated,
            }),
            Self::Implies(this) => Implies {
                premise: f(&this.premise)?,
                consequence: f(&this.consequence)?,
                negated: this.negated,
            }
            .into(),
            Self::Iff(this) => Iff {
                left: f(&this.left)?,
                right: f(&this.right)?,
                negated: this.negated,
            }
            .into(),
            Self::Forall(this) => Forall {
                variable: this.variable.clone(),
                formula: f(&this.formula)?,
                negated: this.negated,
            }
            .into(),
            Self::Exists(this) => Exists {
                variable: this.variable.clone(),
                formula: f(&this.formula)?,
                negated: this.negated,
            }
            .into(),
        };
        Ok(formula)
    }

    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_clause::{atom, v, syntax::{Formula, exists}};
    /// // ∃ x. P(x, y) ∧ Q(z)
    /// let formula = exists("x", atom!(P(x, y)).into()).and(atom!(Q(z)).into());
    /// assert_eq!(vec![&v!(y), &v!(z)], formula.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Literal(this) => this.atom().free_vars(),
            Self::Forall(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| *v != &this.variable)
                .collect(),
            Self::Exists(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| *v != &this.variable)
                .collect(),
            _ => self
                .children()
                .into_iter()
                .flat_map(|f| f.free_vars())
                .unique()
                .collect(),
        }
    }

    /// Returns every variable symbol of the receiver, bound or free, including the variables
    /// of quantifiers that do not occur in their bodies.
    pub fn variables(&self) -> Vec<&V> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.into_iter().unique().collect()
    }

    fn collect_variables<'a>(&'a self, vars: &mut Vec<&'a V>) {
        match self {
            Self::Literal(this) => vars.extend(this.atom().free_vars()),
            Self::Forall(this) => vars.push(&this.variable),
            Self::Exists(this) => vars.push(&this.variable),
            _ => {}
        }
        self.children()
            .into_iter()
            .for_each(|f| f.collect_variables(vars));
    }

    /// Returns the bound variables of every quantifier in the receiver, in pre-order.
    ///
    /// **Note**: duplicates are retained; after standardizing the formula apart, the list
    /// contains no duplicates.
    pub fn bound_variables(&self) -> Vec<&V> {
        let mut vars = Vec::new();
        match self {
            Self::Forall(this) => vars.push(&this.variable),
            Self::Exists(this) => vars.push(&this.variable),
            _ => {}
        }
        vars.extend(self.children().into_iter().flat_map(|f| f.bound_variables()));
        vars
    }

    /// Returns the function symbols (including constants) applied anywhere in the receiver.
    pub fn functions(&self) -> Vec<&F> {
        match self {
            Self::Literal(this) => this
                .atom()
                .terms()
                .iter()
                .flat_map(|t| t.functions())
                .unique()
                .collect(),
            _ => self
                .children()
                .into_iter()
                .flat_map(|f| f.functions())
                .unique()
                .collect(),
        }
    }

    /// Returns the predicate symbols applied anywhere in the receiver.
    pub fn predicates(&self) -> Vec<&Pred> {
        match self {
            Self::Literal(this) => vec![this.atom().predicate()],
            _ => self
                .children()
                .into_iter()
                .flat_map(|f| f.predicates())
                .unique()
                .collect(),
        }
    }

    // Returns `true` if the receiver must be wrapped in parentheses as an operand.
    #[inline]
    fn is_compound(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Forall(_) | Self::Exists(_) => true,
            _ => !self.is_negated(),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter, formula: &Formula) -> fmt::Result {
    if formula.is_compound() {
        write!(f, "({})", formula)
    } else {
        write!(f, "{}", formula)
    }
}

fn write_joined(f: &mut fmt::Formatter, formulae: &[Formula], op: &str) -> fmt::Result {
    for (i, formula) in formulae.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", op)?;
        }
        write_operand(f, formula)?;
    }
    Ok(())
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(this) => write!(f, "{}", this),
            // a negated node is written as the negation of its positive counterpart
            _ if self.is_negated() => match self.clone().negate() {
                positive @ Self::Forall(_) | positive @ Self::Exists(_) => write!(f, "¬{}", positive),
                positive => write!(f, "¬({})", positive),
            },
            Self::And(this) if this.formulae.is_empty() => write!(f, "⊤"),
            Self::And(this) => write_joined(f, &this.formulae, "∧"),
            Self::Or(this) if this.formulae.is_empty() => write!(f, "⊥"),
            Self::Or(this) => write_joined(f, &this.formulae, "∨"),
            Self::Implies(this) => {
                write_operand(f, &this.premise)?;
                write!(f, " → ")?;
                write_operand(f, &this.consequence)
            }
            Self::Iff(this) => {
                write_operand(f, &this.left)?;
                write!(f, " ⇔ ")?;
                write_operand(f, &this.right)
            }
            Self::Forall(this) => {
                write!(f, "∀ {}. ", this.variable)?;
                write_operand(f, &this.formula)
            }
            Self::Exists(this) => {
                write!(f, "∃ {}. ", this.variable)?;
                write_operand(f, &this.formula)
            }
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_eq_sorted_vecs, f, lit, pred, v};

    #[test]
    fn test_formula_to_string() {
        assert_debug_string!("P(x)", lit!(P(x)));
        assert_debug_string!("¬P(x)", lit!(~P(x)));
        assert_debug_string!("P", lit!(P()));
        assert_debug_string!("P(x) ∧ Q(y)", lit!(P(x)).and(lit!(Q(y))));
        assert_debug_string!("P(x) ∨ ¬Q(y)", lit!(P(x)).or(lit!(~Q(y))));
        assert_debug_string!("P(x) → Q(y)", lit!(P(x)).implies(lit!(Q(y))));
        assert_debug_string!("P(x) ⇔ Q(y)", lit!(P(x)).iff(lit!(Q(y))));
        assert_debug_string!(
            "∀ x. (∃ y. R(x, y))",
            forall("x", exists("y", lit!(R(x, y))))
        );
        assert_debug_string!(
            "¬(P(x) ∧ (Q(x) ∨ R(x)))",
            not(lit!(P(x)).and(lit!(Q(x)).or(lit!(R(x)))))
        );
        assert_debug_string!("¬∀ x. P(x)", not(forall("x", lit!(P(x)))));
        assert_debug_string!("⊤", Formula::from(And::new(vec![])));
        assert_debug_string!("⊥", Formula::from(Or::new(vec![])));
    }

    #[test]
    fn test_negate() {
        assert_eq!(lit!(~P(x)), lit!(P(x)).negate());
        assert_eq!(lit!(P(x)), lit!(~P(x)).negate());
        let formula = lit!(P(x)).and(lit!(Q(x)));
        assert!(!formula.is_negated());
        assert!(formula.clone().negate().is_negated());
        assert_eq!(formula, formula.clone().negate().negate());
    }

    #[test]
    fn test_flip() {
        assert_debug_string!(
            "¬P(x) ∧ Q(y)",
            not(lit!(P(x)).or(lit!(~Q(y)))).flip()
        );
        assert_debug_string!(
            "∀ x. ¬P(x)",
            not(exists("x", lit!(P(x)))).flip()
        );
        // a positive node flips to a negated dual
        assert_debug_string!("¬(¬P(x) ∨ ¬Q(y))", lit!(P(x)).and(lit!(Q(y))).flip());
        assert_eq!(lit!(P(x)), lit!(P(x)).flip());
        {
            let formula = not(lit!(P(x)).implies(lit!(Q(x))));
            assert_eq!(formula.clone(), formula.flip());
        }
    }

    #[test]
    fn test_free_vars() {
        assert_eq!(Vec::<&V>::new(), lit!(P(@a)).free_vars());
        assert_eq!(
            Vec::<&V>::new(),
            forall("x", lit!(P(x)).implies(lit!(Q(x)))).free_vars()
        );
        assert_eq_sorted_vecs!(
            vec![&v!(y), &v!(z)],
            forall("x", lit!(P(x, y))).and(exists("y", lit!(Q(y, z)))).free_vars()
        );
        assert_eq_sorted_vecs!(
            vec![&v!(x), &v!(y)],
            lit!(P(x)).iff(lit!(~Q(f(y), x))).free_vars()
        );
    }

    #[test]
    fn test_variables() {
        let formula = forall("x", exists("w", lit!(P(x, y))));
        assert_eq_sorted_vecs!(vec![&v!(w), &v!(x), &v!(y)], formula.variables());
    }

    #[test]
    fn test_bound_variables() {
        let formula = forall("x", lit!(P(x))).or(forall("x", exists("y", lit!(Q(x, y)))));
        assert_eq!(vec![&v!(x), &v!(x), &v!(y)], formula.bound_variables());
    }

    #[test]
    fn test_symbols() {
        let formula = forall("x", lit!(P(f(x), @c)).and(lit!(~Q(g(x)))));
        assert_eq_sorted_vecs!(vec![&f!(c), &f!(f), &f!(g)], formula.functions());
        assert_eq_sorted_vecs!(vec![&pred!(P), &pred!(Q)], formula.predicates());
    }

    #[test]
    fn test_implications() {
        let iff = Iff::new(lit!(P(x)), lit!(Q(x)));
        let (left, right) = iff.implications();
        assert_debug_string!("P(x) → Q(x)", Formula::from(left));
        assert_debug_string!("Q(x) → P(x)", Formula::from(right));
    }

    #[test]
    fn test_map_children() {
        let swap = |f: &Formula| match f {
            Formula::Literal(l) if l.atom().predicate() == &pred!(P) => lit!(R(x)),
            _ => f.clone(),
        };
        assert_debug_string!("P(x)", lit!(P(x)).map_children(swap));
        assert_debug_string!(
            "¬(R(x) ∨ Q(x))",
            not(lit!(P(x)).or(lit!(Q(x)))).map_children(swap)
        );
        assert_debug_string!(
            "∀ x. (R(x) → Q(x))",
            forall("x", lit!(P(x)).implies(lit!(Q(x)))).map_children(|f| f.map_children(swap))
        );

        let failing = lit!(P(x))
            .and(lit!(Q(x)))
            .try_map_children(|f| match f {
                Formula::Literal(l) if l.atom().predicate() == &pred!(Q) => Err(v!(q)),
                _ => Ok(f.clone()),
            });
        assert_eq!(Err(v!(q)), failing);
    }
}
