use super::{Atom, V};
use itertools::Itertools;
use std::{cmp::Ordering, collections::BTreeSet, fmt, iter::FromIterator, ops::Deref};

/// A literal is either an [`Atom`] or its negation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Wraps a (positive) [`Atom`].
    Pos(Atom),

    /// Wraps the negation of an [`Atom`].
    Neg(Atom),
}

impl Literal {
    /// Returns the atom of the receiver, regardless of its polarity.
    #[inline(always)]
    pub fn atom(&self) -> &Atom {
        match self {
            Literal::Pos(this) | Literal::Neg(this) => this,
        }
    }

    /// Returns `true` if the receiver is a negative literal.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        matches!(self, Literal::Neg(_))
    }

    /// Consumes the receiver and returns a literal with the same atom and the
    /// opposite polarity.
    pub fn complement(self) -> Self {
        match self {
            Literal::Pos(this) => Literal::Neg(this),
            Literal::Neg(this) => Literal::Pos(this),
        }
    }

    /// Applies `f` on the atom of the receiver, preserving its polarity.
    pub fn map_atom(&self, f: impl FnOnce(&Atom) -> Atom) -> Self {
        match self {
            Literal::Pos(this) => Literal::Pos(f(this)),
            Literal::Neg(this) => Literal::Neg(f(this)),
        }
    }
}

impl From<Atom> for Literal {
    fn from(value: Atom) -> Self {
        Self::Pos(value)
    }
}

// literals are ordered by their atoms first so that complementary literals sit side by side
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atom()
            .cmp(other.atom())
            .then(self.is_negative().cmp(&other.is_negative()))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Pos(this) => write!(f, "{}", this),
            Literal::Neg(this) => write!(f, "¬{}", this),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents a set of [`Literal`]s, interpreted as their disjunction.
///
/// **Note**: the variables of a clause are implicitly universally quantified; two
/// occurrences of the same variable inside one clause denote the same individual.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of [`Literal`]s.
    pub fn into_literals(self) -> BTreeSet<Literal> {
        self.0
    }

    /// Returns a clause containing all literals in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    /// Returns the variables of the receiver, each once.
    pub fn free_vars(&self) -> Vec<&V> {
        self.0
            .iter()
            .flat_map(|l| l.atom().free_vars())
            .unique()
            .collect()
    }
}

impl Deref for Clause {
    type Target = BTreeSet<Literal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Literal> for Clause {
    fn from(value: Literal) -> Self {
        std::iter::once(value).collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Clause {
    type Item = Literal;

    type IntoIter = std::collections::btree_set::IntoIter<Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents an ordered collection of [`Clause`]s, interpreted as their conjunction.
///
/// **Note**: a clause set produced by [`ToClauseForm`] has no variable in common
/// between any two of its clauses.
///
/// [`ToClauseForm`]: crate::transform::ToClauseForm
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ClauseSet(Vec<Clause>);

impl ClauseSet {
    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &[Clause] {
        &self.0
    }

    /// Consumes the receiver and returns its underlying clauses.
    pub fn into_clauses(self) -> Vec<Clause> {
        self.0
    }

    /// Returns the variables of all clauses in the receiver, each once.
    pub fn free_vars(&self) -> Vec<&V> {
        self.0
            .iter()
            .flat_map(|c| c.free_vars())
            .unique()
            .collect()
    }
}

impl Deref for ClauseSet {
    type Target = [Clause];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Clause> for ClauseSet {
    fn from(value: Clause) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;

    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl fmt::Debug for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
