/*! Defines an abstract syntax tree (AST) for first-order terms, formulae and clauses. */

mod clause;
mod formula;
mod macros;
mod symbol;
mod term;

pub use clause::{Clause, ClauseSet, Literal};
pub use formula::{exists, forall, not, And, Atom, Exists, Forall, Formula, Iff, Implies, Or};
pub use symbol::{Pred, F, V};
pub use term::Term;
