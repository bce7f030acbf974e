/*! Provides the syntactic machinery for converting first-order formulae to clause form and for
computing the most general unifier of first-order terms.

A formula is taken through a fixed pipeline of rewrites (see [`transform`]): biconditional and
implication elimination, negation normal form, standardizing bound variables apart,
Skolemization, dropping universal quantifiers, distributing disjunction over conjunction and
finally extracting a set of variable-disjoint clauses. The [`unify`] module is independent of
the pipeline and operates on the terms and atoms of [`syntax`].

[`transform`]: crate::transform
[`unify`]: crate::unify
[`syntax`]: crate::syntax
*/
#[macro_use]
extern crate tracing;

pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod transform;
pub mod unify;
