/*! Names of the spans and events that the transformations and the unifier log
through [`tracing`].

Every event carries an `event` field with one of the names below. No subscriber is installed
by this crate.

[`tracing`]: https://docs.rs/tracing
*/

// log span types:
/// Inside a conversion to clause form.
pub const CLAUSE_FORM: &str = "@clause_form";

// log event types:
/// Bi-implications are eliminated.
pub const ELIMINATE_IFF: &str = "@eliminate_iff";

/// Implications are eliminated.
pub const ELIMINATE_IMPLIES: &str = "@eliminate_implies";

/// Negation is pushed down to the atoms.
pub const PUSH_NEGATION: &str = "@push_negation";

/// Bound variables are standardized apart.
pub const STANDARDIZE: &str = "@standardize_apart";

/// Existential quantifiers are replaced by Skolem terms.
pub const SKOLEMIZE: &str = "@skolemize";

/// Universal quantifiers are discarded.
pub const DISCARD_UNIVERSALS: &str = "@discard_universals";

/// The quantifier-free formula is in conjunctive normal form.
pub const CNF: &str = "@cnf";

/// Clauses are extracted from the CNF.
pub const CLAUSES: &str = "@clauses";

/// Variables of the clause set are standardized apart.
pub const STANDARDIZE_CLAUSES: &str = "@standardize_clauses";

/// A variable is bound by the unifier.
pub const BIND: &str = "@bind";

/// Unification failed.
pub const FAIL: &str = "@fail";
