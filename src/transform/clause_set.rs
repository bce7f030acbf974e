/*! Implements extracting clauses from a formula in CNF and standardizing the variables of a
set of clauses apart.
*/
use super::{Error, FreshNames, NameGenerator, TermBased};
use crate::syntax::{Clause, ClauseSet, Formula, Literal, V};
use std::collections::{BTreeSet, HashMap};

/// Converts a formula in conjunctive normal form to a set of clauses, one for every
/// conjunct of the root conjunction. A literal conjunct becomes a singleton clause and a
/// disjunction of literals becomes a clause of its literals. A root literal or disjunction
/// is treated as a single conjunct.
///
/// Any other shape results in [`Error::Precondition`].
///
/// **Example**:
/// ```rust
/// # use razor_clause::{atom, syntax::{Formula, Literal}};
/// use razor_clause::transform::to_clauses;
///
/// // (¬P(x) ∨ Q(x)) ∧ R(y)
/// let formula = Formula::from(Literal::Neg(atom!(P(x))))
///     .or(atom!(Q(x)).into())
///     .and(atom!(R(y)).into());
/// assert_eq!("{{¬P(x), Q(x)}, {R(y)}}", to_clauses(&formula).unwrap().to_string());
/// ```
///
/// [`Error::Precondition`]: crate::transform::Error::Precondition
pub fn to_clauses(formula: &Formula) -> Result<ClauseSet, Error> {
    match formula {
        Formula::And(this) if !this.negated => this.formulae.iter().map(clause).collect(),
        _ => clause(formula).map(ClauseSet::from),
    }
}

fn clause(formula: &Formula) -> Result<Clause, Error> {
    match formula {
        Formula::Literal(this) => Ok(this.clone().into()),
        Formula::Or(this) if !this.negated => this.formulae.iter().map(literal).collect(),
        _ => Err(precondition(formula)),
    }
}

fn literal(formula: &Formula) -> Result<Literal, Error> {
    match formula {
        Formula::Literal(this) => Ok(this.clone()),
        _ => Err(precondition(formula)),
    }
}

fn precondition(formula: &Formula) -> Error {
    Error::Precondition {
        stage: "clause extraction",
        reason: "expecting a formula in conjunctive normal form",
        formula: formula.clone(),
    }
}

/// Renames the variables of `clauses` such that no two clauses share a variable. Clauses are
/// visited in order and a variable is renamed only in a clause where it collides with a
/// variable of an earlier clause; variables shared by the literals of one clause remain
/// shared.
///
/// **Example**:
/// ```rust
/// # use razor_clause::{atom, syntax::{Clause, ClauseSet, Literal}};
/// use razor_clause::transform::standardize_clauses;
///
/// let clauses: ClauseSet = vec![
///     Clause::from(Literal::Pos(atom!(P(x)))),
///     vec![Literal::Neg(atom!(P(x))), Literal::Pos(atom!(Q(x, y)))].into_iter().collect(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(
///     "{{P(x)}, {¬P(v1), Q(v1, y)}}",
///     standardize_clauses(&clauses).unwrap().to_string(),
/// );
/// ```
pub fn standardize_clauses(clauses: &ClauseSet) -> Result<ClauseSet, Error> {
    standardize_clauses_with(clauses, &mut NameGenerator::default())
}

/// Is similar to [`standardize_clauses`] but uses a custom source of fresh variable names.
pub fn standardize_clauses_with<N: FreshNames>(
    clauses: &ClauseSet,
    names: &mut N,
) -> Result<ClauseSet, Error> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut result = Vec::new();

    for clause in clauses.iter() {
        let vars: Vec<&V> = clause.free_vars();
        let mut avoid: BTreeSet<String> = used.clone();
        avoid.extend(vars.iter().map(|v| v.name().to_string()));

        let mut renaming: HashMap<V, V> = HashMap::new();
        for var in vars.into_iter().filter(|v| used.contains(v.name())) {
            let fresh = names.fresh_variable(&avoid)?;
            avoid.insert(fresh.name().to_string());
            renaming.insert(var.clone(), fresh);
        }

        let clause = if renaming.is_empty() {
            clause.clone()
        } else {
            clause.rename_vars(&renaming)
        };
        used.extend(clause.free_vars().into_iter().map(|v| v.name().to_string()));
        result.push(clause);
    }

    Ok(result.into_iter().collect())
}
