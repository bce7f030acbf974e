/*! Provides fresh variable and function names for the transformations that rename bound
variables or introduce Skolem functions. */
use super::Error;
use crate::syntax::{F, V};
use std::collections::BTreeSet;

/// Is the trait of name sources that produce names disjoint from a given set of used names.
pub trait FreshNames {
    /// Returns a variable symbol whose name is not in `used`.
    fn fresh_variable(&mut self, used: &BTreeSet<String>) -> Result<V, Error>;

    /// Returns a function (or constant) symbol whose name is not in `used`.
    fn fresh_function(&mut self, used: &BTreeSet<String>) -> Result<F, Error>;
}

/// Generates names by appending an increasing counter to a fixed prefix, skipping every
/// name that is already in use.
///
/// **Example**:
/// ```rust
/// use razor_clause::transform::{FreshNames, NameGenerator};
/// use std::collections::BTreeSet;
///
/// let mut generator = NameGenerator::default();
/// let used: BTreeSet<String> = vec!["v1".to_string()].into_iter().collect();
///
/// assert_eq!("v2", generator.fresh_variable(&used).unwrap().name());
/// assert_eq!("v3", generator.fresh_variable(&used).unwrap().name());
/// assert_eq!("sk1", generator.fresh_function(&used).unwrap().name());
/// ```
#[derive(Clone, Debug)]
pub struct NameGenerator {
    variable_prefix: String,
    function_prefix: String,
    variable_counter: usize,
    function_counter: usize,
}

impl NameGenerator {
    /// Creates a new generator with the given prefixes for variables and functions.
    pub fn new<S: Into<String>>(variable_prefix: S, function_prefix: S) -> Self {
        Self {
            variable_prefix: variable_prefix.into(),
            function_prefix: function_prefix.into(),
            variable_counter: 0,
            function_counter: 0,
        }
    }

    fn next(prefix: &str, counter: &mut usize, used: &BTreeSet<String>) -> Result<String, Error> {
        loop {
            *counter = counter.checked_add(1).ok_or_else(|| Error::NameExhaustion {
                prefix: prefix.to_string(),
            })?;
            let name = format!("{}{}", prefix, counter);
            if !used.contains(&name) {
                return Ok(name);
            }
        }
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new("v", "sk")
    }
}

impl FreshNames for NameGenerator {
    fn fresh_variable(&mut self, used: &BTreeSet<String>) -> Result<V, Error> {
        Self::next(&self.variable_prefix, &mut self.variable_counter, used).map(V::from)
    }

    fn fresh_function(&mut self, used: &BTreeSet<String>) -> Result<F, Error> {
        Self::next(&self.function_prefix, &mut self.function_counter, used).map(F::from)
    }
}
