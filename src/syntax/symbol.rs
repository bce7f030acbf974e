/*! Defines the symbols of [`V`], [`F`] and [`Pred`] for making terms and formulae.

[`V`]: crate::syntax::V
[`F`]: crate::syntax::F
[`Pred`]: crate::syntax::Pred
*/
use super::{Atom, Term};
use std::fmt;

/// Represents an uninterpreted function symbol with a given name.
///
/// **Note**: constants are not distinguished from functions; a constant is a function
/// symbol applied to no arguments.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(pub String);

impl F {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms. The length of `terms` must be equal to
    /// the (assumed) arity of the function.
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::App {
            function: self,
            terms,
        }
    }

    /// Returns the receiver applied on no arguments, that is a constant.
    pub fn constant(self) -> Term {
        self.app(Vec::new())
    }
}

impl<S: Into<String>> From<S> for F {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents a variable symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct V(pub String);

impl V {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for V {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents a predicate symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pred(pub String);

impl Pred {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of arguments. The length of `terms` must be equal to
    /// the (assumed) arity of the predicate.
    pub fn app(self, terms: Vec<Term>) -> Atom {
        Atom::new(self, terms)
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{f, pred, v};

    #[test]
    fn test_symbol_to_string() {
        assert_eq!("x", v!(x).to_string());
        assert_eq!("f", f!(f).to_string());
        assert_eq!("P", pred!(P).to_string());
    }

    #[test]
    fn test_constant() {
        assert_eq!("a", f!(a).constant().to_string());
        assert!(f!(a).constant().is_constant());
    }
}
