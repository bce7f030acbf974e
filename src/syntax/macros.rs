/*! Macros for building symbols, terms and atoms from plain identifiers.

A variable is written as an identifier (`x`), a constant is prefixed by `@` (`@c`) and a
function application is written as usual (`f(x, @c, g(y))`).
*/

#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::from(stringify!($v))
    };
}

#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::F::from(stringify!($f))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from(stringify!($p))
    };
}

#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::Var {
            variable: stringify!($v).into(),
        }
    };
    (@$c:ident) => {
        $crate::syntax::F::from(stringify!($c)).constant()
    };
    ($func:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::syntax::F::from(stringify!($func)).app(ts)
        }
    };
}

#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::syntax::Term::Var {
            variable: stringify!($v).into(),
        },))
    };
    (@acc (@$c:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)*
            $crate::syntax::F::from(stringify!($c)).constant(),))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)*
            $crate::syntax::F::from(stringify!($func)).app($crate::terms!($($t)*)),))
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Builds an [`Atom`] from a predicate applied on terms.
///
/// [`Atom`]: crate::syntax::Atom
#[macro_export]
macro_rules! atom {
    ($pred:ident ($($t:tt)*)) => {
        $crate::syntax::Pred::from(stringify!($pred)).app($crate::terms!($($t)*))
    };
}

/// Builds a [`Formula`] literal from an atom, optionally negated with `~`.
///
/// [`Formula`]: crate::syntax::Formula
#[macro_export]
macro_rules! lit {
    (~$pred:ident ($($t:tt)*)) => {
        $crate::syntax::Formula::Literal($crate::syntax::Literal::Neg($crate::atom!($pred ($($t)*))))
    };
    ($pred:ident ($($t:tt)*)) => {
        $crate::syntax::Formula::Literal($crate::syntax::Literal::Pos($crate::atom!($pred ($($t)*))))
    };
}
