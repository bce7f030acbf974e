#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                let mut l = left_val.to_vec();
                let mut r = right_val.to_vec();
                l.sort();
                r.sort();
                assert_eq!(l, r)
            }
        }
    }};
    ($left:expr, $right:expr ,) => {
        $crate::assert_eq_sorted_vecs!($left, $right)
    };
}

#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

/// Asserts that a unification result is a substitution with the expected rendering,
/// e.g. `{a/x, f(a)/y}`.
#[macro_export]
macro_rules! assert_unifies {
    ($expected:expr, $result:expr) => {{
        match $result {
            Ok(sub) => assert_eq!($expected, sub.to_string()),
            Err(failure) => panic!("expected a unifier, found failure: {}", failure),
        }
    }};
}
