//! Utilities for tests.

/// Asserts that the value is formatted to the expected string.
#[allow(unused_macros)]
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert_eq!(left.to_string(), *right);
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert_eq!(left.to_string(), *right, $($args)*);
            }
        }
    }};
}
