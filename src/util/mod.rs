mod debug_assertions;

pub(crate) use debug_assertions::test_sorted_landing;

/// Turns an `is_less` closure into the `a <= b` predicate expected by `slice::is_sorted_by`.
#[doc(hidden)]
#[macro_export]
macro_rules! is_less_to_le {
    ( $x:ident ) => {{
        |a, b| !$x(b, a)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!($fmt $(, $args)*);
            }
        }
    };
    ($x:expr) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $x);
            }
        }
    };
}
