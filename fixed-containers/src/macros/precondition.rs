//! Caller-contract checks that are enforced in checked builds only.
//!
//! A violated precondition is a programming error, not a recoverable state.
//! With `debug_assertions` on (tests, debug builds) or the `checked` feature
//! enabled the check panics on the spot; otherwise it compiles to nothing and
//! the outcome of the call is unspecified (but still memory safe).

/// Returns `true` when [`precondition!`] checks are compiled in.
#[inline(always)]
pub const fn checks_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "checked"))
}

/// Asserts a caller precondition in checked builds.
///
/// ```rust
/// use fixed_containers::precondition;
///
/// fn halve(n: u32) -> u32 {
///     precondition!(n % 2 == 0, "halve expects an even number, got {}", n);
///     n / 2
/// }
///
/// assert_eq!(halve(8), 4);
/// ```
#[macro_export]
macro_rules! precondition {
    ($cond:expr, $($msg:tt)+) => {
        if $crate::macros::precondition::checks_enabled() && !$cond {
            panic!("precondition violated: {}", format_args!($($msg)+));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::checks_enabled;

    #[cfg(any(debug_assertions, feature = "checked"))]
    #[test]
    fn test_checks_enabled_in_checked_builds() {
        assert!(checks_enabled());
    }

    #[test]
    fn test_passing_precondition_is_silent() {
        precondition!(1 + 1 == 2, "arithmetic");
    }

    #[cfg(any(debug_assertions, feature = "checked"))]
    #[test]
    #[should_panic(expected = "precondition violated: index 3 >= 2")]
    fn test_failing_precondition_panics() {
        let (index, len) = (3, 2);
        precondition!(index < len, "index {} >= {}", index, len);
    }
}
