/// Abort on a broken internal invariant.
///
/// Only compiled in with the `invariant_violations` feature. Without it, call
/// sites fall back to skipping the offending input.
#[cfg(feature = "invariant_violations")]
#[macro_export]
macro_rules! invariant_violation {
    ($($arg:tt)*) => {
        panic!("invariant violation: {}", format!($($arg)*))
    };
}
