//! Macro pitfalls: operator precedence and repeated evaluation.
//!
//! `macro_rules!` normally captures an argument as an `expr` fragment,
//! which stays grouped after substitution. Capturing raw token trees
//! opts out of that and brings the textual-substitution bug back.

/// Pastes the argument's tokens directly in front of `* 7`.
/// `multiply_by_seven_bad!(2 + 3)` becomes `2 + 3 * 7`, which is `23`.
#[macro_export]
macro_rules! multiply_by_seven_bad {
    ($($x:tt)*) => {
        $($x)* * 7
    };
}

/// Captures an `expr` fragment. The fragment is substituted as a single
/// node, so `multiply_by_seven_expr!(2 + 3)` is `35` without any parens.
#[macro_export]
macro_rules! multiply_by_seven_expr {
    ($x:expr) => {
        $x * 7
    };
}

/// Token capture again, but parenthesised: `(2 + 3) * 7`.
#[macro_export]
macro_rules! multiply_by_seven_good {
    ($($x:tt)*) => {
        ($($x)*) * 7
    };
}
