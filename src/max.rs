//! Polymorphic maximum, with and without macros.

/// Maximum of one or more values of any `PartialOrd` type.
/// Each argument is bound to a local before comparing, so it is
/// evaluated exactly once no matter which one wins.
/// ```rs
/// let imax = find_max!(1, 2);
/// let fmax = find_max!(1.0, 2.0);
/// let many = find_max!(3, 9, 4, 1);
/// ```
/// On a tie the last argument wins.
#[macro_export]
macro_rules! find_max {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $y:expr $(,)?) => {{
        let a = $x;
        let b = $y;
        if a > b { a } else { b }
    }};
    ($x:expr, $($y:expr),+ $(,)?) => {
        $crate::find_max!($x, $crate::find_max!($($y),+))
    };
}

/// The direct translation of `((a) > (b) ? (a) : (b))`.
/// Whichever argument wins is evaluated a second time to produce the
/// result. Side effects in the arguments show up twice.
#[macro_export]
macro_rules! naive_max {
    ($x:expr, $y:expr) => {
        if $x > $y { $x } else { $y }
    };
}

/// The same comparison as a generic function. The compiler checks
/// the bound instead of pasting tokens.
#[inline]
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
	if a > b { a } else { b }
}
