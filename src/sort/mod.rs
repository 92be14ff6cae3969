//! Per-type sort functions generated by macros.
//!
//! `declare_sort!(prefix, Type)` writes out two functions for `Type`:
//! `prefix_compare` and `prefix_sort`. The names are built by token
//! pasting, which `macro_rules!` can't do on its own, so the macro
//! leans on `paste!`.
pub mod generated;
pub mod procedural;

use std::ops::Range;

use num_traits::NumCast;
use rand::Rng;

use crate::error::{LabError, LabResult};
use crate::return_if;

/// Generates `<prefix>_compare` and `<prefix>_sort` for a type.
/// ```rs
/// declare_sort!(int, i32);
/// let mut a = [3, 2, 1];
/// int_sort(&mut a);
/// assert_eq!(a, [1, 2, 3]);
/// ```
/// The sort is unstable, equal elements may be reordered.
#[macro_export]
macro_rules! declare_sort {
    ($prefix:ident, $type:ty) => {
        $crate::paste::paste! {
            /// Three-way comparison.
            pub fn [<$prefix _compare>](a: &$type, b: &$type) -> ::std::cmp::Ordering {
                if *a < *b {
                    ::std::cmp::Ordering::Less
                } else if *b < *a {
                    ::std::cmp::Ordering::Greater
                } else {
                    ::std::cmp::Ordering::Equal
                }
            }

            /// Sorts in non-decreasing order.
            pub fn [<$prefix _sort>](slice: &mut [$type]) {
                slice.sort_unstable_by([<$prefix _compare>]);
            }
        }
    };
}

/// Returns true if every element is `<=` the one after it.
pub fn is_non_decreasing<T: PartialOrd>(slice: &[T]) -> bool {
	for pair in slice.windows(2) {
		return_if!(pair[0] > pair[1] => false);
	}
	true
}

/// Generates `len` values drawn uniformly from `range`, converted to `T`.
/// An empty `range` is rejected with `LabError::OutOfRange`.
pub fn random_values<T: NumCast, R: Rng>(rng: &mut R, len: usize, range: Range<i64>) -> LabResult<Vec<T>> {
	LabError::range_check(range.start, range.clone())?;
	(0..len).map(|_| {
		let value = rng.gen_range(range.clone());
		<T as NumCast>::from(value).ok_or(LabError::NumericCast(value))
	}).collect()
}
