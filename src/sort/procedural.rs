//! The same sort functions, generated by a procedural macro.
use macrolab_proc::declare_sorts;

declare_sorts!(
	int: i32,
	float: f32,
	double: f64,
	char: char,
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sort::{generated, is_non_decreasing, random_values};
	use rand::{SeedableRng, rngs::StdRng};
	use std::cmp::Ordering;

	#[test]
	fn int_sort_test() {
		let mut a = [3, 2, 1];
		int_sort(&mut a);
		assert_eq!(a, [1, 2, 3]);
	}

	#[test]
	fn compare_test() {
		assert_eq!(int_compare(&-4, &4), Ordering::Less);
		assert_eq!(char_compare(&'z', &'a'), Ordering::Greater);
		assert_eq!(double_compare(&1.0, &1.0), Ordering::Equal);
	}

	#[test]
	fn agrees_with_declarative() {
		let mut rng = StdRng::seed_from_u64(99);
		let mut procedural: Vec<f32> = random_values(&mut rng, 128, -50..50).unwrap();
		let mut declarative = procedural.clone();
		float_sort(&mut procedural);
		generated::float_sort(&mut declarative);
		assert!(is_non_decreasing(&procedural));
		assert_eq!(procedural, declarative);
	}
}
