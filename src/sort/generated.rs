//! Sort functions produced by `declare_sort!`.
use crate::declare_sort;

declare_sort!(int, i32);
declare_sort!(float, f32);
declare_sort!(double, f64);
declare_sort!(char, char);

macro_rules! __declare_int_sort {
	($type:ident) => {
		declare_sort!($type, $type);
	};
}

// usize_sort, u128_sort, ... i8_sort
crate::for_each_int_type!(__declare_int_sort);
