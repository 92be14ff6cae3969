//! Syntactic sugar built from `macro_rules!`.

/// Runs a block once for every counter value in `0..n`.
/// ```rs
/// up_to!(i, 10, {
/// 	println!("i: {i}");
/// });
/// ```
/// The counter type can be spelled out like the C version does:
/// ```rs
/// up_to!(i: u8, 10, { println!("i: {i}"); });
/// ```
#[macro_export]
macro_rules! up_to {
    ($var:ident : $type:ty, $n:expr, $body:block) => {
        for $var in (0 as $type)..$n {
            $body
        }
    };
    ($var:ident, $n:expr, $body:block) => {
        for $var in 0..$n {
            $body
        }
    };
}

/// A C-style `for` loop.
/// ```rs
/// cfor!(for (let mut i = 0; i < 10; i += 1) {
/// 	continue_if!(i % 2 == 1);
/// 	println!("{i}");
/// });
/// ```
/// Rewriting this as `init; while cond { body step }` breaks `continue`,
/// which would jump past `step` and spin forever. The step runs at the
/// top of every iteration but the first instead, so `continue` behaves
/// the way it does in C.
#[macro_export]
macro_rules! cfor {
    (for ($($init:stmt),* ; $cond:expr ; $($step:expr),*) $body:block) => {{
        $(
            $init
        )*
        let mut first = true;
        loop {
            if !first {
                $(
                    $step;
                )*
            }
            first = false;
            if !($cond) {
                break;
            }
            $body
        }
    }};
}

/// A reimplementation of `vec!`.
/// ```rs
/// let empty: Vec<i32> = make_vec![];
/// let v = make_vec![1, 2, 3,];
/// let zeros = make_vec![0; 10];
/// ```
#[macro_export]
macro_rules! make_vec {
    () => {
        ::std::vec::Vec::new()
    };
    ($item:expr; $count:expr) => {{
        let mut v = ::std::vec::Vec::new();
        v.resize($count, $item);
        v
    }};
    ($($item:expr),+ $(,)?) => {{
        let mut v = ::std::vec::Vec::new();
        $(
            v.push($item);
        )+
        v
    }};
}

#[cfg(test)]
mod tests {
	#[test]
	fn up_to_test() {
		let mut seen = Vec::new();
		up_to!(i, 5, {
			seen.push(i);
		});
		assert_eq!(seen, [0, 1, 2, 3, 4]);

		let mut bytes = Vec::new();
		up_to!(b: u8, 3, {
			bytes.push(b);
		});
		assert_eq!(bytes, [0u8, 1, 2]);

		let mut never = 0;
		up_to!(_i, 0, {
			never += 1;
		});
		assert_eq!(never, 0);
	}

	#[test]
	fn cfor_test() {
		let mut seen = Vec::new();
		cfor!(for (let mut i = 0; i < 10; i += 1) {
			crate::continue_if!(i % 2 == 1);
			crate::break_if!(i > 6);
			seen.push(i);
		});
		assert_eq!(seen, [0, 2, 4, 6]);
	}

	#[test]
	fn cfor_multiple_clauses() {
		let mut pairs = Vec::new();
		cfor!(for (let mut i = 0, let mut j = 10; i < j; i += 1, j -= 2) {
			pairs.push((i, j));
		});
		assert_eq!(pairs, [(0, 10), (1, 8), (2, 6), (3, 4)]);
	}

	#[test]
	fn make_vec_test() {
		let v0: Vec<i32> = make_vec![];
		let v1: Vec<i32> = make_vec![1];
		let v2: Vec<i32> = make_vec![1, 2, 3];
		let v3: Vec<i32> = make_vec![1, 2, 3,];
		let v4: Vec<i32> = make_vec![0; 10];
		assert!(v0.is_empty());
		assert_eq!(v1, [1]);
		assert_eq!(v2, [1, 2, 3]);
		assert_eq!(v2, v3);
		assert_eq!(v4, vec![0; 10]);

		let words = make_vec![String::from("hi"); 2];
		assert_eq!(words, ["hi", "hi"]);
	}
}
