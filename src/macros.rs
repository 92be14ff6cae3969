/// Measures the execution time of some set of instructions.
/// Evaluates to `(value, elapsed)` where `value` is whatever the last
/// expression of the instructions evaluated to.
/// ```rs
/// let (sum, elapsed) = measure_time!{
/// 	let v: Vec<u64> = (0..1000).collect();
/// 	v.iter().sum::<u64>()
/// };
/// ```
#[macro_export]
macro_rules! measure_time {
    ($($token:tt)*) => {
        {
            let now = ::std::time::Instant::now();
            let value = { $($token)* };
            (value, now.elapsed())
        }
    };
}

/// The purpose of this macro is to be able to generate code for each
/// primitive integer type (this means no f32 or f64).
/// You invoke the macro with the path to another macro that you would
/// like to invoke for each type.
/// Optionally you can restrict generation to either unsigned or signed
/// by typing `;unsigned` or `;signed` after the provided macro argument.
#[macro_export]
macro_rules! for_each_int_type {
    ($macro:path) => {
        $crate::for_each_int_type!($macro;unsigned);
        $crate::for_each_int_type!($macro;signed);
    };
    ($macro:path;unsigned) => {
        $macro!{usize}
        $macro!{u128}
        $macro!{u64}
        $macro!{u32}
        $macro!{u16}
        $macro!{u8}
    };
    ($macro:path;signed) => {
        $macro!{isize}
        $macro!{i128}
        $macro!{i64}
        $macro!{i32}
        $macro!{i16}
        $macro!{i8}
    }
}

/// Continue a loop if a condition is met.
/// ```rs
/// for i in 0..10 {
/// 	continue_if!(i % 2 == 1);
/// 	println!("{}", i);
/// }
/// ```
/// A loop label may be given:
/// ```rs
/// 'x: for x in 0..32 {
/// 	for y in 0..32 {
/// 		continue_if!('x: y == 10);
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! continue_if {
    ($label:lifetime : $condition:expr) => {
        if $condition { continue $label; }
    };
    ($condition:expr) => {
        if $condition { continue; }
    };
}

/// Break from a loop if a condition is met.
/// ```rs
/// let mut i = 0;
/// let result = loop {
/// 	break_if!(i == 10 => i * 2);
/// 	i += 1;
/// };
/// ```
#[macro_export]
macro_rules! break_if {
    ($label:lifetime : $condition:expr $(=> $result:expr)?) => {
        if $condition { break $label $($result)?; }
    };
    ($condition:expr $(=> $result:expr)?) => {
        if $condition { break $($result)?; }
    };
}

/// Return from a function if a condition is met, optionally with a value.
#[macro_export]
macro_rules! return_if {
    ($condition:expr $(=> $result:expr)?) => {
        if $condition {
            return $($result)?;
        }
    };
}

#[test]
fn timetest() {
    let (value, elapsed) = measure_time!{
        std::thread::sleep(std::time::Duration::from_millis(10));
        let a = 20;
        a + 1
    };
    assert_eq!(value, 21);
    assert!(elapsed >= std::time::Duration::from_millis(10));
}

#[test]
fn int_types() {
    let mut names = Vec::new();
    macro_rules! push_type {
        ($token:tt) => {
            names.push(stringify!($token));
        };
    }
    for_each_int_type!(push_type);
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "usize");
    assert_eq!(names[11], "i8");
}

#[test]
fn loop_helpers() {
    let mut evens = Vec::new();
    let last = 'outer: loop {
        for i in 0.. {
            continue_if!(i % 2 == 1);
            break_if!('outer: i > 6 => i);
            evens.push(i);
        }
    };
    assert_eq!(evens, [0, 2, 4, 6]);
    assert_eq!(last, 8);

    let mut cells = Vec::new();
    'x: for x in 0..3 {
        for y in 0..3 {
            continue_if!('x: y == 1);
            cells.push((x, y));
        }
    }
    assert_eq!(cells, [(0, 0), (1, 0), (2, 0)]);

    let mut count = 0;
    'rows: for _ in 0..3 {
        for _ in 0..3 {
            count += 1;
            break_if!('rows: count == 4);
        }
    }
    assert_eq!(count, 4);

    fn first_negative(values: &[i32]) -> Option<usize> {
        for (i, v) in values.iter().enumerate() {
            return_if!(*v < 0 => Some(i));
        }
        None
    }
    assert_eq!(first_negative(&[3, 1, -4, 1]), Some(2));
    assert_eq!(first_negative(&[3, 1]), None);
}
