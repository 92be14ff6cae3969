//! The demonstrations run by the `macrolab` binary.
use std::str::FromStr;

use rand::{SeedableRng, rngs::StdRng};

use crate::error::{LabError, LabResult};
use crate::max::max_of;
use crate::sort::{self, generated, procedural};
use crate::transcript::Transcript;

/// Settings shared by all demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
	/// Seed for the random array in the sort demo.
	pub seed: u64,
	/// Length of the random array in the sort demo.
	pub len: usize,
	pub verbose: bool,
}

impl DemoConfig {
	pub const MAX_LEN: usize = 1024;

	/// Builds a config, rejecting array lengths outside `1..=MAX_LEN`.
	pub fn new(seed: u64, len: usize, verbose: bool) -> LabResult<Self> {
		LabError::range_check(len, 1..=Self::MAX_LEN)?;
		Ok(Self { seed, len, verbose })
	}
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			seed: 7,
			len: 10,
			verbose: false,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
	Max,
	Multiply,
	FunctionCall,
	UpTo,
	CFor,
	Vec,
	Sort,
	ProcSort,
}

impl Demo {
	/// Every demo, in the order they run by default.
	pub const ALL: [Demo; 8] = [
		Demo::Max,
		Demo::Multiply,
		Demo::FunctionCall,
		Demo::UpTo,
		Demo::CFor,
		Demo::Vec,
		Demo::Sort,
		Demo::ProcSort,
	];

	pub fn name(self) -> &'static str {
		match self {
			Demo::Max => "max",
			Demo::Multiply => "multiply",
			Demo::FunctionCall => "function-call",
			Demo::UpTo => "up-to",
			Demo::CFor => "cfor",
			Demo::Vec => "vec",
			Demo::Sort => "sort",
			Demo::ProcSort => "proc-sort",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Demo::Max => "A maximum macro that works for any comparable type.",
			Demo::Multiply => "Missing parentheses in a token-pasting macro.",
			Demo::FunctionCall => "A side-effecting argument evaluated twice.",
			Demo::UpTo => "A counting loop as syntactic sugar.",
			Demo::CFor => "A C-style for loop where break and continue work.",
			Demo::Vec => "A reimplementation of vec!.",
			Demo::Sort => "Per-type sort functions generated by declare_sort!.",
			Demo::ProcSort => "The same sort functions from a procedural macro.",
		}
	}

	pub fn run(self, config: &DemoConfig, out: &mut Transcript) -> LabResult<()> {
		match self {
			Demo::Max => max_demo(out),
			Demo::Multiply => multiply_demo(out),
			Demo::FunctionCall => function_call_demo(out),
			Demo::UpTo => up_to_demo(out),
			Demo::CFor => cfor_demo(out),
			Demo::Vec => vec_demo(out),
			Demo::Sort => sort_demo(config, out)?,
			Demo::ProcSort => proc_sort_demo(out),
		}
		Ok(())
	}
}

impl FromStr for Demo {
	type Err = LabError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Demo::ALL.into_iter()
			.find(|demo| demo.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| LabError::UnknownDemo(s.to_owned()))
	}
}

impl std::fmt::Display for Demo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

fn max_demo(out: &mut Transcript) {
	let imax = crate::find_max!(1, 2);
	let fmax = crate::find_max!(1.0, 2.0);
	out.line(format!("imax: {imax}"));
	out.line(format!("fmax: {fmax:.6}"));
	out.line(format!("max of many: {}", crate::find_max!(3, 9, 4, 1)));
	out.line(format!("generic max: {}", max_of(1, 2)));
}

fn multiply_demo(out: &mut Transcript) {
	out.line(format!("bad: {}", crate::multiply_by_seven_bad!(2 + 3)));
	out.line(format!("expr: {}", crate::multiply_by_seven_expr!(2 + 3)));
	out.line(format!("good: {}", crate::multiply_by_seven_good!(2 + 3)));
}

fn function_call_demo(out: &mut Transcript) {
	let x = 5;
	let y = 10;
	// if echo(x) > echo(y) { echo(x) } else { echo(y) }
	let z = crate::naive_max!(out.echo(x), out.echo(y));
	out.line(format!("z: {z}"));

	let z = crate::find_max!(out.echo(x), out.echo(y));
	out.line(format!("z: {z}"));
}

fn up_to_demo(out: &mut Transcript) {
	crate::up_to!(i, 10, {
		out.line(format!("i: {i}"));
	});
}

fn cfor_demo(out: &mut Transcript) {
	crate::cfor!(for (let mut i = 0; i < 10; i += 1) {
		crate::continue_if!(i % 2 == 1);
		out.line(format!("i: {i}"));
	});
	crate::cfor!(for (let mut j = 0; j < 10; j += 1) {
		crate::break_if!(j == 3);
		out.line(format!("j: {j}"));
	});
}

fn vec_demo(out: &mut Transcript) {
	let v0: Vec<i32> = crate::make_vec![];
	let v1: Vec<i32> = crate::make_vec![1];
	let v2: Vec<i32> = crate::make_vec![1, 2, 3];
	let v3: Vec<i32> = crate::make_vec![1, 2, 3,];
	let v4: Vec<i32> = crate::make_vec![0; 10];
	for v in [v0, v1, v2, v3, v4] {
		out.line(format!("{v:?}"));
	}
}

fn print_indexed(out: &mut Transcript, values: &[i32]) {
	for (i, value) in values.iter().enumerate() {
		out.line(format!("a[{i}]: {value}"));
	}
}

fn sort_demo(config: &DemoConfig, out: &mut Transcript) -> LabResult<()> {
	let mut a = [3, 2, 1];
	generated::int_sort(&mut a);
	print_indexed(out, &a);

	let mut floats = [2.5f32, -1.0, 0.5];
	generated::float_sort(&mut floats);
	out.line(format!("float: {floats:?}"));

	let mut doubles = [1e3f64, -2.75, 0.0, 1e-3];
	generated::double_sort(&mut doubles);
	out.line(format!("double: {doubles:?}"));

	let mut chars = ['z', 'a', 'm'];
	generated::char_sort(&mut chars);
	out.line(format!("char: {chars:?}"));

	let mut rng = StdRng::seed_from_u64(config.seed);
	let mut random: Vec<i32> = sort::random_values(&mut rng, config.len, -100..100)?;
	out.line(format!("random: {random:?}"));
	generated::int_sort(&mut random);
	out.line(format!("sorted: {random:?}"));
	Ok(())
}

fn proc_sort_demo(out: &mut Transcript) {
	let mut a = [3, 2, 1];
	procedural::int_sort(&mut a);
	print_indexed(out, &a);
}

/// Runs the demos in order, collecting everything they print.
pub fn run_all<I: IntoIterator<Item = Demo>>(demos: I, config: &DemoConfig) -> LabResult<Transcript> {
	let mut out = Transcript::new();
	for demo in demos {
		demo.run(config, &mut out)?;
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn output(demo: Demo) -> Vec<String> {
		let mut out = Transcript::new();
		demo.run(&DemoConfig::default(), &mut out).unwrap();
		out.lines().to_vec()
	}

	#[test]
	fn parse_test() {
		for demo in Demo::ALL {
			assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
		}
		assert_eq!("CFOR".parse::<Demo>().unwrap(), Demo::CFor);
		assert!(matches!("nope".parse::<Demo>(), Err(LabError::UnknownDemo(name)) if name == "nope"));
	}

	#[test]
	fn config_test() {
		assert!(DemoConfig::new(1, 1, false).is_ok());
		assert!(DemoConfig::new(1, DemoConfig::MAX_LEN, false).is_ok());
		assert!(matches!(DemoConfig::new(1, 0, false), Err(LabError::OutOfRange)));
		assert!(matches!(DemoConfig::new(1, DemoConfig::MAX_LEN + 1, false), Err(LabError::OutOfRange)));
	}

	#[test]
	fn max_output() {
		assert_eq!(output(Demo::Max), ["imax: 2", "fmax: 2.000000", "max of many: 9", "generic max: 2"]);
	}

	#[test]
	fn multiply_output() {
		assert_eq!(output(Demo::Multiply), ["bad: 23", "expr: 35", "good: 35"]);
	}

	#[test]
	fn function_call_output() {
		assert_eq!(output(Demo::FunctionCall), [
			"x: 5", "x: 10", "x: 10", "z: 10",
			"x: 5", "x: 10", "z: 10",
		]);
	}

	#[test]
	fn loop_output() {
		let expected: Vec<String> = (0..10).map(|i| format!("i: {i}")).collect();
		assert_eq!(output(Demo::UpTo), expected);
		assert_eq!(output(Demo::CFor), [
			"i: 0", "i: 2", "i: 4", "i: 6", "i: 8",
			"j: 0", "j: 1", "j: 2",
		]);
	}

	#[test]
	fn vec_output() {
		assert_eq!(output(Demo::Vec), [
			"[]",
			"[1]",
			"[1, 2, 3]",
			"[1, 2, 3]",
			"[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]",
		]);
	}

	#[test]
	fn sort_output() {
		let lines = output(Demo::Sort);
		assert_eq!(lines[..3], ["a[0]: 1", "a[1]: 2", "a[2]: 3"]);
		assert_eq!(lines[3], "float: [-1.0, 0.5, 2.5]");
		assert_eq!(lines[4], "double: [-2.75, 0.0, 0.001, 1000.0]");
		assert_eq!(lines[5], "char: ['a', 'm', 'z']");
		assert_eq!(lines.len(), 8);

		let parse = |line: &str, prefix: &str| -> Vec<i32> {
			line.strip_prefix(prefix).unwrap()
				.trim_matches(|c| c == '[' || c == ']')
				.split(", ")
				.map(|v| v.parse().unwrap())
				.collect()
		};
		let mut random = parse(&lines[6], "random: ");
		let sorted = parse(&lines[7], "sorted: ");
		assert_eq!(random.len(), DemoConfig::default().len);
		assert!(random.iter().all(|v| (-100..100).contains(v)));
		random.sort();
		assert_eq!(sorted, random);
		assert_eq!(output(Demo::ProcSort), lines[..3]);
	}
}
