//! Captured demonstration output.
use std::io::Write;

use crate::error::LabResult;

/// The ordered lines a demonstration printed.
/// Demos write here instead of straight to stdout so the output can be
/// checked in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
	lines: Vec<String>,
}

impl Transcript {
	#[inline(always)]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn line<S: Into<String>>(&mut self, line: S) {
		self.lines.push(line.into());
	}

	/// Records `x: {x}` and returns `x` unchanged.
	/// Every call leaves a line behind, which makes the number of
	/// evaluations of a macro argument visible.
	pub fn echo(&mut self, x: i32) -> i32 {
		self.line(format!("x: {x}"));
		x
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn write_to<W: Write>(&self, mut writer: W) -> LabResult<()> {
		for line in &self.lines {
			writeln!(writer, "{line}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn echo_test() {
		let mut transcript = Transcript::new();
		assert!(transcript.is_empty());
		let x = transcript.echo(5) + transcript.echo(10);
		assert_eq!(x, 15);
		assert_eq!(transcript.lines(), ["x: 5", "x: 10"]);
	}

	#[test]
	fn write_test() {
		let mut transcript = Transcript::new();
		transcript.line("one");
		transcript.line(String::from("two"));
		let mut buffer = Vec::new();
		transcript.write_to(&mut buffer).unwrap();
		assert_eq!(String::from_utf8(buffer).unwrap(), "one\ntwo\n");
	}
}
