use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use macrolab::{
	measure_time,
	Demo,
	DemoConfig,
	LabResult,
	Transcript,
};

/// Runs small programs showing what macros do to the code they expand into.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Demos to run, in order. Runs all of them when empty.
	#[arg()]
	demos: Vec<String>,

	/// List the available demos and exit.
	#[arg(short = 'l', long = "list")]
	list: bool,

	/// Seed for the random array in the sort demo.
	#[arg(long = "seed", default_value_t = DemoConfig::default().seed)]
	seed: u64,

	/// Length of the random array in the sort demo (1..=1024).
	#[arg(long = "len", default_value_t = DemoConfig::default().len)]
	len: usize,

	/// Print parsed arguments and per-demo timings to stderr.
	#[arg(short = 'v', long = "verbose")]
	verbose: bool,
}

fn main() -> ExitCode {
	let args = Args::parse();
	if args.verbose {
		eprintln!("DEBUG {args:?}");
	}
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> LabResult<()> {
	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();
	if args.list {
		for demo in Demo::ALL {
			writeln!(stdout, "{:<14} {}", demo.name(), demo.description())?;
		}
		return Ok(());
	}
	let config = DemoConfig::new(args.seed, args.len, args.verbose)?;
	let demos = if args.demos.is_empty() {
		Demo::ALL.to_vec()
	} else {
		args.demos.iter()
			.map(|name| name.parse::<Demo>())
			.collect::<LabResult<Vec<_>>>()?
	};
	for demo in demos {
		writeln!(stdout, "== {demo}")?;
		let mut transcript = Transcript::new();
		let (result, elapsed) = measure_time!{
			demo.run(&config, &mut transcript)
		};
		result?;
		transcript.write_to(&mut stdout)?;
		if config.verbose {
			eprintln!("DEBUG {demo} took {elapsed:?}");
		}
	}
	Ok(())
}
