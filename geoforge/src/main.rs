mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the demo geometries as WKT, one per line
	Demo(tools::demo::Subcommand),

	/// Print a square ring or polygon as WKT
	Square(tools::square::Subcommand),

	/// Show the effective geometry context and writer settings
	Config(tools::config::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Demo(arguments) => tools::demo::run(arguments),
		Commands::Square(arguments) => tools::square::run(arguments),
		Commands::Config(arguments) => tools::config::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geoforge"]).unwrap_err().to_string();
		assert!(err.starts_with("A small vector geometry object model with a Well-Known-Text writer."));
		assert!(err.contains("\nUsage: geoforge [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geoforge", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geoforge "));
	}

	#[test]
	fn square_subcommand_without_arguments() {
		let output = run_command(vec!["geoforge", "square"]).unwrap_err().to_string();
		assert!(output.starts_with("Print a square ring or polygon as WKT"));
	}

	#[test]
	fn parsed_arguments_are_reported() {
		let msg = run_command(vec!["geoforge", "square", "1", "2", "3", "--polygon"]).unwrap();
		assert!(msg.contains("polygon: true"));
	}
}
