use anyhow::Result;
use geoforge::{config::Config, shapes::demo_geometries};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// YAML file with srid, precision model and writer settings
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,

	/// number of decimal places in the output
	#[arg(long, short, value_name = "int")]
	precision: Option<u8>,

	/// keep trailing zeros when a precision is set
	#[arg(long)]
	keep_zeros: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = Config::from_optional_path(arguments.config.as_deref())?;
	config.writer.override_optional_precision(arguments.precision);
	if arguments.keep_zeros {
		config.writer.override_optional_trim(Some(false));
	}

	let factory = config.factory()?;
	let writer = config.wkt_writer();

	for geometry in demo_geometries(&factory)? {
		println!("{}", writer.write(&geometry)?);
	}
	Ok(())
}
