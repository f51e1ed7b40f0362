use anyhow::Result;
use geoforge::config::Config;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// YAML file with srid, precision model and writer settings
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = Config::from_optional_path(arguments.config.as_deref())?;
	// fail early on settings the factory would reject
	config.factory()?;
	println!("{:#?}", config.context());
	println!("{:#?}", config.wkt_writer());
	Ok(())
}
