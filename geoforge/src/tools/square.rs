use anyhow::Result;
use geoforge::{
	config::Config,
	geometry::Geometry,
	shapes::{square_polygon, square_ring},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// x of the lower-left corner
	#[arg(allow_negative_numbers = true)]
	x: f64,

	/// y of the lower-left corner
	#[arg(allow_negative_numbers = true)]
	y: f64,

	/// length of a side
	side: f64,

	/// print a polygon instead of a ring
	#[arg(long, display_order = 1)]
	polygon: bool,

	/// cut a square hole, a third of the side long, out of the centre (implies --polygon)
	#[arg(long, display_order = 1)]
	hole: bool,

	/// YAML file with srid, precision model and writer settings
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	config: Option<PathBuf>,

	/// number of decimal places in the output
	#[arg(long, short, value_name = "int", display_order = 2)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = Config::from_optional_path(arguments.config.as_deref())?;
	config.writer.override_optional_precision(arguments.precision);
	let factory = config.factory()?;

	let geometry: Geometry = if arguments.polygon || arguments.hole {
		square_polygon(&factory, arguments.x, arguments.y, arguments.side, arguments.hole)?.into()
	} else {
		square_ring(&factory, arguments.x, arguments.y, arguments.side)?.into()
	};
	log::debug!("square: {geometry:?}");

	println!("{}", config.wkt_writer().write(&geometry)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn ring() {
		run_command(vec!["geoforge", "square", "0", "0", "1"]).unwrap();
	}

	#[test]
	fn polygon_with_hole_and_negative_origin() {
		run_command(vec!["geoforge", "square", "-3", "-3", "6", "--hole"]).unwrap();
	}

	#[test]
	fn rejects_non_numeric_side() {
		assert!(run_command(vec!["geoforge", "square", "0", "0", "big"]).is_err());
	}
}
