use predicates::{prelude::*, str};
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	geoforge_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("square", "[OPTIONS] <X> <Y> <SIDE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	geoforge_cmd()
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}

#[test]
fn demo() {
	geoforge_cmd().arg("demo").assert().success().stdout(
		"LINEARRING (0 0, 100 0, 100 100, 0 100, 0 0)\n\
		 POLYGON ((0 200, 300 200, 300 500, 0 500, 0 200), (100 300, 200 300, 200 400, 100 400, 100 300))\n\
		 GEOMETRYCOLLECTION (LINEARRING (0 0, 100 0, 100 100, 0 100, 0 0), \
		 POLYGON ((0 200, 300 200, 300 500, 0 500, 0 200), (100 300, 200 300, 200 400, 100 400, 100 300)))\n",
	);
}

#[test]
fn demo_with_fixed_precision_and_zeros() {
	geoforge_cmd()
		.args(["demo", "--precision", "1", "--keep-zeros"])
		.assert()
		.success()
		.stdout(str::starts_with("LINEARRING (0.0 0.0, 100.0 0.0, 100.0 100.0, 0.0 100.0, 0.0 0.0)\n"));
}

#[rstest]
#[case(&["square", "0", "0", "1"], "LINEARRING (0 0, 1 0, 1 1, 0 1, 0 0)\n")]
#[case(&["square", "-1", "-1", "2", "--polygon"], "POLYGON ((-1 -1, 1 -1, 1 1, -1 1, -1 -1))\n")]
#[case(
	&["square", "0", "0", "3", "--hole"],
	"POLYGON ((0 0, 3 0, 3 3, 0 3, 0 0), (1 1, 2 1, 2 2, 1 2, 1 1))\n"
)]
fn square(#[case] args: &[&str], #[case] expected: &str) {
	geoforge_cmd().args(args).assert().success().stdout(expected.to_string());
}

#[test]
fn square_snaps_to_fixed_grid() {
	let (_dir, path) = write_temp_config("precision_model:\n  type: fixed\n  scale: 1\n");
	geoforge_cmd()
		.args(["square", "0.4", "0.4", "2.2", "--config", path.to_str().unwrap()])
		.assert()
		.success()
		.stdout("LINEARRING (0 0, 3 0, 3 3, 0 3, 0 0)\n");
}

#[test]
fn config_from_testdata() {
	geoforge_cmd()
		.args(["config", "--config"])
		.arg(get_testdata("config1.yml"))
		.assert()
		.success()
		.stdout(str::contains("srid: 4326").and(str::contains("scale: 1000.0")));
}

#[test]
fn bad_config_fails() {
	geoforge_cmd()
		.args(["config", "--config"])
		.arg(get_testdata("config_bad_scale.yml"))
		.assert()
		.failure()
		.stderr(str::contains("invalid precision model"));
}
