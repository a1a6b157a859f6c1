mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

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
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the bounding box of all features
	Extent(tools::extent::Subcommand),

	/// Find the features whose area contains a point
	Locate(tools::locate::Subcommand),

	/// Turn HTML descriptions into plain text and extract document links
	Clean(tools::clean::Subcommand),

	/// Convert the placemarks of a KML file into GeoJSON
	Convert(tools::convert::Subcommand),

	/// Render the popup or sidebar markup of a feature
	Popup(tools::popup::Subcommand),

	/// Print the MapLibre sources and style layers of the viewer
	Style(tools::style::Subcommand),
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
		Commands::Extent(arguments) => tools::extent::run(arguments),
		Commands::Locate(arguments) => tools::locate::run(arguments),
		Commands::Clean(arguments) => tools::clean::run(arguments),
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Popup(arguments) => tools::popup::run(arguments),
		Commands::Style(arguments) => tools::style::run(arguments),
	}
}
