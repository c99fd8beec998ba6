use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `maps4study` binary.
#[derive(Parser, Debug)]
#[command(
	name = "maps4study",
	version,
	long_version = long_version(),
	about = "Search mind maps for study topics and save them locally",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MAPS4STUDY_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Backend address (default: http://localhost:5000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECONDS",
		help = "Give up on backend requests after this many seconds (default: no timeout)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'd',
		long = "download-dir",
		value_name = "PATH",
		help = "Directory that saved images are written to (default: <data dir>/downloads)"
	)]
	pub(crate) download_dir: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the header title (default: Maps4Study)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search for this term as soon as the UI opens (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 's',
		long = "search",
		value_name = "TERM",
		help = "Search once, print the results and exit without opening the UI"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		long = "page",
		value_name = "NUM",
		default_value_t = 1,
		value_parser = clap::value_parser!(u32).range(1..),
		requires = "search",
		help = "Result page used with --search"
	)]
	pub(crate) page: u32,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
