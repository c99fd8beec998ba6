mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_results_json,
	print_results_plain,
};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in maps4study::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match &cli.search {
		Some(term) => search_once(&cli, term, resolved),
		None => run_interactive(cli.output, resolved),
	}
}

/// Run a single search and print its results without opening the UI.
fn search_once(cli: &CliArgs, term: &str, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let report = workflow.search_once(term, cli.page)?;

	match cli.output {
		OutputFormat::Plain => print_results_plain(&report),
		OutputFormat::Json => print_results_json(&report)?,
	}

	Ok(())
}

/// Execute the interactive workflow and print the outcome in the chosen format.
fn run_interactive(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
