mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cinerec::HttpRecommender;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::LevelFilter;
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in cinerec::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.check {
		return check_service(&resolved);
	}

	cinerec::logging::initialize(LevelFilter::from(cli.log_level))?;
	run_search(cli.output, resolved)
}

/// Call the service health endpoint and print what it reports.
fn check_service(settings: &ResolvedConfig) -> Result<()> {
	let service = HttpRecommender::new(&settings.base_url)?;
	let status = service
		.health()
		.with_context(|| format!("health check against {} failed", service.base_url()))?;
	println!("{}", serde_json::to_string_pretty(&status)?);
	Ok(())
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
