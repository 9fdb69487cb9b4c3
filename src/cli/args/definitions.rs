use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat, StalePolicyArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `cinerec` binary.
#[derive(Parser, Debug)]
#[command(
	name = "cinerec",
	version,
	long_version = long_version(),
	about = "Terminal client for a movie recommendation service",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CINEREC_CONFIG",
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
		short = 'a',
		long = "api-base",
		value_name = "URL",
		env = "CINEREC_API_BASE",
		help = "Base URL of the recommendation service (default: http://localhost:8000)"
	)]
	pub(crate) api_base: Option<String>,
	#[arg(
		short = 'k',
		long = "top-n",
		value_name = "NUM",
		help = "Number of results to request: 6, 12 or 24 (default: 12)"
	)]
	pub(crate) top_n: Option<u32>,
	#[arg(
		long = "stale-responses",
		value_enum,
		help = "Handle responses to superseded queries (default: discard)"
	)]
	pub(crate) stale_responses: Option<StalePolicyArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title shown above the input (default: Movie Recommender)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Query submitted as soon as the UI starts (default: none)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long = "suggestions",
		value_delimiter = ',',
		value_name = "QUERY",
		help = "Comma-separated quick-pick queries shown under the input (default: none)"
	)]
	pub(crate) suggestions: Option<Vec<String>>,
	#[arg(
		long = "empty-prompt",
		value_name = "TEXT",
		help = "Message shown when there are no results (default: Search for movies)"
	)]
	pub(crate) empty_prompt: Option<String>,
	#[arg(
		long = "error-notice",
		value_name = "TEXT",
		help = "Banner text raised when a request fails (default: Recommendation error - check backend)"
	)]
	pub(crate) error_notice: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		default_value_t = LogLevelArg::Info,
		help = "Minimum level shown in the log pane"
	)]
	pub(crate) log_level: LogLevelArg,
	#[arg(
		long = "check",
		help = "Query the service health endpoint and exit (default: disabled)"
	)]
	pub(crate) check: bool,
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
