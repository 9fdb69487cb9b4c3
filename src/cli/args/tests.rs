use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, LogLevelArg, OutputFormat, StalePolicyArg};

fn parse(args: &[&str]) -> CliArgs {
	let command = CliArgs::command();
	let mut matches = command
		.try_get_matches_from(args.iter().copied())
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
	assert!(CliArgs::command().get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["cinerec"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.log_level, LogLevelArg::Info);
	assert!(parsed.top_n.is_none());
	assert!(!parsed.check);
}

#[test]
fn service_and_search_flags_are_parsed() {
	let parsed = parse(&[
		"cinerec",
		"--api-base",
		"http://recs.internal:9000",
		"--top-n",
		"24",
		"--stale-responses",
		"apply",
		"--suggestions",
		"Nolan movies,Space westerns",
		"-o",
		"json",
	]);
	assert_eq!(parsed.api_base.as_deref(), Some("http://recs.internal:9000"));
	assert_eq!(parsed.top_n, Some(24));
	assert_eq!(parsed.stale_responses, Some(StalePolicyArg::Apply));
	assert_eq!(
		parsed.suggestions,
		Some(vec!["Nolan movies".to_string(), "Space westerns".to_string()])
	);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn stale_policy_arg_matches_configuration_spelling() {
	assert_eq!(StalePolicyArg::Discard.as_str(), "discard");
	assert_eq!(StalePolicyArg::Apply.as_str(), "apply");
}
