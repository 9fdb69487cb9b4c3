use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Service: {}", config.base_url);
	println!("  Results per query: {}", config.top_n);
	println!("  Stale responses: {}", config.stale_responses);
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	println!("  Title: {}", config.ui.title);
	println!("  Empty prompt: {}", config.ui.empty_prompt);
	println!("  Error notice: {}", config.ui.error_notice);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Suggestions: {}", list_or_none(&config.ui.suggestions));
}

fn list_or_none(values: &[String]) -> String {
	if values.is_empty() {
		"(none)".to_string()
	} else {
		values.join(", ")
	}
}

#[cfg(test)]
mod tests {
	use cinerec::UiConfig;

	use super::*;

	#[test]
	fn list_or_none_matches_expectations() {
		assert_eq!(list_or_none(&[]), "(none)");
		assert_eq!(list_or_none(&["a".into(), "b".into()]), "a, b");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			base_url: "http://localhost:8000".into(),
			top_n: 12,
			stale_responses: "discard".into(),
			initial_query: "heat".into(),
			theme: Some("slate".into()),
			ui: UiConfig::default(),
		};

		print_summary(&config);
	}
}
