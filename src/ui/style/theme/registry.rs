use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

fn find(name: &str) -> Option<&'static ThemeDefinition> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS.iter().find(|definition| {
		definition.name == normalized
			|| definition
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == normalized)
	})
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::super::builtins::{LIGHT, SLATE, SOLARIZED};
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_honours_aliases() {
		assert_eq!(by_name("Light"), Some(LIGHT));
		assert_eq!(by_name("DARK"), Some(SLATE));
		assert_eq!(by_name("solarized_dark"), Some(SOLARIZED));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_list_every_builtin_once() {
		assert_eq!(names(), vec!["slate", "light", "solarized"]);
	}
}
