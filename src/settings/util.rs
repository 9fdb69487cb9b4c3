use std::collections::HashSet;

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub(super) fn normalize_base_url(value: &str) -> String {
	value.trim().trim_end_matches('/').to_string()
}

/// Remove blank and duplicate suggestions, keeping the first occurrence.
pub(super) fn sanitize_suggestions(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let trimmed = value.trim().to_string();
		if trimmed.is_empty() {
			continue;
		}
		if seen.insert(trimmed.to_lowercase()) {
			cleaned.push(trimmed);
		}
	}
	cleaned
}
