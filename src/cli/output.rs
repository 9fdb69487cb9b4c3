use anyhow::Result;
use cinerec::SessionOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Session ended without a selection (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => match item.year.as_deref() {
			Some(year) => println!("{} ({year})", item.title),
			None => println!("{}", item.title),
		},
		None => println!("No selection"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(item) => json!({
			"title": item.title,
			"year": item.year,
			"director": item.director,
			"genre": item.genre,
			"score": item.effective_score(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use cinerec::ResultItem;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_the_accepted_item() {
		let item = ResultItem {
			year: Some("1995".into()),
			alt_score: Some(0.5),
			..ResultItem::new("Heat")
		};
		let outcome = SessionOutcome::accepted("crime", item);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "crime");
		assert_eq!(value["selection"]["title"], "Heat");
		assert_eq!(value["selection"]["year"], "1995");
		assert_eq!(value["selection"]["score"], 0.5);
		assert!(value["selection"]["director"].is_null());
	}

	#[test]
	fn json_format_uses_null_without_a_selection() {
		let outcome = SessionOutcome::cancelled("heat");
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
