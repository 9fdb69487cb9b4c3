use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference used instead of a poster when the service did not supply one.
pub const PLACEHOLDER_POSTER: &str = "builtin:placeholder-poster";

/// Number of plot words kept by [`ResultItem::plot_excerpt`].
pub const PLOT_WORD_LIMIT: usize = 80;

/// Appended to a plot that was cut at [`PLOT_WORD_LIMIT`].
pub const TRUNCATION_MARKER: &str = "...";

/// Shown in place of optional text that is absent.
pub const MISSING_VALUE: &str = "—";

/// One recommended media entry as returned by the service.
///
/// Field names on the wire are capitalized (`Title`, `Director`, ...). Text
/// fields are decoded leniently so that numeric cells coming out of a CSV
/// backed service (for example `"Year": 1999.0`) still display sensibly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
	#[serde(rename = "Title")]
	pub title: String,
	#[serde(
		rename = "Director",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub director: Option<String>,
	#[serde(
		rename = "Genre",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub genre: Option<String>,
	#[serde(
		rename = "Year",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub year: Option<String>,
	#[serde(
		rename = "Cast",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub cast: Option<String>,
	#[serde(
		rename = "Plot",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub plot: Option<String>,
	#[serde(
		rename = "Poster",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub poster: Option<String>,
	#[serde(rename = "Score", default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
	/// Secondary relevance field some service versions emit instead of `Score`.
	#[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
	pub alt_score: Option<f64>,
}

impl ResultItem {
	#[must_use]
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}

	/// First comma-separated genre segment, if any.
	#[must_use]
	pub fn primary_genre(&self) -> Option<&str> {
		self.genre
			.as_deref()
			.and_then(|genre| genre.split(',').next())
			.map(str::trim)
			.filter(|segment| !segment.is_empty())
	}

	/// Plot cut to the first [`PLOT_WORD_LIMIT`] words, or [`MISSING_VALUE`].
	///
	/// The marker is only appended when words were actually dropped.
	#[must_use]
	pub fn plot_excerpt(&self) -> String {
		match self.plot.as_deref().map(str::trim) {
			Some(plot) if !plot.is_empty() => truncate_words(plot, PLOT_WORD_LIMIT),
			_ => MISSING_VALUE.to_string(),
		}
	}

	/// Relevance score: the first non-zero of `Score` and `_score`, else 0.
	#[must_use]
	pub fn effective_score(&self) -> f64 {
		[self.score, self.alt_score]
			.into_iter()
			.flatten()
			.find(|score| *score != 0.0 && !score.is_nan())
			.unwrap_or(0.0)
	}

	/// Score rendered with exactly three decimal places.
	#[must_use]
	pub fn score_label(&self) -> String {
		format!("{:.3}", self.effective_score())
	}
}

/// Map an item to the poster reference that should be displayed.
#[must_use]
pub fn resolve_poster(item: &ResultItem) -> &str {
	item.poster
		.as_deref()
		.map(str::trim)
		.filter(|poster| !poster.is_empty())
		.unwrap_or(PLACEHOLDER_POSTER)
}

/// Keep the first `limit` whitespace-delimited words of `text`.
#[must_use]
pub fn truncate_words(text: &str, limit: usize) -> String {
	let mut words = text.split_whitespace();
	let kept: Vec<&str> = words.by_ref().take(limit).collect();
	let mut excerpt = kept.join(" ");
	if words.next().is_some() {
		excerpt.push_str(TRUNCATION_MARKER);
	}
	excerpt
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(None),
		Value::String(text) => Ok(Some(text)),
		Value::Bool(flag) => Ok(Some(flag.to_string())),
		Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				return Ok(Some(value.to_string()));
			}
			if let Some(value) = number.as_f64()
				&& value.is_finite()
				&& value.fract() == 0.0
			{
				return Ok(Some(format!("{value:.0}")));
			}
			Ok(Some(number.to_string()))
		}
		other => Err(de::Error::custom(format!(
			"expected text or number, found {other}"
		))),
	}
}
