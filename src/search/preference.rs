use std::fmt;

use thiserror::Error;

/// How many results to request from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultCountPreference {
	Six,
	#[default]
	Twelve,
	TwentyFour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported result count {0}; expected one of 6, 12, 24")]
pub struct UnsupportedResultCount(pub u32);

impl ResultCountPreference {
	pub const ALL: [Self; 3] = [Self::Six, Self::Twelve, Self::TwentyFour];

	#[must_use]
	pub const fn count(self) -> u32 {
		match self {
			Self::Six => 6,
			Self::Twelve => 12,
			Self::TwentyFour => 24,
		}
	}

	/// Cycle through the enumerated values, wrapping around.
	#[must_use]
	pub const fn next(self) -> Self {
		match self {
			Self::Six => Self::Twelve,
			Self::Twelve => Self::TwentyFour,
			Self::TwentyFour => Self::Six,
		}
	}
}

impl TryFrom<u32> for ResultCountPreference {
	type Error = UnsupportedResultCount;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|preference| preference.count() == value)
			.ok_or(UnsupportedResultCount(value))
	}
}

impl fmt::Display for ResultCountPreference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.count())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_the_middle_value() {
		assert_eq!(ResultCountPreference::default().count(), 12);
	}

	#[test]
	fn only_enumerated_counts_convert() {
		assert_eq!(
			ResultCountPreference::try_from(24),
			Ok(ResultCountPreference::TwentyFour)
		);
		assert_eq!(
			ResultCountPreference::try_from(10),
			Err(UnsupportedResultCount(10))
		);
	}

	#[test]
	fn next_wraps_around() {
		let mut preference = ResultCountPreference::Six;
		let mut seen = Vec::new();
		for _ in 0..4 {
			seen.push(preference.count());
			preference = preference.next();
		}
		assert_eq!(seen, vec![6, 12, 24, 6]);
	}
}
