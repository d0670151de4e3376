//! Strongly typed identifiers enforced across the marketplace domain.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}

			/// Trailing decimal digits of the identifier (`"seller-2"` yields `2`), or `0` when
			/// the identifier does not end in digits.
			pub fn numeric_suffix(&self) -> u64 {
				numeric_suffix(&self.0)
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (subject, offer).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (subject, offer).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (subject, offer).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	SubjectId,
	"Principal a search token is issued for (a seller, buyer, carrier, or agent id).",
	"Subject"
}
def_id! { OfferId, "Identifier of a vehicle offer held by the remote API.", "Offer" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.chars().count() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

fn numeric_suffix(view: &str) -> u64 {
	let digits = view.len() - view.trim_end_matches(|c: char| c.is_ascii_digit()).len();

	view[view.len() - digits..].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_padding_and_empty_values() {
		assert!(SubjectId::new(" seller-1").is_err(), "Leading whitespace must be rejected.");
		assert!(SubjectId::new("seller-1 ").is_err(), "Trailing whitespace must be rejected.");

		let subject = SubjectId::new("seller-1").expect("Subject fixture should be valid.");

		assert_eq!(subject.as_ref(), "seller-1");
		assert_eq!(
			SubjectId::new("").expect_err("Empty subjects must be rejected."),
			IdentifierError::Empty { kind: "Subject" }
		);
		assert!(OfferId::new("with space").is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let subject: SubjectId =
			serde_json::from_str("\"buyer-42\"").expect("Subject should deserialize successfully.");

		assert_eq!(subject.as_ref(), "buyer-42");
		assert!(serde_json::from_str::<SubjectId>("\"with space\"").is_err());
		assert!(serde_json::from_str::<SubjectId>("\"\"").is_err());
	}

	#[test]
	fn length_limit_is_inclusive() {
		SubjectId::new("a".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert!(SubjectId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}

	#[test]
	fn length_limit_counts_characters() {
		let accented = "ü".repeat(100);

		assert!(accented.len() > IDENTIFIER_MAX_LEN);
		SubjectId::new(&accented).expect("Multi-byte characters count once each.");

		assert_eq!(
			SubjectId::new("ü".repeat(IDENTIFIER_MAX_LEN + 1))
				.expect_err("Character counts past the limit must be rejected."),
			IdentifierError::TooLong { kind: "Subject", max: IDENTIFIER_MAX_LEN }
		);
	}

	#[test]
	fn numeric_suffix_extracts_trailing_digits() {
		let id = |value: &str| SubjectId::new(value).expect("Suffix fixture should be valid.");

		assert_eq!(id("seller-2").numeric_suffix(), 2);
		assert_eq!(id("carrier-105").numeric_suffix(), 105);
		assert_eq!(id("17").numeric_suffix(), 17);
		assert_eq!(id("agent").numeric_suffix(), 0);
		assert_eq!(id("v2-beta").numeric_suffix(), 0);
	}
}
