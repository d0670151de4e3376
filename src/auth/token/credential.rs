//! Credential wrapper that redacts the serialized token from logs.

// self
use crate::_prelude::*;

const PREVIEW_LEN: usize = 16;

/// Serialized `<payload>.<tag>` credential attached to outbound search requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);
impl Credential {
	/// Wraps a serialized credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw credential. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns a short, log-safe prefix of the credential followed by `...`.
	pub fn preview(&self) -> String {
		let head: String = self.0.chars().take(PREVIEW_LEN).collect();

		format!("{head}...")
	}
}
impl AsRef<str> for Credential {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Credential").field(&"<redacted>").finish()
	}
}
impl Display for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
