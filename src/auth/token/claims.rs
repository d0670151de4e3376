//! Credential payload (`role`, `subjectId`, `iat`, `exp`) and its base64url segment codec.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::{
	_prelude::*,
	auth::{Role, SubjectId},
};

/// Separator between the payload and integrity segments of a credential.
pub const SEGMENT_SEPARATOR: char = '.';

/// JSON payload embedded as the first credential segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
	/// Role asserted by the token.
	pub role: Role,
	/// Principal the token was minted for.
	#[serde(rename = "subjectId")]
	pub subject: SubjectId,
	/// Issued-at instant in epoch seconds.
	pub iat: i64,
	/// Expiry instant in epoch seconds.
	pub exp: i64,
}
impl TokenClaims {
	/// Builds claims for the provided identity and validity bounds.
	pub fn new(
		role: Role,
		subject: SubjectId,
		issued_at: OffsetDateTime,
		expires_at: OffsetDateTime,
	) -> Self {
		Self { role, subject, iat: issued_at.unix_timestamp(), exp: expires_at.unix_timestamp() }
	}

	/// Serializes the claims to JSON and encodes them as an unpadded base64url segment.
	pub fn encode_segment(&self) -> String {
		// Every field serializes infallibly, so the empty fallback is unreachable.
		let json = serde_json::to_vec(self).unwrap_or_default();

		URL_SAFE_NO_PAD.encode(json)
	}

	/// Decodes a payload segment, returning `None` on invalid base64, JSON, role, or subject.
	pub fn decode_segment(segment: &str) -> Option<Self> {
		let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;

		serde_json::from_slice(&bytes).ok()
	}

	/// Reads the claims out of a full credential without checking its integrity tag.
	pub fn from_credential(credential: &str) -> Option<Self> {
		let (payload, _) = split_credential(credential)?;

		Self::decode_segment(payload)
	}
}

/// Splits a credential into its payload and integrity segments.
///
/// Returns `None` unless the credential holds exactly two non-empty segments.
pub fn split_credential(credential: &str) -> Option<(&str, &str)> {
	let (payload, tag) = credential.split_once(SEGMENT_SEPARATOR)?;

	if payload.is_empty() || tag.is_empty() || tag.contains(SEGMENT_SEPARATOR) {
		return None;
	}

	Some((payload, tag))
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn claims() -> TokenClaims {
		let subject = SubjectId::new("seller-1").expect("Subject fixture should be valid.");
		let issued = macros::datetime!(2025-01-01 00:00 UTC);

		TokenClaims::new(Role::Seller, subject, issued, issued + Duration::hours(1))
	}

	#[test]
	fn segment_uses_wire_field_names() {
		let segment = claims().encode_segment();
		let raw = URL_SAFE_NO_PAD.decode(&segment).expect("Segment should be valid base64url.");
		let value: serde_json::Value =
			serde_json::from_slice(&raw).expect("Segment should contain JSON.");

		assert_eq!(value["role"], "seller");
		assert_eq!(value["subjectId"], "seller-1");
		assert_eq!(value["iat"], 1_735_689_600_i64);
		assert_eq!(value["exp"], 1_735_693_200_i64);
		assert!(!segment.contains('='), "Segments must not carry padding.");
	}

	#[test]
	fn segment_follows_declared_field_order() {
		let raw = URL_SAFE_NO_PAD
			.decode(claims().encode_segment())
			.expect("Segment should be valid base64url.");
		let json = String::from_utf8(raw).expect("Segment should be UTF-8 JSON.");

		assert_eq!(
			json,
			r#"{"role":"seller","subjectId":"seller-1","iat":1735689600,"exp":1735693200}"#
		);
	}

	#[test]
	fn decode_segment_rejects_garbage() {
		assert!(TokenClaims::decode_segment("!!not-base64!!").is_none());
		assert!(TokenClaims::decode_segment(&URL_SAFE_NO_PAD.encode("not json")).is_none());
		assert!(
			TokenClaims::decode_segment(&URL_SAFE_NO_PAD.encode(
				r#"{"role":"admin","subjectId":"x","iat":0,"exp":1}"#
			))
			.is_none(),
			"Unknown roles must not decode."
		);
		assert!(
			TokenClaims::decode_segment(&URL_SAFE_NO_PAD.encode(
				r#"{"role":"buyer","subjectId":"","iat":0,"exp":1}"#
			))
			.is_none(),
			"Empty subjects must not decode."
		);
	}

	#[test]
	fn split_requires_exactly_two_segments() {
		assert_eq!(split_credential("a.b"), Some(("a", "b")));
		assert!(split_credential("ab").is_none());
		assert!(split_credential(".b").is_none());
		assert!(split_credential("a.").is_none());
		assert!(split_credential("a.b.c").is_none());
	}

	#[test]
	fn from_credential_ignores_tag() {
		let expected = claims();
		let credential = format!("{}.anything", expected.encode_segment());

		assert_eq!(TokenClaims::from_credential(&credential), Some(expected));
	}
}
