//! Immutable access-token record and lifecycle helpers.

// crates.io
use time::format_description::well_known::Rfc3339;
// self
use crate::{
	_prelude::*,
	auth::{Role, SubjectId, token::credential::Credential},
};

/// Current lifecycle status for an access token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// Token is still inside its validity window.
	Active,
	/// Token reached its expiry instant.
	Expired,
	/// The expiry marker cannot be parsed; the token is treated as absent.
	Unreadable,
}

/// Minted search token binding a role and subject to an expiry.
///
/// Tokens are never updated in place. A session replaces the whole token when the identity
/// changes or the token goes stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
	role: Role,
	subject_id: SubjectId,
	issued_at: i64,
	expires_at: String,
	credential: Credential,
}
impl AccessToken {
	pub(crate) fn new(
		role: Role,
		subject: SubjectId,
		issued_at: OffsetDateTime,
		expires_at: String,
		credential: Credential,
	) -> Self {
		Self {
			role,
			subject_id: subject,
			issued_at: issued_at.unix_timestamp(),
			expires_at,
			credential,
		}
	}

	/// Role asserted by the token.
	pub fn role(&self) -> Role {
		self.role
	}

	/// Principal the token was minted for.
	pub fn subject(&self) -> &SubjectId {
		&self.subject_id
	}

	/// Mint instant in epoch seconds.
	pub fn issued_at(&self) -> i64 {
		self.issued_at
	}

	/// Authoritative RFC 3339 expiry marker.
	pub fn expires_at(&self) -> &str {
		&self.expires_at
	}

	/// Serialized credential carried in the search header.
	pub fn credential(&self) -> &Credential {
		&self.credential
	}

	/// Parses the expiry marker, returning `None` when it is not valid RFC 3339.
	pub fn expiry(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::parse(&self.expires_at, &Rfc3339).ok()
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		match self.expiry() {
			None => TokenStatus::Unreadable,
			Some(expiry) if instant < expiry => TokenStatus::Active,
			Some(_) => TokenStatus::Expired,
		}
	}

	/// Convenience helper that checks the status using the current UTC instant.
	pub fn status(&self) -> TokenStatus {
		self.status_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Expired)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn token(expires_at: &str) -> AccessToken {
		let subject = SubjectId::new("carrier-3").expect("Subject fixture should be valid.");

		AccessToken::new(
			Role::Carrier,
			subject,
			macros::datetime!(2025-01-01 00:00 UTC),
			expires_at.to_owned(),
			Credential::new("payload.tag"),
		)
	}

	#[test]
	fn status_follows_expiry_marker() {
		let token = token("2025-01-01T01:00:00.000Z");

		assert_eq!(token.status_at(macros::datetime!(2025-01-01 00:30 UTC)), TokenStatus::Active);
		assert_eq!(token.status_at(macros::datetime!(2025-01-01 01:00 UTC)), TokenStatus::Expired);
		assert!(token.is_expired_at(macros::datetime!(2025-01-02 00:00 UTC)));
		assert_eq!(token.issued_at(), 1_735_689_600);
	}

	#[test]
	fn unparseable_expiry_is_unreadable() {
		let token = token("next tuesday");

		assert!(token.expiry().is_none());
		assert_eq!(token.status(), TokenStatus::Unreadable);
		assert!(!token.is_expired_at(OffsetDateTime::now_utc()));
	}

	#[test]
	fn serializes_with_camel_case_fields() {
		let value = serde_json::to_value(token("2025-01-01T01:00:00Z"))
			.expect("Access token should serialize.");

		assert_eq!(value["role"], "carrier");
		assert_eq!(value["subjectId"], "carrier-3");
		assert_eq!(value["issuedAt"], 1_735_689_600_i64);
		assert_eq!(value["expiresAt"], "2025-01-01T01:00:00Z");
		assert_eq!(value["credential"], "payload.tag");
	}
}
