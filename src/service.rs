//! Local search-token service: mint, freshness check, and decode without any network round-trip.
//!
//! [`TokenService::mint`] binds a [`Role`] and subject to a validity window. The result is an
//! [`AccessToken`] whose credential reads `<base64url(JSON payload)>.<base64url(tag)>`.
//! [`TokenService::is_valid`] compares the clock against the token's RFC 3339 expiry marker.
//! [`TokenService::decode`] recovers the identity from a credential. Decode and validity failures
//! are expected outcomes, so they surface as `None` / `false` instead of errors.

pub mod config;

pub use config::*;

// crates.io
use time::format_description::well_known::Rfc3339;
// self
use crate::{
	_prelude::*,
	auth::{
		AccessToken, Credential, Role, SEGMENT_SEPARATOR, SubjectId, TokenClaims, TokenStatus,
		split_credential,
	},
	obs::{self, OpOutcome, OpSpan, TokenOp},
};

/// Identity recovered from a credential by [`TokenService::decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedIdentity {
	/// Role asserted by the credential.
	pub role: Role,
	/// Principal the credential was minted for.
	pub subject: SubjectId,
}

/// Mints and checks search tokens according to a [`TokenServiceConfig`].
#[derive(Clone, Debug, Default)]
pub struct TokenService {
	config: TokenServiceConfig,
}
impl TokenService {
	/// Creates a service for the provided config.
	pub fn new(config: TokenServiceConfig) -> Self {
		Self { config }
	}

	/// Active configuration.
	pub fn config(&self) -> &TokenServiceConfig {
		&self.config
	}

	/// Mints a token valid for `validity_window` from now.
	pub fn mint(
		&self,
		role: Role,
		subject: impl AsRef<str>,
		validity_window: Duration,
	) -> Result<AccessToken, InvalidInputError> {
		self.mint_at(role, subject, validity_window, OffsetDateTime::now_utc())
	}

	/// Mints a token using the configured validity window.
	pub fn mint_default(
		&self,
		role: Role,
		subject: impl AsRef<str>,
	) -> Result<AccessToken, InvalidInputError> {
		self.mint(role, subject, self.config.validity_window)
	}

	/// Mints a token as of `now`.
	///
	/// The subject is validated before anything is encoded. The issue instant is truncated to
	/// millisecond precision.
	pub fn mint_at(
		&self,
		role: Role,
		subject: impl AsRef<str>,
		validity_window: Duration,
		now: OffsetDateTime,
	) -> Result<AccessToken, InvalidInputError> {
		const OP: TokenOp = TokenOp::Mint;

		let _span = OpSpan::new(OP, "mint_at").entered();

		obs::record_op_outcome(OP, OpOutcome::Attempt);

		let result = SubjectId::new(subject)
			.map_err(InvalidInputError::from)
			.and_then(|subject| self.mint_for(role, subject, validity_window, now));

		obs::record_op_outcome(OP, OpOutcome::from_bool(result.is_ok()));

		result
	}

	pub(crate) fn mint_for(
		&self,
		role: Role,
		subject: SubjectId,
		validity_window: Duration,
		now: OffsetDateTime,
	) -> Result<AccessToken, InvalidInputError> {
		let out_of_range =
			|| InvalidInputError::WindowOutOfRange { seconds: validity_window.whole_seconds() };
		let issued_at = now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000_000));
		let expires_at = issued_at.checked_add(validity_window).ok_or_else(out_of_range)?;
		let expiry_marker = expires_at.format(&Rfc3339).map_err(|_| out_of_range())?;
		let claims = TokenClaims::new(role, subject, issued_at, expires_at);
		let payload = claims.encode_segment();
		let tag = self.config.integrity.tag(&claims, &payload, issued_at);
		let credential = Credential::new(format!("{payload}{SEGMENT_SEPARATOR}{tag}"));

		Ok(AccessToken::new(claims.role, claims.subject, issued_at, expiry_marker, credential))
	}

	/// Returns `true` while the token's expiry marker lies in the future.
	pub fn is_valid(&self, token: &AccessToken) -> bool {
		self.is_valid_at(token, OffsetDateTime::now_utc())
	}

	/// Checks freshness as of `now`.
	///
	/// With HMAC integrity the credential must also verify and carry the token's own identity.
	/// An unparseable expiry marker counts as invalid.
	pub fn is_valid_at(&self, token: &AccessToken, now: OffsetDateTime) -> bool {
		const OP: TokenOp = TokenOp::Validate;

		let _span = OpSpan::new(OP, "is_valid_at").entered();
		let verdict = self.check_integrity(token).and_then(|()| match token.status_at(now) {
			TokenStatus::Active => Ok(()),
			TokenStatus::Expired => Err("expired"),
			TokenStatus::Unreadable => Err("unparseable expiry"),
		});

		if let Err(reason) = verdict {
			obs::note_rejection(OP, reason);
		}

		obs::record_op_outcome(OP, OpOutcome::from_bool(verdict.is_ok()));

		verdict.is_ok()
	}

	/// Recovers the identity carried by a credential.
	///
	/// Returns `None` on a missing separator, invalid base64, invalid JSON, an unknown role, an
	/// invalid subject, or (with HMAC integrity) a tag that does not verify.
	pub fn decode(&self, credential: &str) -> Option<DecodedIdentity> {
		const OP: TokenOp = TokenOp::Decode;

		let _span = OpSpan::new(OP, "decode").entered();

		match self.decode_checked(credential) {
			Ok(claims) => {
				obs::record_op_outcome(OP, OpOutcome::Success);

				Some(DecodedIdentity { role: claims.role, subject: claims.subject })
			},
			Err(reason) => {
				obs::note_rejection(OP, reason);
				obs::record_op_outcome(OP, OpOutcome::Failure);

				None
			},
		}
	}

	fn decode_checked(&self, credential: &str) -> Result<TokenClaims, &'static str> {
		let (payload, tag) = split_credential(credential).ok_or("malformed credential segments")?;

		if !self.config.integrity.verify(payload, tag) {
			return Err("integrity tag mismatch");
		}

		TokenClaims::decode_segment(payload).ok_or("malformed payload")
	}

	fn check_integrity(&self, token: &AccessToken) -> Result<(), &'static str> {
		if !self.config.integrity.is_verifying() {
			return Ok(());
		}

		let claims = self.decode_checked(token.credential().expose())?;

		if claims.role != token.role() || &claims.subject != token.subject() {
			return Err("credential identity mismatch");
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::auth::{IntegrityMode, SigningKey};

	fn hmac_service() -> TokenService {
		let key = SigningKey::new("offer-management-secret").expect("Signing key should build.");

		TokenService::new(
			TokenServiceConfig::builder()
				.integrity(IntegrityMode::Hmac(key))
				.build()
				.expect("HMAC config should build."),
		)
	}

	#[test]
	fn mint_at_derives_expiry_from_window() {
		let now = macros::datetime!(2025-01-01 00:00:00.123456789 UTC);
		let token = TokenService::default()
			.mint_at(Role::Seller, "seller-1", Duration::hours(2), now)
			.expect("Mint should succeed.");

		assert_eq!(token.issued_at(), 1_735_689_600);
		assert_eq!(token.expires_at(), "2025-01-01T02:00:00.123Z");
		assert_eq!(token.expiry(), Some(macros::datetime!(2025-01-01 02:00:00.123 UTC)));

		let claims = TokenClaims::from_credential(token.credential().expose())
			.expect("Minted credentials should carry readable claims.");

		assert_eq!(claims.iat, 1_735_689_600);
		assert_eq!(claims.exp, 1_735_696_800);
	}

	#[test]
	fn mint_rejects_bad_subjects_and_windows() {
		let service = TokenService::default();

		assert!(matches!(
			service.mint(Role::Buyer, "", Duration::hours(1)),
			Err(InvalidInputError::Subject(_))
		));
		assert!(matches!(
			service.mint(Role::Buyer, "buyer 1", Duration::hours(1)),
			Err(InvalidInputError::Subject(_))
		));
		assert!(matches!(
			service.mint(Role::Buyer, "buyer-1", Duration::days(365 * 20_000)),
			Err(InvalidInputError::WindowOutOfRange { .. })
		));
	}

	#[test]
	fn validity_boundary_is_exclusive() {
		let now = macros::datetime!(2025-06-01 12:00 UTC);
		let service = TokenService::default();
		let token = service
			.mint_at(Role::Agent, "agent-1", Duration::minutes(5), now)
			.expect("Mint should succeed.");

		assert!(service.is_valid_at(&token, now));
		assert!(service.is_valid_at(&token, now + Duration::seconds(299)));
		assert!(!service.is_valid_at(&token, now + Duration::minutes(5)));
	}

	#[test]
	fn hmac_mode_rejects_foreign_and_tampered_credentials() {
		let signed = hmac_service();
		let token = signed.mint_default(Role::Carrier, "carrier-9").expect("Mint should succeed.");

		assert!(signed.is_valid(&token));
		assert_eq!(
			signed.decode(token.credential().expose()).map(|identity| identity.role),
			Some(Role::Carrier)
		);

		let marker_token =
			TokenService::default().mint_default(Role::Carrier, "carrier-9").expect("Mint.");

		assert!(!signed.is_valid(&marker_token), "Marker tags must not pass HMAC checks.");
		assert!(signed.decode(marker_token.credential().expose()).is_none());

		let (_, tag) = split_credential(token.credential().expose())
			.expect("Minted credentials should split.");
		let forged_payload = TokenClaims::new(
			Role::Agent,
			SubjectId::new("carrier-9").expect("Subject fixture should be valid."),
			OffsetDateTime::now_utc(),
			OffsetDateTime::now_utc() + Duration::days(1),
		)
		.encode_segment();

		assert!(signed.decode(&format!("{forged_payload}.{tag}")).is_none());
	}

	#[test]
	fn hmac_mode_checks_token_fields_against_credential() {
		let signed = hmac_service();
		let genuine = signed.mint_default(Role::Buyer, "buyer-1").expect("Mint should succeed.");
		let other = signed.mint_default(Role::Agent, "agent-1").expect("Mint should succeed.");
		let mut value = serde_json::to_value(&genuine).expect("Token should serialize.");

		value["credential"] = serde_json::json!(other.credential().expose());

		let spliced: AccessToken =
			serde_json::from_value(value).expect("Spliced token should deserialize.");

		assert!(!signed.is_valid(&spliced));
		assert!(TokenService::default().is_valid(&spliced), "Marker mode never re-verifies.");
	}
}
