//! Integrity tags appended to credentials.
//!
//! Two modes exist. [`IntegrityMode::Marker`] is the default fast path: the tag is a base64url
//! rendering of `role-subject-mintMillis`. Anyone can forge it, so it only identifies the token for
//! trusted-client request tagging and is never a security boundary. [`IntegrityMode::Hmac`] signs
//! the payload segment with HMAC-SHA256 and is re-verified on every validity check and decode.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
// self
use crate::{_prelude::*, auth::TokenClaims, error::ConfigError};

type HmacSha256 = Hmac<Sha256>;

const GENERATED_KEY_LEN: usize = 32;

/// HMAC-SHA256 key used by [`IntegrityMode::Hmac`].
#[derive(Clone)]
pub struct SigningKey(HmacSha256);
impl SigningKey {
	/// Builds a key from caller-provided secret material.
	pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
		let secret = secret.as_ref();

		if secret.is_empty() {
			return Err(ConfigError::EmptySigningKey);
		}

		<HmacSha256 as Mac>::new_from_slice(secret)
			.map(Self)
			.map_err(|_| ConfigError::EmptySigningKey)
	}

	/// Builds a key from 32 random bytes; credentials signed with it only verify in-process.
	pub fn generate() -> Result<Self, ConfigError> {
		let mut secret = [0_u8; GENERATED_KEY_LEN];

		rand::rng().fill_bytes(&mut secret);

		Self::new(secret)
	}

	fn sign(&self, payload_segment: &str) -> Vec<u8> {
		self.0.clone().chain_update(payload_segment.as_bytes()).finalize().into_bytes().to_vec()
	}

	fn verify(&self, payload_segment: &str, tag: &[u8]) -> bool {
		self.0.clone().chain_update(payload_segment.as_bytes()).verify_slice(tag).is_ok()
	}
}
impl Debug for SigningKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SigningKey").field(&"<redacted>").finish()
	}
}

/// Strategy used to produce and check the second credential segment.
#[derive(Clone, Debug, Default)]
pub enum IntegrityMode {
	/// Deterministic, unkeyed marker. Not verifiable; trusted-client-only.
	#[default]
	Marker,
	/// Keyed HMAC-SHA256 over the payload segment.
	Hmac(SigningKey),
}
impl IntegrityMode {
	/// Returns `true` when tags are cryptographically checked.
	pub fn is_verifying(&self) -> bool {
		matches!(self, Self::Hmac(_))
	}

	/// Produces the base64url tag segment for freshly minted claims.
	pub fn tag(
		&self,
		claims: &TokenClaims,
		payload_segment: &str,
		minted_at: OffsetDateTime,
	) -> String {
		match self {
			Self::Marker => {
				let millis = minted_at.unix_timestamp_nanos() / 1_000_000;

				URL_SAFE_NO_PAD.encode(format!("{}-{}-{millis}", claims.role, claims.subject))
			},
			Self::Hmac(key) => URL_SAFE_NO_PAD.encode(key.sign(payload_segment)),
		}
	}

	/// Checks a tag segment against its payload segment.
	///
	/// Marker tags are never checked and always pass.
	pub fn verify(&self, payload_segment: &str, tag_segment: &str) -> bool {
		match self {
			Self::Marker => true,
			Self::Hmac(key) => match URL_SAFE_NO_PAD.decode(tag_segment) {
				Ok(tag) => key.verify(payload_segment, &tag),
				Err(_) => false,
			},
		}
	}
}
