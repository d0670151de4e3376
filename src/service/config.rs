//! Token service configuration, builder, and environment loading.

// self
use crate::{
	_prelude::*,
	auth::{IntegrityMode, SigningKey},
	error::ConfigError,
};

/// Ten years: effectively non-expiring for interactive use.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::seconds(10 * 365 * 24 * 60 * 60);
/// Header that carries the active credential on search requests.
pub const DEFAULT_HEADER_NAME: &str = "X-Search-Token";
/// Environment variable holding the HMAC secret; its presence selects [`IntegrityMode::Hmac`].
pub const SECRET_ENV: &str = "SEARCH_TOKEN_SECRET";
/// Environment variable overriding the validity window, in whole seconds.
pub const VALIDITY_ENV: &str = "SEARCH_TOKEN_VALIDITY_SECS";

/// Settings consumed by [`TokenService`](crate::service::TokenService).
#[derive(Clone, Debug)]
pub struct TokenServiceConfig {
	/// Window added to the mint instant to derive the expiry.
	pub validity_window: Duration,
	/// Integrity tag strategy.
	pub integrity: IntegrityMode,
	/// Header name used when attaching the credential.
	pub header_name: String,
}
impl TokenServiceConfig {
	/// Returns a builder seeded with the defaults.
	pub fn builder() -> TokenServiceConfigBuilder {
		TokenServiceConfigBuilder::default()
	}

	/// Loads overrides from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads overrides through an arbitrary key lookup.
	///
	/// [`SECRET_ENV`] switches to HMAC tags and must be non-empty when set. [`VALIDITY_ENV`]
	/// overrides the window and must parse as a signed integer.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut builder = Self::builder();

		if let Some(secret) = lookup(SECRET_ENV) {
			builder = builder.integrity(IntegrityMode::Hmac(SigningKey::new(secret)?));
		}
		if let Some(raw) = lookup(VALIDITY_ENV) {
			let seconds = raw
				.trim()
				.parse::<i64>()
				.map_err(|_| ConfigError::InvalidWindow { value: raw.clone() })?;

			builder = builder.validity_window(Duration::seconds(seconds));
		}

		builder.build()
	}
}
impl Default for TokenServiceConfig {
	fn default() -> Self {
		Self {
			validity_window: DEFAULT_VALIDITY_WINDOW,
			integrity: IntegrityMode::default(),
			header_name: DEFAULT_HEADER_NAME.into(),
		}
	}
}

/// Builder for [`TokenServiceConfig`] values.
#[derive(Debug, Default)]
pub struct TokenServiceConfigBuilder {
	config: TokenServiceConfig,
}
impl TokenServiceConfigBuilder {
	/// Overrides the validity window. Zero and negative windows mint already-expired tokens.
	pub fn validity_window(mut self, window: Duration) -> Self {
		self.config.validity_window = window;

		self
	}

	/// Overrides the integrity tag strategy.
	pub fn integrity(mut self, integrity: IntegrityMode) -> Self {
		self.config.integrity = integrity;

		self
	}

	/// Overrides the credential header name.
	pub fn header_name(mut self, name: impl Into<String>) -> Self {
		self.config.header_name = name.into();

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<TokenServiceConfig, ConfigError> {
		validate_header_name(&self.config.header_name)?;

		Ok(self.config)
	}
}

fn validate_header_name(name: &str) -> Result<(), ConfigError> {
	const TOKEN_SYMBOLS: &str = "!#$%&'*+-.^_`|~";

	if name.is_empty()
		|| !name.chars().all(|c| c.is_ascii_alphanumeric() || TOKEN_SYMBOLS.contains(c))
	{
		return Err(ConfigError::InvalidHeaderName { name: name.to_owned() });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> =
			pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

		move |key| map.get(key).cloned()
	}

	#[test]
	fn defaults_match_reference_behavior() {
		let config = TokenServiceConfig::default();

		assert_eq!(config.validity_window.whole_seconds(), 315_360_000);
		assert!(!config.integrity.is_verifying());
		assert_eq!(config.header_name, "X-Search-Token");
	}

	#[test]
	fn lookup_overrides_secret_and_window() {
		let config = TokenServiceConfig::from_lookup(lookup(&[
			(SECRET_ENV, "s3cret"),
			(VALIDITY_ENV, " 60 "),
		]))
		.expect("Overrides should load.");

		assert!(config.integrity.is_verifying());
		assert_eq!(config.validity_window, Duration::minutes(1));

		let empty = TokenServiceConfig::from_lookup(lookup(&[]))
			.expect("Missing overrides should fall back to defaults.");

		assert!(!empty.integrity.is_verifying());
	}

	#[test]
	fn lookup_rejects_bad_values() {
		assert!(matches!(
			TokenServiceConfig::from_lookup(lookup(&[(SECRET_ENV, "")])),
			Err(ConfigError::EmptySigningKey)
		));
		assert!(matches!(
			TokenServiceConfig::from_lookup(lookup(&[(VALIDITY_ENV, "ten years")])),
			Err(ConfigError::InvalidWindow { .. })
		));
	}

	#[test]
	fn builder_validates_header_name() {
		assert!(TokenServiceConfig::builder().header_name("X-Custom-Token").build().is_ok());
		assert!(matches!(
			TokenServiceConfig::builder().header_name("bad header").build(),
			Err(ConfigError::InvalidHeaderName { .. })
		));
		assert!(TokenServiceConfig::builder().header_name("").build().is_err());
	}
}
