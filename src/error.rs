//! Crate-level error types shared by the token service, session, and API client.

// self
use crate::{_prelude::*, auth::IdentifierError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller supplied a malformed role, subject, or validity window.
	#[error(transparent)]
	InvalidInput(#[from] InvalidInputError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The remote API answered with a non-success status.
	#[error("API responded with status {status}: {message}.")]
	Api {
		/// HTTP status code.
		status: u16,
		/// Response body or canonical reason phrase.
		message: String,
	},
	/// The remote API answered with JSON that does not match the expected shape.
	#[error("API returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Malformed inputs rejected before any token encoding happens.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidInputError {
	/// Subject identifier failed validation.
	#[error("Subject identifier is invalid.")]
	Subject(#[from] IdentifierError),
	/// Role label is not one of seller, buyer, carrier, or agent.
	#[error("Unknown role `{value}`.")]
	UnknownRole {
		/// Rejected role label.
		value: String,
	},
	/// Validity window pushes the expiry outside the representable date range.
	#[error("Validity window of {seconds} seconds exceeds the supported range.")]
	WindowOutOfRange {
		/// Requested window in whole seconds.
		seconds: i64,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// API base URL or endpoint path cannot be parsed.
	#[error("API URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// API base URL cannot carry path segments (e.g. `mailto:` or `data:` URLs).
	#[error("API base URL `{url}` cannot be used as a base.")]
	UnsupportedBaseUrl {
		/// Rejected base URL.
		url: String,
	},
	/// HMAC signing key is empty.
	#[error("Signing key cannot be empty.")]
	EmptySigningKey,
	/// Credential header name is not a valid HTTP token.
	#[error("Header name `{name}` is not a valid HTTP header name.")]
	InvalidHeaderName {
		/// Rejected header name.
		name: String,
	},
	/// Credential cannot be carried as an HTTP header value.
	#[error("Credential is not a valid HTTP header value.")]
	InvalidHeaderValue,
	/// Validity window setting cannot be parsed.
	#[error("Validity window `{value}` is not a whole number of seconds.")]
	InvalidWindow {
		/// Raw setting value.
		value: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<url::ParseError> for ConfigError {
	fn from(source: url::ParseError) -> Self {
		Self::InvalidBaseUrl { source }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn invalid_input_converts_with_source() {
		let input = InvalidInputError::UnknownRole { value: "admin".into() };
		let error: Error = input.clone().into();

		assert!(matches!(error, Error::InvalidInput(_)));
		assert_eq!(error.to_string(), "Unknown role `admin`.");

		let subject = InvalidInputError::from(IdentifierError::Empty { kind: "Subject" });
		let source = StdError::source(&subject)
			.expect("Subject errors should expose the identifier failure as their source.");

		assert_eq!(source.to_string(), "Subject identifier cannot be empty.");
	}

	#[test]
	fn url_parse_failures_become_config_errors() {
		let parse = Url::parse("not a url").expect_err("Fixture should fail to parse.");
		let error = Error::from(ConfigError::from(parse));

		assert_eq!(error.to_string(), "API URL is invalid.");
	}
}
