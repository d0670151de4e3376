//! Request signing contracts that attach the active search credential to HTTP requests.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	Request, RequestBuilder,
	header::{HeaderName, HeaderValue},
};
// self
use crate::auth::AccessToken;
#[cfg(feature = "reqwest")]
use crate::{_prelude::*, error::ConfigError, service::DEFAULT_HEADER_NAME};

/// Describes how to attach an [`AccessToken`] to an outbound request without constraining the
/// HTTP client type.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the provided request and injects the token's credential.
	fn attach_token(&self, request: Request, token: &AccessToken) -> Result<Request, Error>;
}

/// Reqwest signer that sets the credential header (default `X-Search-Token`).
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct SearchTokenSigner {
	header: HeaderName,
}
#[cfg(feature = "reqwest")]
impl SearchTokenSigner {
	/// Creates a signer for a custom header name.
	pub fn new(header_name: &str) -> Result<Self, ConfigError> {
		let header = HeaderName::from_bytes(header_name.as_bytes())
			.map_err(|_| ConfigError::InvalidHeaderName { name: header_name.to_owned() })?;

		Ok(Self { header })
	}

	/// Header the signer writes.
	pub fn header(&self) -> &HeaderName {
		&self.header
	}

	fn header_value(token: &AccessToken) -> Result<HeaderValue, ConfigError> {
		let mut value = HeaderValue::from_str(token.credential().expose())
			.map_err(|_| ConfigError::InvalidHeaderValue)?;

		value.set_sensitive(true);

		Ok(value)
	}
}
#[cfg(feature = "reqwest")]
impl Default for SearchTokenSigner {
	fn default() -> Self {
		Self { header: HeaderName::from_static("x-search-token") }
	}
}
#[cfg(feature = "reqwest")]
impl RequestSignerExt<RequestBuilder, Error> for SearchTokenSigner {
	fn attach_token(
		&self,
		request: RequestBuilder,
		token: &AccessToken,
	) -> Result<RequestBuilder, Error> {
		Ok(request.header(self.header.clone(), Self::header_value(token)?))
	}
}
#[cfg(feature = "reqwest")]
impl RequestSignerExt<Request, Error> for SearchTokenSigner {
	fn attach_token(&self, mut request: Request, token: &AccessToken) -> Result<Request, Error> {
		request.headers_mut().insert(self.header.clone(), Self::header_value(token)?);

		Ok(request)
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::{auth::Role, service::TokenService};

	#[test]
	fn default_signer_matches_default_header_name() {
		let signer = SearchTokenSigner::default();

		assert!(signer.header().as_str().eq_ignore_ascii_case(DEFAULT_HEADER_NAME));
		assert!(SearchTokenSigner::new("bad header").is_err());
	}

	#[test]
	fn attaches_sensitive_header_to_requests() {
		let token =
			TokenService::default().mint_default(Role::Seller, "seller-1").expect("Mint.");
		let request = ReqwestClient::new()
			.post("http://localhost:4000/api/search")
			.build()
			.expect("Request fixture should build.");
		let signed = SearchTokenSigner::default()
			.attach_token(request, &token)
			.expect("Signing should succeed.");
		let value = signed
			.headers()
			.get("x-search-token")
			.expect("Credential header should be present.");

		assert!(value.is_sensitive());
		assert_eq!(value.to_str().ok(), Some(token.credential().expose()));
	}
}
