//! Transport primitives for calls against the marketplace API.
//!
//! [`ApiHttpClient`] wraps a reqwest [`ReqwestClient`] bound to an [`ApiConfig`] base URL. Every
//! request carries `Content-Type: application/json` and a fixed timeout. Responses are classified
//! in one place: non-success statuses become [`Error::Api`], network failures become
//! [`TransportError`], and bodies that do not match the expected shape become
//! [`Error::ResponseParse`] with the offending JSON path. Nothing is retried.

// std
use std::time::Duration as StdDuration;
// crates.io
use reqwest::{
	Method, RequestBuilder, Response, StatusCode,
	header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";
/// Request timeout applied to every API call.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// Connection settings for the marketplace API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Base URL that endpoint paths are joined onto.
	pub base_url: Url,
	/// Per-request timeout.
	pub timeout: StdDuration,
}
impl ApiConfig {
	/// Creates a config for the provided base URL and the default timeout.
	///
	/// Any path in the base URL is kept as a prefix for every endpoint.
	pub fn new(base_url: &str) -> Result<Self, ConfigError> {
		let base_url = Url::parse(base_url)?;

		if base_url.cannot_be_a_base() {
			return Err(ConfigError::UnsupportedBaseUrl { url: base_url.into() });
		}

		Ok(Self { base_url, timeout: DEFAULT_TIMEOUT })
	}

	/// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
	pub fn from_env() -> Result<Self, ConfigError> {
		let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());

		Self::new(&base_url)
	}

	/// Overrides the request timeout.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ApiHttpClient {
	client: ReqwestClient,
	base_url: Url,
}
impl ApiHttpClient {
	/// Builds a client with JSON default headers and the configured timeout.
	pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
		let mut headers = HeaderMap::new();

		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		let client =
			ReqwestClient::builder().default_headers(headers).timeout(config.timeout).build()?;

		Ok(Self::with_client(client, config.base_url.clone()))
	}

	/// Wraps an existing reqwest client.
	pub fn with_client(client: ReqwestClient, base_url: Url) -> Self {
		Self { client, base_url }
	}

	/// Base URL endpoint paths are resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Appends path segments to the base URL, keeping its path prefix.
	///
	/// Each segment is percent-encoded, so `/`, `?`, and `#` inside an identifier stay part of
	/// that segment.
	pub fn endpoint<I, S>(&self, segments: I) -> Result<Url, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut url = self.base_url.clone();

		url.path_segments_mut()
			.map_err(|()| ConfigError::UnsupportedBaseUrl { url: self.base_url.to_string() })?
			.pop_if_empty()
			.extend(segments);

		Ok(url)
	}

	/// Starts a request for the provided method and endpoint path segments.
	pub fn request<I, S>(&self, method: Method, segments: I) -> Result<RequestBuilder, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Ok(self.client.request(method, self.endpoint(segments)?))
	}

	/// Sends a request and decodes a JSON body.
	pub async fn send_json<T>(&self, request: RequestBuilder) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = request.send().await.map_err(TransportError::from)?;

		decode_json(ensure_success(response).await?).await
	}

	/// Sends a request and decodes a JSON body, mapping `404 Not Found` to `None`.
	pub async fn send_optional_json<T>(&self, request: RequestBuilder) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let response = request.send().await.map_err(TransportError::from)?;

		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}

		decode_json(ensure_success(response).await?).await.map(Some)
	}
}

async fn ensure_success(response: Response) -> Result<Response> {
	let status = response.status();

	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	let body = body.trim();
	let message = if body.is_empty() {
		status.canonical_reason().unwrap_or("unknown status").to_owned()
	} else {
		body.to_owned()
	};

	Err(Error::Api { status: status.as_u16(), message })
}

async fn decode_json<T>(response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status().as_u16();
	let bytes = response.bytes().await.map_err(TransportError::from)?;
	let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: Some(status) })
}
