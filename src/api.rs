//! Typed client for the marketplace API.
//!
//! Offer, user, and assignment endpoints are plain JSON calls. Search and autocomplete run as
//! the session's selected identity: the session is asked for a valid token first (re-minting
//! locally when needed) and its credential is attached under the configured header.

pub mod filter;
pub mod models;

pub use filter::*;
pub use models::*;

// std
use std::future::Future;
// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::{OfferId, Role},
	error::ConfigError,
	ext::RequestSignerExt,
	http::{ApiConfig, ApiHttpClient},
	obs::{self, OpOutcome, OpSpan, TokenOp},
	session::SearchSession,
};

const OFFERS_PATH: [&str; 2] = ["api", "offers"];
const USERS_PATH: [&str; 2] = ["api", "users"];
const SEARCH_PATH: [&str; 2] = ["api", "search"];
const AUTOCOMPLETE_PATH: [&str; 3] = ["api", "search", "autocomplete"];

/// Marketplace API client.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: ApiHttpClient,
}
impl ApiClient {
	/// Builds a client from connection settings.
	pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
		Ok(Self { http: ApiHttpClient::new(config)? })
	}

	/// Builds a client from [`ApiConfig::from_env`].
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::new(&ApiConfig::from_env()?)
	}

	/// Wraps an already configured HTTP client.
	pub fn with_http(http: ApiHttpClient) -> Self {
		Self { http }
	}

	/// Underlying HTTP client.
	pub fn http(&self) -> &ApiHttpClient {
		&self.http
	}

	/// `GET /api/offers` with paging and sorting defaults applied.
	pub async fn list_offers(&self, params: &OffersListParams) -> Result<OffersListResponse> {
		observed("list_offers", async {
			let request = self.http.request(Method::GET, OFFERS_PATH)?.query(&params.query_pairs());

			self.http.send_json(request).await
		})
		.await
	}

	/// `GET /api/offers/{id}`; a `404` yields `None`.
	pub async fn get_offer(&self, id: &OfferId) -> Result<Option<Offer>> {
		observed("get_offer", async {
			let request = self.http.request(Method::GET, offer_path(id, None))?;

			self.http.send_optional_json(request).await
		})
		.await
	}

	/// `POST /api/offers`.
	pub async fn create_offer(&self, offer: &CreateOfferRequest) -> Result<Offer> {
		observed("create_offer", async {
			let request = self.http.request(Method::POST, OFFERS_PATH)?.json(&offer.payload());

			self.http.send_json(request).await
		})
		.await
	}

	/// `POST /api/offers/{id}/assign`.
	pub async fn assign_offer(
		&self,
		id: &OfferId,
		assignment: AssignOfferRequest,
	) -> Result<Offer> {
		observed("assign_offer", async {
			let request = self
				.http
				.request(Method::POST, offer_path(id, Some("assign")))?
				.json(&assignment);

			self.http.send_json(request).await
		})
		.await
	}

	/// `POST /api/offers/{id}/cancel`.
	pub async fn cancel_offer(&self, id: &OfferId) -> Result<Offer> {
		observed("cancel_offer", async {
			let request = self.http.request(Method::POST, offer_path(id, Some("cancel")))?;

			self.http.send_json(request).await
		})
		.await
	}

	/// `GET /api/users?type=<role>`; a missing `users` array yields an empty list.
	pub async fn list_users(&self, role: Role) -> Result<Vec<User>> {
		observed("list_users", async {
			let request =
				self.http.request(Method::GET, USERS_PATH)?.query(&[("type", role.as_str())]);
			let response: UsersResponse = self.http.send_json(request).await?;

			Ok(response.users)
		})
		.await
	}

	/// `POST /api/search` as the session's identity.
	pub async fn search(
		&self,
		session: &mut SearchSession,
		filters: &SearchFilters,
		page: u32,
		page_size: u32,
	) -> Result<SearchResponse> {
		observed("search", async {
			let body = SearchRequest { filters, page, page_size };
			let request = self.http.request(Method::POST, SEARCH_PATH)?.json(&body);
			let request = sign(session, request)?;

			self.http.send_json(request).await
		})
		.await
	}

	/// `POST /api/search/autocomplete` as the session's identity.
	pub async fn autocomplete(
		&self,
		session: &mut SearchSession,
		query: &str,
	) -> Result<Vec<AutocompleteItem>> {
		observed("autocomplete", async {
			let body = AutocompleteRequest {
				query,
				user_type: session.role(),
				user_id: session.subject(),
			};
			let request = self.http.request(Method::POST, AUTOCOMPLETE_PATH)?.json(&body);
			let request = sign(session, request)?;
			let response: AutocompleteResponse = self.http.send_json(request).await?;

			Ok(response.suggestions)
		})
		.await
	}
}

fn offer_path<'a>(id: &'a OfferId, action: Option<&'a str>) -> impl Iterator<Item = &'a str> {
	OFFERS_PATH.into_iter().chain(Some(id.as_ref())).chain(action)
}

fn sign(
	session: &mut SearchSession,
	request: reqwest::RequestBuilder,
) -> Result<reqwest::RequestBuilder> {
	let signer = session.signer().clone();
	let token = session.ensure_token()?;

	signer.attach_token(request, token)
}

async fn observed<T, F>(stage: &'static str, call: F) -> Result<T>
where
	F: Future<Output = Result<T>>,
{
	const OP: TokenOp = TokenOp::ApiCall;

	let span = OpSpan::new(OP, stage);

	obs::record_op_outcome(OP, OpOutcome::Attempt);

	let result = span.instrument(call).await;

	obs::record_op_outcome(OP, OpOutcome::from_bool(result.is_ok()));

	result
}
