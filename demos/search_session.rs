//! Demonstrates a buyer search session that mints its credential locally and attaches it to a
//! search call against a mocked marketplace API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use offer_search_token::{
	api::{ApiClient, SearchFilters},
	auth::Role,
	http::ApiConfig,
	service::TokenService,
	session::SearchSession,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let search_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/search").header_exists("x-search-token");
			then.status(200).header("content-type", "application/json").body(
				"{\"results\":[],\"total\":0,\"page\":1,\"pageSize\":10,\"entityType\":\"offer\"}",
			);
		})
		.await;
	let mut session = SearchSession::new(TokenService::default(), Role::Buyer, "buyer-1")?;
	let api = ApiClient::new(&ApiConfig::new(&server.base_url())?)?;
	let filters = SearchFilters::for_session(&session, "camry");
	let response = api.search(&mut session, &filters, 1, 10).await?;

	println!("Search returned {} of {} offers.", response.offers().count(), response.total);

	if let Some(token) = session.current() {
		println!("Signed with {}.", token.credential().preview());
	}

	search_mock.assert_async().await;

	Ok(())
}
