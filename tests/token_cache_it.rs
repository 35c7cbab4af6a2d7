// crates.io
use httpmock::prelude::*;
// self
use tink_client::{
	auth::{Scope, Secret},
	client::{ClientConfig, TinkClient},
	error::{Error, Result},
};

const CLIENT_ID: &str = "client-token-cache";
const CLIENT_SECRET: &str = "secret-token-cache";

fn build_client(server: &MockServer) -> TinkClient {
	let config = ClientConfig::builder(CLIENT_ID, CLIENT_SECRET)
		.base_url(server.base_url())
		.base_link_url(server.base_url())
		.build()
		.expect("Mock configuration should build successfully.");

	TinkClient::new(config)
}

fn grant_body(encoded_scope: &str) -> String {
	format!(
		"client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}&grant_type=client_credentials&scope={encoded_scope}"
	)
}

#[tokio::test]
async fn tokens_are_cached_per_scope_until_expiry() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/oauth/token")
				.header("content-type", "application/x-www-form-urlencoded")
				.body(grant_body("user%3Acreate"));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"cached-token\",\"token_type\":\"bearer\",\"expires_in\":1800,\"scope\":\"user:create\"}",
			);
		})
		.await;
	let first = client
		.require_token(Scope::user_create())
		.await
		.expect("Initial token acquisition should succeed.");
	let second = client
		.require_token(Scope::user_create())
		.await
		.expect("Cached token acquisition should succeed.");

	assert_eq!(first.expose(), "cached-token");
	assert_eq!(second.expose(), "cached-token");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn expired_tokens_refresh_on_the_next_acquisition() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(grant_body("user%3Acreate"));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"short-lived-token\",\"token_type\":\"bearer\",\"expires_in\":0}",
			);
		})
		.await;
	let first = client
		.require_token(Scope::user_create())
		.await
		.expect("Initial token acquisition should succeed.");
	let second = client
		.require_token(Scope::user_create())
		.await
		.expect("Refreshing an expired token should succeed.");

	assert_eq!(first.expose(), "short-lived-token");
	assert_eq!(second.expose(), "short-lived-token");

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn concurrent_acquisitions_share_one_grant_request() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(grant_body("user%3Acreate"));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"guard-token\",\"token_type\":\"bearer\",\"expires_in\":900}",
			);
		})
		.await;
	let (first, second): (Result<Secret>, Result<Secret>) = tokio::join!(
		client.require_token(Scope::user_create()),
		client.require_token(Scope::user_create()),
	);
	let first = first.expect("First concurrent acquisition should succeed.");
	let second = second.expect("Second concurrent acquisition should succeed.");

	assert_eq!(first.expose(), "guard-token");
	assert_eq!(second.expose(), "guard-token");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn scopes_acquire_tokens_independently() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(grant_body("user%3Acreate"));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"create-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let providers_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(grant_body("providers%3Aread"));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"providers-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let create = client
		.require_token(Scope::user_create())
		.await
		.expect("Token acquisition for the creation scope should succeed.");
	let providers = client
		.require_token(Scope::providers_read())
		.await
		.expect("Token acquisition for the providers scope should succeed.");

	assert_eq!(create.expose(), "create-token");
	assert_eq!(providers.expose(), "providers-token");

	create_mock.assert_async().await;
	providers_mock.assert_async().await;
}

#[tokio::test]
async fn failed_grants_surface_and_cache_nothing() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"errorMessage\":\"invalid scope\"}");
		})
		.await;
	let first = client
		.require_token(Scope::providers_read())
		.await
		.expect_err("A rejected grant should surface to the caller.");
	let second = client
		.require_token(Scope::providers_read())
		.await
		.expect_err("A failed grant must not be cached.");

	match first {
		Error::RequestFailed(failure) => {
			assert_eq!(failure.status, 400);
			assert_eq!(failure.body, "{\"errorMessage\":\"invalid scope\"}");
			assert!(
				!failure.options.contains(CLIENT_SECRET),
				"Credentials must not appear in failure reports.",
			);
		},
		other => panic!("Expected a request failure, got {other:?}."),
	}
	assert!(matches!(second, Error::RequestFailed(_)));

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn user_codes_exchange_for_uncached_user_tokens() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(format!(
				"client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}&grant_type=authorization_code&code=code-1"
			));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"user-token\",\"token_type\":\"bearer\",\"expires_in\":7200}",
			);
		})
		.await;
	let first = client
		.generate_user_access_token("code-1")
		.await
		.expect("Exchanging a user code should succeed.");
	let second = client
		.generate_user_access_token("code-1")
		.await
		.expect("User token exchanges should bypass the cache.");

	assert_eq!(first.access_token.expose(), "user-token");
	assert_eq!(first.token_type, "bearer");
	assert_eq!(first.expires_in, 7200);
	assert!(first.scope.is_empty());
	assert_eq!(second.access_token.expose(), "user-token");

	mock.assert_calls_async(2).await;
}
