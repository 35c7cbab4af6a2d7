// crates.io
use httpmock::prelude::*;
// self
use tink_client::{
	api::ProvidersFilter,
	client::{ClientConfig, TinkClient},
};

const CLIENT_ID: &str = "client-consent-api";
const CLIENT_SECRET: &str = "secret-consent-api";

fn build_client(server: &MockServer) -> TinkClient {
	let config = ClientConfig::builder(CLIENT_ID, CLIENT_SECRET)
		.base_url(server.base_url())
		.base_link_url(server.base_url())
		.build()
		.expect("Mock configuration should build successfully.");

	TinkClient::new(config)
}

#[tokio::test]
async fn markets_narrow_to_the_desired_code_without_authentication() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/user/markets/list").query_param("desired", "SE");
			then.status(200).header("content-type", "application/json").body(
				"{\"markets\":[{\"code\":\"SE\",\"defaultCurrency\":\"SEK\",\"description\":\"Sweden\"}]}",
			);
		})
		.await;
	let markets =
		client.consent().markets(Some("SE")).await.expect("Market listing should succeed.");

	assert_eq!(markets.markets.len(), 1);
	assert_eq!(markets.markets[0].code, "SE");
	assert_eq!(markets.markets[0].default_currency.as_deref(), Some("SEK"));

	mock.assert_async().await;
}

#[tokio::test]
async fn user_providers_send_every_filter_parameter() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/providers")
				.header("authorization", "Bearer ua-token-1")
				.query_param("includeTestProviders", "true")
				.query_param("excludeNonTestProviders", "false")
				.query_param("name", "uk-demobank-open-banking")
				.query_param("capability", "");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"providers": [{
						"name": "uk-demobank-open-banking",
						"displayName": "Demo Bank",
						"financialInstitutionId": "fi-1",
						"financialInstitutionName": "Demo Bank",
						"market": "GB",
						"currency": "GBP",
						"status": "ENABLED",
						"type": "TEST",
						"credentialsType": "THIRD_PARTY_APP",
						"capabilities": ["CHECKING_ACCOUNTS", "TRANSACTIONS"],
						"images": {"icon": "https://cdn.example/icon.png"}
					}]
				}"#,
			);
		})
		.await;
	let filter = ProvidersFilter::new()
		.include_test_providers(true)
		.name("uk-demobank-open-banking");
	let providers = client
		.consent()
		.user_providers("ua-token-1", filter)
		.await
		.expect("Provider listing should succeed.");
	let provider = &providers.providers[0];

	assert_eq!(provider.name, "uk-demobank-open-banking");
	assert_eq!(provider.provider_type, "TEST");
	assert_eq!(provider.capabilities, ["CHECKING_ACCOUNTS", "TRANSACTIONS"]);

	mock.assert_async().await;
}

#[tokio::test]
async fn market_providers_acquire_the_providers_scope() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let grant_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token").body(format!(
				"client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}&grant_type=client_credentials&scope=providers%3Aread"
			));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"providers-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let providers_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/providers/GB")
				.header("authorization", "Bearer providers-token")
				.query_param("includeTestProviders", "false")
				.query_param("excludeNonTestProviders", "false")
				.query_param("capability", "TRANSACTIONS");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"providers": [{
						"name": "gb-bank-open-banking",
						"displayName": "GB Bank",
						"market": "GB",
						"status": "ENABLED",
						"type": "BANK",
						"capabilities": ["TRANSACTIONS"]
					}]
				}"#,
			);
		})
		.await;
	let providers = client
		.consent()
		.market_providers("GB", ProvidersFilter::new().capability("TRANSACTIONS"))
		.await
		.expect("Market provider listing should succeed.");

	assert_eq!(providers.providers[0].name, "gb-bank-open-banking");
	assert!(providers.providers[0].credentials_type.is_none());

	grant_mock.assert_async().await;
	providers_mock.assert_async().await;
}

#[tokio::test]
async fn provider_consents_narrow_to_one_credentials_id() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/provider-consents")
				.header("authorization", "Bearer ua-token-2")
				.query_param("credentialsId", "cred-1");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"providerConsents": [{
						"accountIds": ["acc-1"],
						"credentialsId": "cred-1",
						"providerName": "uk-demobank-open-banking",
						"status": "SESSION_EXPIRED",
						"statusUpdated": 1714564800000,
						"sessionExpiryDate": 1714564800000,
						"sessionExtendable": true
					}]
				}"#,
			);
		})
		.await;
	let consents = client
		.consent()
		.provider_consents("ua-token-2", Some("cred-1"))
		.await
		.expect("Consent listing should succeed.");
	let consent = &consents.provider_consents[0];

	assert_eq!(consent.credentials_id, "cred-1");
	assert_eq!(consent.status, "SESSION_EXPIRED");
	assert_eq!(consent.session_extendable, Some(true));

	mock.assert_async().await;
}

#[tokio::test]
async fn extending_a_consent_posts_the_credentials_id_as_json() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/provider-consents:extend")
				.header("authorization", "Bearer ua-token-3")
				.header("content-type", "application/json")
				.json_body(serde_json::json!({"credentialsId": "cred-1"}));
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"accountIds": ["acc-1"],
					"credentialsId": "cred-1",
					"providerName": "uk-demobank-open-banking",
					"status": "UPDATED",
					"sessionExpiryDate": 1722340800000,
					"sessionExtendable": false
				}"#,
			);
		})
		.await;
	let consent = client
		.consent()
		.extend("ua-token-3", "cred-1")
		.await
		.expect("Consent extension should succeed.");

	assert_eq!(consent.status, "UPDATED");
	assert_eq!(consent.session_expiry_date, Some(1722340800000));

	mock.assert_async().await;
}
