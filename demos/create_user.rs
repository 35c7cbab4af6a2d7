//! Creates a user against a mock endpoint and prints the assigned identifiers, demonstrating
//! the cached client-credentials token acquired on the way.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use tink_client::{
	api::CreateUser,
	client::{ClientConfig, TinkClient},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-client-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/user/create");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"external_user_id\":\"demo-user\",\"user_id\":\"3e1e6e0e7a8b4f0e\"}");
		})
		.await;
	let config = ClientConfig::builder("demo-client-id", "demo-client-secret")
		.base_url(server.base_url())
		.base_link_url(server.base_url())
		.build()?;
	let client = TinkClient::new(config);
	let created = client.user().create(CreateUser::new("demo-user").market("SE")).await?;

	println!("Created user {} for external id {}.", created.user_id, created.external_user_id);

	token_mock.assert_async().await;
	create_mock.assert_async().await;

	Ok(())
}
