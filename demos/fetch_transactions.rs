//! Exchanges an authorization code for a user access token against a mock endpoint, then lists
//! the user's booked transactions.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use tink_client::{
	api::TransactionsFilter,
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
				"{\"access_token\":\"demo-user-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let transactions_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/data/v2/transactions");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"nextPageToken": "",
					"transactions": [{
						"accountId": "acc-1",
						"amount": {"currencyCode": "EUR", "value": {"scale": 2, "unscaledValue": -1250}},
						"dates": {"booked": "2024-04-30"},
						"descriptions": {"display": "Grocery Store", "original": "GROCERY STORE 123"},
						"id": "txn-1",
						"status": "BOOKED",
						"types": {"type": "DEFAULT"}
					}]
				}"#,
			);
		})
		.await;
	let config = ClientConfig::builder("demo-client-id", "demo-client-secret")
		.base_url(server.base_url())
		.base_link_url(server.base_url())
		.build()?;
	let client = TinkClient::new(config);
	let token = client.generate_user_access_token("demo-authorization-code").await?;
	let filter = TransactionsFilter::new().pending(false).page_size(50);
	let page = client.data().transactions(token.access_token.expose(), filter).await?;

	for transaction in &page.transactions {
		println!(
			"{}: {} {} {}.",
			transaction.dates.booked,
			transaction.amount.value.to_f64(),
			transaction.amount.currency_code,
			transaction.descriptions.display,
		);
	}

	token_mock.assert_async().await;
	transactions_mock.assert_async().await;

	Ok(())
}
