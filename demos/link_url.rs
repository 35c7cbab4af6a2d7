//! Builds Tink Link URLs without touching the network: the connect-accounts flow plus a custom
//! flow endpoint driven through the user endpoint group.

// crates.io
use color_eyre::Result;
// self
use tink_client::{
	api::{AuthorizationLink, TransactionsLink},
	client::{ClientConfig, TinkClient},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::builder("demo-client-id", "demo-client-secret").build()?;
	let client = TinkClient::new(config);
	let connect = client.link().transactions_connect(
		TransactionsLink::new(
			"demo-authorization-code",
			"en_US",
			"GB",
			"https://console.example/callback",
		)
		.state("session-42"),
	);
	let report = client.user().authorization_link(AuthorizationLink::new(
		"1.0/account-check/create-report",
		"demo-authorization-code",
		"en_US",
		"GB",
		"https://console.example/callback",
	));

	println!("Connect accounts: {connect}");
	println!("Account check: {report}");

	Ok(())
}
