//! Tink Link URL building.

// self
use crate::{_prelude::*, client::ClientInner, http::Query};

/// Tink Link URL building.
///
/// Obtained from [`TinkClient::link`](crate::client::TinkClient::link). The operations are
/// deterministic string builders; nothing here touches the network.
#[derive(Clone)]
pub struct LinkApi {
	inner: Arc<ClientInner>,
}
impl LinkApi {
	pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
		Self { inner }
	}

	/// Builds the connect-accounts flow URL for the transactions product.
	///
	/// The configured client id is attached automatically; an absent `state` is rendered as an
	/// empty parameter.
	pub fn transactions_connect(&self, link: TransactionsLink) -> String {
		let parameters = Query::new()
			.push("authorization_code", link.authorization_code)
			.push("client_id", self.inner.config.client_id.as_str())
			.push("locale", link.locale)
			.push("market", link.market)
			.push("redirect_uri", link.redirect_uri)
			.push("state", link.state.unwrap_or_default());

		self.inner.generate_link("1.0/transactions/connect-accounts", &parameters)
	}
}

/// Parameters for [`LinkApi::transactions_connect`].
#[derive(Clone, Debug)]
pub struct TransactionsLink {
	/// Delegate authorization code driving the flow.
	pub authorization_code: String,
	/// Locale the flow is rendered in.
	pub locale: String,
	/// ISO 3166-1 alpha-2 market code of the flow.
	pub market: String,
	/// URI the user is redirected to after completing the flow.
	pub redirect_uri: String,
	/// Opaque state echoed back on the redirect; rendered empty when absent.
	pub state: Option<String>,
}
impl TransactionsLink {
	/// Creates the parameters without a `state`.
	pub fn new(
		authorization_code: impl Into<String>,
		locale: impl Into<String>,
		market: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			authorization_code: authorization_code.into(),
			locale: locale.into(),
			market: market.into(),
			redirect_uri: redirect_uri.into(),
			state: None,
		}
	}

	/// Attaches an opaque state echoed back on the redirect.
	pub fn state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	#[test]
	fn connect_accounts_links_render_parameters_in_wire_order() {
		let client = build_test_client("https://link.example");
		let link = TransactionsLink::new("c", "en_US", "GB", "https://x");

		assert_eq!(
			client.link().transactions_connect(link),
			"https://link.example/1.0/transactions/connect-accounts?authorization_code=c&client_id=test-client-id&locale=en_US&market=GB&redirect_uri=https%3A%2F%2Fx&state=",
		);
	}

	#[test]
	fn connect_accounts_links_percent_encode_the_state() {
		let client = build_test_client("https://link.example");
		let link =
			TransactionsLink::new("c", "en_US", "GB", "https://x").state("session 1/attempt 2");

		assert!(
			client
				.link()
				.transactions_connect(link)
				.ends_with("&state=session+1%2Fattempt+2"),
		);
	}
}
