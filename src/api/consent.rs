//! Market, provider, and provider-consent operations.

// self
use crate::{
	_prelude::*,
	auth::Scope,
	client::ClientInner,
	http::{ApiRequest, Query, RequestBody},
	models::{MarketsList, ProviderConsent, ProviderConsentsList, ProvidersList},
};

/// Market, provider, and provider-consent operations.
///
/// Obtained from [`TinkClient::consent`](crate::client::TinkClient::consent).
#[derive(Clone)]
pub struct ConsentApi {
	inner: Arc<ClientInner>,
}
impl ConsentApi {
	pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
		Self { inner }
	}

	/// Lists the markets users can be registered in; unauthenticated.
	///
	/// `desired` narrows the listing to one ISO 3166-1 alpha-2 code and is rendered as an empty
	/// parameter when absent.
	pub async fn markets(&self, desired: Option<&str>) -> Result<MarketsList> {
		let query = Query::new().push("desired", desired.unwrap_or_default());

		self.inner.request(ApiRequest::get("api/v1/user/markets/list").query(query)).await
	}

	/// Lists the providers available to the user behind the provided user access token.
	pub async fn user_providers(
		&self,
		user_access_token: &str,
		filter: ProvidersFilter,
	) -> Result<ProvidersList> {
		let query = Query::new()
			.push("includeTestProviders", filter.include_test_providers)
			.push("excludeNonTestProviders", filter.exclude_non_test_providers)
			.push("name", filter.name.unwrap_or_default())
			.push("capability", filter.capability.unwrap_or_default());
		let request = ApiRequest::get("api/v1/providers").query(query).bearer(user_access_token);

		self.inner.request(request).await
	}

	/// Lists the providers on a market.
	///
	/// Acquires a `providers:read` client token through the cache. The market listing has no
	/// name parameter, so [`ProvidersFilter::name`] is not rendered here.
	pub async fn market_providers(
		&self,
		market: &str,
		filter: ProvidersFilter,
	) -> Result<ProvidersList> {
		let token = self.inner.require_token(Scope::providers_read()).await?;
		let query = Query::new()
			.push("includeTestProviders", filter.include_test_providers)
			.push("excludeNonTestProviders", filter.exclude_non_test_providers)
			.push("capability", filter.capability.unwrap_or_default());
		let request = ApiRequest::get(format!("api/v1/providers/{market}"))
			.query(query)
			.bearer(token.expose());

		self.inner.request(request).await
	}

	/// Lists the user's provider consents, optionally narrowed to one credentials id.
	pub async fn provider_consents(
		&self,
		user_access_token: &str,
		credentials_id: Option<&str>,
	) -> Result<ProviderConsentsList> {
		let query = Query::new().push("credentialsId", credentials_id.unwrap_or_default());
		let request =
			ApiRequest::get("api/v1/provider-consents").query(query).bearer(user_access_token);

		self.inner.request(request).await
	}

	/// Extends a consent eligible for reconfirmation and returns the updated consent.
	pub async fn extend(
		&self,
		user_access_token: &str,
		credentials_id: &str,
	) -> Result<ProviderConsent> {
		let body = RequestBody::json([("credentialsId", credentials_id)]);
		let request =
			ApiRequest::post("api/v1/provider-consents:extend", body).bearer(user_access_token);

		self.inner.request(request).await
	}
}

/// Filter shared by the provider listings.
///
/// Every field is rendered on the wire, absent strings as empty values and the toggles as
/// `false`, matching what the endpoints expect.
#[derive(Clone, Debug, Default)]
pub struct ProvidersFilter {
	/// Restricts the listing to providers with this capability.
	pub capability: Option<String>,
	/// Drops providers whose type is not `TEST`.
	pub exclude_non_test_providers: bool,
	/// Adds providers of type `TEST` to the listing.
	pub include_test_providers: bool,
	/// Selects a single provider by name; honored by the user listing only.
	pub name: Option<String>,
}
impl ProvidersFilter {
	/// Creates the default filter: production providers only, no capability or name narrowing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the listing to providers with the capability.
	pub fn capability(mut self, capability: impl Into<String>) -> Self {
		self.capability = Some(capability.into());

		self
	}

	/// Drops providers whose type is not `TEST`.
	pub fn exclude_non_test_providers(mut self, exclude: bool) -> Self {
		self.exclude_non_test_providers = exclude;

		self
	}

	/// Adds providers of type `TEST` to the listing.
	pub fn include_test_providers(mut self, include: bool) -> Self {
		self.include_test_providers = include;

		self
	}

	/// Selects a single provider by name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}
}
