//! User lifecycle and authorization-grant operations.

// self
use crate::{
	_prelude::*,
	auth::Scope,
	client::ClientInner,
	http::{ApiRequest, Query, RequestBody},
	models::{AuthorizationCode, CreatedUser, UserProfile, UserRef},
};

/// User lifecycle and authorization-grant operations.
///
/// Obtained from [`TinkClient::user`](crate::client::TinkClient::user).
#[derive(Clone)]
pub struct UserApi {
	inner: Arc<ClientInner>,
}
impl UserApi {
	pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
		Self { inner }
	}

	/// Creates a user under the configured app.
	///
	/// Acquires a `user:create` client token through the cache before issuing the call.
	pub async fn create(&self, user: CreateUser) -> Result<CreatedUser> {
		let token = self.inner.require_token(Scope::user_create()).await?;
		let body = RequestBody::json([
			("external_user_id", user.external_user_id),
			("market", user.market),
			("locale", user.locale),
		]);
		let request = ApiRequest::post("api/v1/user/create", body).bearer(token.expose());

		self.inner.request(request).await
	}

	/// Fetches the profile of the user behind the provided user access token.
	pub async fn get(&self, user_access_token: &str) -> Result<UserProfile> {
		self.inner.request(ApiRequest::get("api/v1/user").bearer(user_access_token)).await
	}

	/// Deletes the user behind the provided user access token.
	pub async fn delete(&self, user_access_token: &str) -> Result<()> {
		let request =
			ApiRequest::post("api/v1/user/delete", RequestBody::Empty).bearer(user_access_token);

		self.inner.request_unit(request).await
	}

	/// Issues a delegate authorization code for handing a user session to Tink Link.
	///
	/// Acquires an `authorization:grant` client token through the cache. Only the identifier
	/// kind carried by [`UserRef`] is sent; the endpoint rejects grants naming both.
	pub async fn delegate_code(&self, grant: DelegateCode) -> Result<AuthorizationCode> {
		let token = self.inner.require_token(Scope::authorization_grant()).await?;
		let (id_field, id_value) = match &grant.user {
			UserRef::UserId(id) => ("user_id", id.as_str()),
			UserRef::ExternalUserId(id) => ("external_user_id", id.as_str()),
		};
		let body = RequestBody::form([
			("actor_client_id", self.inner.config.client_actor_id.as_str()),
			(id_field, id_value),
			("id_hint", grant.id_hint.as_str()),
			("scope", grant.scope.as_str()),
		]);
		let request =
			ApiRequest::post("api/v1/oauth/authorization-grant/delegate", body)
				.bearer(token.expose());

		self.inner.request(request).await
	}

	/// Issues a user authorization code exchangeable for a user access token.
	///
	/// Acquires an `authorization:grant` client token through the cache. The identifier kind
	/// not carried by [`UserRef`] is sent as an empty string, which the endpoint treats as
	/// absent.
	pub async fn authorization_code(&self, grant: UserCode) -> Result<AuthorizationCode> {
		let token = self.inner.require_token(Scope::authorization_grant()).await?;
		let (user_id, external_user_id) = match &grant.user {
			UserRef::UserId(id) => (id.as_str(), ""),
			UserRef::ExternalUserId(id) => ("", id.as_str()),
		};
		let body = RequestBody::form([
			("actor_client_id", self.inner.config.client_actor_id.as_str()),
			("user_id", user_id),
			("external_user_id", external_user_id),
			("scope", grant.scope.as_str()),
		]);
		let request =
			ApiRequest::post("api/v1/oauth/authorization-grant", body).bearer(token.expose());

		self.inner.request(request).await
	}

	/// Builds a Tink Link URL for an arbitrary flow endpoint without any network call.
	///
	/// An absent `state` is rendered as an empty parameter, so the redirect always carries the
	/// key.
	pub fn authorization_link(&self, link: AuthorizationLink) -> String {
		let parameters = Query::new()
			.push("authorization_code", link.authorization_code)
			.push("locale", link.locale)
			.push("market", link.market)
			.push("redirect_uri", link.redirect_uri)
			.push("state", link.state.unwrap_or_default());

		self.inner.generate_link(&link.endpoint, &parameters)
	}
}

/// Parameters for [`UserApi::create`].
#[derive(Clone, Debug)]
pub struct CreateUser {
	/// Caller-assigned external user identifier; must be unique per app.
	pub external_user_id: String,
	/// ISO 3166-1 alpha-2 market code the user is created in.
	pub market: String,
	/// Locale the user is created with.
	pub locale: String,
}
impl CreateUser {
	/// Creates the parameters with the `GB` market and `en_US` locale defaults.
	pub fn new(external_user_id: impl Into<String>) -> Self {
		Self { external_user_id: external_user_id.into(), market: "GB".into(), locale: "en_US".into() }
	}

	/// Overrides the market.
	pub fn market(mut self, market: impl Into<String>) -> Self {
		self.market = market.into();

		self
	}

	/// Overrides the locale.
	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = locale.into();

		self
	}
}

/// Parameters for [`UserApi::delegate_code`].
#[derive(Clone, Debug)]
pub struct DelegateCode {
	/// User the delegate code is issued for.
	pub user: UserRef,
	/// Hint shown to the user during the delegated flow, typically a name.
	pub id_hint: String,
	/// Comma-separated scopes granted to the delegate code.
	pub scope: String,
}
impl DelegateCode {
	/// Creates the parameters.
	pub fn new(user: UserRef, id_hint: impl Into<String>, scope: impl Into<String>) -> Self {
		Self { user, id_hint: id_hint.into(), scope: scope.into() }
	}
}

/// Parameters for [`UserApi::authorization_code`].
#[derive(Clone, Debug)]
pub struct UserCode {
	/// User the authorization code is issued for.
	pub user: UserRef,
	/// Comma-separated scopes granted to the resulting user access token.
	pub scope: String,
}
impl UserCode {
	/// Creates the parameters.
	pub fn new(user: UserRef, scope: impl Into<String>) -> Self {
		Self { user, scope: scope.into() }
	}
}

/// Parameters for [`UserApi::authorization_link`].
#[derive(Clone, Debug)]
pub struct AuthorizationLink {
	/// Tink Link flow endpoint relative to the Link origin, without a leading slash.
	pub endpoint: String,
	/// Authorization code obtained from one of the grant operations.
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
impl AuthorizationLink {
	/// Creates the parameters without a `state`.
	pub fn new(
		endpoint: impl Into<String>,
		authorization_code: impl Into<String>,
		locale: impl Into<String>,
		market: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			endpoint: endpoint.into(),
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
	fn authorization_links_render_parameters_in_wire_order() {
		let client = build_test_client("https://console.example");
		let link = AuthorizationLink::new(
			"1.0/reports/create",
			"code-1",
			"en_US",
			"GB",
			"https://console.example/callback",
		);

		assert_eq!(
			client.user().authorization_link(link),
			"https://console.example/1.0/reports/create?authorization_code=code-1&locale=en_US&market=GB&redirect_uri=https%3A%2F%2Fconsole.example%2Fcallback&state=",
		);
	}

	#[test]
	fn authorization_links_carry_an_explicit_state() {
		let client = build_test_client("https://console.example");
		let link = AuthorizationLink::new("1.0/reports/create", "code-1", "en_US", "GB", "https://x")
			.state("opaque-1");

		assert!(client.user().authorization_link(link).ends_with("&state=opaque-1"));
	}
}
