//! Token acquisition: grant requests plus the per-scope cache with single-flight refresh.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, CacheLookup, Scope, Secret, TokenResponse},
	client::{ClientInner, TinkClient},
	http::{ApiRequest, RequestBody},
	obs::{self, CallSpan, TokenCacheOutcome},
};

const TOKEN_ENDPOINT: &str = "api/v1/oauth/token";

impl TinkClient {
	/// Returns a client-credentials access token for the scope, serving cached unexpired tokens.
	///
	/// Concurrent callers hitting the same missing or expired scope share one refresh request;
	/// distinct scopes refresh independently. The returned secret redacts itself in `Debug` and
	/// `Display` output.
	pub async fn require_token(&self, scope: Scope) -> Result<Secret> {
		self.inner.require_token(scope).await
	}

	/// Requests a fresh client-credentials token for the scope, bypassing the cache.
	pub async fn generate_access_token(&self, scope: &Scope) -> Result<TokenResponse> {
		self.inner.generate_access_token(scope).await
	}

	/// Exchanges a user authorization code for a user access token.
	///
	/// User tokens are never cached; each exchange consumes its code.
	pub async fn generate_user_access_token(&self, code: &str) -> Result<TokenResponse> {
		self.inner.generate_user_access_token(code).await
	}
}

impl ClientInner {
	pub(crate) async fn require_token(&self, scope: Scope) -> Result<Secret> {
		match self.tokens.lookup(&scope, OffsetDateTime::now_utc()) {
			CacheLookup::Fresh(token) => {
				obs::record_token_cache_outcome(TokenCacheOutcome::Hit);

				return Ok(token.access_token);
			},
			CacheLookup::Expired => obs::record_token_cache_outcome(TokenCacheOutcome::Expired),
			CacheLookup::Missing => obs::record_token_cache_outcome(TokenCacheOutcome::Miss),
		}

		let guard = self.tokens.acquisition_guard(&scope);
		let _flight = guard.lock().await;

		// A caller holding the guard earlier may have refreshed this scope already.
		if let CacheLookup::Fresh(token) = self.tokens.lookup(&scope, OffsetDateTime::now_utc()) {
			return Ok(token.access_token);
		}

		let response = self.generate_access_token(&scope).await?;
		let token = AccessToken::issued(response, OffsetDateTime::now_utc());
		let secret = token.access_token.clone();

		self.tokens.store(scope, token);

		Ok(secret)
	}

	pub(crate) async fn generate_access_token(&self, scope: &Scope) -> Result<TokenResponse> {
		let span = CallSpan::token("client_credentials");
		let body = RequestBody::form([
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.expose()),
			("grant_type", "client_credentials"),
			("scope", scope.as_ref()),
		]);

		span.instrument(self.request(ApiRequest::post(TOKEN_ENDPOINT, body))).await
	}

	pub(crate) async fn generate_user_access_token(&self, code: &str) -> Result<TokenResponse> {
		let span = CallSpan::token("authorization_code");
		let body = RequestBody::form([
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.expose()),
			("grant_type", "authorization_code"),
			("code", code),
		]);

		span.instrument(self.request(ApiRequest::post(TOKEN_ENDPOINT, body))).await
	}
}
