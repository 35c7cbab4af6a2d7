//! Access-token wire shape and cached-token lifecycle helpers.

// self
use crate::{_prelude::*, auth::Secret};

/// Payload returned by the `api/v1/oauth/token` endpoint for both grants.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	pub access_token: Secret,
	/// Token type reported by the endpoint, `bearer` in practice.
	pub token_type: String,
	/// Token lifetime in seconds, relative to the issue instant.
	pub expires_in: i64,
	/// Scope string granted by the endpoint.
	#[serde(default)]
	pub scope: String,
}

/// Cached access token with its expiry resolved to an absolute instant.
///
/// `expires_at` is derived locally as the issue instant plus `expires_in`; the wire payload
/// carries no absolute timestamp.
#[derive(Clone, Debug)]
pub struct AccessToken {
	/// Access token secret.
	pub access_token: Secret,
	/// Token type reported at issuance.
	pub token_type: String,
	/// Lifetime in seconds reported at issuance.
	pub expires_in: i64,
	/// Scope string granted at issuance.
	pub scope: String,
	/// Instant at which the token stops being served from the cache.
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// Builds a cached token from a wire response and its issue instant.
	pub fn issued(response: TokenResponse, issued_at: OffsetDateTime) -> Self {
		let expires_at = issued_at + Duration::seconds(response.expires_in);

		Self {
			access_token: response.access_token,
			token_type: response.token_type,
			expires_in: response.expires_in,
			scope: response.scope,
			expires_at,
		}
	}

	/// Returns `true` once `instant` has reached the expiry instant.
	///
	/// A token expiring exactly at `instant` counts as expired, so a `expires_in` of zero is
	/// never served from the cache.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at <= instant
	}
}
