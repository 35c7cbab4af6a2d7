//! Client configuration and its validating builder.

// self
use crate::{
	_prelude::*,
	auth::Secret,
	error::ConfigError,
	http::overlay_headers,
};

/// Production API origin used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.tink.com";
/// Production Tink Link origin used when no override is configured.
pub const DEFAULT_BASE_LINK_URL: &str = "https://link.tink.com";
/// Default actor client id attached to delegate authorization grants.
pub const DEFAULT_CLIENT_ACTOR_ID: &str = "df05e4b379934cd09963197cc855bfe9";

const DEFAULT_USER_AGENT: &str = concat!("tink-client/", env!("CARGO_PKG_VERSION"));

/// Immutable configuration fixed at client construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret presented on token grants.
	pub client_secret: Secret,
	/// Actor client id attached to delegate authorization grants.
	pub client_actor_id: String,
	/// API origin requests resolve against.
	pub base_url: Url,
	/// Tink Link origin link building resolves against.
	pub base_link_url: Url,
	/// Headers applied to every request before per-call overlays.
	pub default_headers: Vec<(String, String)>,
}
impl ClientConfig {
	/// Returns a builder seeded with the production origins and default headers.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			client_actor_id: DEFAULT_CLIENT_ACTOR_ID.into(),
			base_url: DEFAULT_BASE_URL.into(),
			base_link_url: DEFAULT_BASE_LINK_URL.into(),
			default_headers: vec![
				("Accept".into(), "application/json".into()),
				("User-Agent".into(), DEFAULT_USER_AGENT.into()),
			],
		}
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: Secret,
	/// Actor client id attached to delegate grants.
	pub client_actor_id: String,
	/// API origin, parsed during [`build`](Self::build).
	pub base_url: String,
	/// Tink Link origin, parsed during [`build`](Self::build).
	pub base_link_url: String,
	/// Headers applied to every request.
	pub default_headers: Vec<(String, String)>,
}
impl ClientConfigBuilder {
	/// Overrides the API origin.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Overrides the Tink Link origin.
	pub fn base_link_url(mut self, url: impl Into<String>) -> Self {
		self.base_link_url = url.into();

		self
	}

	/// Overrides the actor client id attached to delegate grants.
	pub fn client_actor_id(mut self, actor_id: impl Into<String>) -> Self {
		self.client_actor_id = actor_id.into();

		self
	}

	/// Sets a default header, replacing any seeded value with the same name.
	pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		overlay_headers(&mut self.default_headers, &[(name.into(), value.into())]);

		self
	}

	/// Validates the origins and produces the configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = parse_origin("base", &self.base_url)?;
		let base_link_url = parse_origin("link", &self.base_link_url)?;

		Ok(ClientConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			client_actor_id: self.client_actor_id,
			base_url,
			base_link_url,
			default_headers: self.default_headers,
		})
	}
}

fn parse_origin(kind: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidOrigin { kind, url: raw.into(), source })
}
