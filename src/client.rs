//! Central client wiring configuration, transport, token cache, and the resource endpoints.

pub mod config;

mod request;
mod token;

pub use config::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	api::{ConsentApi, CredentialApi, DataApi, LinkApi, UserApi},
	auth::TokenCache,
	http::{HttpTransport, Query},
};

/// Typed client for the Tink open-banking REST API.
///
/// The client owns the configuration, the HTTP transport, and the per-scope token cache. The
/// resource endpoints returned by the accessor methods share that state, so a token acquired
/// through one endpoint is reused by every other. Cloning the client is cheap and clones share
/// the same cache.
#[derive(Clone)]
pub struct TinkClient {
	pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
	pub(crate) config: ClientConfig,
	pub(crate) transport: Arc<dyn HttpTransport>,
	pub(crate) tokens: TokenCache,
}

impl TinkClient {
	/// Creates a client backed by the bundled reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn new(config: ClientConfig) -> Self {
		Self::with_transport(config, ReqwestTransport::default())
	}

	/// Creates a client on top of a caller-provided transport.
	pub fn with_transport(config: ClientConfig, transport: impl HttpTransport) -> Self {
		Self {
			inner: Arc::new(ClientInner {
				config,
				transport: Arc::new(transport),
				tokens: TokenCache::default(),
			}),
		}
	}

	/// Returns the client configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	/// User lifecycle and authorization-grant operations.
	pub fn user(&self) -> UserApi {
		UserApi::new(self.inner.clone())
	}

	/// Account and transaction data operations.
	pub fn data(&self) -> DataApi {
		DataApi::new(self.inner.clone())
	}

	/// Tink Link URL building.
	pub fn link(&self) -> LinkApi {
		LinkApi::new(self.inner.clone())
	}

	/// Market, provider, and provider-consent operations.
	pub fn consent(&self) -> ConsentApi {
		ConsentApi::new(self.inner.clone())
	}

	/// Credentials operations.
	pub fn credential(&self) -> CredentialApi {
		CredentialApi::new(self.inner.clone())
	}

	/// Builds a Tink Link URL against the configured Link origin without any network call.
	///
	/// The result always carries a `?`, even for an empty parameter list, matching the URL shape
	/// produced for API requests.
	pub fn generate_link(&self, endpoint: &str, parameters: &Query) -> String {
		self.inner.generate_link(endpoint, parameters)
	}
}
impl Debug for TinkClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TinkClient").field("config", &self.inner.config).finish_non_exhaustive()
	}
}
