//! Transport contract executed beneath the request core.
//!
//! [`HttpTransport`] is the client's only dependency on an HTTP stack. The request core hands a
//! fully assembled [`TransportRequest`] to the transport and shapes whatever
//! [`TransportResponse`] comes back; transports never interpret statuses or bodies. The bundled
//! [`ReqwestTransport`] covers most callers, and custom implementations can bridge test harnesses
//! or alternative stacks.

// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// Fully assembled outbound request handed to the transport.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method wire name.
	pub method: &'static str,
	/// Fully resolved URL, query string included.
	pub url: Url,
	/// Final header list after default, content-type, and per-call merging.
	pub headers: Vec<(String, String)>,
	/// Encoded body bytes, when the action carries a payload.
	pub body: Option<Vec<u8>>,
}

/// Raw response surfaced by a transport.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Reason phrase reported by the transport, empty when unknown.
	pub status_text: String,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP stacks capable of executing one assembled request.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// facade cloned from a client, and they must issue a fresh network call per invocation; the
/// token cache is the only cache in this crate, so responses must never be replayed from a
/// transport-level store.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes the request and resolves with the raw response.
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Bundled transport backed by a [`ReqwestClient`].
///
/// reqwest performs no response caching of its own, which keeps token lifetimes the only
/// freshness concern. Redirects follow reqwest's default policy.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = reqwest::Method::from_bytes(request.method.as_bytes())
				.map_err(TransportError::network)?;
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status();

			Ok(TransportResponse {
				status: status.as_u16(),
				status_text: status.canonical_reason().unwrap_or_default().to_owned(),
				body: response.bytes().await?.to_vec(),
			})
		})
	}
}
