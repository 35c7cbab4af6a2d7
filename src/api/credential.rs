//! Credentials operations.

// self
use crate::{
	_prelude::*,
	client::ClientInner,
	http::{ApiRequest, RequestBody},
	models::CredentialsList,
};

/// Credentials operations.
///
/// Obtained from [`TinkClient::credential`](crate::client::TinkClient::credential). Both
/// operations act on the user behind the provided user access token.
#[derive(Clone)]
pub struct CredentialApi {
	inner: Arc<ClientInner>,
}
impl CredentialApi {
	pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
		Self { inner }
	}

	/// Lists the user's credentials.
	pub async fn list(&self, user_access_token: &str) -> Result<CredentialsList> {
		let request = ApiRequest::get("api/v1/credentials/list").bearer(user_access_token);

		self.inner.request(request).await
	}

	/// Deletes one credentials object and the data fetched through it.
	///
	/// The call resolves once the endpoint has acknowledged the deletion; the response body is
	/// discarded.
	pub async fn delete(&self, user_access_token: &str, credentials_id: &str) -> Result<()> {
		let request = ApiRequest::delete(
			format!("api/v1/credentials/{credentials_id}"),
			RequestBody::Empty,
		)
		.bearer(user_access_token);

		self.inner.request_unit(request).await
	}
}
