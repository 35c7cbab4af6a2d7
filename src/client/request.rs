//! Request-core execution: URL assembly, header merging, dispatch, and response shaping.

// self
use crate::{
	_prelude::*,
	client::ClientInner,
	error::{ConfigError, DecodeError, RequestFailed},
	http::{ApiRequest, Query, RequestBody, TransportRequest, TransportResponse, overlay_headers},
	obs::{self, CallSpan, RequestOutcome},
};

/// Statuses at or above this value are failures; redirects below it fall through to decoding.
const FAILURE_THRESHOLD: u16 = 400;
const REDACTED: &str = "<redacted>";

impl ClientInner {
	/// Executes a descriptor and decodes the JSON success body into `T`.
	pub(crate) async fn request<T>(&self, request: ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let (url, response) = self.dispatch(request).await?;
		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError { url: url.into(), source }.into())
	}

	/// Executes a descriptor and discards the success body.
	///
	/// Used by endpoints answering `204 No Content` or an empty `200`, whose bodies are not
	/// JSON documents.
	pub(crate) async fn request_unit(&self, request: ApiRequest) -> Result<()> {
		self.dispatch(request).await.map(|_| ())
	}

	/// Builds a Tink Link URL against the configured Link origin.
	pub(crate) fn generate_link(&self, endpoint: &str, parameters: &Query) -> String {
		let base = self.config.base_link_url.as_str().trim_end_matches('/');

		format!("{base}/{endpoint}?{}", parameters.encode())
	}

	async fn dispatch(&self, request: ApiRequest) -> Result<(Url, TransportResponse)> {
		let method = request.action.method();
		let span = CallSpan::request(method, &request.endpoint);

		obs::record_request_outcome(method, RequestOutcome::Attempt);

		let result = span.instrument(self.dispatch_inner(request)).await;
		let outcome =
			if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

		obs::record_request_outcome(method, outcome);

		result
	}

	async fn dispatch_inner(&self, request: ApiRequest) -> Result<(Url, TransportResponse)> {
		let url = self.resolve_url(&request.endpoint, &request.query)?;
		let mut headers = self.config.default_headers.clone();

		if let Some(content_type) = request.action.body().and_then(RequestBody::content_type) {
			overlay_headers(&mut headers, &[("Content-Type".into(), content_type.into())]);
		}

		overlay_headers(&mut headers, &request.headers);

		let body = request.action.body().map(RequestBody::encode).transpose()?.flatten();
		let transport_request =
			TransportRequest { method: request.action.method(), url: url.clone(), headers, body };
		let options = serialize_options(&transport_request);
		let response = self.transport.execute(transport_request).await?;

		if response.status >= FAILURE_THRESHOLD {
			return Err(RequestFailed {
				status: response.status,
				status_text: response.status_text,
				url: url.into(),
				options,
				body: String::from_utf8_lossy(&response.body).into_owned(),
			}
			.into());
		}

		Ok((url, response))
	}

	/// Resolves `{base}/{endpoint}?{query}`; the `?` is always present, even with no parameters.
	fn resolve_url(&self, endpoint: &str, query: &Query) -> Result<Url, ConfigError> {
		let base = self.config.base_url.as_str().trim_end_matches('/');
		let assembled = format!("{base}/{endpoint}?{}", query.encode());

		Url::parse(&assembled)
			.map_err(move |source| ConfigError::InvalidRequestUrl { url: assembled, source })
	}
}

/// Serializes a redacted request summary for failure reports.
///
/// The `Authorization` value is replaced and the body reduced to its byte length, so grant
/// payloads and bearer tokens never reach error values or logs.
fn serialize_options(request: &TransportRequest) -> String {
	let headers = request
		.headers
		.iter()
		.map(|(name, value)| {
			let value =
				if name.eq_ignore_ascii_case("authorization") { REDACTED } else { value.as_str() };

			(name.clone(), serde_json::Value::from(value))
		})
		.collect::<serde_json::Map<_, _>>();
	let body = match &request.body {
		Some(bytes) => serde_json::Value::from(format!("{} bytes", bytes.len())),
		None => serde_json::Value::Null,
	};
	let options = serde_json::json!({
		"method": request.method,
		"headers": headers,
		"body": body,
	});

	serde_json::to_string_pretty(&options).unwrap_or_default()
}
