//! Request-descriptor primitives shared by every outbound call.
//!
//! The module models one API call as data: [`ApiRequest`] pairs an endpoint path with an
//! [`Action`], which in turn carries its [`RequestBody`] so a `GET` can never smuggle a payload.
//! [`Query`] keeps parameters in insertion order and expands array values into repeated keys,
//! matching what the remote endpoints expect for filters such as `typeIn`. The free helpers
//! ([`bearer_header`], [`overlay_headers`]) are pure so they can be exercised without a client.

pub mod transport;
pub use transport::*;

// crates.io
use url::form_urlencoded;
// self
use crate::error::ConfigError;

/// HTTP action for one call.
///
/// `Get` carries no body by construction; mutating actions state their body encoding explicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	/// Bodyless GET.
	Get,
	/// POST carrying the provided body.
	Post(RequestBody),
	/// PUT carrying the provided body.
	Put(RequestBody),
	/// DELETE carrying the provided body.
	Delete(RequestBody),
}
impl Action {
	/// Wire name of the HTTP method.
	pub const fn method(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post(_) => "POST",
			Self::Put(_) => "PUT",
			Self::Delete(_) => "DELETE",
		}
	}

	/// Returns the body carried by mutating actions.
	pub fn body(&self) -> Option<&RequestBody> {
		match self {
			Self::Get => None,
			Self::Post(body) | Self::Put(body) | Self::Delete(body) => Some(body),
		}
	}
}

/// Body encoding selector paired with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
	/// No body and no `Content-Type` header.
	Empty,
	/// JSON object body sent as `application/json`.
	Json(serde_json::Map<String, serde_json::Value>),
	/// Form body sent as `application/x-www-form-urlencoded`, preserving pair order.
	Form(Vec<(String, String)>),
}
impl RequestBody {
	/// Builds a JSON object body from key/value pairs.
	pub fn json<I, K, V>(fields: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<serde_json::Value>,
	{
		Self::Json(fields.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// Builds a form body from key/value pairs, keeping their order.
	pub fn form<I, K, V>(fields: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self::Form(fields.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// `Content-Type` header value implied by this encoding, when a payload is present.
	pub const fn content_type(&self) -> Option<&'static str> {
		match self {
			Self::Empty => None,
			Self::Json(_) => Some("application/json"),
			Self::Form(_) => Some("application/x-www-form-urlencoded"),
		}
	}

	/// Serializes the payload into its wire bytes.
	pub fn encode(&self) -> Result<Option<Vec<u8>>, ConfigError> {
		match self {
			Self::Empty => Ok(None),
			Self::Json(object) => serde_json::to_vec(object)
				.map(Some)
				.map_err(|source| ConfigError::BodyEncode { source }),
			Self::Form(pairs) => {
				let mut serializer = form_urlencoded::Serializer::new(String::new());

				for (key, value) in pairs {
					serializer.append_pair(key, value);
				}

				Ok(Some(serializer.finish().into_bytes()))
			},
		}
	}
}

/// Ordered query parameters.
///
/// Pairs encode in insertion order and array values repeat the key once per element, so
/// `typeIn=["A","B"]` becomes `typeIn=A&typeIn=B`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, QueryValue)>);
impl Query {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends one parameter.
	pub fn push(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.0.push((key.into(), value.into()));

		self
	}

	/// Returns `true` when no parameters have been added.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Percent-encodes the parameters into a query string without the leading `?`.
	///
	/// The output is deterministic for a given insertion sequence; an empty list encodes to an
	/// empty string.
	pub fn encode(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());

		for (key, value) in &self.0 {
			match value {
				QueryValue::One(value) => {
					serializer.append_pair(key, value);
				},
				QueryValue::Many(values) =>
					for value in values {
						serializer.append_pair(key, value);
					},
			}
		}

		serializer.finish()
	}
}

/// Single- or multi-valued query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
	/// Scalar rendered as one `key=value` pair.
	One(String),
	/// Array rendered as one `key=value` pair per element.
	Many(Vec<String>),
}
impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::One(value)
	}
}
impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::One(value.into())
	}
}
impl From<bool> for QueryValue {
	fn from(value: bool) -> Self {
		Self::One(value.to_string())
	}
}
impl From<u32> for QueryValue {
	fn from(value: u32) -> Self {
		Self::One(value.to_string())
	}
}
impl From<Vec<String>> for QueryValue {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}
impl From<&[&str]> for QueryValue {
	fn from(values: &[&str]) -> Self {
		Self::Many(values.iter().map(|value| (*value).into()).collect())
	}
}

/// Transient descriptor for one outbound API call.
///
/// Descriptors are built fresh per call by the resource endpoints and consumed by the client's
/// request core; they never outlive the call that created them.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// Endpoint path relative to the configured API origin, without a leading slash.
	pub endpoint: String,
	/// HTTP action pairing the method with its body encoding.
	pub action: Action,
	/// Ordered query parameters.
	pub query: Query,
	/// Per-call headers overlaid onto the client defaults.
	pub headers: Vec<(String, String)>,
}
impl ApiRequest {
	fn new(endpoint: impl Into<String>, action: Action) -> Self {
		Self { endpoint: endpoint.into(), action, query: Query::new(), headers: Vec::new() }
	}

	/// Creates a GET descriptor for the endpoint.
	pub fn get(endpoint: impl Into<String>) -> Self {
		Self::new(endpoint, Action::Get)
	}

	/// Creates a POST descriptor carrying the provided body.
	pub fn post(endpoint: impl Into<String>, body: RequestBody) -> Self {
		Self::new(endpoint, Action::Post(body))
	}

	/// Creates a PUT descriptor carrying the provided body.
	pub fn put(endpoint: impl Into<String>, body: RequestBody) -> Self {
		Self::new(endpoint, Action::Put(body))
	}

	/// Creates a DELETE descriptor carrying the provided body.
	pub fn delete(endpoint: impl Into<String>, body: RequestBody) -> Self {
		Self::new(endpoint, Action::Delete(body))
	}

	/// Replaces the query parameters.
	pub fn query(mut self, query: Query) -> Self {
		self.query = query;

		self
	}

	/// Appends one per-call header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Attaches a bearer `Authorization` header for the token.
	pub fn bearer(self, token: &str) -> Self {
		let (name, value) = bearer_header(token);

		self.header(name, value)
	}
}

/// Produces the `Authorization` header pair for a bearer token.
///
/// Pure function; the same token always yields the same pair.
pub fn bearer_header(token: &str) -> (String, String) {
	("Authorization".into(), format!("Bearer {token}"))
}

/// Overlays a header layer onto `base`; layer entries win on case-insensitive name collisions.
pub fn overlay_headers(base: &mut Vec<(String, String)>, layer: &[(String, String)]) {
	for (name, value) in layer {
		base.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
		base.push((name.clone(), value.clone()));
	}
}
