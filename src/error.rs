//! Client-level error types shared across the request core, token manager, and resource
//! endpoints.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Configuration or parameter validation failed before dispatch.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Success response body could not be decoded into the expected type.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Remote endpoint answered with a failure status.
	#[error(transparent)]
	RequestFailed(#[from] Box<RequestFailed>),
	/// Transport failed beneath the request core.
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl From<RequestFailed> for Error {
	fn from(e: RequestFailed) -> Self {
		Self::RequestFailed(Box::new(e))
	}
}

/// Failure response captured verbatim from the remote endpoint.
///
/// Raised whenever a response status reaches the failure threshold (`400`). The body is carried
/// as raw text and never parsed as JSON; Tink error payloads vary per endpoint, so interpreting
/// them is left to the caller. `options` holds a serialized summary of the outbound request with
/// the `Authorization` header redacted and the body reduced to its byte length, keeping client
/// credentials and grant codes out of logs.
#[derive(Debug, ThisError)]
#[error("Request to `{url}` failed with status {status} {status_text}.")]
pub struct RequestFailed {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Reason phrase reported by the transport, empty when unknown.
	pub status_text: String,
	/// Fully resolved request URL, query string included.
	pub url: String,
	/// Serialized request summary with credentials redacted.
	pub options: String,
	/// Raw response body text.
	pub body: String,
}

/// Configuration and validation failures raised before a request is dispatched.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configured origin cannot be parsed.
	#[error("The {kind} URL `{url}` is invalid.")]
	InvalidOrigin {
		/// Which origin failed validation.
		kind: &'static str,
		/// Origin string that failed to parse.
		url: String,
		/// Diagnosis reported by the URL parser.
		#[source]
		source: url::ParseError,
	},
	/// Assembled request URL cannot be parsed.
	#[error("Assembled request URL `{url}` is invalid.")]
	InvalidRequestUrl {
		/// Assembled URL that failed to parse.
		url: String,
		/// Diagnosis reported by the URL parser.
		#[source]
		source: url::ParseError,
	},
	/// Requested scope failed validation.
	#[error("Requested scope is invalid.")]
	InvalidScope(#[from] crate::auth::ScopeError),
	/// JSON request body could not be serialized.
	#[error("JSON request body could not be serialized.")]
	BodyEncode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Failure decoding a success response body into the caller's type.
#[derive(Debug, ThisError)]
#[error("Response from `{url}` could not be decoded.")]
pub struct DecodeError {
	/// Fully resolved request URL, query string included.
	pub url: String,
	/// Structured deserialization failure carrying the offending JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
}

/// Failures raised by an [`HttpTransport`](crate::http::HttpTransport) implementation.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The HTTP stack failed before a complete response arrived (DNS, TCP, TLS, protocol).
	#[error("Network error occurred while executing the request.")]
	Network {
		/// Stack-specific failure cause.
		#[source]
		source: BoxError,
	},
	/// I/O failure beneath the HTTP stack, surfaced by custom transports.
	#[error("I/O error occurred while executing the request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Boxes a stack-specific failure as a network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
