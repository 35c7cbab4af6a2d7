//! Optional observability helpers for outbound requests and the token cache.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `tink_client.request` with the `method` and
//!   `endpoint` fields, plus `tink_client.token` spans around token grants.
//! - Enable `metrics` to increment the `tink_client_request_total` counter for every
//!   attempt/success/failure, labeled by `method` + `outcome`, and the
//!   `tink_client_token_cache_total` counter for every cache lookup, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

/// Outcome labels recorded for each dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to the request core.
	Attempt,
	/// Response shaped and returned to the caller.
	Success,
	/// Error handed back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Label rendered into metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}

/// Outcome labels recorded for each token-cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCacheOutcome {
	/// Unexpired token served from the cache.
	Hit,
	/// Cached token found but at or past expiry.
	Expired,
	/// No token cached for the scope.
	Miss,
}
impl TokenCacheOutcome {
	/// Label rendered into metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenCacheOutcome::Hit => "hit",
			TokenCacheOutcome::Expired => "expired",
			TokenCacheOutcome::Miss => "miss",
		}
	}
}
