// self
use crate::obs::{RequestOutcome, TokenCacheOutcome};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(method: &'static str, outcome: RequestOutcome) {
	#[cfg(not(feature = "metrics"))]
	let _ = (method, outcome);
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"tink_client_request_total",
		"method" => method,
		"outcome" => outcome.as_str()
	)
	.increment(1);
}

/// Records a token-cache lookup outcome via the global metrics recorder (when enabled).
pub fn record_token_cache_outcome(outcome: TokenCacheOutcome) {
	#[cfg(not(feature = "metrics"))]
	let _ = outcome;
	#[cfg(feature = "metrics")]
	metrics::counter!("tink_client_token_cache_total", "outcome" => outcome.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_request_outcome("GET", RequestOutcome::Failure);
		record_token_cache_outcome(TokenCacheOutcome::Miss);
	}
}
