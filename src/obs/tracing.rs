// self
use crate::_prelude::*;

/// Future wrapped in its span when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// The unchanged future when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by the request core and the token manager.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a span for one outbound request, tagged with its method and endpoint.
	pub fn request(method: &'static str, endpoint: &str) -> Self {
		#[cfg(not(feature = "tracing"))]
		let _ = (method, endpoint);

		Self {
			#[cfg(feature = "tracing")]
			span: tracing::info_span!("tink_client.request", method, endpoint),
		}
	}

	/// Creates a span for one token-manager operation, tagged with its grant label.
	pub fn token(grant: &'static str) -> Self {
		#[cfg(not(feature = "tracing"))]
		let _ = grant;

		Self {
			#[cfg(feature = "tracing")]
			span: tracing::info_span!("tink_client.token", grant),
		}
	}

	/// Attaches the span to a future; no guard is held across `.await` points.
	#[cfg(feature = "tracing")]
	pub fn instrument<Fut: Future>(&self, fut: Fut) -> InstrumentedCall<Fut> {
		tracing::Instrument::instrument(fut, self.span.clone())
	}

	/// Returns the future unchanged; tracing is disabled.
	#[cfg(not(feature = "tracing"))]
	pub fn instrument<Fut: Future>(&self, fut: Fut) -> InstrumentedCall<Fut> {
		fut
	}
}
