//! Per-scope access-token cache with singleflight acquisition guards.
//!
//! Each client instance owns one cache; there is no ambient or cross-client state. Lookups take
//! the read path and classify the entry so callers and metrics can distinguish a miss from an
//! expired token. [`acquisition_guard`](TokenCache::acquisition_guard) hands out the per-scope
//! async mutex concurrent callers share, keeping at most one token request in flight per scope
//! within a client instance. Two client instances may still race for the same scope; the last
//! writer wins and every stored token remains individually valid.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Scope},
};

/// Outcome of one cache lookup.
#[derive(Clone, Debug)]
pub enum CacheLookup {
	/// Unexpired entry served from the cache.
	Fresh(AccessToken),
	/// Entry present but at or past its expiry instant.
	Expired,
	/// No entry cached for the scope.
	Missing,
}

/// In-memory scope-to-token cache owned by one client instance.
#[derive(Debug, Default)]
pub struct TokenCache {
	tokens: RwLock<HashMap<Scope, AccessToken>>,
	guards: Mutex<HashMap<Scope, Arc<AsyncMutex<()>>>>,
}
impl TokenCache {
	/// Classifies the entry cached for the scope at the provided instant.
	pub fn lookup(&self, scope: &Scope, now: OffsetDateTime) -> CacheLookup {
		match self.tokens.read().get(scope) {
			Some(token) if !token.is_expired_at(now) => CacheLookup::Fresh(token.clone()),
			Some(_) => CacheLookup::Expired,
			None => CacheLookup::Missing,
		}
	}

	/// Stores or replaces the token cached for the scope.
	pub fn store(&self, scope: Scope, token: AccessToken) {
		self.tokens.write().insert(scope, token);
	}

	/// Returns the singleflight guard for the scope, creating it on first use.
	///
	/// Guards are never removed; the set of scopes a client uses is small and fixed by the
	/// endpoints it calls.
	pub fn acquisition_guard(&self, scope: &Scope) -> Arc<AsyncMutex<()>> {
		let mut guards = self.guards.lock();

		guards.entry(scope.clone()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
	}
}
