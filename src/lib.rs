//! Typed Rust client for the Tink open-banking API - cached OAuth 2.0 tokens, typed account and
//! transaction endpoints, and Tink Link URL building in one async crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod models;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Shared fixtures for tests driving the client over a mock server; available under
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::client::{ClientConfig, TinkClient};

	/// Client identifier shared by integration tests.
	pub const TEST_CLIENT_ID: &str = "test-client-id";
	/// Client secret shared by integration tests.
	pub const TEST_CLIENT_SECRET: &str = "test-client-secret";

	/// Builds a client whose API and Tink Link origins both point at the provided mock server
	/// URL, using the reqwest transport shipped with the crate.
	pub fn build_test_client(base_url: &str) -> TinkClient {
		let config = ClientConfig::builder(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
			.base_url(base_url)
			.base_link_url(base_url)
			.build()
			.expect("Test configuration should build successfully.");

		TinkClient::new(config)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
