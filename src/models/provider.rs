//! Provider payloads returned by the `api/v1/providers` endpoints.

// self
use crate::_prelude::*;

/// List of providers matching a query.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersList {
	/// Matching providers.
	pub providers: Vec<Provider>,
}

/// Bank or financial institution integration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
	/// Unique provider name used when creating credentials.
	pub name: String,
	/// Human-readable provider name.
	pub display_name: String,
	/// Identifier of the underlying financial institution.
	pub financial_institution_id: Option<String>,
	/// Name of the underlying financial institution.
	pub financial_institution_name: Option<String>,
	/// ISO 3166-1 alpha-2 market code the provider serves.
	pub market: String,
	/// Currency the provider reports in.
	pub currency: Option<String>,
	/// Release status, such as `ENABLED`.
	pub status: String,
	/// Provider kind, such as `BANK` or `TEST`.
	#[serde(rename = "type")]
	pub provider_type: String,
	/// Authentication method kind, such as `PASSWORD` or `MOBILE_BANKID`.
	pub credentials_type: Option<String>,
	/// Capabilities supported by the provider, such as `TRANSACTIONS`.
	#[serde(default)]
	pub capabilities: Vec<String>,
	/// Brand imagery, when published.
	pub images: Option<ProviderImages>,
}

/// Brand imagery published for a provider.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderImages {
	/// Icon URL.
	pub icon: Option<String>,
	/// Banner URL.
	pub banner: Option<String>,
}
