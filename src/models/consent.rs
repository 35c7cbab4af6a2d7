//! Market and provider-consent payloads.

// self
use crate::_prelude::*;

/// List of markets users can be registered in.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsList {
	/// Available markets.
	pub markets: Vec<Market>,
}

/// Market entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
	/// ISO 3166-1 alpha-2 country code.
	pub code: String,
	/// Default currency for the market.
	pub default_currency: Option<String>,
	/// Human-readable market description.
	pub description: Option<String>,
}

/// List of provider consents held by a user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConsentsList {
	/// Provider consents.
	pub provider_consents: Vec<ProviderConsent>,
}

/// Consent a user holds towards one provider connection.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConsent {
	/// Identifiers of the accounts covered by the consent.
	#[serde(default)]
	pub account_ids: Vec<String>,
	/// Identifier of the credentials backing the consent.
	pub credentials_id: String,
	/// Name of the provider the consent targets.
	pub provider_name: String,
	/// Consent status, such as `UPDATED` or `SESSION_EXPIRED`.
	pub status: String,
	/// Instant the status last changed, in epoch milliseconds.
	pub status_updated: Option<i64>,
	/// Instant the consent session expires, in epoch milliseconds.
	pub session_expiry_date: Option<i64>,
	/// Whether the session is currently eligible for extension.
	pub session_extendable: Option<bool>,
	/// Detailed error payload attached to failed consents, passed through verbatim.
	pub detailed_error: Option<serde_json::Value>,
}
