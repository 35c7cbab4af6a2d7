//! Credentials payloads returned by the `api/v1/credentials` endpoints.

// self
use crate::_prelude::*;

/// List of credentials held by a user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsList {
	/// Credentials.
	pub credentials: Vec<Credential>,
}

/// Connection between a user and a provider.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
	/// Unique credentials identifier.
	pub id: String,
	/// Name of the provider the credentials connect to.
	pub provider_name: String,
	/// Refresh status, such as `UPDATED` or `AUTHENTICATION_ERROR`.
	pub status: Option<String>,
	/// Human-readable payload accompanying the status.
	pub status_payload: Option<String>,
	/// Instant the status last changed, in epoch milliseconds.
	pub status_updated: Option<i64>,
	/// Authentication method kind, such as `PASSWORD` or `MOBILE_BANKID`.
	#[serde(rename = "type")]
	pub credentials_type: Option<String>,
	/// Identifier of the owning user.
	pub user_id: Option<String>,
	/// Instant the session expires, in epoch milliseconds.
	pub session_expiry_date: Option<i64>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn credentials_list_deserializes() {
		let list: CredentialsList = serde_json::from_str(
			r#"{
				"credentials": [{
					"id": "cred-1",
					"providerName": "uk-demobank-open-banking",
					"status": "UPDATED",
					"statusPayload": "Refreshed.",
					"statusUpdated": 1714564800000,
					"type": "THIRD_PARTY_APP",
					"userId": "user-1",
					"sessionExpiryDate": 1722340800000
				}]
			}"#,
		)
		.expect("Credentials list should deserialize.");
		let credential = &list.credentials[0];

		assert_eq!(credential.id, "cred-1");
		assert_eq!(credential.status.as_deref(), Some("UPDATED"));
		assert_eq!(credential.credentials_type.as_deref(), Some("THIRD_PARTY_APP"));
	}
}
