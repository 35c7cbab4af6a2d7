//! Account payloads returned by the `data/v2/accounts` endpoint.

// self
use crate::{_prelude::*, models::Amount};

/// One page of accounts.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsPage {
	/// Accounts on this page.
	pub accounts: Vec<Account>,
	/// Token selecting the next page; empty on the last page.
	#[serde(default)]
	pub next_page_token: String,
}

/// Account entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
	/// Balance groups reported for the account.
	pub balances: AccountBalances,
	/// Customer segment assigned by the institution.
	pub customer_segment: Option<String>,
	/// Account-level timestamps.
	pub dates: AccountDates,
	/// Identifier of the institution holding the account.
	pub financial_institution_id: Option<String>,
	/// Unique account identifier.
	pub id: String,
	/// Account number identifiers grouped by kind.
	#[serde(default)]
	pub identifiers: AccountIdentifiers,
	/// Display name of the account.
	pub name: String,
	/// Account kind, such as `CHECKING` or `SAVINGS`.
	#[serde(rename = "type")]
	pub account_type: String,
}

/// Balance groups attached to an account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalances {
	/// Booked balance.
	pub booked: BalanceEntry,
	/// Available balance, when the institution reports one.
	pub available: Option<BalanceEntry>,
}

/// Single balance value.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
	/// Balance amount.
	pub amount: Amount,
}

/// Account-level timestamps.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDates {
	/// Instant the account data was last refreshed, RFC 3339 formatted.
	pub last_refreshed: String,
}

/// Account number identifiers grouped by kind; groups absent for the account type are `None`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentifiers {
	/// IBAN identifiers, for accounts addressable by IBAN.
	pub iban: Option<IbanIdentifier>,
	/// Card number identifiers, for card accounts.
	pub pan: Option<PanIdentifier>,
}

/// IBAN identifier pair.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanIdentifier {
	/// Basic bank account number, the country-specific part of the IBAN.
	pub bban: String,
	/// Full IBAN.
	pub iban: String,
}

/// Masked card number identifier.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanIdentifier {
	/// Masked primary account number.
	pub masked: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn accounts_page_deserializes_the_documented_shape() {
		let page: AccountsPage = serde_json::from_str(
			r#"{
				"accounts": [{
					"balances": {
						"booked": {
							"amount": {"currencyCode": "GBP", "value": {"scale": 2, "unscaledValue": 150000}}
						}
					},
					"customerSegment": "PERSONAL",
					"dates": {"lastRefreshed": "2024-05-01T12:00:00Z"},
					"financialInstitutionId": "fi-1",
					"id": "acc-1",
					"identifiers": {"iban": {"bban": "31926819", "iban": "GB33BUKB20201531926819"}},
					"name": "Main account",
					"type": "CHECKING"
				}],
				"nextPageToken": "page-2"
			}"#,
		)
		.expect("Accounts page should deserialize.");
		let account = &page.accounts[0];

		assert_eq!(page.next_page_token, "page-2");
		assert_eq!(account.id, "acc-1");
		assert_eq!(account.account_type, "CHECKING");
		assert_eq!(account.balances.booked.amount.value.to_f64(), 1500.0);
		assert!(account.balances.available.is_none());
		assert!(account.identifiers.pan.is_none());
		assert_eq!(
			account
				.identifiers
				.iban
				.as_ref()
				.expect("IBAN identifiers should be present.")
				.iban,
			"GB33BUKB20201531926819",
		);
	}

	#[test]
	fn accounts_page_tolerates_missing_optional_groups() {
		let page: AccountsPage = serde_json::from_str(
			r#"{
				"accounts": [{
					"balances": {
						"booked": {
							"amount": {"currencyCode": "SEK", "value": {"scale": 0, "unscaledValue": 900}}
						}
					},
					"dates": {"lastRefreshed": "2024-05-01T12:00:00Z"},
					"id": "acc-2",
					"name": "Savings",
					"type": "SAVINGS"
				}],
				"nextPageToken": ""
			}"#,
		)
		.expect("Accounts page without optional groups should deserialize.");
		let account = &page.accounts[0];

		assert!(account.customer_segment.is_none());
		assert!(account.financial_institution_id.is_none());
		assert!(account.identifiers.iban.is_none());
	}
}
