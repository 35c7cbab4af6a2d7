//! Transaction payloads returned by the `data/v2/transactions` endpoint.

// self
use crate::{_prelude::*, models::Amount};

/// One page of transactions.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
	/// Token selecting the next page; empty on the last page.
	#[serde(default)]
	pub next_page_token: String,
	/// Transactions on this page.
	pub transactions: Vec<Transaction>,
}

/// Transaction entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Identifier of the account the transaction belongs to.
	pub account_id: String,
	/// Transaction amount; negative for outgoing money.
	pub amount: Amount,
	/// Categorization assigned by the remote, when available.
	pub categories: Option<TransactionCategories>,
	/// Transaction dates.
	pub dates: TransactionDates,
	/// Display and original descriptions.
	pub descriptions: TransactionDescriptions,
	/// Unique transaction identifier.
	pub id: String,
	/// Provider-side identifiers, when reported.
	pub identifiers: Option<TransactionIdentifiers>,
	/// Merchant details, when the institution reports them.
	pub merchant_information: Option<MerchantInformation>,
	/// Whether the provider may still mutate the transaction.
	pub provider_mutability: Option<String>,
	/// Institution-assigned reference.
	pub reference: Option<String>,
	/// Booking status, such as `BOOKED` or `PENDING`.
	pub status: String,
	/// Type classification pair.
	pub types: TransactionTypes,
}

/// Categorization group.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCategories {
	/// Personal-finance-management category.
	pub pfm: Option<PfmCategory>,
}

/// Personal-finance-management category entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfmCategory {
	/// Category identifier.
	pub id: String,
	/// Human-readable category name.
	pub name: String,
}

/// Booked and value dates, ISO 8601 formatted.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDates {
	/// Date the transaction was booked.
	pub booked: String,
	/// Value date, when reported.
	pub value: Option<String>,
}

/// Display and original description pair.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptions {
	/// Cleaned description suitable for display.
	pub display: String,
	/// Raw description as reported by the institution.
	pub original: String,
}

/// Provider-side identifiers.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIdentifiers {
	/// Identifier assigned by the providing institution.
	pub provider_transaction_id: Option<String>,
}

/// Merchant details.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInformation {
	/// ISO 18245 merchant category code.
	pub merchant_category_code: Option<String>,
	/// Merchant name.
	pub merchant_name: Option<String>,
}

/// Type classification pair.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTypes {
	/// Institution-specific type code.
	pub financial_institution_type_code: Option<String>,
	/// Normalized transaction type, such as `DEFAULT` or `TRANSFER`.
	#[serde(rename = "type")]
	pub transaction_type: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn transactions_page_deserializes_the_documented_shape() {
		let page: TransactionsPage = serde_json::from_str(
			r#"{
				"nextPageToken": "",
				"transactions": [{
					"accountId": "acc-1",
					"amount": {"currencyCode": "EUR", "value": {"scale": 2, "unscaledValue": -1250}},
					"categories": {"pfm": {"id": "cat-1", "name": "Groceries"}},
					"dates": {"booked": "2024-04-30", "value": "2024-05-01"},
					"descriptions": {"display": "Grocery Store", "original": "GROCERY STORE 123"},
					"id": "txn-1",
					"identifiers": {"providerTransactionId": "prov-txn-1"},
					"merchantInformation": {"merchantCategoryCode": "5411", "merchantName": "Grocery Store"},
					"providerMutability": "MUTABILITY_UNDEFINED",
					"reference": "ref-1",
					"status": "BOOKED",
					"types": {"financialInstitutionTypeCode": "DEB", "type": "DEFAULT"}
				}]
			}"#,
		)
		.expect("Transactions page should deserialize.");
		let transaction = &page.transactions[0];

		assert!(page.next_page_token.is_empty());
		assert_eq!(transaction.id, "txn-1");
		assert_eq!(transaction.status, "BOOKED");
		assert_eq!(transaction.types.transaction_type, "DEFAULT");
		assert_eq!(transaction.amount.value.to_f64(), -12.5);
	}

	#[test]
	fn pending_transactions_tolerate_sparse_fields() {
		let page: TransactionsPage = serde_json::from_str(
			r#"{
				"transactions": [{
					"accountId": "acc-1",
					"amount": {"currencyCode": "EUR", "value": {"scale": 0, "unscaledValue": -3}},
					"dates": {"booked": "2024-05-02"},
					"descriptions": {"display": "Coffee", "original": "COFFEE"},
					"id": "txn-2",
					"status": "PENDING",
					"types": {"type": "DEFAULT"}
				}]
			}"#,
		)
		.expect("Sparse pending transaction should deserialize.");
		let transaction = &page.transactions[0];

		assert!(transaction.categories.is_none());
		assert!(transaction.merchant_information.is_none());
		assert!(transaction.reference.is_none());
		assert!(transaction.dates.value.is_none());
	}
}
