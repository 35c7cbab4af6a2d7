//! Account and transaction data operations.

// self
use crate::{
	_prelude::*,
	client::ClientInner,
	http::{ApiRequest, Query},
	models::{AccountsPage, TransactionsPage},
};

/// Account and transaction data operations.
///
/// Obtained from [`TinkClient::data`](crate::client::TinkClient::data). Both operations act on
/// the user behind the provided user access token.
#[derive(Clone)]
pub struct DataApi {
	inner: Arc<ClientInner>,
}
impl DataApi {
	pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
		Self { inner }
	}

	/// Lists the user's accounts, one page per call.
	pub async fn accounts(
		&self,
		user_access_token: &str,
		filter: AccountsFilter,
	) -> Result<AccountsPage> {
		let mut query = Query::new();

		if let Some(types) = filter.types {
			query = query.push("typeIn", types);
		}
		if let Some(page_size) = filter.page_size {
			query = query.push("pageSize", page_size);
		}
		if let Some(page_token) = filter.page_token {
			query = query.push("pageToken", page_token);
		}

		let request = ApiRequest::get("data/v2/accounts").query(query).bearer(user_access_token);

		self.inner.request(request).await
	}

	/// Lists the user's transactions, one page per call.
	pub async fn transactions(
		&self,
		user_access_token: &str,
		filter: TransactionsFilter,
	) -> Result<TransactionsPage> {
		let mut query = Query::new();

		if let Some(account_ids) = filter.account_ids {
			query = query.push("accountIdIn", account_ids);
		}
		if let Some(page_size) = filter.page_size {
			query = query.push("pageSize", page_size);
		}
		if let Some(page_token) = filter.page_token {
			query = query.push("pageToken", page_token);
		}
		if let Some(pending) = filter.pending {
			query = query.push("pending", pending);
		}
		if let Some(start_date) = filter.start_date {
			query = query.push("bookedDateGte", start_date);
		}
		if let Some(end_date) = filter.end_date {
			query = query.push("bookedDateLte", end_date);
		}
		if let Some(statuses) = filter.statuses {
			query = query.push("statusIn", statuses);
		}

		let request =
			ApiRequest::get("data/v2/transactions").query(query).bearer(user_access_token);

		self.inner.request(request).await
	}
}

/// Filter for [`DataApi::accounts`]; unset fields are omitted from the query.
#[derive(Clone, Debug, Default)]
pub struct AccountsFilter {
	/// Account types to include, rendered as a repeated `typeIn` key.
	pub types: Option<Vec<String>>,
	/// Page size requested from the endpoint.
	pub page_size: Option<u32>,
	/// Continuation token from the previous page.
	pub page_token: Option<String>,
}
impl AccountsFilter {
	/// Creates an empty filter matching every account.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the listing to the provided account types.
	pub fn types<I>(mut self, types: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.types = Some(types.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the requested page size.
	pub fn page_size(mut self, page_size: u32) -> Self {
		self.page_size = Some(page_size);

		self
	}

	/// Continues from a previous page.
	pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
		self.page_token = Some(page_token.into());

		self
	}
}

/// Filter for [`DataApi::transactions`]; unset fields are omitted from the query.
#[derive(Clone, Debug, Default)]
pub struct TransactionsFilter {
	/// Account identifiers to include, rendered as a repeated `accountIdIn` key.
	pub account_ids: Option<Vec<String>>,
	/// Page size requested from the endpoint.
	pub page_size: Option<u32>,
	/// Continuation token from the previous page.
	pub page_token: Option<String>,
	/// Pending-transaction inclusion; sent whenever set, so `false` explicitly excludes them.
	pub pending: Option<bool>,
	/// Earliest booked date included, `YYYY-MM-DD`, rendered as `bookedDateGte`.
	pub start_date: Option<String>,
	/// Latest booked date included, `YYYY-MM-DD`, rendered as `bookedDateLte`.
	pub end_date: Option<String>,
	/// Transaction statuses to include, rendered as a repeated `statusIn` key.
	pub statuses: Option<Vec<String>>,
}
impl TransactionsFilter {
	/// Creates an empty filter matching every transaction.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the listing to the provided accounts.
	pub fn account_ids<I>(mut self, account_ids: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.account_ids = Some(account_ids.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the requested page size.
	pub fn page_size(mut self, page_size: u32) -> Self {
		self.page_size = Some(page_size);

		self
	}

	/// Continues from a previous page.
	pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
		self.page_token = Some(page_token.into());

		self
	}

	/// Includes (`true`) or excludes (`false`) pending transactions.
	pub fn pending(mut self, pending: bool) -> Self {
		self.pending = Some(pending);

		self
	}

	/// Sets the earliest booked date included, `YYYY-MM-DD`.
	pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
		self.start_date = Some(start_date.into());

		self
	}

	/// Sets the latest booked date included, `YYYY-MM-DD`.
	pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
		self.end_date = Some(end_date.into());

		self
	}

	/// Restricts the listing to the provided statuses.
	pub fn statuses<I>(mut self, statuses: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.statuses = Some(statuses.into_iter().map(Into::into).collect());

		self
	}
}
