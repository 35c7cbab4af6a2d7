//! User payloads and the user-reference selector shared by the grant operations.

// self
use crate::_prelude::*;

/// Identifies the target user of a grant by exactly one of the two identifier kinds.
///
/// The remote rejects grants naming both identifiers, so the sum type makes the invalid
/// combination unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRef {
	/// Remote-assigned user identifier.
	UserId(String),
	/// Caller-assigned external user identifier.
	ExternalUserId(String),
}

/// Response to a user creation; note the snake_case wire shape, unlike the data endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedUser {
	/// Caller-assigned external user identifier echoed back.
	pub external_user_id: String,
	/// Remote-assigned user identifier.
	pub user_id: String,
}

/// Authorization code issued by the grant endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthorizationCode {
	/// One-time authorization code.
	pub code: String,
}

/// Profile of the user behind a user access token.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	/// Identifier of the app the user belongs to.
	pub app_id: String,
	/// Creation instant, RFC 3339 formatted.
	pub created: String,
	/// Caller-assigned external user identifier.
	pub external_user_id: Option<String>,
	/// Feature flags enabled for the user.
	#[serde(default)]
	pub flags: Vec<String>,
	/// Remote-assigned user identifier.
	pub id: String,
	/// National identification number, when registered.
	pub national_id: Option<String>,
	/// Whether cashback features are enabled.
	#[serde(default)]
	pub cashback_enabled: bool,
	/// Preferred currency code.
	pub currency: String,
	/// Locale the user was created with.
	pub locale: String,
	/// ISO 3166-1 alpha-2 market code the user belongs to.
	pub market: String,
	/// Notification toggles.
	pub notification_settings: NotificationSettings,
	/// Day of month the budgeting period is adjusted to.
	pub period_adjusted_day: u32,
	/// Budgeting period mode.
	pub period_mode: String,
	/// IANA time zone identifier.
	pub time_zone: String,
	/// Username, when one is set.
	pub username: Option<String>,
}

/// Per-category notification toggles on a user profile.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
	/// Balance notifications.
	pub balance: bool,
	/// Budget notifications.
	pub budget: bool,
	/// Double-charge notifications.
	pub double_charge: bool,
	/// E-invoice notifications.
	pub einvoices: bool,
	/// Fraud notifications.
	pub fraud: bool,
	/// Income notifications.
	pub income: bool,
	/// Large-expense notifications.
	pub large_expense: bool,
	/// Left-to-spend notifications.
	pub left_to_spend: bool,
	/// Loan-update notifications.
	pub loan_update: bool,
	/// Monthly summary notifications.
	pub summary_monthly: bool,
	/// Weekly summary notifications.
	pub summary_weekly: bool,
	/// Transaction notifications.
	pub transaction: bool,
	/// Unusual-account-activity notifications.
	pub unusual_account: bool,
	/// Unusual-category-activity notifications.
	pub unusual_category: bool,
}
