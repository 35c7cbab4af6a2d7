//! OAuth scope modeling for token requests and cache keys.

// std
use std::borrow::Borrow;
// crates.io
use serde::de::Error as DeError;
// self
use crate::_prelude::*;

/// Errors raised by scope validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeError {
	/// Empty scope strings are not allowed.
	#[error("Scope cannot be empty.")]
	Empty,
	/// Scopes cannot contain whitespace characters.
	#[error("Scope contains whitespace: `{scope}`.")]
	ContainsWhitespace {
		/// The rejected scope string.
		scope: String,
	},
}

/// Validated OAuth scope string keying the token cache.
///
/// Tink delimits multiple permissions with commas inside one scope string
/// (`accounts:read,transactions:read`). The string is kept verbatim, so two spellings of the
/// same permission set are distinct cache entries and produce distinct token requests.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scope(String);
impl Scope {
	/// Creates a scope after validating it is non-empty and free of whitespace.
	pub fn new(scope: impl Into<String>) -> Result<Self, ScopeError> {
		let scope = scope.into();

		if scope.is_empty() {
			return Err(ScopeError::Empty);
		}
		if scope.chars().any(char::is_whitespace) {
			return Err(ScopeError::ContainsWhitespace { scope });
		}

		Ok(Self(scope))
	}

	/// Scope required to create users.
	pub fn user_create() -> Self {
		Self("user:create".into())
	}

	/// Scope required to issue authorization grants.
	pub fn authorization_grant() -> Self {
		Self("authorization:grant".into())
	}

	/// Scope required to list the providers available on a market.
	pub fn providers_read() -> Self {
		Self("providers:read".into())
	}

	/// Returns the scope string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Scope {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for Scope {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<Scope> for String {
	fn from(scope: Scope) -> Self {
		scope.0
	}
}
impl TryFrom<String> for Scope {
	type Error = ScopeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for Scope {
	type Err = ScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Scope").field(&self.0).finish()
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl Serialize for Scope {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}
impl<'de> Deserialize<'de> for Scope {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;

		Scope::new(value).map_err(DeError::custom)
	}
}
