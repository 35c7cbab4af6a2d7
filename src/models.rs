//! Typed wire models for the remote API's response payloads.
//!
//! Models mirror the documented JSON shapes field by field. Fields the remote omits for some
//! account or provider kinds are `Option`; unknown fields are ignored during decoding so new
//! remote attributes never break callers.

pub mod account;
pub mod amount;
pub mod consent;
pub mod credential;
pub mod provider;
pub mod transaction;
pub mod user;

pub use account::*;
pub use amount::*;
pub use consent::*;
pub use credential::*;
pub use provider::*;
pub use transaction::*;
pub use user::*;
