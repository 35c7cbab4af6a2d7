//! Resource endpoints grouped per API area.
//!
//! Each area is a cheap handle over the shared client core, obtained from the accessors on
//! [`TinkClient`](crate::client::TinkClient). The handles hold no per-call state; request
//! parameters travel in the per-operation types defined alongside each area.

pub mod consent;
pub mod credential;
pub mod data;
pub mod link;
pub mod user;

pub use consent::*;
pub use credential::*;
pub use data::*;
pub use link::*;
pub use user::*;
